//! Query and body parameter canonicalization.
//!
//! Two calls carrying the same logical parameters must serialize to byte-identical
//! requests, whatever order the caller supplied them in. Parameters are therefore
//! collapsed by key, sorted lexicographically, and encoded with a fixed rule:
//!
//! - strings are sent verbatim
//! - numbers and booleans use their JSON text
//! - arrays expand into one pair per element
//! - objects are sent as compact JSON
//! - `null` values are dropped
//!
//! The reserved `timeout` key never reaches the server; it becomes the client-side
//! request timeout instead.

use crate::{Result, RiskIqError};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Parameter key that controls the request timeout (seconds)
pub const TIMEOUT_KEY: &str = "timeout";

/// Timeout applied when a call does not carry one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Keyword parameters for a single API call, in call-site order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<(String, Value)>);

impl Params {
    /// Create an empty parameter set
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a parameter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    /// Add a parameter only when a value is present
    #[must_use]
    pub fn with_opt<V: Into<Value>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Set the client-side timeout for this call
    #[must_use]
    pub fn timeout(self, timeout: Duration) -> Self {
        self.with(TIMEOUT_KEY, timeout.as_secs_f64())
    }

    /// Add a parameter in place
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Append every pair from another parameter set
    pub fn extend(&mut self, other: Self) {
        self.0.extend(other.0);
    }

    /// Number of pairs as supplied (before canonicalization)
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no pairs were supplied
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

/// Parameters after canonicalization: sorted, deduplicated, timeout extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalParams {
    pairs: Vec<(String, Value)>,
    timeout: Duration,
}

impl CanonicalParams {
    /// Sorted `(key, value)` pairs, `timeout` and `null` values removed
    #[must_use]
    pub fn pairs(&self) -> &[(String, Value)] {
        &self.pairs
    }

    /// Client-side timeout for the call
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns true if nothing will be sent in the query string
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode into string pairs ready for the query string, preserving key order
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(self.pairs.len());
        for (key, value) in &self.pairs {
            match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = encode_scalar(item) {
                            out.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    if let Some(text) = encode_scalar(other) {
                        out.push((key.clone(), text));
                    }
                }
            }
        }
        out
    }

    /// Append the encoded pairs to a URL's query string.
    ///
    /// An empty set leaves the URL without a `?`.
    pub fn apply_to(&self, url: &mut Url) {
        let pairs = self.query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
    }
}

fn encode_scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(sort_value(value.clone()).to_string()),
    }
}

/// Canonicalize call parameters.
///
/// Duplicate keys keep the last value supplied. The `timeout` key is removed and
/// returned separately, defaulting to [`DEFAULT_TIMEOUT`].
pub fn canonicalize_params(params: Params) -> Result<CanonicalParams> {
    canonicalize_params_with_default(params, DEFAULT_TIMEOUT)
}

/// Canonicalize call parameters with a caller-chosen fallback timeout.
pub fn canonicalize_params_with_default(
    params: Params,
    default_timeout: Duration,
) -> Result<CanonicalParams> {
    let mut sorted: BTreeMap<String, Value> = params.0.into_iter().collect();

    let timeout = match sorted.remove(TIMEOUT_KEY) {
        None | Some(Value::Null) => default_timeout,
        Some(value) => parse_timeout(&value)?,
    };

    let pairs = sorted
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .collect();

    Ok(CanonicalParams { pairs, timeout })
}

fn parse_timeout(value: &Value) -> Result<Duration> {
    let secs = value
        .as_f64()
        .ok_or_else(|| RiskIqError::InvalidParameter(format!("timeout must be numeric, got {value}")))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(RiskIqError::InvalidParameter(format!(
            "timeout must be a positive number of seconds, got {secs}"
        )));
    }

    Duration::try_from_secs_f64(secs).map_err(|e| {
        RiskIqError::InvalidParameter(format!("timeout of {secs} seconds is out of range: {e}"))
    })
}

/// Serialize a POST payload as compact JSON with every object's keys sorted.
pub fn canonical_json_body<B: Serialize + ?Sized>(data: &B) -> Result<String> {
    let value = serde_json::to_value(data)?;
    Ok(serde_json::to_string(&sort_value(value))?)
}

/// Rebuild a JSON value with object keys in sorted order at every depth.
fn sort_value(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<String, Value> =
                map.into_iter().map(|(k, v)| (k, sort_value(v))).collect();
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_value).collect()),
        other => other,
    }
}
