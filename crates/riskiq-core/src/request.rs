//! Assembled request and raw response records.

use crate::Credentials;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// HTTP method used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET request, parameters in the query string
    Get,
    /// POST request with a JSON body
    Post,
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A fully assembled API request.
///
/// Built once per call and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    url: Url,
    headers: BTreeMap<String, String>,
    credentials: Credentials,
    body: Option<String>,
    timeout: Duration,
}

impl ApiRequest {
    /// Assemble a request record
    #[must_use]
    pub const fn new(
        method: Method,
        url: Url,
        headers: BTreeMap<String, String>,
        credentials: Credentials,
        body: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            method,
            url,
            headers,
            credentials,
            body,
            timeout,
        }
    }

    /// HTTP method
    #[must_use]
    pub const fn method(&self) -> Method {
        self.method
    }

    /// Absolute URL with the canonical query string embedded
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Fixed header set
    #[must_use]
    pub const fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Basic auth credentials
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Canonical JSON body (POST only)
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Client-side timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The comparable part of the request: method, URL and body, without credentials.
    #[must_use]
    pub fn record(&self) -> RequestRecord {
        RequestRecord {
            method: self.method,
            url: self.url.to_string(),
            body: self.body.clone(),
        }
    }
}

/// Credential-free view of a request, used for logging and regression comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRecord {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including query string
    pub url: String,
    /// Canonical JSON body, if any
    #[serde(default)]
    pub body: Option<String>,
}

/// Raw HTTP response as returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body text
    pub body: String,
}

impl ApiResponse {
    /// Create a response
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
