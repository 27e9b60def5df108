//! Passive DNS endpoints.

use crate::RiskIqClient;
use riskiq_core::{Params, Result};
use serde_json::Value;
use std::time::Duration;

/// Filters shared by all passive DNS lookups
#[derive(Debug, Clone, Default)]
pub struct PdnsQuery {
    /// Restrict to one record type (A, AAAA, CNAME, MX, NS, SOA, TXT)
    pub rrtype: Option<String>,

    /// Maximum number of records to return
    pub max_results: Option<u32>,

    /// Request timeout overriding the client default
    pub timeout: Option<Duration>,
}

impl PdnsQuery {
    /// Create an unfiltered query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by record type
    #[must_use]
    pub fn rrtype(mut self, rrtype: impl Into<String>) -> Self {
        self.rrtype = Some(rrtype.into());
        self
    }

    /// Limit the number of records
    #[must_use]
    pub const fn max_results(mut self, max: u32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Override the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn params(&self) -> Params {
        let params = Params::new()
            .with_opt("rrType", self.rrtype.clone())
            .with_opt("maxResults", self.max_results);

        match self.timeout {
            Some(timeout) => params.timeout(timeout),
            None => params,
        }
    }
}

/// Passive DNS endpoints
pub struct PdnsApi<'a> {
    client: &'a RiskIqClient,
}

impl<'a> PdnsApi<'a> {
    pub(crate) const fn new(client: &'a RiskIqClient) -> Self {
        Self { client }
    }

    /// Records observed for a hostname
    pub fn name(&self, name: &str, query: &PdnsQuery) -> Result<Value> {
        let params = Params::new().with("name", name);
        self.client.get("dns", "name", &[], merge(params, query))
    }

    /// Records whose data resolves to an IP address
    pub fn ip(&self, ip: &str, query: &PdnsQuery) -> Result<Value> {
        let params = Params::new().with("ip", ip);
        self.client.get("dns", "data", &[], merge(params, query))
    }

    /// Records whose data field matches a hostname (reverse lookup)
    pub fn data(&self, hostname: &str, query: &PdnsQuery) -> Result<Value> {
        let params = Params::new().with("name", hostname);
        self.client.get("dns", "data", &[], merge(params, query))
    }
}

fn merge(mut params: Params, query: &PdnsQuery) -> Params {
    params.extend(query.params());
    params
}
