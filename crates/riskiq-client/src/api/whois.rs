//! WHOIS endpoints.

use crate::RiskIqClient;
use riskiq_core::{Params, Result};
use serde_json::Value;

/// WHOIS search criteria; at least one field should be set
#[derive(Debug, Clone, Default)]
pub struct WhoisQuery {
    /// Registered domain
    pub domain: Option<String>,
    /// Registrant email address
    pub email: Option<String>,
    /// Name server hostname
    pub name_server: Option<String>,
    /// Maximum number of records to return
    pub max_results: Option<u32>,
}

/// WHOIS endpoints
pub struct WhoisApi<'a> {
    client: &'a RiskIqClient,
}

impl<'a> WhoisApi<'a> {
    pub(crate) const fn new(client: &'a RiskIqClient) -> Self {
        Self { client }
    }

    /// Search WHOIS records
    pub fn query(&self, query: &WhoisQuery) -> Result<Value> {
        let params = Params::new()
            .with_opt("domain", query.domain.clone())
            .with_opt("email", query.email.clone())
            .with_opt("nameServer", query.name_server.clone())
            .with_opt("maxResults", query.max_results);
        self.client.get("whois", "query", &[], params)
    }
}
