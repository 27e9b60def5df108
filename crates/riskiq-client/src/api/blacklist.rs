//! Blacklist endpoints.

use crate::RiskIqClient;
use riskiq_core::{range_params, DateRange, Params, Result};
use serde_json::Value;
use tracing::debug;

/// Blacklist endpoints
pub struct BlacklistApi<'a> {
    client: &'a RiskIqClient,
}

impl<'a> BlacklistApi<'a> {
    pub(crate) const fn new(client: &'a RiskIqClient) -> Self {
        Self { client }
    }

    /// Check whether a URL is blacklisted
    pub fn lookup(&self, url: &str) -> Result<Value> {
        self.client
            .get("blacklist", "lookup", &[], Params::new().with("url", url))
    }

    /// Look up several URLs, one request each, in order.
    ///
    /// Stops at the first failing lookup.
    pub fn lookup_bulk(&self, urls: &[&str]) -> Result<Vec<Value>> {
        debug!(count = urls.len(), "bulk blacklist lookup");
        urls.iter().map(|url| self.lookup(url)).collect()
    }

    /// Incidents recorded for a URL
    pub fn incident(
        &self,
        url: &str,
        start_index: Option<u32>,
        max_results: Option<u32>,
    ) -> Result<Value> {
        let params = Params::new()
            .with("url", url)
            .with_opt("startIndex", start_index)
            .with_opt("maxResults", max_results);
        self.client.get("blacklist", "incident", &[], params)
    }

    /// Incidents opened within a date window
    pub fn incident_list(
        &self,
        range: Option<&DateRange>,
        all_workspace_crawls: Option<bool>,
    ) -> Result<Value> {
        let mut params = Params::new().with_opt("allWorkspaceCrawls", all_workspace_crawls);
        params.extend(range_params(range));
        self.client.get("blacklist", "incidentList", &[], params)
    }

    /// Blacklisted URLs, optionally filtered by category
    pub fn list(&self, filter: Option<&str>, range: Option<&DateRange>) -> Result<Value> {
        let mut params = Params::new().with_opt("blacklistFilter", filter);
        params.extend(range_params(range));
        self.client.get("blacklist", "list", &[], params)
    }

    /// URLs serving malware
    pub fn malware(
        &self,
        filter: Option<&str>,
        confidence: Option<&str>,
        range: Option<&DateRange>,
    ) -> Result<Value> {
        let mut params = Params::new()
            .with_opt("blacklistFilter", filter)
            .with_opt("confidence", confidence);
        params.extend(range_params(range));
        self.client.get("blacklist", "malware", &[], params)
    }

    /// Exploit binaries observed within a date window
    pub fn exploit_binary(&self, range: Option<&DateRange>) -> Result<Value> {
        self.client
            .get("blacklist", "exploitBinary", &[], range_params(range))
    }
}
