//! Affiliate monitoring endpoints.

use crate::RiskIqClient;
use riskiq_core::{range_params, DateRange, Params, Result};
use serde_json::Value;

/// Affiliate monitoring endpoints
pub struct AffiliateApi<'a> {
    client: &'a RiskIqClient,
}

impl<'a> AffiliateApi<'a> {
    pub(crate) const fn new(client: &'a RiskIqClient) -> Self {
        Self { client }
    }

    /// Per-campaign incident counts
    pub fn campaign_summary(&self, range: Option<&DateRange>) -> Result<Value> {
        self.client
            .get("affiliate", "campaignSummary", &[], range_params(range))
    }

    /// Affiliate incidents
    pub fn incident_list(
        &self,
        known_profile: Option<bool>,
        max_results: Option<u32>,
        range: Option<&DateRange>,
    ) -> Result<Value> {
        let mut params = Params::new()
            .with_opt("knownProfile", known_profile)
            .with_opt("maxResults", max_results);
        params.extend(range_params(range));
        self.client.get("affiliate", "incident", &[], params)
    }
}
