//! Zlist feed endpoints.

use crate::RiskIqClient;
use riskiq_core::{range_params, DateRange, Result};
use serde_json::Value;

/// Zlist feed endpoints
pub struct ZlistApi<'a> {
    client: &'a RiskIqClient,
}

impl<'a> ZlistApi<'a> {
    pub(crate) const fn new(client: &'a RiskIqClient) -> Self {
        Self { client }
    }

    /// Compromised URLs published within a date window
    pub fn urls(&self, range: Option<&DateRange>) -> Result<Value> {
        self.client.get("zlist", "urls", &[], range_params(range))
    }
}
