//! Landing page endpoints.

use crate::RiskIqClient;
use riskiq_core::{range_params, DateRange, Params, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A URL submitted for crawling
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageSubmission {
    /// URL to crawl
    pub url: String,

    /// Keyword the page was found with
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// MD5 of the page content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5_hash: Option<String>,

    /// Project the crawl results are filed under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    /// URL to notify when the crawl completes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pingback_url: Option<String>,
}

impl LandingPageSubmission {
    /// Submission for a bare URL
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

/// Landing page endpoints
pub struct LandingPageApi<'a> {
    client: &'a RiskIqClient,
}

impl<'a> LandingPageApi<'a> {
    pub(crate) const fn new(client: &'a RiskIqClient) -> Self {
        Self { client }
    }

    /// Landing page by content MD5
    pub fn lookup(&self, md5: &str) -> Result<Value> {
        self.client
            .get("landingPage", "lookup", &[md5], Params::new())
    }

    /// Landing pages crawled within a date window
    pub fn crawled(&self, range: Option<&DateRange>, whois: Option<bool>) -> Result<Value> {
        self.feed("crawled", range, whois)
    }

    /// Landing pages flagged within a date window
    pub fn flagged(&self, range: Option<&DateRange>, whois: Option<bool>) -> Result<Value> {
        self.feed("flagged", range, whois)
    }

    /// Landing pages found malicious within a date window
    pub fn malicious(&self, range: Option<&DateRange>, whois: Option<bool>) -> Result<Value> {
        self.feed("malicious", range, whois)
    }

    /// Submit one URL for crawling
    pub fn submit(&self, submission: &LandingPageSubmission) -> Result<Value> {
        self.client
            .post("landingPage", "submit", submission, &[], Params::new())
    }

    /// Submit several URLs in one request
    pub fn submit_bulk(&self, submissions: &[LandingPageSubmission]) -> Result<Value> {
        let data = json!({ "entry": submissions });
        self.client
            .post("landingPage", "bulk", &data, &[], Params::new())
    }

    fn feed(&self, action: &str, range: Option<&DateRange>, whois: Option<bool>) -> Result<Value> {
        let mut params = Params::new().with_opt("whois", whois);
        params.extend(range_params(range));
        self.client.get("landingPage", action, &[], params)
    }
}
