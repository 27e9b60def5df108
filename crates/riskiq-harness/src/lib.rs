//! Golden-file regression harness for RiskIQ request construction.
//!
//! The harness drives every registered client method with recorded arguments
//! through a [`CaptureTransport`], then compares the request each call would have
//! sent against the expectation stored in a golden file.
//!
//! ```rust,no_run
//! use riskiq_harness::{Harness, HarnessMode};
//!
//! let harness = Harness::from_config()?;
//! let report = harness.run_file("tests/golden/client_methods.json", HarnessMode::Compare)?;
//! assert!(report.is_success(), "{}", report.summary());
//! # Ok::<(), riskiq_core::RiskIqError>(())
//! ```
//!
//! Regeneration rewrites the expectations in place and is only done when asked
//! for with [`HarnessMode::Regenerate`].

#![doc(html_root_url = "https://docs.rs/riskiq-harness/0.2.0")]

mod capture;
mod golden;
mod registry;

pub use capture::{captured_request, capturing_client, CaptureTransport, CAPTURE_KEY};
pub use golden::{GoldenCase, GoldenFile, GoldenRecord};
pub use registry::{Invocation, MethodFn, MethodRegistry};

use riskiq_client::{CredentialStore, RiskIqClient};
use riskiq_core::{Credentials, Result};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do with freshly captured requests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HarnessMode {
    /// Compare against stored expectations and report mismatches
    #[default]
    Compare,
    /// Overwrite stored expectations with what the client produces now
    Regenerate,
}

/// The comparable part of a captured request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expectation {
    /// Request URL including query string
    pub url: Option<String>,
    /// JSON body (POST only)
    pub body: Option<String>,
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url.as_deref().unwrap_or("<none>"))?;
        if let Some(ref body) = self.body {
            write!(f, " body={body}")?;
        }
        Ok(())
    }
}

/// Result of running one golden case
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseStatus {
    /// Captured request matches the expectation
    Passed,
    /// Neither the result nor the stored expectation carries a request
    Skipped,
    /// Expectation overwritten (regenerate mode)
    Regenerated,
    /// Captured request differs from the expectation
    Mismatch {
        /// Stored expectation
        expected: Expectation,
        /// Freshly captured request
        actual: Expectation,
    },
    /// The method rejected its recorded arguments
    Errored(String),
}

/// One case outcome, addressed by method name and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Method name from the golden record
    pub method: String,
    /// Index of the case within the record
    pub index: usize,
    /// What happened
    pub status: CaseStatus,
}

impl CaseOutcome {
    /// Returns true for mismatches and errors
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(
            self.status,
            CaseStatus::Mismatch { .. } | CaseStatus::Errored(_)
        )
    }
}

/// Outcomes of a harness run, in execution order
#[derive(Debug, Clone, Default)]
pub struct HarnessReport {
    /// Every case that ran
    pub outcomes: Vec<CaseOutcome>,
}

impl HarnessReport {
    /// Failed cases
    pub fn failures(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    /// Number of cases with the given status kind
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&CaseStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }

    /// Returns true if no case failed
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Human-readable summary listing every failure
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} cases: {} passed, {} regenerated, {} skipped, {} failed",
            self.outcomes.len(),
            self.count(|s| *s == CaseStatus::Passed),
            self.count(|s| *s == CaseStatus::Regenerated),
            self.count(|s| *s == CaseStatus::Skipped),
            self.failures().count(),
        );

        for failure in self.failures() {
            let _ = write!(out, "\n  {}[{}]: ", failure.method, failure.index);
            let _ = match failure.status {
                CaseStatus::Mismatch {
                    ref expected,
                    ref actual,
                } => write!(out, "expected {expected}, got {actual}"),
                CaseStatus::Errored(ref message) => write!(out, "{message}"),
                _ => Ok(()),
            };
        }

        out
    }
}

/// Drives client methods from golden records
pub struct Harness {
    client: RiskIqClient,
    registry: MethodRegistry,
}

impl Harness {
    /// Harness over an existing client, normally one built with [`CaptureTransport`]
    #[must_use]
    pub fn new(client: RiskIqClient) -> Self {
        Self {
            client,
            registry: MethodRegistry::client_methods(),
        }
    }

    /// Harness over a capturing client with the given credentials
    pub fn with_credentials(credentials: Credentials) -> Result<Self> {
        Ok(Self::new(capturing_client(credentials)?))
    }

    /// Harness whose credentials come from the config file and environment
    pub fn from_config() -> Result<Self> {
        let store = CredentialStore::default_location()?;
        Self::with_credentials(store.resolve(None, None)?)
    }

    /// Replace the method registry
    #[must_use]
    pub fn with_registry(mut self, registry: MethodRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Run every case in order.
    ///
    /// Unknown method names fail the whole run before any case executes. In
    /// regenerate mode the records are updated in place.
    pub fn run(&self, records: &mut [GoldenRecord], mode: HarnessMode) -> Result<HarnessReport> {
        let methods = records
            .iter()
            .filter(|record| !record.is_private())
            .map(|record| self.registry.require(&record.name))
            .collect::<Result<Vec<_>>>()?;

        let mut report = HarnessReport::default();
        let public = records.iter_mut().filter(|record| !record.is_private());

        for (record, method) in public.zip(methods) {
            for (index, case) in record.tests.iter_mut().enumerate() {
                let status = self.run_case(&record.name, method, case, mode);
                debug!(method = %record.name, index, ?status, "case finished");
                if let CaseStatus::Mismatch {
                    ref expected,
                    ref actual,
                } = status
                {
                    warn!(method = %record.name, index, %expected, %actual, "request mismatch");
                }
                report.outcomes.push(CaseOutcome {
                    method: record.name.clone(),
                    index,
                    status,
                });
            }
        }

        Ok(report)
    }

    /// Load a golden file, run it, and save it back in regenerate mode
    pub fn run_file(&self, path: impl AsRef<Path>, mode: HarnessMode) -> Result<HarnessReport> {
        let mut golden = GoldenFile::load(path.as_ref())?;
        let report = self.run(&mut golden.records, mode)?;

        if mode == HarnessMode::Regenerate {
            golden.save()?;
            info!(path = %golden.path().display(), "golden file regenerated");
        }

        Ok(report)
    }

    fn run_case(
        &self,
        name: &str,
        method: MethodFn,
        case: &mut GoldenCase,
        mode: HarnessMode,
    ) -> CaseStatus {
        let mut call = Invocation::new(name, &case.args, &case.kwargs);
        let result = match method(&self.client, &mut call) {
            Ok(result) => result,
            Err(e) => return CaseStatus::Errored(e.to_string()),
        };

        let actual = captured_request(&result).map_or_else(Expectation::default, |record| {
            Expectation {
                url: Some(record.url),
                body: record.body,
            }
        });

        match mode {
            HarnessMode::Regenerate => {
                case.expected_result = actual.url;
                case.expected_body = actual.body;
                CaseStatus::Regenerated
            }
            HarnessMode::Compare => {
                let expected = Expectation {
                    url: case.expected_result.clone(),
                    body: case.expected_body.clone(),
                };
                if expected != actual {
                    CaseStatus::Mismatch { expected, actual }
                } else if actual.url.is_none() {
                    CaseStatus::Skipped
                } else {
                    CaseStatus::Passed
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn harness() -> Harness {
        Harness::with_credentials(Credentials::new("token", "key")).unwrap()
    }

    fn records(value: serde_json::Value) -> Vec<GoldenRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_compare_pass_and_mismatch() {
        let mut golden = records(json!([{
            "name": "blacklist.lookup",
            "tests": [
                {"args": ["http://a.example"], "kwargs": {},
                 "expected_result": "https://ws.riskiq.net/v1/blacklist/lookup?url=http%3A%2F%2Fa.example"},
                {"args": ["http://b.example"], "kwargs": {},
                 "expected_result": "https://ws.riskiq.net/v1/blacklist/lookup?url=stale"}
            ]
        }]));

        let report = harness().run(&mut golden, HarnessMode::Compare).unwrap();
        assert_eq!(report.outcomes[0].status, CaseStatus::Passed);
        assert!(report.outcomes[1].is_failure());
        assert!(!report.is_success());
        assert!(report.summary().contains("blacklist.lookup[1]"));
    }

    #[test]
    fn test_unknown_method_fails_fast() {
        let mut golden = records(json!([
            {"name": "zlist.urls", "tests": [{}]},
            {"name": "zlist.nope", "tests": [{}]}
        ]));
        let err = harness().run(&mut golden, HarnessMode::Compare).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_private_names_skipped() {
        let mut golden = records(json!([
            {"name": "_get", "tests": [{"args": ["anything"]}]},
            {"name": "zlist.urls", "tests": [{"expected_result": "https://ws.riskiq.net/v1/zlist/urls"}]}
        ]));
        let report = harness().run(&mut golden, HarnessMode::Compare).unwrap();
        assert_eq!(report.outcomes.len(), 1);
        assert!(report.is_success());
    }

    #[test]
    fn test_list_results_are_skipped() {
        let mut golden = records(json!([{
            "name": "blacklist.lookup_bulk",
            "tests": [{"args": [["http://a.example", "http://b.example"]], "expected_result": null}]
        }]));
        let report = harness().run(&mut golden, HarnessMode::Compare).unwrap();
        assert_eq!(report.outcomes[0].status, CaseStatus::Skipped);
    }

    #[test]
    fn test_stale_expectation_without_capture_fails() {
        let mut golden = records(json!([{
            "name": "blacklist.lookup_bulk",
            "tests": [{
                "args": [["http://a.example"]],
                "expected_result": "https://ws.riskiq.net/v1/blacklist/lookup?url=STALE"
            }]
        }]));
        let report = harness().run(&mut golden, HarnessMode::Compare).unwrap();
        assert!(matches!(
            report.outcomes[0].status,
            CaseStatus::Mismatch { ref actual, .. } if actual.url.is_none()
        ));
        assert!(!report.is_success());
    }

    #[test]
    fn test_bad_arguments_reported_and_run_continues() {
        let mut golden = records(json!([
            {"name": "pdns.name", "tests": [{"args": [], "kwargs": {}}]},
            {"name": "zlist.urls", "tests": [{"expected_result": "https://ws.riskiq.net/v1/zlist/urls"}]}
        ]));
        let report = harness().run(&mut golden, HarnessMode::Compare).unwrap();
        assert!(matches!(report.outcomes[0].status, CaseStatus::Errored(_)));
        assert_eq!(report.outcomes[1].status, CaseStatus::Passed);
    }

    #[test]
    fn test_regenerate_updates_expectations() {
        let mut golden = records(json!([{
            "name": "landing_page.submit",
            "tests": [{"args": ["http://x.example"], "kwargs": {"keyword": "bank"}, "expected_result": null}]
        }]));
        let report = harness().run(&mut golden, HarnessMode::Regenerate).unwrap();
        assert_eq!(report.outcomes[0].status, CaseStatus::Regenerated);

        let case = &golden[0].tests[0];
        assert_eq!(
            case.expected_result.as_deref(),
            Some("https://ws.riskiq.net/v1/landingPage/submit")
        );
        assert_eq!(
            case.expected_body.as_deref(),
            Some(r#"{"keyword":"bank","url":"http://x.example"}"#)
        );

        let report = harness().run(&mut golden, HarnessMode::Compare).unwrap();
        assert!(report.is_success());
    }
}
