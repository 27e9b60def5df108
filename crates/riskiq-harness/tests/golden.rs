//! Golden-file regression run over every client wrapper.
//!
//! Set `RISKIQ_REGENERATE_GOLDEN=1` to rewrite `golden/client_methods.json` from the
//! current client instead of comparing against it.

use riskiq_core::Credentials;
use riskiq_harness::{GoldenFile, Harness, HarnessMode, MethodRegistry};
use std::collections::BTreeSet;
use std::path::PathBuf;

fn golden_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/client_methods.json")
}

fn harness() -> Harness {
    Harness::with_credentials(Credentials::new("golden-token", "golden-key")).unwrap()
}

fn mode_from_env() -> HarnessMode {
    match std::env::var("RISKIQ_REGENERATE_GOLDEN").as_deref() {
        Ok("1" | "true") => HarnessMode::Regenerate,
        _ => HarnessMode::Compare,
    }
}

#[test]
fn client_requests_match_golden_file() {
    let report = harness().run_file(golden_path(), mode_from_env()).unwrap();
    assert!(report.is_success(), "{}", report.summary());
}

#[test]
fn golden_file_covers_every_registered_method() {
    let golden = GoldenFile::load(golden_path()).unwrap();
    let recorded: BTreeSet<&str> = golden
        .records
        .iter()
        .filter(|record| !record.is_private())
        .map(|record| record.name.as_str())
        .collect();
    let registered: BTreeSet<&str> = MethodRegistry::client_methods().names().collect();

    assert_eq!(recorded, registered);
}

#[test]
fn golden_file_is_in_saved_form() {
    let golden = GoldenFile::load(golden_path()).unwrap();
    let on_disk = std::fs::read_to_string(golden_path()).unwrap();
    assert_eq!(golden.to_json().unwrap(), on_disk);
}

#[test]
fn regeneration_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("client_methods.json");
    std::fs::copy(golden_path(), &copy).unwrap();

    let harness = harness();
    harness.run_file(&copy, HarnessMode::Regenerate).unwrap();
    let first = std::fs::read(&copy).unwrap();
    harness.run_file(&copy, HarnessMode::Regenerate).unwrap();
    let second = std::fs::read(&copy).unwrap();

    assert_eq!(first, second);

    let report = harness.run_file(&copy, HarnessMode::Compare).unwrap();
    assert!(report.is_success(), "{}", report.summary());
}

#[test]
fn compare_mode_never_writes() {
    let dir = tempfile::tempdir().unwrap();
    let copy = dir.path().join("client_methods.json");
    let stale = r#"[{"name": "zlist.urls", "tests": [{"expected_result": "https://example.invalid/"}]}]"#;
    std::fs::write(&copy, stale).unwrap();

    let report = harness().run_file(&copy, HarnessMode::Compare).unwrap();

    assert!(!report.is_success());
    assert_eq!(std::fs::read_to_string(&copy).unwrap(), stale);
}
