//! Golden file model.

use riskiq_core::{Result, RiskIqError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// One recorded call and the request it is expected to produce
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoldenCase {
    /// Positional arguments
    #[serde(default)]
    pub args: Vec<Value>,

    /// Keyword arguments
    #[serde(default)]
    pub kwargs: Map<String, Value>,

    /// Expected request URL, `null` for methods exempt from comparison
    #[serde(default)]
    pub expected_result: Option<String>,

    /// Expected JSON body for POST methods
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<String>,
}

/// All recorded calls for one client method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoldenRecord {
    /// Registered method name, e.g. `blacklist.lookup`
    pub name: String,

    /// Calls in the order they run
    #[serde(default)]
    pub tests: Vec<GoldenCase>,
}

impl GoldenRecord {
    /// Names starting with `_` are never invoked
    #[must_use]
    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

/// A golden file on disk
#[derive(Debug, Clone)]
pub struct GoldenFile {
    path: PathBuf,
    /// Records in file order
    pub records: Vec<GoldenRecord>,
}

impl GoldenFile {
    /// Read and parse a golden file
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        let records = serde_json::from_str(&content).map_err(|e| {
            RiskIqError::Configuration(format!("malformed golden file {}: {e}", path.display()))
        })?;
        Ok(Self { path, records })
    }

    /// Where the file lives
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the records: JSON array, 4-space indent, trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
        self.records.serialize(&mut serializer)?;
        out.push(b'\n');
        String::from_utf8(out).map_err(|e| RiskIqError::Configuration(e.to_string()))
    }

    /// Overwrite the file with the current records
    pub fn save(&self) -> Result<()> {
        std::fs::write(&self.path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_record() {
        let records: Vec<GoldenRecord> =
            serde_json::from_value(json!([{"name": "zlist.urls", "tests": [{}]}])).unwrap();
        assert_eq!(records[0].tests[0], GoldenCase::default());
        assert!(!records[0].is_private());
    }

    #[test]
    fn test_private_name() {
        let record = GoldenRecord {
            name: "_get".into(),
            tests: Vec::new(),
        };
        assert!(record.is_private());
    }

    #[test]
    fn test_save_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golden.json");
        std::fs::write(&path, r#"[{"name":"zlist.urls","tests":[{"args":[],"kwargs":{}}]}]"#).unwrap();

        let golden = GoldenFile::load(&path).unwrap();
        golden.save().unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(saved.starts_with("[\n    {\n        \"name\": \"zlist.urls\""));
        assert!(saved.contains("\"expected_result\": null"));
        assert!(!saved.contains("expected_body"));
        assert!(saved.ends_with("]\n"));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("golden.json");
        std::fs::write(&path, "{").unwrap();
        assert!(GoldenFile::load(&path).unwrap_err().is_configuration());
    }
}
