//! Credential and proxy configuration.
//!
//! Credentials are layered per field: explicit values win over the config file,
//! which wins over the environment.

use directories::ProjectDirs;
use riskiq_core::{Credentials, Result, RiskIqError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "RISKIQ_API_TOKEN";

/// Environment variable holding the API private key
pub const KEY_ENV: &str = "RISKIQ_API_KEY";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "RISKIQ_CONFIG";

/// Contents of the persisted config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// API token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// API private key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Proxy for plain HTTP requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,

    /// Proxy for HTTPS requests
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
}

impl ConfigFile {
    /// Proxy settings stored alongside the credentials
    #[must_use]
    pub fn proxy(&self) -> ProxySettings {
        ProxySettings {
            http: self.http_proxy.clone(),
            https: self.https_proxy.clone(),
        }
    }
}

/// Optional proxies per URL scheme
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxySettings {
    /// Proxy URL for `http://` requests
    pub http: Option<String>,
    /// Proxy URL for `https://` requests
    pub https: Option<String>,
}

impl ProxySettings {
    /// Returns true if no proxy is configured
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.http.is_none() && self.https.is_none()
    }
}

/// Reads and writes the credential config file.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store at an explicit path
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `$RISKIQ_CONFIG`, or `config.toml` in the platform config directory
    pub fn default_location() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(Self::at(path));
        }

        let dirs = ProjectDirs::from("net", "riskiq", "riskiq").ok_or_else(|| {
            RiskIqError::Configuration("could not determine config directory".to_string())
        })?;

        Ok(Self::at(dirs.config_dir().join("config.toml")))
    }

    /// Location of the config file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config file; a missing file is an empty config.
    pub fn load(&self) -> Result<ConfigFile> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file");
            return Ok(ConfigFile::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| {
            RiskIqError::Configuration(format!("{}: {e}", self.path.display()))
        })
    }

    /// Write the whole config file, creating parent directories.
    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)
            .map_err(|e| RiskIqError::Configuration(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        debug!(path = %self.path.display(), "config saved");
        Ok(())
    }

    /// Store credentials, keeping any other settings already in the file.
    ///
    /// A file that no longer parses is replaced.
    pub fn persist(&self, credentials: &Credentials) -> Result<()> {
        let mut config = match self.load() {
            Ok(config) => config,
            Err(RiskIqError::Configuration(reason)) => {
                warn!(%reason, "replacing unreadable config file");
                ConfigFile::default()
            }
            Err(e) => return Err(e),
        };
        config.token = Some(credentials.token().to_string());
        config.key = Some(credentials.key().to_string());
        self.save(&config)
    }

    /// Resolve credentials from explicit values, the config file, then the environment.
    pub fn resolve(&self, token: Option<&str>, key: Option<&str>) -> Result<Credentials> {
        let config = self.load()?;
        resolve_layers(token, key, &config, |name| std::env::var(name).ok())
    }
}

fn resolve_layers(
    token: Option<&str>,
    key: Option<&str>,
    config: &ConfigFile,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Credentials> {
    let pick = |explicit: Option<&str>, stored: Option<&String>, var: &str| {
        non_empty(explicit.map(String::from))
            .or_else(|| non_empty(stored.cloned()))
            .or_else(|| non_empty(env(var)))
    };

    let token = pick(token, config.token.as_ref(), TOKEN_ENV);
    let key = pick(key, config.key.as_ref(), KEY_ENV);

    match (token, key) {
        (Some(token), Some(key)) => Ok(Credentials::new(token, key)),
        (token, key) => {
            let missing: Vec<&str> = [("token", token.is_none()), ("key", key.is_none())]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
            Err(RiskIqError::Configuration(format!(
                "missing API {}; pass it explicitly, run `riq-config setup`, or set {TOKEN_ENV}/{KEY_ENV}",
                missing.join(" and ")
            )))
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
