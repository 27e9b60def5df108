//! Command implementations.

pub mod blacklist;
pub mod config;
pub mod pdns;

use crate::cli::args::GlobalArgs;
use crate::output::OutputFormat;
use colored::Colorize;
use riskiq::{CredentialStore, RiskIqClient};
use std::path::PathBuf;
use tracing::warn;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Explicit config file location
    pub config: Option<PathBuf>,

    /// API token from the command line
    pub token: Option<String>,

    /// API private key from the command line
    pub key: Option<String>,

    /// Persist command-line credentials before running
    pub save: bool,

    /// Output format
    pub output_format: OutputFormat,
}

impl From<GlobalArgs> for Context {
    fn from(global: GlobalArgs) -> Self {
        Self {
            config: global.config,
            token: global.token,
            key: global.key,
            save: global.save,
            output_format: global.output.unwrap_or_default(),
        }
    }
}

impl Context {
    /// Credential store honoring --config.
    pub fn store(&self) -> anyhow::Result<CredentialStore> {
        Ok(match self.config {
            Some(ref path) => CredentialStore::at(path),
            None => CredentialStore::default_location()?,
        })
    }

    /// Create a client from command-line, stored, or environment credentials.
    ///
    /// With --save the resolved credentials are written back first; a failed write
    /// is reported and the command carries on with the in-memory credentials.
    pub fn client(&self) -> anyhow::Result<RiskIqClient> {
        let store = self.store()?;
        let config = store.load()?;
        let credentials = store.resolve(self.token.as_deref(), self.key.as_deref())?;

        if self.save {
            if let Err(e) = store.persist(&credentials) {
                warn!(error = %e, "could not save credentials");
                eprintln!("{} could not save credentials: {e}", "Warning:".yellow().bold());
            }
        }

        Ok(RiskIqClient::builder(credentials)
            .proxy(config.proxy())
            .build()?)
    }
}
