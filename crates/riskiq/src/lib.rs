//! Rust client for the RiskIQ threat-intelligence API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use riskiq::api::PdnsQuery;
//! use riskiq::RiskIqClient;
//!
//! fn main() -> riskiq::Result<()> {
//!     // Credentials come from explicit values, the config file, or
//!     // RISKIQ_API_TOKEN / RISKIQ_API_KEY.
//!     let client = RiskIqClient::from_config()?;
//!
//!     let records = client
//!         .pdns()
//!         .name("example.com", &PdnsQuery::new().rrtype("A").max_results(100))?;
//!     println!("{records:#}");
//!
//!     let verdict = client.blacklist().lookup("http://example.com/login")?;
//!     println!("{verdict}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/riskiq/0.2.0")]

// Re-export core types
pub use riskiq_core::*;

// Re-export client
pub use riskiq_client::{
    api, ConfigFile, CredentialStore, HttpTransport, ProxySettings, RiskIqClient,
    RiskIqClientBuilder, Transport, CONFIG_PATH_ENV, KEY_ENV, TOKEN_ENV,
};

pub use serde;
pub use serde_json;
