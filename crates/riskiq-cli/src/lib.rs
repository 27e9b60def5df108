//! # riskiq-cli
//!
//! Command-line tools for the RiskIQ API.
//!
//! - `riq-pdns`: passive DNS by name, IP, or record data
//! - `riq-blacklist`: URL lookups, incidents and blacklist feeds
//! - `riq-config`: store credentials and proxy settings

pub mod cli;
pub mod output;
