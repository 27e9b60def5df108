//! HTTP client for the RiskIQ API.
//!
//! This crate provides the main [`RiskIqClient`], the [`Transport`] seam it sends
//! requests through, and the [`CredentialStore`] that resolves API credentials.

#![doc(html_root_url = "https://docs.rs/riskiq-client/0.2.0")]

mod client;
mod config;
mod transport;
pub mod api;

pub use client::{RiskIqClient, RiskIqClientBuilder};
pub use config::*;
pub use riskiq_core::{Credentials, Params, Result, RiskIqError};
pub use transport::{HttpTransport, Transport};
