//! Core types for the RiskIQ API client.
//!
//! This crate holds the pieces of request construction that carry no I/O:
//!
//! - **Endpoints**: [`build_url`] joins base URL, endpoint, action and path segments
//! - **Parameters**: [`canonicalize_params`] and [`canonical_json_body`] make requests
//!   byte-identical regardless of call-site ordering
//! - **Records**: [`ApiRequest`] and [`ApiResponse`] exchanged with a transport
//! - **Errors**: [`RiskIqError`] and the crate [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use riskiq_core::{build_url, canonicalize_params, parse_base_url, Params, DEFAULT_BASE_URL};
//!
//! let base = parse_base_url(DEFAULT_BASE_URL).unwrap();
//! let mut url = build_url(&base, "blacklist", "lookup", &[]).unwrap();
//! let params = canonicalize_params(Params::new().with("url", "http://example.com").with("timeout", 10)).unwrap();
//! params.apply_to(&mut url);
//! assert_eq!(url.as_str(), "https://ws.riskiq.net/v1/blacklist/lookup?url=http%3A%2F%2Fexample.com");
//! ```

#![doc(html_root_url = "https://docs.rs/riskiq-core/0.2.0")]

mod credentials;
mod endpoint;
mod error;
mod params;
mod range;
mod request;

pub use credentials::{mask, Credentials};
pub use endpoint::{build_url, parse_base_url, DEFAULT_BASE_URL};
pub use error::{Result, RiskIqError};
pub use params::{
    canonical_json_body, canonicalize_params, canonicalize_params_with_default, CanonicalParams,
    Params, DEFAULT_TIMEOUT, TIMEOUT_KEY,
};
pub use range::{range_params, DateRange, END_PARAM, START_PARAM};
pub use request::{ApiRequest, ApiResponse, Method, RequestRecord};

pub use url::Url;
