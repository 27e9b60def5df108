//! Request transports.
//!
//! The client never talks to the network directly: every assembled [`ApiRequest`] is
//! handed to a [`Transport`]. [`HttpTransport`] sends it with reqwest; tests inject
//! their own implementation.

use crate::config::ProxySettings;
use reqwest::blocking::Client as HttpClient;
use reqwest::Proxy;
use riskiq_core::{ApiRequest, ApiResponse, Method, Result, RiskIqError};
use tracing::debug;

/// Sends an assembled request and returns the raw response.
pub trait Transport: Send + Sync {
    /// Send the request, blocking until a response arrives or the request times out
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse>;
}

/// Blocking HTTP transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Create a transport without proxies
    pub fn new() -> Result<Self> {
        Self::with_proxy(&ProxySettings::default())
    }

    /// Create a transport routing requests through the given proxies
    pub fn with_proxy(proxy: &ProxySettings) -> Result<Self> {
        let mut builder = HttpClient::builder().gzip(true);

        if let Some(ref http) = proxy.http {
            builder = builder.proxy(Proxy::http(http).map_err(|e| {
                RiskIqError::Configuration(format!("invalid http proxy {http}: {e}"))
            })?);
        }

        if let Some(ref https) = proxy.https {
            builder = builder.proxy(Proxy::https(https).map_err(|e| {
                RiskIqError::Configuration(format!("invalid https proxy {https}: {e}"))
            })?);
        }

        let http = builder
            .build()
            .map_err(|e| RiskIqError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
        };

        let mut builder = self
            .http
            .request(method, request.url().clone())
            .basic_auth(request.credentials().token(), Some(request.credentials().key()))
            .timeout(request.timeout());

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        let response = builder
            .send()
            .map_err(|e| RiskIqError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| RiskIqError::Transport(e.to_string()))?;

        debug!(status, bytes = body.len(), "response received");
        Ok(ApiResponse { status, body })
    }
}
