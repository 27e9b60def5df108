//! Main RiskIQ API client implementation.

use crate::api::*;
use crate::config::{CredentialStore, ProxySettings};
use crate::transport::{HttpTransport, Transport};
use riskiq_core::{
    build_url, canonical_json_body, canonicalize_params_with_default, parse_base_url, ApiRequest,
    ApiResponse, Credentials, Method, Params, Result, RiskIqError, Url, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Main RiskIQ API client
#[derive(Clone)]
pub struct RiskIqClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    credentials: Credentials,
    base_url: Url,
    headers: BTreeMap<String, String>,
    timeout: Duration,
}

impl std::fmt::Debug for RiskIqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RiskIqClient")
            .field("credentials", &self.inner.credentials)
            .field("base_url", &self.inner.base_url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish_non_exhaustive()
    }
}

impl RiskIqClient {
    /// Create a new client with the given credentials using default settings
    pub fn new(credentials: Credentials) -> Result<Self> {
        RiskIqClientBuilder::new(credentials).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(credentials: Credentials) -> RiskIqClientBuilder {
        RiskIqClientBuilder::new(credentials)
    }

    /// Create a client from the config file and environment.
    ///
    /// Proxy settings stored in the config file are applied as well.
    pub fn from_config() -> Result<Self> {
        let store = CredentialStore::default_location()?;
        Self::from_store(&store)
    }

    /// Create a client from a specific credential store
    pub fn from_store(store: &CredentialStore) -> Result<Self> {
        let config = store.load()?;
        let credentials = store.resolve(None, None)?;
        RiskIqClientBuilder::new(credentials)
            .proxy(config.proxy())
            .build()
    }

    /// Credentials this client authenticates with
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    /// Base URL all endpoints are resolved against
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Access passive DNS endpoints
    #[must_use]
    pub fn pdns(&self) -> PdnsApi<'_> {
        PdnsApi::new(self)
    }

    /// Access blacklist endpoints
    #[must_use]
    pub fn blacklist(&self) -> BlacklistApi<'_> {
        BlacklistApi::new(self)
    }

    /// Access landing page endpoints
    #[must_use]
    pub fn landing_page(&self) -> LandingPageApi<'_> {
        LandingPageApi::new(self)
    }

    /// Access WHOIS endpoints
    #[must_use]
    pub fn whois(&self) -> WhoisApi<'_> {
        WhoisApi::new(self)
    }

    /// Access zlist feed endpoints
    #[must_use]
    pub fn zlist(&self) -> ZlistApi<'_> {
        ZlistApi::new(self)
    }

    /// Access affiliate monitoring endpoints
    #[must_use]
    pub fn affiliate(&self) -> AffiliateApi<'_> {
        AffiliateApi::new(self)
    }

    /// Perform a GET request.
    ///
    /// `params` go into the query string sorted by key; a `timeout` entry sets the
    /// request timeout instead of being sent.
    pub fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        action: &str,
        segments: &[&str],
        params: Params,
    ) -> Result<T> {
        let request = self.build_request(Method::Get, endpoint, action, segments, params, None)?;
        self.execute(&request)
    }

    /// Perform a POST request with a JSON body.
    ///
    /// The body is serialized with sorted keys; `params` are handled as for [`get`](Self::get).
    pub fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        action: &str,
        data: &B,
        segments: &[&str],
        params: Params,
    ) -> Result<T> {
        let body = canonical_json_body(data)?;
        let request =
            self.build_request(Method::Post, endpoint, action, segments, params, Some(body))?;
        self.execute(&request)
    }

    /// Assemble the request record for a call without sending it
    pub fn build_request(
        &self,
        method: Method,
        endpoint: &str,
        action: &str,
        segments: &[&str],
        params: Params,
        body: Option<String>,
    ) -> Result<ApiRequest> {
        let mut url = build_url(&self.inner.base_url, endpoint, action, segments)?;
        let canonical = canonicalize_params_with_default(params, self.inner.timeout)?;
        canonical.apply_to(&mut url);

        Ok(ApiRequest::new(
            method,
            url,
            self.inner.headers.clone(),
            self.inner.credentials.clone(),
            body,
            canonical.timeout(),
        ))
    }

    fn execute<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
        debug!(method = %request.method(), url = %request.url(), "{} request", request.method());
        let response = self.inner.transport.send(request)?;
        handle_response(response)
    }
}

/// Turn a raw response into a decoded body or an API error
fn handle_response<T: DeserializeOwned>(response: ApiResponse) -> Result<T> {
    if response.is_success() {
        serde_json::from_str(&response.body).map_err(RiskIqError::Decode)
    } else {
        warn!(status = response.status, "RiskIQ API returned an error status");
        Err(RiskIqError::Api {
            status: response.status,
            body: response.body,
        })
    }
}

/// Builder for configuring a [`RiskIqClient`]
pub struct RiskIqClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    user_agent: String,
    proxy: ProxySettings,
    transport: Option<Arc<dyn Transport>>,
}

impl RiskIqClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("riskiq-rust/{}", env!("CARGO_PKG_VERSION")),
            proxy: ProxySettings::default(),
            transport: None,
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the timeout used when a call does not pass one
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Route requests through proxies (ignored when a custom transport is set)
    #[must_use]
    pub fn proxy(mut self, proxy: ProxySettings) -> Self {
        self.proxy = proxy;
        self
    }

    /// Replace the HTTP transport
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RiskIqClient> {
        let base_url = parse_base_url(&self.base_url)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(HttpTransport::with_proxy(&self.proxy)?),
        };

        let headers = BTreeMap::from([
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.user_agent),
        ]);

        Ok(RiskIqClient {
            inner: Arc::new(ClientInner {
                transport,
                credentials: self.credentials,
                base_url,
                headers,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Records every request and answers with a fixed response.
    struct Recorder {
        seen: Arc<Mutex<Vec<ApiRequest>>>,
        response: ApiResponse,
    }

    impl Transport for Recorder {
        fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    fn client_with(response: ApiResponse) -> (RiskIqClient, Arc<Mutex<Vec<ApiRequest>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let client = RiskIqClient::builder(Credentials::new("token", "key"))
            .transport(Recorder {
                seen: Arc::clone(&seen),
                response,
            })
            .build()
            .unwrap();
        (client, seen)
    }

    fn last(seen: &Arc<Mutex<Vec<ApiRequest>>>) -> ApiRequest {
        seen.lock().unwrap().last().cloned().unwrap()
    }

    #[test]
    fn test_get_path_segments_without_query() {
        let (client, seen) = client_with(ApiResponse::new(200, "{}"));
        let _: Value = client.get("pdns", "data", &["example.com"], Params::new()).unwrap();

        let request = last(&seen);
        assert_eq!(request.method(), Method::Get);
        assert!(request.url().path().ends_with("/pdns/data/example.com"));
        assert_eq!(request.url().query(), None);
        assert_eq!(request.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_get_strips_timeout() {
        let (client, seen) = client_with(ApiResponse::new(200, "{}"));
        let params = Params::new().with("ip", "1.2.3.4").with("timeout", 10);
        let _: Value = client.get("blacklist", "lookup", &[], params).unwrap();

        let request = last(&seen);
        let url = request.url().as_str();
        assert_eq!(url.matches("ip=1.2.3.4").count(), 1);
        assert!(!url.contains("timeout"));
        assert_eq!(request.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_post_sorted_body() {
        let (client, seen) = client_with(ApiResponse::new(200, r#"{"ok":true}"#));
        let mut data = serde_json::Map::new();
        data.insert("b".into(), json!(1));
        data.insert("a".into(), json!(2));

        let result: Value = client
            .post("submit", "create", &data, &[], Params::new().with("name", "x"))
            .unwrap();

        let request = last(&seen);
        assert_eq!(result, json!({"ok": true}));
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), Some(r#"{"a":2,"b":1}"#));
        assert_eq!(
            request.url().as_str(),
            "https://ws.riskiq.net/v1/submit/create?name=x"
        );
    }

    #[test]
    fn test_fixed_headers_and_auth() {
        let (client, seen) = client_with(ApiResponse::new(200, "{}"));
        let _: Value = client.get("zlist", "urls", &[], Params::new()).unwrap();

        let request = last(&seen);
        assert_eq!(request.headers()["Accept"], "application/json");
        assert_eq!(request.headers()["Content-Type"], "application/json");
        assert!(request.headers()["User-Agent"].starts_with("riskiq-rust/"));
        assert_eq!(request.credentials(), &Credentials::new("token", "key"));
    }

    #[test]
    fn test_builder_default_timeout() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let client = RiskIqClient::builder(Credentials::new("t", "k"))
            .timeout(Duration::from_secs(5))
            .transport(Recorder {
                seen: Arc::clone(&seen),
                response: ApiResponse::new(200, "{}"),
            })
            .build()
            .unwrap();
        let _: Value = client.get("zlist", "urls", &[], Params::new()).unwrap();
        assert_eq!(last(&seen).timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_api_error_status() {
        let (client, _) = client_with(ApiResponse::new(403, "forbidden"));
        let err = client
            .get::<Value>("blacklist", "lookup", &[], Params::new())
            .unwrap_err();
        assert!(matches!(err, RiskIqError::Api { status: 403, ref body } if body == "forbidden"));
    }

    #[test]
    fn test_decode_error() {
        let (client, _) = client_with(ApiResponse::new(200, "<html>"));
        let err = client
            .get::<Value>("blacklist", "lookup", &[], Params::new())
            .unwrap_err();
        assert!(matches!(err, RiskIqError::Decode(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let err = RiskIqClient::builder(Credentials::new("t", "k"))
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, RiskIqError::InvalidUrl(_)));
    }

    #[test]
    fn test_from_store_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "token = \"file-token\"\nkey = \"file-key\"\nhttps_proxy = \"http://proxy.local:3128\"\n",
        )
        .unwrap();

        let client = RiskIqClient::from_store(&CredentialStore::at(&path)).unwrap();
        assert_eq!(client.credentials(), &Credentials::new("file-token", "file-key"));
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_store_missing_key() {
        if std::env::var_os(crate::KEY_ENV).is_some() {
            return;
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "token = \"file-token\"\n").unwrap();

        let err = RiskIqClient::from_store(&CredentialStore::at(&path)).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("missing API key"));
    }
}
