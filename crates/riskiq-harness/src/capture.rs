//! Transport that captures requests instead of sending them.

use riskiq_client::{RiskIqClient, Transport};
use riskiq_core::{ApiRequest, ApiResponse, Credentials, RequestRecord, Result};
use serde_json::{json, Value};

/// Key under which the captured request is echoed back in the response body
pub const CAPTURE_KEY: &str = "request";

/// Answers every request with `{"request": <record>}` and never touches the network.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureTransport;

impl Transport for CaptureTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        let body = json!({ CAPTURE_KEY: request.record() });
        Ok(ApiResponse::new(200, body.to_string()))
    }
}

/// Client whose every call returns the request it would have sent
pub fn capturing_client(credentials: Credentials) -> Result<RiskIqClient> {
    RiskIqClient::builder(credentials)
        .transport(CaptureTransport)
        .build()
}

/// Pull the captured request out of a method result.
///
/// Results that are not a mapping carrying a capture (aggregating methods return a
/// list) yield `None`.
pub fn captured_request(result: &Value) -> Option<RequestRecord> {
    let captured = result.as_object()?.get(CAPTURE_KEY)?;
    serde_json::from_value(captured.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskiq_core::{Method, Params};

    #[test]
    fn test_get_is_echoed() {
        let client = capturing_client(Credentials::new("t", "k")).unwrap();
        let result: Value = client
            .get("pdns", "data", &["example.com"], Params::new())
            .unwrap();

        let record = captured_request(&result).unwrap();
        assert_eq!(record.method, Method::Get);
        assert_eq!(record.url, "https://ws.riskiq.net/v1/pdns/data/example.com");
        assert_eq!(record.body, None);
    }

    #[test]
    fn test_list_result_not_captured() {
        assert!(captured_request(&json!([{"request": {}}])).is_none());
        assert!(captured_request(&json!({"records": []})).is_none());
    }
}
