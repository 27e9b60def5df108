//! Endpoint URL assembly.

use crate::{Result, RiskIqError};
use url::Url;

/// The RiskIQ API base URL
pub const DEFAULT_BASE_URL: &str = "https://ws.riskiq.net/v1/";

/// Join the base URL, endpoint, action and path segments into an absolute URL.
///
/// Each component is percent-escaped on its own, so a `/` inside a segment is sent
/// as `%2F` rather than splitting the path.
pub fn build_url(base: &Url, endpoint: &str, action: &str, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|()| RiskIqError::InvalidUrl(format!("{base} cannot be a base URL")))?;
        path.pop_if_empty();
        path.push(endpoint);
        path.push(action);
        path.extend(segments);
    }

    Ok(url)
}

/// Parse a base URL string
pub fn parse_base_url(base: &str) -> Result<Url> {
    let url = Url::parse(base).map_err(|e| RiskIqError::InvalidUrl(format!("{base}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(RiskIqError::InvalidUrl(format!("{base} cannot be a base URL")));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        parse_base_url(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_endpoint_and_action() {
        let url = build_url(&base(), "blacklist", "lookup", &[]).unwrap();
        assert_eq!(url.as_str(), "https://ws.riskiq.net/v1/blacklist/lookup");
    }

    #[test]
    fn test_path_segments() {
        let url = build_url(&base(), "pdns", "data", &["example.com"]).unwrap();
        assert!(url.path().ends_with("/pdns/data/example.com"));
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_segments_escaped_independently() {
        let url = build_url(&base(), "page", "data", &["a/b", "c d"]).unwrap();
        assert_eq!(url.as_str(), "https://ws.riskiq.net/v1/page/data/a%2Fb/c%20d");
    }

    #[test]
    fn test_deterministic() {
        let first = build_url(&base(), "dns", "name", &["x", "y"]).unwrap();
        let second = build_url(&base(), "dns", "name", &["x", "y"]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let base = parse_base_url("http://127.0.0.1:8080/v1").unwrap();
        let url = build_url(&base, "zlist", "urls", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/zlist/urls");

        let root = parse_base_url("http://127.0.0.1:8080").unwrap();
        let url = build_url(&root, "zlist", "urls", &[]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/zlist/urls");
    }

    #[test]
    fn test_invalid_base() {
        assert!(parse_base_url("mailto:someone@example.com").is_err());
        assert!(parse_base_url("not a url").is_err());
    }
}
