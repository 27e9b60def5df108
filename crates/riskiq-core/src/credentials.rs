//! API credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RiskIQ API token and private key, sent as HTTP basic auth.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    token: String,
    key: String,
}

impl Credentials {
    /// Create credentials from a token and private key
    #[must_use]
    pub fn new(token: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            key: key.into(),
        }
    }

    /// The API token (basic auth user name)
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The private key (basic auth password)
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Token with everything but the first and last four characters hidden
    #[must_use]
    pub fn masked_token(&self) -> String {
        mask(&self.token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.masked_token())
            .field("key", &"****")
            .finish()
    }
}

/// Mask a secret for display.
#[must_use]
pub fn mask(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}
