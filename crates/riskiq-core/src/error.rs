use thiserror::Error;

/// Result type alias for RiskIQ operations
pub type Result<T> = std::result::Result<T, RiskIqError>;

/// Errors that can occur when using the RiskIQ API
#[derive(Error, Debug)]
pub enum RiskIqError {
    /// No usable credentials or configuration could be found
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network failure before a response was obtained
    #[error("transport error: {0}")]
    Transport(String),

    /// The API answered with a non-success status
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body (or a request payload) is not valid JSON
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid base URL or endpoint path
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A call parameter has the wrong shape
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Reading or writing the config file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RiskIqError {
    /// Returns the HTTP status code if this is an API error
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server rejected the credentials
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// Returns true if the error came from configuration rather than the network
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
