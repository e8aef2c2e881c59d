//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP transport failed (connection, DNS, TLS)
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Invalid API credentials (malformed base64 secret)
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// The service responded with a non-success HTTP status
    #[error("API error (status {status})")]
    Api {
        /// HTTP status code
        status: u16,
        /// Decoded error body, if the response carried parseable JSON
        body: Option<serde_json::Value>,
    },

    /// Response claimed JSON but could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request parameters (rejected before any network I/O)
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

impl RestError {
    /// Classify a transport-level failure, surfacing timeouts distinctly
    pub(crate) fn transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }

    /// Check if this error is worth retrying
    ///
    /// The client never retries on its own; this is a hint for callers
    /// implementing their own retry policy.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::Timeout => true,
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
