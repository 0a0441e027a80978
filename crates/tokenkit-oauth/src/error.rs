//! Error types for the OAuth flows.

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, OAuthError>;

/// Errors that can occur while running a flow.
///
/// Every failure is terminal for the current invocation; there is no
/// retry path anywhere in this crate.
#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    /// Network/HTTP transport error.
    #[error("network error: {0}")]
    Network(String),

    /// Provider returned a non-2xx response; the raw body is kept verbatim.
    #[error("provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    /// Provider returned 2xx but the body was not a JSON object.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    /// A compact JWT could not be decoded.
    #[error("invalid ID token: {0}")]
    InvalidIdToken(String),

    /// Unusable profile configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for OAuthError {
    fn from(e: reqwest::Error) -> Self {
        OAuthError::Network(e.to_string())
    }
}
