//! Error types for the WordPress client.

use thiserror::Error;

/// Result type for WordPress client operations.
pub type Result<T> = std::result::Result<T, WordPressError>;

/// WordPress client errors.
///
/// Every variant is scoped to a single call. Tag creation failures during
/// publishing never surface here; they are logged and the tag is skipped.
#[derive(Debug, Error)]
pub enum WordPressError {
    /// Site URL, username or application password missing (no request was sent)
    #[error("Missing WordPress credentials: {0}")]
    MissingCredentials(String),

    /// Caller supplied an unusable parameter (no request was sent)
    #[error("Invalid request: {0}")]
    InvalidInput(String),

    /// Transport failure (DNS, TLS, connection refused, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response carrying a JSON body
    #[error("WordPress API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Body was not the JSON we expected, usually a wrong site URL or a disabled REST API
    #[error(
        "Invalid response from WordPress (HTTP {status}). Check the site URL and that the REST API is enabled: {detail}"
    )]
    InvalidResponse { status: u16, detail: String },

    /// 2xx response without the fields needed to locate the published item
    #[error("WordPress reported success but the response has no `{0}`; the post may or may not have been published")]
    AmbiguousSuccess(&'static str),
}

impl From<reqwest::Error> for WordPressError {
    fn from(err: reqwest::Error) -> Self {
        WordPressError::Network(err.to_string())
    }
}
