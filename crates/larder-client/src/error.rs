//! Client error types.

use thiserror::Error;

/// Errors raised by remote-service calls, classified so callers can tell
/// credential problems apart from transient failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the credential (401/403). Not retried; the caller
    /// must re-authenticate.
    #[error("authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// The request did not complete within the client timeout.
    #[error("request timed out")]
    Timeout,

    /// Transport-level failure (connection, TLS, decoding).
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// The server returned a non-success status code other than 401/403.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(error)
        }
    }
}

impl ClientError {
    /// True for credential failures that require re-authentication.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}
