//! Error types
//!
//! Every failure that crosses the public API is an [`ApiError`]. Inconsistent
//! tree data (dangling parents, duplicate ids) is not an error; it degrades
//! into truncated paths and last-write-wins index entries.

use thiserror::Error;

/// Errors surfaced to callers of the navigation session and the API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or a non-2xx response without an error envelope
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with an error envelope
    #[error("Server error ({code}): {message}")]
    Server { code: u16, message: String },

    /// The response did not match the expected envelope or schema
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::MalformedPayload(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedPayload(err.to_string())
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// True for failures of the fetch itself rather than of its content
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}
