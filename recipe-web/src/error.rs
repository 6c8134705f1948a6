//! Error types for the recipe front-end.

use thiserror::Error;

/// Errors raised while writing to the browser key-value store.
///
/// Reads never fail: a missing or corrupt value is treated as empty state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StorageError {
    #[error("Failed to serialize value for '{key}': {message}")]
    Serialize { key: String, message: String },

    #[error("Failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Errors raised while talking to the recipe backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}
