//! Errors returned by [`crate::ApiClient`].

use thiserror::Error;

/// Message used when a failed response carries none of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Request failed";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The request never produced a usable response: connection, DNS, CORS,
    /// or a success body that was not the expected JSON.
    #[error("Network error: {0}")]
    Network(String),

    /// The request body could not be serialised.
    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}
