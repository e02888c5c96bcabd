/// Error types for the NiceHash client.
///
/// Transport failures are relayed to the caller as-is. Non-success HTTP
/// statuses are not errors: they come back as an [`ApiResponse`](crate::models::ApiResponse).
use thiserror::Error;

/// The primary error type for the NiceHash client.
#[derive(Error, Debug)]
pub enum NicehashError {
    // Transport errors
    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    // Construction errors
    #[error("Invalid header value for {name}: {message}")]
    InvalidHeader { name: String, message: String },

    // Generic
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for NicehashError {
    fn from(err: reqwest::Error) -> Self {
        NicehashError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for NicehashError {
    fn from(err: serde_json::Error) -> Self {
        NicehashError::JsonError(err.to_string())
    }
}

impl From<url::ParseError> for NicehashError {
    fn from(err: url::ParseError) -> Self {
        NicehashError::Other(format!("URL parse error: {err}"))
    }
}
