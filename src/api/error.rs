//! API Client Error Types
//!
//! `FetchError` covers everything that can go wrong with a single request.
//! It never reaches the view layer: the safe fetch wrapper absorbs it.

use thiserror::Error;

/// Errors raised while building the API client
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

/// A failed fetch of one endpoint
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection, DNS or transport failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response body could not be read
    #[error("Body error: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status(_) => "status",
            FetchError::Body(_) => "body",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Result type alias for API requests
pub type FetchResult<T> = Result<T, FetchError>;
