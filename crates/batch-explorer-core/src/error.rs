//! Error types for the fetch boundary.
//!
//! Every failure surfaces to the viewer as the same fixed message, but the
//! cause is kept as a distinct variant so it can be logged and asserted on.

use thiserror::Error;

/// The only message a viewer ever sees when the batch list could not be loaded.
pub const SERVICE_UNREACHABLE: &str = "Could not connect to the batch service. Is it running?";

/// Errors that can occur while fetching the batch list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The configured endpoint is not a usable http(s) URL
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Connection, DNS, TLS or body transfer failure
    #[error("Network failure: {0}")]
    Network(String),
    /// The service answered with a non-success status code
    #[error("Unexpected HTTP status: {0}")]
    BadStatus(u16),
    /// The response body is not a list of batches
    #[error("Malformed batch payload: {0}")]
    Decode(String),
}

impl FetchError {
    /// User-facing text for this error. Identical for every variant.
    pub fn user_message(&self) -> &'static str {
        SERVICE_UNREACHABLE
    }

    /// Short stable tag for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidEndpoint(_) => "invalid_endpoint",
            FetchError::Network(_) => "network",
            FetchError::BadStatus(_) => "bad_status",
            FetchError::Decode(_) => "decode",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
