//! Error types for service API calls.

use thiserror::Error;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors that can occur when talking to the prediction service.
///
/// Callers render these as a user-visible error state; no variant is
/// retried automatically.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// A success response whose body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// Check whether this error came back from the service itself rather
    /// than the transport.
    pub fn is_service_error(&self) -> bool {
        matches!(self, ApiError::Api { .. })
    }
}
