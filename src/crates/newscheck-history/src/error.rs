//! Error types for snapshot persistence.

use thiserror::Error;

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;

/// Errors that can occur reading or writing the last-prediction slot.
///
/// These never reach the user: [`HistoryStore`](crate::HistoryStore)
/// swallows them and logs a warning, treating a failed read as an absent
/// snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-specific storage error
    #[error("Storage error: {0}")]
    Storage(String),
}
