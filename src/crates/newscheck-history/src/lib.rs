//! Bounded prediction history with snapshot persistence.
//!
//! This crate holds the client-side record of past predictions:
//!
//! - [`HistoryStore`] - an ordered, capped, most-recent-first sequence of
//!   [`HistoryEntry`] values, replaceable wholesale from the service's
//!   history endpoint
//! - [`SnapshotStore`] - a single-slot persistence trait for the most
//!   recent result, so it can be redisplayed after a restart without a
//!   network round trip
//!
//! Two snapshot backends ship with the crate: [`InMemorySnapshotStore`]
//! (reference implementation and test double) and [`FileSnapshotStore`]
//! (one JSON file under `~/.newscheck`). Snapshot writes are best effort:
//! a full disk or unwritable home directory is logged and ignored, never
//! surfaced to the user.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use newscheck_history::{FileSnapshotStore, HistoryStore};
//!
//! let snapshots = Arc::new(FileSnapshotStore::new(FileSnapshotStore::default_path()));
//! let mut history = HistoryStore::new(snapshots);
//!
//! // At startup: repaint the last result without touching the network.
//! if let Some(entry) = history.restore_last().await {
//!     println!("last: {}", entry.record.label);
//! }
//!
//! // After a successful prediction:
//! history.record_prediction(record, content, title).await;
//! ```

pub mod error;
pub mod snapshot;
pub mod store;

// Re-export commonly used types
pub use error::{Result, SnapshotError};
pub use snapshot::{FileSnapshotStore, InMemorySnapshotStore, LastPrediction, SnapshotStore};
pub use store::{HistoryEntry, HistoryStore, HISTORY_CAP};
