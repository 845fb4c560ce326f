//! Single-slot persistence for the most recent prediction.
//!
//! The slot mirrors the browser original's `localStorage` behavior: one
//! named key holding one serialized JSON blob, overwritten on every write.
//! The [`SnapshotStore`] trait lets downstream code swap the backend
//! (in-memory for tests, a JSON file for the CLI, or anything else that can
//! hold one blob).

use crate::error::{Result, SnapshotError};
use async_trait::async_trait;
use newscheck_core::PredictionRecord;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

/// The persisted triple: the record plus the raw submitted inputs.
///
/// Predict responses may omit the echoed `content`/`title`, so the caller's
/// originals travel alongside the record. Serialized with the `item` key the
/// browser original used for the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastPrediction {
    #[serde(rename = "item")]
    pub record: PredictionRecord,
    pub content: String,
    pub title: String,
}

/// Storage backend for the single last-prediction slot.
///
/// Capacity is exactly one: `put` overwrites any prior value. Implementors
/// report failures through [`SnapshotError`]; deciding whether a failure is
/// fatal is the caller's business (the history store treats none of them as
/// fatal).
#[async_trait]
pub trait SnapshotStore: Send + Sync + std::fmt::Debug {
    /// Overwrite the slot with `snapshot`.
    async fn put(&self, snapshot: &LastPrediction) -> Result<()>;

    /// Read the slot. `Ok(None)` means nothing has ever been persisted.
    async fn get(&self) -> Result<Option<LastPrediction>>;

    /// Empty the slot (useful for testing).
    async fn clear(&self) -> Result<()>;
}

/// In-memory snapshot slot.
///
/// Stores the serialized blob behind an `Arc<RwLock<_>>`, so clones share
/// the same slot. Suitable for tests and short-lived sessions; nothing
/// survives a restart.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl InMemorySnapshotStore {
    /// Create a new, empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn put(&self, snapshot: &LastPrediction) -> Result<()> {
        let raw = serde_json::to_string(snapshot)?;
        *self.slot.write().await = Some(raw);
        Ok(())
    }

    async fn get(&self) -> Result<Option<LastPrediction>> {
        let slot = self.slot.read().await;
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    async fn clear(&self) -> Result<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}

/// File-backed snapshot slot: one JSON file, overwritten on every write.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default slot location: `~/.newscheck/last_prediction.json`.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .expect("Failed to get home directory")
            .join(".newscheck")
            .join("last_prediction.json")
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotStore for FileSnapshotStore {
    async fn put(&self, snapshot: &LastPrediction) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn get(&self) -> Result<Option<LastPrediction>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SnapshotError::Io(e)),
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    async fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SnapshotError::Io(e)),
        }
    }
}
