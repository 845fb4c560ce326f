//! The bounded, most-recent-first prediction history.

use crate::snapshot::{LastPrediction, SnapshotStore};
use newscheck_client::{ApiClient, Result as ApiResult};
use newscheck_core::PredictionRecord;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of entries kept in memory. Inserting beyond the cap
/// evicts the oldest entries.
pub const HISTORY_CAP: usize = 20;

/// One history row: a prediction paired with the raw submitted inputs.
///
/// The service's predict response may omit the echoed `content`/`title`, so
/// the caller's originals are carried alongside the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub record: PredictionRecord,
    pub content: String,
    pub title: String,
}

impl From<PredictionRecord> for HistoryEntry {
    /// Lift a record fetched from the history endpoint, which echoes the
    /// submitted inputs back inside the record itself.
    fn from(record: PredictionRecord) -> Self {
        let content = record.content.clone().unwrap_or_default();
        let title = record.title.clone().unwrap_or_default();
        Self {
            record,
            content,
            title,
        }
    }
}

impl From<LastPrediction> for HistoryEntry {
    fn from(snapshot: LastPrediction) -> Self {
        Self {
            record: snapshot.record,
            content: snapshot.content,
            title: snapshot.title,
        }
    }
}

/// Ordered, capped collection of prediction records.
///
/// Entries are kept most-recent-first; the length never exceeds
/// [`HISTORY_CAP`]. The store also owns a [`SnapshotStore`] handle through
/// which the most recent result is persisted across restarts. Constructed
/// once at application start and passed to whatever renders it; it is not a
/// global.
#[derive(Debug)]
pub struct HistoryStore {
    entries: VecDeque<HistoryEntry>,
    snapshots: Arc<dyn SnapshotStore>,
}

impl HistoryStore {
    /// Create an empty history backed by the given snapshot slot.
    pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
        Self {
            entries: VecDeque::new(),
            snapshots,
        }
    }

    /// Insert a freshly produced record at the head of the history.
    ///
    /// Evicts the oldest entries once the cap is exceeded, then persists
    /// the entry as the last-prediction snapshot. This operation cannot
    /// fail: a snapshot write failure is logged and ignored.
    pub async fn record_prediction(
        &mut self,
        record: PredictionRecord,
        raw_content: &str,
        raw_title: &str,
    ) {
        let entry = HistoryEntry {
            record,
            content: raw_content.to_string(),
            title: raw_title.to_string(),
        };

        self.entries.push_front(entry.clone());
        self.entries.truncate(HISTORY_CAP);
        debug!(len = self.entries.len(), "Recorded prediction");

        self.persist_last(entry).await;
    }

    /// Replace the whole in-memory sequence with the service's view.
    ///
    /// Fetches up to `limit` records, newest first as returned. An empty
    /// result is valid ("no history yet"); a fetch failure is propagated so
    /// the caller can render an error state instead of a stale spinner.
    pub async fn load_recent(&mut self, client: &ApiClient, limit: usize) -> ApiResult<usize> {
        let items = client.history(limit).await?;
        self.entries = items.into_iter().map(HistoryEntry::from).collect();
        debug!(len = self.entries.len(), "Loaded history from service");
        Ok(self.entries.len())
    }

    /// Read back the persisted last result, if any.
    ///
    /// Absent or malformed persisted data yields `None`, never an error, so
    /// startup can always proceed.
    pub async fn restore_last(&self) -> Option<HistoryEntry> {
        match self.snapshots.get().await {
            Ok(Some(snapshot)) => Some(snapshot.into()),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Could not restore last prediction");
                None
            }
        }
    }

    /// Entries in display order, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the last-prediction slot, swallowing any backend failure.
    async fn persist_last(&self, entry: HistoryEntry) {
        let snapshot = LastPrediction {
            record: entry.record,
            content: entry.content,
            title: entry.title,
        };

        if let Err(e) = self.snapshots.put(&snapshot).await {
            warn!(error = %e, "Could not persist last prediction");
        }
    }
}
