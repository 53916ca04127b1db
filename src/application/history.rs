//! Copy history store
//!
//! Keeps the bounded log under a single key of the key-value store. Every
//! operation is a full read-modify-write of that key. Calls on one
//! `HistoryStore` are serialized by an internal lock; separate processes
//! sharing the same storage file are not coordinated, so an append racing
//! another process's append may be lost (last writer wins).

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

use crate::domain::history::{HistoryEntry, HistoryLog, Plan, DEFAULT_HISTORY_CAP};

use super::ports::{KeyValueStore, StorageChange, StorageError};

/// Storage key holding the serialized log
pub const HISTORY_KEY: &str = "copyHistory";

/// Errors from the history store
#[derive(Debug, Clone, Error)]
pub enum HistoryError {
    #[error("Failed to read history: {0}")]
    Read(#[source] StorageError),

    #[error("Failed to persist history: {0}")]
    Persist(#[source] StorageError),
}

/// Bounded, persisted copy log
pub struct HistoryStore<S: KeyValueStore> {
    store: S,
    plan: Plan,
    cap: AtomicUsize,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Create a store with the default cap on the free plan
    pub fn new(store: S) -> Self {
        Self::with_plan(store, Plan::Free)
    }

    /// Create a store whose cap may grow up to `plan`'s ceiling
    pub fn with_plan(store: S, plan: Plan) -> Self {
        Self {
            store,
            plan,
            cap: AtomicUsize::new(plan.clamp_cap(DEFAULT_HISTORY_CAP)),
            write_lock: Mutex::new(()),
        }
    }

    /// Current eviction threshold
    pub fn cap(&self) -> usize {
        self.cap.load(Ordering::SeqCst)
    }

    /// Change the eviction threshold for later appends. Stored entries are
    /// left alone until the next append. Returns the cap actually applied.
    pub fn set_cap(&self, requested: usize) -> usize {
        let cap = self.plan.clamp_cap(requested);
        self.cap.store(cap, Ordering::SeqCst);
        cap
    }

    pub fn plan(&self) -> Plan {
        self.plan
    }

    /// The underlying key-value store, for keys other than the history
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Subscribe to raw storage changes (filter on [`HISTORY_KEY`])
    pub fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.store.subscribe()
    }

    /// Read the log. A missing key, `null` or an undecodable value reads
    /// as an empty log.
    pub async fn load(&self) -> Result<HistoryLog, HistoryError> {
        let mut items = self
            .store
            .get(&[HISTORY_KEY])
            .await
            .map_err(HistoryError::Read)?;

        Ok(decode_log(items.remove(HISTORY_KEY)))
    }

    /// Insert `entry` at the head, evict beyond the cap and persist.
    pub async fn append(&self, entry: HistoryEntry) -> Result<HistoryLog, HistoryError> {
        let _guard = self.write_lock.lock().await;

        let log = self.load().await?.push(entry, self.cap());
        self.persist(&log).await?;

        debug!(entries = log.len(), cap = self.cap(), "history appended");
        Ok(log)
    }

    /// Persist an empty log.
    pub async fn clear(&self) -> Result<(), HistoryError> {
        let _guard = self.write_lock.lock().await;

        self.persist(&HistoryLog::new()).await?;
        debug!("history cleared");
        Ok(())
    }

    /// Replace the whole log with `entries`, sorted newest first, applying
    /// the cap.
    pub async fn replace(&self, entries: Vec<HistoryEntry>) -> Result<HistoryLog, HistoryError> {
        let _guard = self.write_lock.lock().await;

        let log = HistoryLog::from_entries(entries).truncate(self.cap());
        self.persist(&log).await?;
        Ok(log)
    }

    async fn persist(&self, log: &HistoryLog) -> Result<(), HistoryError> {
        let value = serde_json::to_value(log)
            .map_err(|e| HistoryError::Persist(StorageError::WriteFailed(e.to_string())))?;

        let mut items = Map::new();
        items.insert(HISTORY_KEY.to_string(), value);

        self.store.set(items).await.map_err(HistoryError::Persist)
    }
}

fn decode_log(value: Option<Value>) -> HistoryLog {
    match value {
        None | Some(Value::Null) => HistoryLog::new(),
        Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("stored history is unreadable, starting empty: {}", e);
            HistoryLog::new()
        }),
    }
}
