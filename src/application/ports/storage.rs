//! Key-value persistence port interface

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::broadcast;

/// Storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("Failed to read storage: {0}")]
    ReadFailed(String),

    #[error("Failed to write storage: {0}")]
    WriteFailed(String),

    #[error("Storage is corrupt: {0}")]
    Corrupt(String),

    #[error("No data directory found; pass --storage or set CLIP_STORAGE")]
    NoDataDir,
}

/// A single key change, delivered to subscribers after a write
#[derive(Debug, Clone, PartialEq)]
pub struct StorageChange {
    pub key: String,
    pub old_value: Option<Value>,
    pub new_value: Option<Value>,
}

/// Port for an async key-value store holding JSON values
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the given keys. Missing keys are absent from the result.
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError>;

    /// Write every entry of `items`, leaving other keys untouched.
    async fn set(&self, items: Map<String, Value>) -> Result<(), StorageError>;

    /// Remove every key.
    async fn clear(&self) -> Result<(), StorageError>;

    /// Receive a `StorageChange` for every key changed by `set` or `clear`.
    fn subscribe(&self) -> broadcast::Receiver<StorageChange>;
}

/// Blanket implementation for boxed stores
#[async_trait]
impl KeyValueStore for Box<dyn KeyValueStore> {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError> {
        self.as_ref().get(keys).await
    }

    async fn set(&self, items: Map<String, Value>) -> Result<(), StorageError> {
        self.as_ref().set(items).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.as_ref().clear().await
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.as_ref().subscribe()
    }
}
