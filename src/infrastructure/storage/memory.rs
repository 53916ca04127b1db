//! In-memory key-value store

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::{broadcast, Mutex};

use crate::application::ports::{KeyValueStore, StorageChange, StorageError};

use super::{apply_clear, apply_set, select, ChangeFeed};

/// Volatile store, nothing survives the process
#[derive(Debug)]
pub struct MemoryStore {
    data: Mutex<Map<String, Value>>,
    changes: ChangeFeed,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_data(Map::new())
    }

    pub fn with_data(data: Map<String, Value>) -> Self {
        Self {
            data: Mutex::new(data),
            changes: ChangeFeed::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError> {
        Ok(select(&*self.data.lock().await, keys))
    }

    async fn set(&self, items: Map<String, Value>) -> Result<(), StorageError> {
        let changes = apply_set(&mut *self.data.lock().await, items);
        self.changes.publish(changes);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let changes = apply_clear(&mut *self.data.lock().await);
        self.changes.publish(changes);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn set_then_get() {
        let store = MemoryStore::new();
        let mut items = Map::new();
        items.insert("k".to_string(), json!([1, 2]));
        store.set(items).await.unwrap();

        let got = store.get(&["k", "missing"]).await.unwrap();
        assert_eq!(got["k"], json!([1, 2]));
        assert!(!got.contains_key("missing"));
    }

    #[tokio::test]
    async fn clear_notifies_subscribers() {
        let mut data = Map::new();
        data.insert("k".to_string(), json!(true));
        let store = MemoryStore::with_data(data);
        let mut changes = store.subscribe();

        store.clear().await.unwrap();

        let change = changes.recv().await.unwrap();
        assert_eq!(change.key, "k");
        assert_eq!(change.old_value, Some(json!(true)));
        assert!(store.get(&["k"]).await.unwrap().is_empty());
    }
}
