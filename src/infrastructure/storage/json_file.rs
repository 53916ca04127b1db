//! Key-value store backed by a single JSON object file

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::{broadcast, Mutex};
use tracing::debug;

use crate::application::ports::{KeyValueStore, StorageChange, StorageError};

use super::{apply_clear, apply_set, select, ChangeFeed};

/// JSON file store in the user's data directory.
///
/// Writes go to a sibling temp file which is then renamed over the
/// original, so readers never see a half-written file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
    changes: ChangeFeed,
}

impl JsonFileStore {
    /// Store at `$XDG_DATA_HOME/clip/storage.json`
    pub fn new() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::with_path(data_dir.join("clip").join("storage.json")))
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            changes: ChangeFeed::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Map<String, Value>, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(StorageError::ReadFailed(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::Corrupt(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(StorageError::Corrupt(e.to_string())),
        }
    }

    async fn write_all(&self, data: &Map<String, Value>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::WriteFailed(e.to_string()))?;

        debug!(path = %self.path.display(), keys = data.len(), "storage written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, keys: &[&str]) -> Result<Map<String, Value>, StorageError> {
        let data = self.read_all().await?;
        Ok(select(&data, keys))
    }

    async fn set(&self, items: Map<String, Value>) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        let mut data = self.read_all().await?;
        let changes = apply_set(&mut data, items);
        self.write_all(&data).await?;

        self.changes.publish(changes);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;

        // a corrupt file is cleared as well
        let mut data = self.read_all().await.unwrap_or_default();
        let changes = apply_clear(&mut data);
        self.write_all(&data).await?;

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
    use tempfile::TempDir;

    fn items(key: &str, value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(key.to_string(), value);
        map
    }

    #[test]
    fn default_path_is_in_data_dir() {
        match JsonFileStore::new() {
            Ok(store) => {
                assert!(store.path().ends_with("clip/storage.json"));
                assert!(!store.path().starts_with("~"));
            }
            Err(e) => assert!(matches!(e, StorageError::NoDataDir)),
        }
    }

    #[tokio::test]
    async fn missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_path(dir.path().join("none.json"));
        assert!(store.get(&["copyHistory"]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        JsonFileStore::with_path(&path)
            .set(items("copyHistory", json!([{"id": "1"}])))
            .await
            .unwrap();

        let reopened = JsonFileStore::with_path(&path);
        let got = reopened.get(&["copyHistory"]).await.unwrap();
        assert_eq!(got["copyHistory"][0]["id"], "1");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn set_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_path(dir.path().join("s.json"));

        store.set(items("snippets", json!([]))).await.unwrap();
        store.set(items("copyHistory", json!([]))).await.unwrap();

        let got = store.get(&["snippets", "copyHistory"]).await.unwrap();
        assert_eq!(got.len(), 2);
    }

    #[tokio::test]
    async fn non_object_file_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = JsonFileStore::with_path(&path).get(&["x"]).await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[tokio::test]
    async fn clear_recovers_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::with_path(&path);
        store.clear().await.unwrap();
        assert!(store.get(&["x"]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_publishes_changes() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::with_path(dir.path().join("s.json"));
        let mut changes = store.subscribe();

        store.set(items("alwaysPlainText", json!(true))).await.unwrap();

        let change = changes.recv().await.unwrap();
        assert_eq!(change.key, "alwaysPlainText");
        assert_eq!(change.new_value, Some(json!(true)));
    }
}
