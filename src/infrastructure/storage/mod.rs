//! Key-value storage adapters

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use serde_json::{Map, Value};
use tokio::sync::broadcast;

use crate::application::ports::StorageChange;

/// Buffered change notifications per store
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Fan-out of storage changes to subscribers
#[derive(Debug)]
pub(crate) struct ChangeFeed {
    sender: broadcast::Sender<StorageChange>,
}

impl ChangeFeed {
    pub(crate) fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { sender }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<StorageChange> {
        self.sender.subscribe()
    }

    pub(crate) fn publish(&self, changes: Vec<StorageChange>) {
        for change in changes {
            // no subscribers is fine
            let _ = self.sender.send(change);
        }
    }
}

/// Write `items` into `data`, returning a change for every key whose value
/// actually changed
pub(crate) fn apply_set(data: &mut Map<String, Value>, items: Map<String, Value>) -> Vec<StorageChange> {
    let mut changes = Vec::new();
    for (key, new_value) in items {
        let old_value = data.insert(key.clone(), new_value.clone());
        if old_value.as_ref() != Some(&new_value) {
            changes.push(StorageChange {
                key,
                old_value,
                new_value: Some(new_value),
            });
        }
    }
    changes
}

/// Remove every key from `data`, returning a change per removed key
pub(crate) fn apply_clear(data: &mut Map<String, Value>) -> Vec<StorageChange> {
    std::mem::take(data)
        .into_iter()
        .map(|(key, old_value)| StorageChange {
            key,
            old_value: Some(old_value),
            new_value: None,
        })
        .collect()
}

/// Copy out the requested keys
pub(crate) fn select(data: &Map<String, Value>, keys: &[&str]) -> Map<String, Value> {
    keys.iter()
        .filter_map(|key| data.get(*key).map(|value| (key.to_string(), value.clone())))
        .collect()
}
