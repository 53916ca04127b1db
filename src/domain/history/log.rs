//! Bounded, most-recent-first copy log

use serde::{Deserialize, Serialize};

use super::HistoryEntry;

/// Ordered log of copies, newest at index 0.
///
/// Every operation consumes the log and returns the next value, so a
/// caller always reads, computes and writes a whole log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// An empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from entries in any order. They are sorted newest
    /// first; entries with equal timestamps keep their given order.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { entries }
    }

    /// Insert at the head and evict from the tail beyond `cap`.
    ///
    /// The entry's timestamp is raised to the current head's if it is
    /// older, keeping timestamps non-decreasing towards the head.
    pub fn push(mut self, mut entry: HistoryEntry, cap: usize) -> Self {
        if let Some(head) = self.entries.first() {
            if entry.timestamp < head.timestamp {
                entry.timestamp = head.timestamp;
            }
        }
        self.entries.insert(0, entry);
        self.truncate(cap)
    }

    /// Drop entries beyond `cap`, oldest first
    pub fn truncate(mut self, cap: usize) -> Self {
        self.entries.truncate(cap);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recently appended entry
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Entry at `index`, 0 being the newest
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a HistoryLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
