//! History entry value object

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Characters of the output kept in the display copy of an entry
pub const DISPLAY_TEXT_LIMIT: usize = 200;

/// One recorded copy.
///
/// Serialized in camelCase (`fullText`) to match the stored `copyHistory`
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Unique, assigned at creation
    pub id: String,
    /// Display copy, at most `DISPLAY_TEXT_LIMIT` characters
    pub text: String,
    /// The untruncated output
    #[serde(default)]
    pub full_text: String,
    /// Format tag of the converter that produced the output
    pub format: String,
    /// Creation time in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Source page carried through import and export; `clip` never sets it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl HistoryEntry {
    /// Create an entry stamped with the current time
    pub fn new(output: &str, format: impl Into<String>) -> Self {
        Self::with_timestamp(output, format, Utc::now().timestamp_millis())
    }

    /// Create an entry with an explicit timestamp
    pub fn with_timestamp(output: &str, format: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: truncate_chars(output, DISPLAY_TEXT_LIMIT),
            full_text: output.to_string(),
            format: format.into(),
            timestamp,
            url: None,
        }
    }

    /// The full output, falling back to the display copy for records
    /// written without `fullText`
    pub fn content(&self) -> &str {
        if self.full_text.is_empty() {
            &self.text
        } else {
            &self.full_text
        }
    }

    /// Whether the display copy is shorter than the output
    pub fn is_truncated(&self) -> bool {
        self.content().chars().count() > self.text.chars().count()
    }

    /// Human-readable age relative to `now_ms`: "just now", "5m ago",
    /// "3h ago", "2d ago", or a calendar date after a week
    pub fn age_label(&self, now_ms: i64) -> String {
        let seconds = (now_ms - self.timestamp).max(0) / 1000;
        let minutes = seconds / 60;
        let hours = minutes / 60;
        let days = hours / 24;

        if days > 7 {
            DateTime::<Utc>::from_timestamp_millis(self.timestamp)
                .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| format!("{}d ago", days))
        } else if days > 0 {
            format!("{}d ago", days)
        } else if hours > 0 {
            format!("{}h ago", hours)
        } else if minutes > 0 {
            format!("{}m ago", minutes)
        } else {
            "just now".to_string()
        }
    }
}

/// Keep the first `limit` characters of `text`
pub(crate) fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: i64 = 60 * 1000;

    #[test]
    fn new_entry_keeps_full_text() {
        let entry = HistoryEntry::new("hello", "markdown");
        assert_eq!(entry.text, "hello");
        assert_eq!(entry.full_text, "hello");
        assert_eq!(entry.format, "markdown");
        assert!(!entry.is_truncated());
        assert!(entry.url.is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = HistoryEntry::new("x", "JSON");
        let b = HistoryEntry::new("x", "JSON");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn display_text_is_truncated_by_characters() {
        let long = "é".repeat(DISPLAY_TEXT_LIMIT + 50);
        let entry = HistoryEntry::new(&long, "plain text");
        assert_eq!(entry.text.chars().count(), DISPLAY_TEXT_LIMIT);
        assert_eq!(entry.full_text, long);
        assert!(entry.is_truncated());
    }

    #[test]
    fn serializes_camel_case() {
        let entry = HistoryEntry::with_timestamp("out", "HTML", 42);
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["fullText"], "out");
        assert_eq!(value["timestamp"], 42);
        assert!(value.get("url").is_none());
    }

    #[test]
    fn imported_url_survives_a_round_trip() {
        let raw = r#"{"id":"x","text":"t","format":"html","timestamp":1,"url":"https://a.b/page"}"#;
        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.url.as_deref(), Some("https://a.b/page"));
        assert_eq!(serde_json::to_value(&entry).unwrap()["url"], "https://a.b/page");
    }

    #[test]
    fn deserializes_record_without_full_text() {
        let entry: HistoryEntry = serde_json::from_str(
            r#"{"id":"1","text":"short","format":"plain text","timestamp":1}"#,
        )
        .unwrap();
        assert_eq!(entry.content(), "short");
    }

    #[test]
    fn age_labels() {
        let entry = HistoryEntry::with_timestamp("x", "JSON", 0);
        assert_eq!(entry.age_label(30 * 1000), "just now");
        assert_eq!(entry.age_label(5 * MINUTE), "5m ago");
        assert_eq!(entry.age_label(3 * 60 * MINUTE), "3h ago");
        assert_eq!(entry.age_label(2 * 24 * 60 * MINUTE), "2d ago");
    }

    #[test]
    fn age_label_uses_date_after_a_week() {
        let entry = HistoryEntry::with_timestamp("x", "JSON", 0);
        let label = entry.age_label(30 * 24 * 60 * MINUTE);
        assert!(!label.ends_with("ago"), "got {}", label);
    }

    #[test]
    fn clock_skew_reads_as_just_now() {
        let entry = HistoryEntry::with_timestamp("x", "JSON", 10 * MINUTE);
        assert_eq!(entry.age_label(0), "just now");
    }
}
