//! CLI presenter for output formatting

use colored::*;

use crate::domain::history::HistoryEntry;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout (the copied text or command results)
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print one history entry: position, format, age, then the text
    pub fn history_entry(&self, position: usize, entry: &HistoryEntry, now_ms: i64, full: bool) {
        println!(
            "{} {} {}",
            format!("{:>2}.", position).bold(),
            format!("[{}]", entry.format).cyan(),
            entry.age_label(now_ms).dimmed()
        );
        println!("    {}", entry_body(entry, full));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Body text of a listed entry; the preview gets an ellipsis when it was cut
fn entry_body(entry: &HistoryEntry, full: bool) -> String {
    let text = if full { entry.content() } else { entry.text.as_str() };
    let mut body = text.replace('\n', "\n    ");
    if !full && entry.is_truncated() {
        body.push('…');
    }
    body
}
