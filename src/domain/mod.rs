//! Domain layer - Core business logic
//!
//! Contains the format converters, the text cleaner, the history value
//! objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod history;

// Re-export common types
pub use cleaner::{clean_html, clean_text};
pub use config::{AppConfig, CopySettings};
pub use error::*;
pub use export::{ExportBundle, ImportBundle};
pub use format::{Converter, OutputFormat};
pub use history::{HistoryEntry, HistoryLog, Plan};
