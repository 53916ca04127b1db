//! Application layer - Use cases and port interfaces
//!
//! Contains the copy orchestration, the history store and the trait
//! definitions for external system interactions.

pub mod copy;
pub mod history;
pub mod ports;

// Re-export use cases
pub use copy::{CopyError, CopyInput, CopyOutcome, CopyReport, CopyUseCase, AUTO_PLAIN_TEXT_TAG};
pub use history::{HistoryError, HistoryStore, HISTORY_KEY};
