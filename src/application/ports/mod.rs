//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod notifier;
pub mod selection;
pub mod storage;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use config::ConfigStore;
pub use notifier::{NotificationError, NotificationIcon, Notifier, SilentNotifier};
pub use selection::{SelectionError, SelectionSource};
pub use storage::{KeyValueStore, StorageChange, StorageError};
