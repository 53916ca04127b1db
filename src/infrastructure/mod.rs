//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the system clipboard, the primary selection,
//! desktop notifications and the filesystem.

pub mod clipboard;
pub mod config;
pub mod notification;
pub mod selection;
pub mod storage;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard, ClipboardTool, WaylandClipboard};
pub use config::XdgConfigStore;
pub use notification::{create_notifier, NotifyRustNotifier};
pub use selection::{PrimarySelection, StaticSelection, StdinSelection};
pub use storage::{JsonFileStore, MemoryStore};
