//! Clipboard infrastructure module
//!
//! On X11 and Wayland a clipboard is served by the process that set it.
//! arboard's contents vanish when `clip` exits unless a clipboard manager
//! takes them over, while `wl-copy` forks a server that outlives us.
//! `auto` picks `wl-copy` inside a Wayland session and arboard elsewhere.

mod arboard;
mod wayland;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

pub use arboard::ArboardClipboard;
pub use wayland::WaylandClipboard;

use crate::application::ports::Clipboard;

/// Valid `clipboard_tool` values
pub const VALID_CLIPBOARD_TOOLS: &[&str] = &["auto", "arboard", "wl-copy"];

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardTool {
    /// `wl-copy` in a Wayland session, arboard otherwise
    #[default]
    Auto,
    /// Cross-platform arboard library
    Arboard,
    /// wl-clipboard's `wl-copy` (Wayland)
    WlCopy,
}

impl ClipboardTool {
    /// The concrete backend for a session with or without Wayland
    pub fn resolve(self, wayland_session: bool) -> Self {
        match self {
            Self::Auto if wayland_session => Self::WlCopy,
            Self::Auto => Self::Arboard,
            tool => tool,
        }
    }
}

/// Error type for parsing a clipboard tool name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid clipboard tool '{value}'. Valid options: auto, arboard, wl-copy")]
pub struct ParseClipboardToolError {
    pub value: String,
}

impl FromStr for ClipboardTool {
    type Err = ParseClipboardToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "arboard" => Ok(Self::Arboard),
            "wl-copy" | "wayland" => Ok(Self::WlCopy),
            _ => Err(ParseClipboardToolError {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Arboard => write!(f, "arboard"),
            Self::WlCopy => write!(f, "wl-copy"),
        }
    }
}

/// Create the clipboard adapter for `tool`, resolving `auto` against
/// `WAYLAND_DISPLAY`
pub fn create_clipboard(tool: ClipboardTool) -> Box<dyn Clipboard> {
    let wayland_session = std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty());
    let resolved = tool.resolve(wayland_session);
    debug!(requested = %tool, %resolved, "clipboard backend");

    match resolved {
        ClipboardTool::WlCopy => Box::new(WaylandClipboard::new()),
        ClipboardTool::Arboard | ClipboardTool::Auto => Box::new(ArboardClipboard::new()),
    }
}
