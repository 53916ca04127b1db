//! arboard clipboard writer for X11, Wayland, macOS and Windows

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Writes the regular clipboard through arboard
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();

        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(write_error)?;
            // an empty write empties the clipboard
            let result = if text.is_empty() {
                clipboard.clear()
            } else {
                clipboard.set_text(text)
            };
            result.map_err(write_error)
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(format!("clipboard task failed: {}", e)))?
    }
}

fn write_error(error: arboard::Error) -> ClipboardError {
    match error {
        arboard::Error::ClipboardNotSupported => {
            ClipboardError::ClipboardUnavailable("no clipboard on this platform".to_string())
        }
        arboard::Error::ClipboardOccupied => {
            ClipboardError::ClipboardUnavailable("clipboard is held by another process".to_string())
        }
        other => ClipboardError::WriteFailed(other.to_string()),
    }
}
