//! Highlighted-text capture through arboard
//!
//! On Linux and the BSDs this reads the PRIMARY selection, which holds
//! whatever the user last highlighted. Other platforms have no separate
//! selection buffer, so the regular clipboard is read instead.

use async_trait::async_trait;

use crate::application::ports::{SelectionError, SelectionSource};

/// Reads the text the user currently has highlighted
#[derive(Debug, Default)]
pub struct PrimarySelection;

impl PrimarySelection {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SelectionSource for PrimarySelection {
    async fn capture(&self) -> Result<String, SelectionError> {
        tokio::task::spawn_blocking(|| {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| SelectionError::Unavailable(e.to_string()))?;

            match read_selection(&mut clipboard) {
                Ok(text) => Ok(text),
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(arboard::Error::ClipboardNotSupported) => Err(SelectionError::Unavailable(
                    "selection is not supported on this platform".to_string(),
                )),
                Err(arboard::Error::ClipboardOccupied) => Err(SelectionError::Denied(
                    "selection is held by another process".to_string(),
                )),
                Err(e) => Err(SelectionError::ReadFailed(e.to_string())),
            }
        })
        .await
        .map_err(|e| SelectionError::ReadFailed(format!("Task join error: {}", e)))?
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
))]
fn read_selection(clipboard: &mut arboard::Clipboard) -> Result<String, arboard::Error> {
    use arboard::{GetExtLinux, LinuxClipboardKind};

    clipboard
        .get()
        .clipboard(LinuxClipboardKind::Primary)
        .text()
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "freebsd",
    target_os = "dragonfly",
    target_os = "netbsd",
    target_os = "openbsd"
)))]
fn read_selection(clipboard: &mut arboard::Clipboard) -> Result<String, arboard::Error> {
    clipboard.get_text()
}
