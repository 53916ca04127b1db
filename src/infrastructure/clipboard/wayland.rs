//! Wayland clipboard adapter using wl-copy

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::application::ports::{Clipboard, ClipboardError};

/// Wayland clipboard adapter using wl-copy
#[derive(Debug)]
pub struct WaylandClipboard {
    program: String,
}

impl WaylandClipboard {
    pub fn new() -> Self {
        Self::with_program("wl-copy")
    }

    /// Use a different `wl-copy` compatible binary
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn spawn_error(&self, e: std::io::Error) -> ClipboardError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ClipboardError::ToolNotFound(self.program.clone())
        } else {
            ClipboardError::WriteFailed(e.to_string())
        }
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clipboard for WaylandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            let status = Command::new(&self.program)
                .arg("--clear")
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status()
                .await
                .map_err(|e| self.spawn_error(e))?;

            if !status.success() {
                return Err(ClipboardError::WriteFailed(format!(
                    "{} --clear exited with status: {}",
                    self.program, status
                )));
            }
            return Ok(());
        }

        let mut child = Command::new(&self.program)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;
        }

        let status = child
            .wait()
            .await
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?;

        if !status.success() {
            return Err(ClipboardError::WriteFailed(format!(
                "{} exited with status: {}",
                self.program, status
            )));
        }

        Ok(())
    }
}
