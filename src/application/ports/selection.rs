//! Selection capture port interface

use async_trait::async_trait;
use thiserror::Error;

/// Selection capture errors
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    #[error("No active selection source: {0}")]
    Unavailable(String),

    #[error("Selection capture denied: {0}")]
    Denied(String),

    #[error("Failed to read selection: {0}")]
    ReadFailed(String),
}

/// Port for reading the text the user currently has highlighted
#[async_trait]
pub trait SelectionSource: Send + Sync {
    /// Capture the current selection. An empty string means nothing is
    /// selected.
    async fn capture(&self) -> Result<String, SelectionError>;
}

/// Blanket implementation for boxed selection sources
#[async_trait]
impl SelectionSource for Box<dyn SelectionSource> {
    async fn capture(&self) -> Result<String, SelectionError> {
        self.as_ref().capture().await
    }
}
