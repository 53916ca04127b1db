//! Selection piped in on standard input

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::sync::Mutex;

use crate::application::ports::{SelectionError, SelectionSource};

/// Reads the whole of a reader (stdin by default) as the selection.
/// The reader is consumed by the first capture; later captures are empty.
pub struct StdinSelection<R = tokio::io::Stdin> {
    reader: Mutex<Option<R>>,
}

impl StdinSelection {
    pub fn new() -> Self {
        Self::from_reader(tokio::io::stdin())
    }
}

impl Default for StdinSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> StdinSelection<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Mutex::new(Some(reader)),
        }
    }
}

#[async_trait]
impl<R> SelectionSource for StdinSelection<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn capture(&self) -> Result<String, SelectionError> {
        let Some(mut reader) = self.reader.lock().await.take() else {
            return Ok(String::new());
        };

        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .await
            .map_err(|e| SelectionError::ReadFailed(e.to_string()))?;

        Ok(text)
    }
}
