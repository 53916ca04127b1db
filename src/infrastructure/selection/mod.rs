//! Selection capture adapters

mod primary;
mod stdin;

use async_trait::async_trait;

pub use primary::PrimarySelection;
pub use stdin::StdinSelection;

use crate::application::ports::{SelectionError, SelectionSource};

/// A selection handed over directly, e.g. as a command-line argument
#[derive(Debug, Clone, Default)]
pub struct StaticSelection {
    text: String,
}

impl StaticSelection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl SelectionSource for StaticSelection {
    async fn capture(&self) -> Result<String, SelectionError> {
        Ok(self.text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_selection_returns_text() {
        let source = StaticSelection::new("<b>hi</b>");
        assert_eq!(source.capture().await.unwrap(), "<b>hi</b>");
    }
}
