//! Copy use case: selection -> cleaner -> converter -> clipboard -> history

use thiserror::Error;
use tracing::{debug, error, warn};

use crate::domain::cleaner::{clean_html, clean_text};
use crate::domain::config::CopySettings;
use crate::domain::format::{OutputFormat, TAG};
use crate::domain::history::HistoryEntry;

use super::history::{HistoryError, HistoryStore};
use super::ports::{
    Clipboard, ClipboardError, KeyValueStore, NotificationIcon, Notifier, SelectionSource,
};

const APP_NAME: &str = "clip";

/// Format tag used when plain text is forced by settings
pub const AUTO_PLAIN_TEXT_TAG: &str = "plain text (auto)";

/// Errors from the copy use case
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("Clipboard write failed: {0}")]
    ClipboardWrite(#[from] ClipboardError),

    #[error("The {0} format is disabled in settings")]
    FormatDisabled(OutputFormat),

    #[error(transparent)]
    History(#[from] HistoryError),
}

/// One copy request
#[derive(Debug, Clone, Default)]
pub struct CopyInput {
    /// Raw selected text, possibly HTML
    pub text: String,
    pub format: OutputFormat,
    /// Run the text cleaner before converting
    pub clean_first: bool,
}

/// Result of a copy that reached the clipboard
#[derive(Debug, Clone)]
pub struct CopyReport {
    /// Text written to the clipboard
    pub output: String,
    /// Format tag recorded with the entry
    pub format_tag: String,
    /// The recorded entry, when history was saved
    pub entry: Option<HistoryEntry>,
    /// Set when the clipboard write succeeded but history could not be saved
    pub history_error: Option<HistoryError>,
}

impl CopyReport {
    pub fn history_saved(&self) -> bool {
        self.history_error.is_none()
    }
}

/// What a copy request ended up doing
#[derive(Debug, Clone)]
pub enum CopyOutcome {
    /// Nothing to copy; clipboard and history untouched
    Empty,
    Copied(CopyReport),
}

/// Copy orchestrator
pub struct CopyUseCase<C, S, N>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    clipboard: C,
    history: HistoryStore<S>,
    notifier: N,
}

impl<C, S, N> CopyUseCase<C, S, N>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    /// Create a new use case instance
    pub fn new(clipboard: C, history: HistoryStore<S>, notifier: N) -> Self {
        Self {
            clipboard,
            history,
            notifier,
        }
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    /// Convert `input`, write it to the clipboard and record it.
    ///
    /// A history failure does not undo the clipboard write; it is returned
    /// in [`CopyReport::history_error`].
    pub async fn execute(
        &self,
        input: CopyInput,
        settings: &CopySettings,
    ) -> Result<CopyOutcome, CopyError> {
        if input.text.is_empty() {
            debug!("empty selection, nothing to copy");
            return Ok(CopyOutcome::Empty);
        }

        let (format, format_tag) = if settings.always_plain_text {
            (OutputFormat::PlainText, AUTO_PLAIN_TEXT_TAG.to_string())
        } else {
            (input.format, input.format.tag().to_string())
        };

        if !settings.enabled_formats.is_enabled(format) {
            return Err(CopyError::FormatDisabled(format));
        }

        let text = if input.clean_first || settings.auto_clean_text {
            clean(&input.text)
        } else {
            input.text
        };

        let output = format.convert(&text);
        if output.is_empty() {
            debug!(format = %format_tag, "conversion produced no text, nothing to copy");
            return Ok(CopyOutcome::Empty);
        }

        if let Err(e) = self.clipboard.write_text(&output).await {
            error!("clipboard write failed: {}", e);
            self.notify(settings, "Copy failed", NotificationIcon::Error)
                .await;
            return Err(CopyError::ClipboardWrite(e));
        }
        debug!(format = %format_tag, chars = output.chars().count(), "copied to clipboard");

        self.history.set_cap(settings.history_cap);
        let entry = HistoryEntry::new(&output, format_tag.clone());

        let (entry, history_error) = match self.history.append(entry.clone()).await {
            Ok(_) => (Some(entry), None),
            Err(e) => {
                warn!("copy succeeded but history was not saved: {}", e);
                (None, Some(e))
            }
        };

        self.notify(
            settings,
            &format!("Copied as {}", format_tag),
            NotificationIcon::Success,
        )
        .await;

        Ok(CopyOutcome::Copied(CopyReport {
            output,
            format_tag,
            entry,
            history_error,
        }))
    }

    /// Capture the current selection and copy it. A failed capture counts
    /// as an empty selection.
    pub async fn copy_selection<Sel: SelectionSource + ?Sized>(
        &self,
        source: &Sel,
        format: OutputFormat,
        clean_first: bool,
        settings: &CopySettings,
    ) -> Result<CopyOutcome, CopyError> {
        let text = match source.capture().await {
            Ok(text) => text,
            Err(e) => {
                warn!("could not capture selection: {}", e);
                String::new()
            }
        };

        self.execute(
            CopyInput {
                text,
                format,
                clean_first,
            },
            settings,
        )
        .await
    }

    /// Put a history entry's full output back on the clipboard. History is
    /// not modified.
    pub async fn recopy(
        &self,
        entry: &HistoryEntry,
        settings: &CopySettings,
    ) -> Result<(), CopyError> {
        self.clipboard.write_text(entry.content()).await?;
        self.notify(settings, "Copied again", NotificationIcon::Success)
            .await;
        Ok(())
    }

    /// Empty the clipboard. History is not modified.
    pub async fn clear_clipboard(&self, settings: &CopySettings) -> Result<(), CopyError> {
        self.clipboard.write_text("").await?;
        debug!("clipboard cleared");
        self.notify(settings, "Clipboard cleared", NotificationIcon::Info)
            .await;
        Ok(())
    }

    /// Empty the clipboard and the history.
    pub async fn clear_all(&self, settings: &CopySettings) -> Result<(), CopyError> {
        self.clipboard.write_text("").await?;
        self.history.clear().await?;
        self.notify(
            settings,
            "Clipboard and history cleared",
            NotificationIcon::Info,
        )
        .await;
        Ok(())
    }

    async fn notify(&self, settings: &CopySettings, message: &str, icon: NotificationIcon) {
        if !settings.notify {
            return;
        }
        if let Err(e) = self.notifier.notify(APP_NAME, message, icon).await {
            debug!("notification not shown: {}", e);
        }
    }
}

/// Markup goes through the HTML sanitizer so tags and attribute URLs
/// survive; anything else through the text cleaner.
fn clean(text: &str) -> String {
    if TAG.is_match(text) {
        clean_html(text)
    } else {
        clean_text(text)
    }
}
