//! History command handler

use std::path::Path;

use chrono::Utc;
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::fs;

use crate::application::ports::{Clipboard, KeyValueStore, Notifier, StorageError};
use crate::application::{CopyError, CopyUseCase, HistoryError};
use crate::domain::config::AppConfig;
use crate::domain::error::ImportError;
use crate::domain::export::{ExportBundle, ImportBundle};

use super::args::HistoryAction;
use super::presenter::Presenter;

/// Storage key holding saved snippets, carried through export and import
pub const SNIPPETS_KEY: &str = "snippets";

/// Errors from history subcommands
#[derive(Debug, Error)]
pub enum HistoryCommandError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("No history entry {index} (history has {len})")]
    NoSuchEntry { index: usize, len: usize },

    #[error("Invalid import file: {0}")]
    Import(#[from] ImportError),

    #[error("Failed to read {path}: {message}")]
    ReadFile { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFile { path: String, message: String },

    #[error("Failed to encode export: {0}")]
    Encode(String),
}

/// Handle history subcommand
pub async fn handle_history_command<C, S, N>(
    action: HistoryAction,
    use_case: &CopyUseCase<C, S, N>,
    config: &AppConfig,
    presenter: &Presenter,
) -> Result<(), HistoryCommandError>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    match action {
        HistoryAction::List { full } => handle_list(use_case, presenter, full).await,
        HistoryAction::Clear => {
            use_case.history().clear().await?;
            presenter.success("History cleared");
            Ok(())
        }
        HistoryAction::Copy { index } => handle_copy(use_case, config, presenter, index).await,
        HistoryAction::Export { output } => {
            handle_export(use_case, config, presenter, output.as_deref()).await
        }
        HistoryAction::Import { file } => handle_import(use_case, presenter, &file).await,
    }
}

async fn handle_list<C, S, N>(
    use_case: &CopyUseCase<C, S, N>,
    presenter: &Presenter,
    full: bool,
) -> Result<(), HistoryCommandError>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    let log = use_case.history().load().await?;
    if log.is_empty() {
        presenter.info("History is empty");
        return Ok(());
    }

    let now = Utc::now().timestamp_millis();
    for (i, entry) in log.iter().enumerate() {
        presenter.history_entry(i + 1, entry, now, full);
    }
    Ok(())
}

async fn handle_copy<C, S, N>(
    use_case: &CopyUseCase<C, S, N>,
    config: &AppConfig,
    presenter: &Presenter,
    index: usize,
) -> Result<(), HistoryCommandError>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    let log = use_case.history().load().await?;
    let entry = index
        .checked_sub(1)
        .and_then(|i| log.get(i))
        .ok_or(HistoryCommandError::NoSuchEntry {
            index,
            len: log.len(),
        })?;

    use_case.recopy(entry, &config.copy_settings()).await?;
    presenter.success(&format!("Copied entry {} again ({})", index, entry.format));
    Ok(())
}

async fn handle_export<C, S, N>(
    use_case: &CopyUseCase<C, S, N>,
    config: &AppConfig,
    presenter: &Presenter,
    output: Option<&Path>,
) -> Result<(), HistoryCommandError>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    let log = use_case.history().load().await?;
    let snippets = load_snippets(use_case.history().store()).await?;

    let bundle = ExportBundle::new(&log, snippets, config.clone(), Utc::now());
    let json = bundle
        .to_json_pretty()
        .map_err(|e| HistoryCommandError::Encode(e.to_string()))?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .await
                .map_err(|e| HistoryCommandError::WriteFile {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;
            presenter.success(&format!(
                "Exported {} entries to {}",
                log.len(),
                path.display()
            ));
        }
        None => presenter.output(&json),
    }
    Ok(())
}

async fn handle_import<C, S, N>(
    use_case: &CopyUseCase<C, S, N>,
    presenter: &Presenter,
    file: &Path,
) -> Result<(), HistoryCommandError>
where
    C: Clipboard,
    S: KeyValueStore,
    N: Notifier,
{
    let content = fs::read_to_string(file)
        .await
        .map_err(|e| HistoryCommandError::ReadFile {
            path: file.display().to_string(),
            message: e.to_string(),
        })?;
    let bundle = ImportBundle::parse(&content)?;

    if let Some(entries) = bundle.history {
        let log = use_case.history().replace(entries).await?;
        presenter.success(&format!("Imported {} history entries", log.len()));
    }

    if let Some(snippets) = bundle.snippets {
        let count = snippets.len();
        let mut items = Map::new();
        items.insert(SNIPPETS_KEY.to_string(), Value::Array(snippets));
        use_case.history().store().set(items).await?;
        presenter.success(&format!("Imported {} snippets", count));
    }

    Ok(())
}

/// Saved snippets; anything other than an array reads as none
async fn load_snippets<S: KeyValueStore>(store: &S) -> Result<Vec<Value>, StorageError> {
    let mut items = store.get(&[SNIPPETS_KEY]).await?;
    Ok(match items.remove(SNIPPETS_KEY) {
        Some(Value::Array(snippets)) => snippets,
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{ClipboardError, SilentNotifier};
    use crate::application::HistoryStore;
    use crate::domain::history::HistoryEntry;
    use crate::infrastructure::MemoryStore;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Default)]
    struct MockClipboard {
        written: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl Clipboard for MockClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    fn use_case() -> CopyUseCase<MockClipboard, MemoryStore, SilentNotifier> {
        use_case_with(MockClipboard::default())
    }

    fn use_case_with(clipboard: MockClipboard) -> CopyUseCase<MockClipboard, MemoryStore, SilentNotifier> {
        CopyUseCase::new(clipboard, HistoryStore::new(MemoryStore::new()), SilentNotifier)
    }

    fn quiet_config() -> AppConfig {
        AppConfig {
            notify: Some(false),
            ..AppConfig::defaults()
        }
    }

    #[tokio::test]
    async fn copy_writes_full_text_of_entry() {
        let clipboard = MockClipboard::default();
        let written = Arc::clone(&clipboard.written);
        let use_case = use_case_with(clipboard);
        let long = "y".repeat(300);
        use_case
            .history()
            .append(HistoryEntry::new(&long, "plain text"))
            .await
            .unwrap();
        use_case
            .history()
            .append(HistoryEntry::new("newest", "plain text"))
            .await
            .unwrap();

        handle_copy(&use_case, &quiet_config(), &Presenter::new(), 2)
            .await
            .unwrap();

        assert_eq!(*written.lock().unwrap(), vec![long]);
        assert_eq!(use_case.history().load().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn copy_rejects_out_of_range_index() {
        let use_case = use_case();
        let err = handle_copy(&use_case, &quiet_config(), &Presenter::new(), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryCommandError::NoSuchEntry { index: 0, len: 0 }));

        let err = handle_copy(&use_case, &quiet_config(), &Presenter::new(), 3)
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryCommandError::NoSuchEntry { index: 3, .. }));
    }

    #[tokio::test]
    async fn export_then_import_restores_history_and_snippets() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("export.json");

        let source = use_case();
        source
            .history()
            .append(HistoryEntry::new("kept", "markdown"))
            .await
            .unwrap();
        let mut items = Map::new();
        items.insert(SNIPPETS_KEY.to_string(), json!([{"name": "sig"}]));
        source.history().store().set(items).await.unwrap();

        handle_export(&source, &quiet_config(), &Presenter::new(), Some(&file))
            .await
            .unwrap();

        let exported: Value = serde_json::from_str(&std::fs::read_to_string(&file).unwrap()).unwrap();
        assert_eq!(exported["history"][0]["text"], "kept");
        assert_eq!(exported["snippets"][0]["name"], "sig");
        assert_eq!(exported["settings"]["notify"], false);

        let target = use_case();
        handle_import(&target, &Presenter::new(), &file).await.unwrap();

        let log = target.history().load().await.unwrap();
        assert_eq!(log.latest().unwrap().text, "kept");
        let snippets = load_snippets(target.history().store()).await.unwrap();
        assert_eq!(snippets.len(), 1);
    }

    #[tokio::test]
    async fn import_rejects_file_without_data() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("empty.json");
        std::fs::write(&file, r#"{"version": "1.0.0"}"#).unwrap();

        let err = handle_import(&use_case(), &Presenter::new(), &file)
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryCommandError::Import(ImportError::MissingData)));
    }

    #[tokio::test]
    async fn import_orders_entries_newest_first() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("shuffled.json");
        std::fs::write(
            &file,
            json!({
                "history": [
                    {"id": "1", "text": "old", "format": "plain text", "timestamp": 1_000},
                    {"id": "3", "text": "new", "format": "plain text", "timestamp": 3_000},
                    {"id": "2", "text": "mid", "format": "markdown", "timestamp": 2_000}
                ]
            })
            .to_string(),
        )
        .unwrap();

        let use_case = use_case();
        handle_import(&use_case, &Presenter::new(), &file)
            .await
            .unwrap();

        let log = use_case.history().load().await.unwrap();
        let texts: Vec<_> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["new", "mid", "old"]);
        assert!(log
            .entries()
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp));
    }

    #[tokio::test]
    async fn import_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = handle_import(&use_case(), &Presenter::new(), &dir.path().join("nope.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, HistoryCommandError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn non_array_snippets_read_as_none() {
        let store = MemoryStore::new();
        let mut items = Map::new();
        items.insert(SNIPPETS_KEY.to_string(), json!("oops"));
        store.set(items).await.unwrap();

        assert!(load_snippets(&store).await.unwrap().is_empty());
    }
}
