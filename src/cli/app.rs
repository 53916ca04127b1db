//! App wiring and runners for the copy and clear commands

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, warn};

use crate::application::ports::{
    Clipboard, ConfigStore, Notifier, SelectionSource, StorageError,
};
use crate::application::{CopyError, CopyOutcome, CopyReport, CopyUseCase, HistoryStore};
use crate::domain::config::{AppConfig, CopySettings};
use crate::domain::error::ConfigError;
use crate::infrastructure::{
    create_clipboard, create_notifier, ClipboardTool, JsonFileStore, PrimarySelection,
    StaticSelection, StdinSelection, XdgConfigStore,
};

use super::args::{CopyOptions, InputSource};
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// The copy use case as wired for the command line
pub type ClipUseCase = CopyUseCase<Box<dyn Clipboard>, JsonFileStore, Box<dyn Notifier>>;

/// Config store at `path`, or the XDG default
pub fn config_store(path: Option<PathBuf>) -> Result<XdgConfigStore, ConfigError> {
    match path {
        Some(path) => Ok(XdgConfigStore::with_path(path)),
        None => XdgConfigStore::new(),
    }
}

/// Storage file at `path`, or the XDG default
pub fn storage(path: Option<PathBuf>) -> Result<JsonFileStore, StorageError> {
    match path {
        Some(path) => Ok(JsonFileStore::with_path(path)),
        None => JsonFileStore::new(),
    }
}

/// Everything a copy, clear or history command runs against
pub struct Pipeline {
    pub config: AppConfig,
    pub settings: CopySettings,
    pub use_case: ClipUseCase,
}

impl Pipeline {
    /// Load the merged config and open the storage file
    pub async fn open<S: ConfigStore + ?Sized>(
        config_file: &S,
        storage_path: Option<PathBuf>,
    ) -> Result<Self, StorageError> {
        let store = storage(storage_path)?;
        let config = load_merged_config(config_file).await;
        let settings = config.copy_settings();
        let use_case = build_use_case(&config, store);

        Ok(Self {
            config,
            settings,
            use_case,
        })
    }
}

/// Load the config file over the defaults. An unreadable file is reported
/// and the defaults are used.
pub async fn load_merged_config<S: ConfigStore + ?Sized>(store: &S) -> AppConfig {
    let file_config = store.load().await.unwrap_or_else(|e| {
        warn!(path = %store.path().display(), "ignoring config file: {}", e);
        AppConfig::empty()
    });

    // Merge: defaults < file
    AppConfig::defaults().merge(file_config)
}

/// Build the copy use case from the merged config
pub fn build_use_case(config: &AppConfig, store: JsonFileStore) -> ClipUseCase {
    let tool = config
        .clipboard_tool_or_default()
        .parse::<ClipboardTool>()
        .unwrap_or_else(|e| {
            warn!("{}, using {}", e, ClipboardTool::default());
            ClipboardTool::default()
        });
    debug!(
        %tool,
        plan = %config.plan(),
        path = %store.path().display(),
        "wiring copy pipeline"
    );

    let history = HistoryStore::with_plan(store, config.plan());
    history.set_cap(config.history_cap());

    CopyUseCase::new(
        create_clipboard(tool),
        history,
        create_notifier(config.notify_or_default()),
    )
}

/// Run one copy
pub async fn run_copy(
    options: CopyOptions,
    use_case: &ClipUseCase,
    settings: &CopySettings,
    presenter: &Presenter,
) -> ExitCode {
    let source: Box<dyn SelectionSource> = match options.source {
        InputSource::Argument(text) => Box::new(StaticSelection::new(text)),
        InputSource::Stdin => Box::new(StdinSelection::new()),
        InputSource::Selection => Box::new(PrimarySelection::new()),
    };

    let result = use_case
        .copy_selection(source.as_ref(), options.format, options.clean, settings)
        .await;

    match result {
        Ok(CopyOutcome::Copied(report)) => {
            report_copy(&report, options.print, presenter);
            ExitCode::from(EXIT_SUCCESS)
        }
        Ok(CopyOutcome::Empty) => {
            presenter.warn("Nothing to copy");
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Clear the clipboard, and the history too when `with_history` is set
pub async fn run_clear(
    with_history: bool,
    use_case: &ClipUseCase,
    settings: &CopySettings,
    presenter: &Presenter,
) -> ExitCode {
    let (result, message) = if with_history {
        (
            use_case.clear_all(settings).await,
            "Clipboard and history cleared",
        )
    } else {
        (use_case.clear_clipboard(settings).await, "Clipboard cleared")
    };

    match result {
        Ok(()) => {
            presenter.success(message);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn report_copy(report: &CopyReport, print: bool, presenter: &Presenter) {
    if print {
        presenter.output(&report.output);
    }
    presenter.success(&format!("Copied as {}", report.format_tag));

    if let Some(e) = &report.history_error {
        presenter.warn(&format!("{} (the clipboard was still updated)", e));
    }
}

/// Rejected keys and values are usage errors
pub fn config_exit_code(error: &ConfigError) -> u8 {
    match error {
        ConfigError::ValidationError { .. } => EXIT_USAGE_ERROR,
        _ => EXIT_ERROR,
    }
}

fn exit_code_for(error: &CopyError) -> u8 {
    match error {
        CopyError::FormatDisabled(_) => EXIT_USAGE_ERROR,
        CopyError::ClipboardWrite(_) | CopyError::History(_) => EXIT_ERROR,
    }
}
