//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, FormatsConfig};
use crate::domain::error::ConfigError;
use crate::domain::history::Plan;
use crate::infrastructure::clipboard::{ClipboardTool, VALID_CLIPBOARD_TOOLS};

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore + ?Sized>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore + ?Sized>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore + ?Sized>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore + ?Sized>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    validate_key(key)?;

    let config = store.load().await?;
    presenter.output(read_value(&config, key).as_deref().unwrap_or(NOT_SET));

    Ok(())
}

async fn handle_list<S: ConfigStore + ?Sized>(
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(key, read_value(&config, key).as_deref().unwrap_or(NOT_SET));
    }

    Ok(())
}

fn handle_path<S: ConfigStore + ?Sized>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn validate_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Parse `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "always_plain_text" => config.always_plain_text = Some(parse_bool_for(key, value)?),
        "auto_clean_text" => config.auto_clean_text = Some(parse_bool_for(key, value)?),
        "notify" => config.notify = Some(parse_bool_for(key, value)?),
        "pro" => config.pro = Some(parse_bool_for(key, value)?),
        "history_limit" => config.history_limit = Some(parse_history_limit(value)?),
        "clipboard_tool" => {
            let tool = value
                .parse::<ClipboardTool>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: format!(
                        "Invalid value '{}'. Valid options: {}",
                        value,
                        VALID_CLIPBOARD_TOOLS.join(", ")
                    ),
                })?;
            config.clipboard_tool = Some(tool.to_string());
        }
        "formats.markdown" | "formats.html" | "formats.json" => {
            let enabled = parse_bool_for(key, value)?;
            let formats = config.formats.get_or_insert_with(FormatsConfig::default);
            match key {
                "formats.markdown" => formats.markdown = Some(enabled),
                "formats.html" => formats.html = Some(enabled),
                _ => formats.json = Some(enabled),
            }
        }
        _ => return validate_key(key),
    }
    Ok(())
}

/// Stored value for `key`, rendered as text
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    let formats = config.formats.as_ref();
    match key {
        "always_plain_text" => config.always_plain_text.map(|b| b.to_string()),
        "auto_clean_text" => config.auto_clean_text.map(|b| b.to_string()),
        "notify" => config.notify.map(|b| b.to_string()),
        "pro" => config.pro.map(|b| b.to_string()),
        "history_limit" => config.history_limit.map(|n| n.to_string()),
        "clipboard_tool" => config.clipboard_tool.clone(),
        "formats.markdown" => formats.and_then(|f| f.markdown).map(|b| b.to_string()),
        "formats.html" => formats.and_then(|f| f.html).map(|b| b.to_string()),
        "formats.json" => formats.and_then(|f| f.json).map(|b| b.to_string()),
        _ => None,
    }
}

/// History limits are whole numbers from 1 up to the largest plan ceiling.
/// The active plan clamps further at copy time.
fn parse_history_limit(value: &str) -> Result<usize, ConfigError> {
    let max = Plan::Pro.ceiling();
    match value.trim().parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(ConfigError::ValidationError {
            key: "history_limit".to_string(),
            message: format!("Value must be a whole number from 1 to {}", max),
        }),
    }
}

fn parse_bool_for(key: &str, value: &str) -> Result<bool, ConfigError> {
    parse_bool(value).map_err(|_| ConfigError::ValidationError {
        key: key.to_string(),
        message: "Value must be 'true' or 'false'".to_string(),
    })
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}
