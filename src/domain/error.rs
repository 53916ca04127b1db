//! Domain error types

use thiserror::Error;

/// Error when parsing an output format name
#[derive(Debug, Clone, Error)]
#[error("Invalid format: \"{input}\". Valid formats are: plain, markdown, html, json")]
pub struct FormatParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error("No config directory found; pass --config or set CLIP_CONFIG")]
    NoConfigDir,
}

/// Error when an export bundle cannot be imported
#[derive(Debug, Clone, Error)]
pub enum ImportError {
    #[error("Failed to parse import file: {0}")]
    ParseError(String),

    #[error("Invalid import file format: expected a 'history' or 'snippets' field")]
    MissingData,
}
