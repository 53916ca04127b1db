//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::format::OutputFormat;

/// clip - copy text as plain text, Markdown, HTML or JSON
#[derive(Parser, Debug)]
#[command(name = "clip")]
#[command(version)]
#[command(about = "Copy text as plain text, Markdown, HTML or JSON and keep a short history")]
#[command(long_about = None)]
pub struct Cli {
    /// Text to copy (read from stdin when omitted and stdin is piped)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format (plain, markdown, html, json)
    #[arg(short = 'f', long, value_name = "FORMAT", default_value = "plain")]
    pub format: OutputFormat,

    /// Clean the text before converting
    #[arg(short = 'c', long)]
    pub clean: bool,

    /// Copy the current primary selection
    #[arg(short = 's', long, conflicts_with_all = ["text", "stdin"])]
    pub selection: bool,

    /// Read the text from stdin
    #[arg(long, conflicts_with = "text")]
    pub stdin: bool,

    /// Also print the converted text to stdout
    #[arg(short = 'p', long)]
    pub print: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Storage file holding the history
    #[arg(long, value_name = "PATH", env = "CLIP_STORAGE", global = true)]
    pub storage: Option<PathBuf>,

    /// Config file
    #[arg(long, value_name = "PATH", env = "CLIP_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clear the clipboard
    Clear {
        /// Also clear the copy history
        #[arg(long)]
        history: bool,
    },
    /// Inspect and manage the copy history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// History action subcommands
#[derive(Subcommand, Debug)]
pub enum HistoryAction {
    /// List recent copies, newest first
    List {
        /// Show the full text instead of the truncated preview
        #[arg(long)]
        full: bool,
    },
    /// Remove every entry
    Clear,
    /// Copy an entry again (1 is the newest)
    Copy {
        #[arg(value_name = "N")]
        index: usize,
    },
    /// Write history, snippets and settings as JSON
    Export {
        /// Output file (stdout when omitted)
        #[arg(short = 'o', long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Restore history and snippets from an export file
    Import {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Where the text of a copy comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Argument(String),
    Stdin,
    Selection,
}

/// Parsed options for a copy
#[derive(Debug, Clone)]
pub struct CopyOptions {
    pub source: InputSource,
    pub format: OutputFormat,
    pub clean: bool,
    pub print: bool,
}

impl Cli {
    /// Resolve the copy options. Without an explicit source, stdin is used
    /// when it is not a terminal; `None` means there is nothing to read.
    pub fn copy_options(&self, stdin_is_terminal: bool) -> Option<CopyOptions> {
        let source = if let Some(text) = &self.text {
            InputSource::Argument(text.clone())
        } else if self.selection {
            InputSource::Selection
        } else if self.stdin || !stdin_is_terminal {
            InputSource::Stdin
        } else {
            return None;
        };

        Some(CopyOptions {
            source,
            format: self.format,
            clean: self.clean,
            print: self.print,
        })
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "always_plain_text",
    "auto_clean_text",
    "notify",
    "history_limit",
    "pro",
    "clipboard_tool",
    "formats.markdown",
    "formats.html",
    "formats.json",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
