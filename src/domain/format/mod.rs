//! Output format converters
//!
//! Each converter is a pure, infallible string transform. They are regex
//! based and lossy: malformed markup degrades to a best-effort result.

mod html;
mod json;
mod markdown;
mod plain_text;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::error::FormatParseError;

pub use html::HtmlConverter;
pub use json::JsonConverter;
pub use markdown::MarkdownConverter;
pub use plain_text::PlainTextConverter;

/// Any `<...>` run, the tag shape every converter agrees on
pub(crate) static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// A run of whitespace, newlines and tabs included
pub(crate) static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run to a single space and trim the ends
pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// A string-to-string transform for one output format
pub trait Converter: Send + Sync {
    /// Convert `input` into the target format. Never fails.
    fn convert(&self, input: &str) -> String;
}

/// All supported output formats
pub const ALL_FORMATS: &[OutputFormat] = &[
    OutputFormat::PlainText,
    OutputFormat::Markdown,
    OutputFormat::Html,
    OutputFormat::Json,
];

/// Target format of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    PlainText,
    Markdown,
    Html,
    Json,
}

impl OutputFormat {
    /// Tag recorded in history entries for this format
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::PlainText => "plain text",
            Self::Markdown => "markdown",
            Self::Html => "HTML",
            Self::Json => "JSON",
        }
    }

    /// Short identifier used on the command line and in config keys
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "plain",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// The converter implementing this format
    pub fn converter(&self) -> &'static dyn Converter {
        match self {
            Self::PlainText => &PlainTextConverter,
            Self::Markdown => &MarkdownConverter,
            Self::Html => &HtmlConverter,
            Self::Json => &JsonConverter,
        }
    }

    /// Convert `input` with this format's converter
    pub fn convert(&self, input: &str) -> String {
        self.converter().convert(input)
    }
}

impl FromStr for OutputFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "plain-text" | "plain text" | "text" | "txt" => Ok(Self::PlainText),
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            _ => Err(FormatParseError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Convert to plain text
pub fn to_plain_text(input: &str) -> String {
    PlainTextConverter.convert(input)
}

/// Convert to Markdown
pub fn to_markdown(input: &str) -> String {
    MarkdownConverter.convert(input)
}

/// Convert to HTML
pub fn to_html(input: &str) -> String {
    HtmlConverter.convert(input)
}

/// Convert to JSON
pub fn to_json(input: &str) -> String {
    JsonConverter.convert(input)
}
