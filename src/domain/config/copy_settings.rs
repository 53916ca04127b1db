//! Per-call settings handed to the copy use case

use crate::domain::format::OutputFormat;
use crate::domain::history::{Plan, DEFAULT_HISTORY_CAP};

/// Which optional formats may be used. Plain text is always allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledFormats {
    pub markdown: bool,
    pub html: bool,
    pub json: bool,
}

impl Default for EnabledFormats {
    fn default() -> Self {
        Self {
            markdown: true,
            html: true,
            json: true,
        }
    }
}

impl EnabledFormats {
    pub fn is_enabled(&self, format: OutputFormat) -> bool {
        match format {
            OutputFormat::PlainText => true,
            OutputFormat::Markdown => self.markdown,
            OutputFormat::Html => self.html,
            OutputFormat::Json => self.json,
        }
    }
}

/// Resolved settings for one copy.
///
/// Built from the merged [`AppConfig`](super::AppConfig) and passed
/// explicitly into every call; nothing reads shared settings state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopySettings {
    /// Force plain text regardless of the requested format
    pub always_plain_text: bool,
    /// Run the text cleaner before every conversion
    pub auto_clean_text: bool,
    /// Show a desktop notification after copy/clear
    pub notify: bool,
    /// Maximum number of history entries
    pub history_cap: usize,
    pub enabled_formats: EnabledFormats,
}

impl Default for CopySettings {
    fn default() -> Self {
        Self {
            always_plain_text: false,
            auto_clean_text: false,
            notify: false,
            history_cap: DEFAULT_HISTORY_CAP,
            enabled_formats: EnabledFormats::default(),
        }
    }
}

impl CopySettings {
    /// Replace the history cap, clamped to what `plan` allows
    pub fn with_history_cap(mut self, requested: usize, plan: Plan) -> Self {
        self.history_cap = plan.clamp_cap(requested);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_cannot_be_disabled() {
        let formats = EnabledFormats {
            markdown: false,
            html: false,
            json: false,
        };
        assert!(formats.is_enabled(OutputFormat::PlainText));
        assert!(!formats.is_enabled(OutputFormat::Markdown));
        assert!(!formats.is_enabled(OutputFormat::Html));
        assert!(!formats.is_enabled(OutputFormat::Json));
    }

    #[test]
    fn history_cap_is_clamped_by_plan() {
        let settings = CopySettings::default().with_history_cap(25, Plan::Free);
        assert_eq!(settings.history_cap, 5);
        let settings = CopySettings::default().with_history_cap(25, Plan::Pro);
        assert_eq!(settings.history_cap, 25);
    }
}
