//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::history::{Plan, DEFAULT_HISTORY_CAP};

use super::{CopySettings, EnabledFormats};

/// Per-format toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatsConfig {
    pub markdown: Option<bool>,
    pub html: Option<bool>,
    pub json: Option<bool>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub always_plain_text: Option<bool>,
    pub auto_clean_text: Option<bool>,
    pub notify: Option<bool>,
    pub history_limit: Option<usize>,
    pub pro: Option<bool>,
    pub clipboard_tool: Option<String>,
    pub formats: Option<FormatsConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            always_plain_text: Some(false),
            auto_clean_text: Some(false),
            notify: Some(true),
            history_limit: Some(DEFAULT_HISTORY_CAP),
            pro: Some(false),
            clipboard_tool: Some("auto".to_string()),
            formats: Some(FormatsConfig {
                markdown: Some(true),
                html: Some(true),
                json: Some(true),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            always_plain_text: other.always_plain_text.or(self.always_plain_text),
            auto_clean_text: other.auto_clean_text.or(self.auto_clean_text),
            notify: other.notify.or(self.notify),
            history_limit: other.history_limit.or(self.history_limit),
            pro: other.pro.or(self.pro),
            clipboard_tool: other.clipboard_tool.or(self.clipboard_tool),
            formats: Self::merge_formats(self.formats, other.formats),
        }
    }

    fn merge_formats(
        base: Option<FormatsConfig>,
        other: Option<FormatsConfig>,
    ) -> Option<FormatsConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(FormatsConfig {
                markdown: o.markdown.or(b.markdown),
                html: o.html.or(b.html),
                json: o.json.or(b.json),
            }),
        }
    }

    pub fn always_plain_text_or_default(&self) -> bool {
        self.always_plain_text.unwrap_or(false)
    }

    pub fn auto_clean_text_or_default(&self) -> bool {
        self.auto_clean_text.unwrap_or(false)
    }

    /// Notifications are on unless explicitly disabled
    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }

    pub fn plan(&self) -> Plan {
        if self.pro.unwrap_or(false) {
            Plan::Pro
        } else {
            Plan::Free
        }
    }

    /// Configured history limit, clamped to the plan's ceiling
    pub fn history_cap(&self) -> usize {
        self.plan()
            .clamp_cap(self.history_limit.unwrap_or(DEFAULT_HISTORY_CAP))
    }

    /// Get clipboard tool preference, or "auto" if not set
    pub fn clipboard_tool_or_default(&self) -> &str {
        self.clipboard_tool.as_deref().unwrap_or("auto")
    }

    pub fn enabled_formats(&self) -> EnabledFormats {
        let formats = self.formats.clone().unwrap_or_default();
        EnabledFormats {
            markdown: formats.markdown.unwrap_or(true),
            html: formats.html.unwrap_or(true),
            json: formats.json.unwrap_or(true),
        }
    }

    /// Resolve into the value the copy use case consumes
    pub fn copy_settings(&self) -> CopySettings {
        CopySettings {
            always_plain_text: self.always_plain_text_or_default(),
            auto_clean_text: self.auto_clean_text_or_default(),
            notify: self.notify_or_default(),
            history_cap: self.history_cap(),
            enabled_formats: self.enabled_formats(),
        }
    }
}
