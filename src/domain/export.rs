//! Export / import bundle shape

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::config::AppConfig;
use crate::domain::error::ImportError;
use crate::domain::history::{HistoryEntry, HistoryLog};

/// Version string written into every export
pub const EXPORT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a user can back up: history, snippets and settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub history: Vec<HistoryEntry>,
    pub snippets: Vec<Value>,
    pub settings: AppConfig,
    /// RFC 3339 / ISO-8601 timestamp
    pub export_date: String,
    pub version: String,
}

impl ExportBundle {
    pub fn new(
        history: &HistoryLog,
        snippets: Vec<Value>,
        settings: AppConfig,
        exported_at: DateTime<Utc>,
    ) -> Self {
        Self {
            history: history.entries().to_vec(),
            snippets,
            settings,
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            version: EXPORT_VERSION.to_string(),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// The parts of an export file that import restores
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportBundle {
    #[serde(default)]
    pub history: Option<Vec<HistoryEntry>>,
    #[serde(default)]
    pub snippets: Option<Vec<Value>>,
}

impl ImportBundle {
    /// Parse an export file. At least one of `history` or `snippets`
    /// must be present.
    pub fn parse(content: &str) -> Result<Self, ImportError> {
        let bundle: Self =
            serde_json::from_str(content).map_err(|e| ImportError::ParseError(e.to_string()))?;

        if bundle.history.is_none() && bundle.snippets.is_none() {
            return Err(ImportError::MissingData);
        }

        Ok(bundle)
    }
}
