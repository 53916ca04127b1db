//! TOML config file under the user's config directory

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const FILE_NAME: &str = "config.toml";

/// Config store at `$XDG_CONFIG_HOME/clip/config.toml` or a given path
#[derive(Debug, Clone)]
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    /// Store in the platform config directory
    pub fn new() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(Self::with_path(dir.join("clip").join(FILE_NAME)))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn render(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string_pretty(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    async fn ensure_parent(&self) -> Result<(), ConfigError> {
        match self.path.parent() {
            Some(parent) if parent != Path::new("") => fs::create_dir_all(parent)
                .await
                .map_err(|e| ConfigError::WriteError(e.to_string())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no config file, using defaults");
                Ok(AppConfig::empty())
            }
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    /// Writes a sibling temp file, then renames it over the target
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::render(config)?;
        self.ensure_parent().await?;

        let tmp = self.path.with_extension("toml.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        let content = Self::render(&AppConfig::defaults())?;
        self.ensure_parent().await?;

        // never overwrites an existing file
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => {
                    ConfigError::AlreadyExists(self.path.display().to_string())
                }
                _ => ConfigError::WriteError(e.to_string()),
            })?;

        file.write_all(content.as_bytes())
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| ConfigError::WriteError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_path_ends_in_clip_dir() {
        // hosts without a config dir report an error instead of a `~` path
        match XdgConfigStore::new() {
            Ok(store) => {
                assert!(store.path().ends_with("clip/config.toml"));
                assert!(!store.path().starts_with("~"));
            }
            Err(e) => assert!(matches!(e, ConfigError::NoConfigDir)),
        }
    }

    #[test]
    fn parse_toml_with_formats_table() {
        let content = r#"
always_plain_text = true
history_limit = 3
clipboard_tool = "wl-copy"

[formats]
json = false
"#;

        let config = XdgConfigStore::parse(content).unwrap();
        assert_eq!(config.always_plain_text, Some(true));
        assert_eq!(config.history_limit, Some(3));
        assert_eq!(config.clipboard_tool.as_deref(), Some("wl-copy"));
        assert!(config.notify.is_none());
        assert!(!config.enabled_formats().json);
        assert!(config.enabled_formats().markdown);
    }

    #[test]
    fn parse_toml_rejects_wrong_types() {
        let err = XdgConfigStore::parse("history_limit = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let config = store.load().await.unwrap();
        assert!(config.history_limit.is_none());
    }

    #[tokio::test]
    async fn init_writes_defaults_once() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("nested").join("config.toml"));

        store.init().await.unwrap();
        let config = store.load().await.unwrap();
        assert_eq!(config.history_limit, Some(5));
        assert_eq!(config.notify, Some(true));

        let err = store.init().await.unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn init_leaves_existing_file_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "history_limit = 2\n").unwrap();

        let store = XdgConfigStore::with_path(&path);
        assert!(matches!(
            store.init().await.unwrap_err(),
            ConfigError::AlreadyExists(_)
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "history_limit = 2\n");
    }

    #[tokio::test]
    async fn unreadable_path_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        // a directory where the file should be
        let store = XdgConfigStore::with_path(dir.path());
        assert!(matches!(
            store.load().await.unwrap_err(),
            ConfigError::ReadError(_)
        ));
        assert!(!store.exists());
    }

    #[tokio::test]
    async fn save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        store.save(&AppConfig::defaults()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, ["config.toml"]);
    }

    #[tokio::test]
    async fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let config = AppConfig {
            pro: Some(true),
            history_limit: Some(20),
            ..Default::default()
        };

        store.save(&config).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.history_cap(), 20);
    }
}
