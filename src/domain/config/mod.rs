//! Configuration domain module

mod app_config;
mod copy_settings;

pub use app_config::{AppConfig, FormatsConfig};
pub use copy_settings::{CopySettings, EnabledFormats};
