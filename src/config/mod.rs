//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - A `.env` file in the working directory
//! - Environment variables with `STORAGE_KIND__<SECTION>__<KEY>` pattern

mod storage;

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::info;

pub use storage::StorageConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Storage backend selection.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{STORAGE_KIND_PROFILE}.toml` (if `STORAGE_KIND_PROFILE` is set)
    /// 3. Environment variables with `STORAGE_KIND__` prefix, including any from `.env`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine
        dotenvy::dotenv().ok();

        let profile =
            std::env::var("STORAGE_KIND_PROFILE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{profile}")).required(false))
            // STORAGE_KIND__STORAGE__KIND=CoreData -> storage.kind = "CoreData"
            .add_source(
                Environment::with_prefix("STORAGE_KIND")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::finish(config)
    }

    /// Load configuration from a single file, ignoring profile and environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the configuration is invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        Self::finish(config)
    }

    fn finish(config: Config) -> Result<Self, ConfigError> {
        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        info!(
            kind = app_config.storage.kind.identifier(),
            known = app_config.storage.kind.is_known(),
            "Storage configuration loaded"
        );

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be 'text' or 'json', got '{}'",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::domain::StorageKind;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage.kind, StorageKind::USER_DEFAULTS);
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.observability.log_format, "text");
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"
[storage]
kind = "CKContainer.privateCloudDatabase"

[observability]
log_format = "json"
"#,
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.storage.kind, StorageKind::PRIVATE_CLOUD_DATABASE);
        assert!(config.storage.require_known);
        assert_eq!(config.observability.log_format, "json");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn test_load_rejects_unknown_kind() {
        let file = write_config("[storage]\nkind = \"FileManager.desktopDirectory\"\n");
        assert!(AppConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_load_accepts_unknown_kind_when_allowed() {
        let file = write_config(
            "[storage]\nkind = \"FileManager.desktopDirectory\"\nrequire_known = false\n",
        );

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.storage.kind.identifier(), "FileManager.desktopDirectory");
        assert!(!config.storage.kind.is_known());
    }

    #[test]
    fn test_load_rejects_bad_log_format() {
        let file = write_config("[observability]\nlog_format = \"xml\"\n");
        assert!(AppConfig::load_from(file.path()).is_err());
    }
}
