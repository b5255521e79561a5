//! Storage configuration.

use config::ConfigError;
use serde::Deserialize;

use crate::domain::StorageKind;

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// Backend identifier, e.g. `FileManager.documentDirectory`.
    #[serde(default = "default_kind")]
    pub kind: StorageKind,

    /// Reject identifiers this build does not know.
    ///
    /// Disable to carry identifiers written by a newer build.
    #[serde(default = "default_require_known")]
    pub require_known: bool,
}

const fn default_kind() -> StorageKind {
    StorageKind::USER_DEFAULTS
}

const fn default_require_known() -> bool {
    true
}

impl StorageConfig {
    /// Validate the storage configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `require_known` is set and `kind` is not a canonical kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.require_known && !self.kind.is_known() {
            return Err(ConfigError::Message(format!(
                "storage.kind '{}' is not a known storage kind",
                self.kind.identifier()
            )));
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            require_known: true,
        }
    }
}
