//! Gate configuration
//!
//! The running version is compiled in. Only the storage keys can be
//! overridden from a JSON config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{APP_VERSION, CREDENTIAL_KEY, VERSION_KEY};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Version of the running build
    #[serde(skip)]
    current_version: String,
    /// Key of the persisted version marker
    pub version_key: String,
    /// Key of the credential that survives a wipe
    pub credential_key: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            current_version: APP_VERSION.to_string(),
            version_key: VERSION_KEY.to_string(),
            credential_key: CREDENTIAL_KEY.to_string(),
        }
    }
}

impl GateConfig {
    /// Config for an explicit running version (default keys)
    pub fn new(current_version: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self {
            current_version: current_version.into(),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse key overrides from JSON, e.g. `{"credential_key": "auth"}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load key overrides from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded gate config (marker `{}`, credential `{}`)",
            config.version_key,
            config.credential_key
        );
        Ok(config)
    }

    pub fn with_credential_key(mut self, key: impl Into<String>) -> Result<Self, ConfigError> {
        self.credential_key = key.into();
        self.validate()?;
        Ok(self)
    }

    pub fn current_version(&self) -> &str {
        &self.current_version
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.current_version.is_empty() {
            return Err(ConfigError::EmptyVersion);
        }
        if self.version_key.is_empty() {
            return Err(ConfigError::EmptyKey("version_key"));
        }
        if self.credential_key.is_empty() {
            return Err(ConfigError::EmptyKey("credential_key"));
        }
        Ok(())
    }
}
