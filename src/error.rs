//! Storage error taxonomy

use thiserror::Error;

/// Failure reported by a [`KeyValueStore`](crate::persistence::KeyValueStore) backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The store cannot be read or written (access denied, disabled, quota, I/O)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value is present but unusable
    #[error("storage corrupt at `{key}`: {reason}")]
    Corrupt { key: String, reason: String },
}

impl StorageError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        StorageError::Unavailable(reason.into())
    }

    pub fn corrupt(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::Corrupt {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Unavailable(err.to_string())
    }
}

/// Failure building a [`GateConfig`](crate::config::GateConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("current version must not be empty")]
    EmptyVersion,

    #[error("{0} must not be empty")]
    EmptyKey(&'static str),

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
}
