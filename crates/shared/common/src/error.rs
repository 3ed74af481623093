//! Unified error handling for configuration loading and bootstrapping.
//!
//! A pre-existing configuration file is not an error; callers see that as a
//! `false` result from the bootstrap step. Everything here is fatal to the
//! step that produced it.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    // File system
    #[error("I/O error accessing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Instance file
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    // Overrides
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    // Invariants
    #[error("{0}")]
    Validation(String),
}

impl ConfigError {
    /// Code used in log lines and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "IO_ERROR",
            ConfigError::Parse { .. } => "PARSE_ERROR",
            ConfigError::Serialize(_) => "SERIALIZE_ERROR",
            ConfigError::InvalidValue { .. } => "INVALID_VALUE",
            ConfigError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Whether the error came from the file system rather than the content
    pub fn is_io(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: toml::de::Error) -> Self {
        ConfigError::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ConfigError::Validation(msg.into())
    }
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
