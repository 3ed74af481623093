//! Centralized error handling.
//!
//! Wraps configuration errors with the few failures that only the command
//! layer can produce.

use thiserror::Error;

use common::ConfigError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Configuration file not found at {0}, run `bingo init` first")]
    MissingConfig(String),
}

impl AppError {
    /// Get error code for log output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.code(),
            AppError::Output(_) => "OUTPUT_ERROR",
            AppError::MissingConfig(_) => "MISSING_CONFIG",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;
