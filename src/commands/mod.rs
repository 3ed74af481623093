//! Commands module - CLI command implementations.
//!
//! Each command is implemented in its own module for separation of concerns.

pub mod check;
pub mod init;
pub mod show;

use std::path::Path;

use crate::config::{AppConfig, ProjectPaths};
use crate::errors::{AppError, AppResult};

/// Load the full configuration, pointing at `init` when the file is missing.
fn load_app_config(paths: &ProjectPaths, config_path: &Path) -> AppResult<AppConfig> {
    if !config_path.exists() {
        return Err(AppError::MissingConfig(config_path.display().to_string()));
    }
    Ok(AppConfig::load(paths, config_path)?)
}
