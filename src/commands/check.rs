//! Check command - Validate the resolved configuration.

use std::path::Path;

use crate::config::ProjectPaths;
use crate::errors::AppResult;

use super::load_app_config;

/// Execute the check command
pub fn execute(paths: &ProjectPaths, config_path: &Path) -> AppResult<()> {
    let config = load_app_config(paths, config_path)?;
    config.settings.ensure_folders()?;

    tracing::debug!("Validated {:?}", config.settings);
    println!("Configuration OK: {}", config_path.display());
    println!("Database: {}", config.instance.app.database.filename.display());
    if config.settings.debug {
        println!("Warning: DEBUG is enabled");
    }

    Ok(())
}
