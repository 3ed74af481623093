//! Init command - First-run generation of the instance config file.

use std::path::Path;

use crate::config::{create_config_file_with, OsSecretGenerator, ProjectPaths};
use crate::errors::AppResult;

/// Execute the init command
pub fn execute(paths: &ProjectPaths, config_path: &Path) -> AppResult<()> {
    tracing::info!("Initializing configuration at {}", config_path.display());

    if create_config_file_with(config_path, paths, &OsSecretGenerator)? {
        println!("Created: {}", config_path.display());
        println!("Keep this file out of version control, it contains the secret key.");
    } else {
        println!("Already exists, left unchanged: {}", config_path.display());
    }

    Ok(())
}
