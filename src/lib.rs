//! Bingo - configuration provider for the bingo web backend
//!
//! Supplies the session, cookie and token settings the web layer reads at
//! startup, and generates the per-installation config file (with a fresh
//! signing secret) on first run.
//!
//! # Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Defaults, overrides, instance file, bootstrap
//! - **errors**: Command-level error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate config.toml with a new secret (never overwrites)
//! cargo run -- init
//!
//! # Print the resolved options
//! cargo run -- show --json
//!
//! # Validate and create asset folders
//! cargo run -- check
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;

// Re-export commonly used types at crate root
pub use common::{ConfigError, ConfigResult};
pub use config::{create_config_file, load_default_config, AppConfig, Settings};
pub use errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
pub use config::load_test_config;
