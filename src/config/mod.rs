//! Application configuration module
//!
//! Compiled defaults, environment overrides, and the per-installation
//! instance file, resolved into one [`AppConfig`].

mod app;
mod bootstrap;
mod constants;
mod instance;
mod paths;
mod secret;
mod settings;

#[cfg(any(test, feature = "test-utils"))]
mod testing;

pub use app::AppConfig;
pub use bootstrap::{create_config_file, create_config_file_with};
pub use constants::*;
pub use instance::{AppSection, InstanceConfig};
pub use paths::ProjectPaths;
pub use secret::{generate_secret, OsSecretGenerator, SecretGenerator, SecretKey};
pub use settings::{load_default_config, ConfigValue, Settings};

#[cfg(any(test, feature = "test-utils"))]
pub use secret::MockSecretGenerator;
#[cfg(any(test, feature = "test-utils"))]
pub use testing::{load_test_config, TEST_SECRET_KEY};
