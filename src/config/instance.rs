//! Per-installation configuration file.
//!
//! Holds what cannot ship as a compiled default: the signing secret, the
//! database location, and site-specific game settings. The file is TOML:
//!
//! ```toml
//! max_tickets_per_user = 5
//! admins = []
//!
//! [app]
//! debug = false
//! secret_key = "..."
//!
//! [app.database]
//! provider = "sqlite"
//! filename = "/srv/bingo/bingo.db3"
//! create_db = true
//!
//! [options]
//! ```
//!
//! Unknown keys are rejected when the file is loaded.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use common::{ConfigError, ConfigResult, DatabaseConfig};

use super::constants::DEFAULT_MAX_TICKETS_PER_USER;
use super::paths::ProjectPaths;
use super::secret::{SecretGenerator, SecretKey};

/// Core application block: debug flag, secret, database.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppSection {
    /// Unset means "keep the compiled default"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    pub secret_key: SecretKey,
    pub database: DatabaseConfig,
}

/// Contents of the instance configuration file.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceConfig {
    pub max_tickets_per_user: u32,
    /// Usernames granted administrator rights
    #[serde(default)]
    pub admins: Vec<String>,
    pub app: AppSection,
    /// Free-form site options, passed through untouched
    #[serde(default)]
    pub options: BTreeMap<String, toml::Value>,
}

impl InstanceConfig {
    /// Starter configuration with a fresh secret and a SQLite database in
    /// the project root.
    pub fn generate(paths: &ProjectPaths, secrets: &dyn SecretGenerator) -> Self {
        Self {
            max_tickets_per_user: DEFAULT_MAX_TICKETS_PER_USER,
            admins: Vec::new(),
            app: AppSection {
                debug: Some(false),
                secret_key: secrets.generate(),
                database: DatabaseConfig::sqlite(paths.database_file()),
            },
            options: BTreeMap::new(),
        }
    }

    /// Read and validate an instance file.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Parse`] for malformed TOML or unknown keys, and
    /// [`ConfigError::Validation`] if the content breaks an invariant.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config = Self::from_toml(&content).map_err(|e| ConfigError::parse(path, e))?;
        config.validate()?;

        tracing::debug!("Loaded instance configuration from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.app.secret_key.validate()?;

        if self.app.database.filename.as_os_str().is_empty() {
            return Err(ConfigError::validation("database filename must not be empty"));
        }
        if self.admins.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::validation("admin names must not be blank"));
        }

        Ok(())
    }

    pub fn is_admin(&self, username: &str) -> bool {
        self.admins.iter().any(|name| name == username)
    }
}
