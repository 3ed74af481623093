//! Shared configuration structures.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Session cookie configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Only send the session cookie over HTTPS
    pub cookie_secure: bool,
    /// Hide the session cookie from client-side scripts
    pub cookie_httponly: bool,
    /// Lifetime of a permanent session
    #[serde(with = "duration_secs")]
    pub permanent_lifetime: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_secure: true,
            cookie_httponly: true,
            permanent_lifetime: Duration::from_secs(31 * SECONDS_PER_DAY),
        }
    }
}

/// Kind of JWT subject to blacklist checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "access" => Ok(TokenType::Access),
            "refresh" => Ok(TokenType::Refresh),
            other => Err(ConfigError::invalid_value(
                "token type",
                format!("unknown token type '{}' (expected 'access' or 'refresh')", other),
            )),
        }
    }
}

/// JWT lifetimes and revocation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct JwtConfig {
    #[serde(with = "duration_secs")]
    pub access_token_expires: Duration,
    #[serde(with = "duration_secs")]
    pub refresh_token_expires: Duration,
    /// Refresh lifetime used when the user ticks "remember me"
    #[serde(with = "duration_secs")]
    pub remember_me_refresh_token_expires: Duration,
    pub blacklist_enabled: bool,
    pub blacklist_token_checks: Vec<TokenType>,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_token_expires: Duration::from_secs(15 * SECONDS_PER_MINUTE),
            refresh_token_expires: Duration::from_secs(30 * SECONDS_PER_DAY),
            remember_me_refresh_token_expires: Duration::from_secs(365 * SECONDS_PER_DAY),
            blacklist_enabled: true,
            blacklist_token_checks: vec![TokenType::Access, TokenType::Refresh],
        }
    }
}

impl JwtConfig {
    /// Whether tokens of the given type are checked against the blacklist.
    pub fn checks(&self, token_type: TokenType) -> bool {
        self.blacklist_enabled && self.blacklist_token_checks.contains(&token_type)
    }
}

/// Embedded database engines the backend can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    Sqlite,
}

impl fmt::Display for DatabaseProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseProvider::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub provider: DatabaseProvider,
    /// Path of the single database file
    pub filename: PathBuf,
    /// Create the database file and schema on first open
    pub create_db: bool,
}

impl DatabaseConfig {
    /// SQLite database stored in `filename`, created on first use.
    pub fn sqlite(filename: impl Into<PathBuf>) -> Self {
        Self {
            provider: DatabaseProvider::Sqlite,
            filename: filename.into(),
            create_db: true,
        }
    }
}

/// Serde adapter storing a [`Duration`] as whole seconds.
pub mod duration_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
