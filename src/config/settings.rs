//! Resolved application settings.
//!
//! [`Settings`] is the typed replacement for the option dictionary the web
//! layer consumes. It is built once at startup (compiled defaults, then the
//! instance file, then `BINGO_*` environment overrides) and passed by
//! reference afterwards. [`Settings::entries`] exposes the same data under
//! the exact option names.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use common::{ConfigError, ConfigResult, JwtConfig, SessionConfig, TokenType};

use super::constants::*;
use super::instance::InstanceConfig;
use super::paths::ProjectPaths;
use super::secret::SecretKey;

/// A single option value as seen through the name-keyed view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    Integer(i64),
    Duration(Duration),
    Path(PathBuf),
    List(Vec<String>),
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            ConfigValue::Duration(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ConfigValue::Path(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(v) => write!(f, "{}", v),
            ConfigValue::Integer(v) => write!(f, "{}", v),
            ConfigValue::Duration(v) => write!(f, "{}s", v.as_secs()),
            ConfigValue::Path(v) => write!(f, "{}", v.display()),
            ConfigValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

// Durations go out as whole seconds, paths as strings
impl Serialize for ConfigValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ConfigValue::Bool(v) => serializer.serialize_bool(*v),
            ConfigValue::Integer(v) => serializer.serialize_i64(*v),
            ConfigValue::Duration(v) => serializer.serialize_u64(v.as_secs()),
            ConfigValue::Path(v) => serializer.serialize_str(&v.to_string_lossy()),
            ConfigValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub secret_key: Option<SecretKey>,
    pub session: SessionConfig,
    pub static_folder: PathBuf,
    pub template_folder: PathBuf,
    pub jwt: JwtConfig,
}

/// Settings with the compiled defaults, rooted at the directory this crate
/// was built from. Reads nothing from the environment.
pub fn load_default_config() -> Settings {
    Settings::defaults_for(&ProjectPaths::from_manifest())
}

impl Settings {
    /// Compiled defaults with folders derived from `paths`.
    pub fn defaults_for(paths: &ProjectPaths) -> Self {
        Self {
            debug: false,
            secret_key: None,
            session: SessionConfig::default(),
            static_folder: paths.static_folder(),
            template_folder: paths.template_folder(),
            jwt: JwtConfig::default(),
        }
    }

    /// Defaults with `BINGO_*` environment overrides applied.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] if an override cannot be parsed.
    pub fn from_env(paths: &ProjectPaths) -> ConfigResult<Self> {
        Self::from_lookup(paths, |key| std::env::var(key).ok())
    }

    /// Defaults with overrides taken from `lookup`, keyed by the prefixed
    /// variable name (`BINGO_DEBUG`, `BINGO_STATIC_FOLDER`, ...).
    pub fn from_lookup<F>(paths: &ProjectPaths, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::defaults_for(paths);
        settings.apply_overrides(paths, lookup)?;
        Ok(settings)
    }

    /// Apply every override `lookup` provides on top of the current values.
    /// Relative folder overrides are resolved against the project root.
    pub fn apply_overrides<F>(&mut self, paths: &ProjectPaths, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = EnvOverrides { lookup: &lookup };

        if let Some(v) = overrides.bool(KEY_DEBUG)? {
            self.debug = v;
        }
        if let Some(v) = overrides.string(KEY_SECRET_KEY) {
            self.secret_key = Some(SecretKey::new(v));
        }
        if let Some(v) = overrides.bool(KEY_SESSION_COOKIE_SECURE)? {
            self.session.cookie_secure = v;
        }
        if let Some(v) = overrides.bool(KEY_SESSION_COOKIE_HTTPONLY)? {
            self.session.cookie_httponly = v;
        }
        if let Some(v) = overrides.duration(KEY_PERMANENT_SESSION_LIFETIME)? {
            self.session.permanent_lifetime = v;
        }
        if let Some(v) = overrides.string(KEY_STATIC_FOLDER) {
            self.static_folder = paths.root().join(v);
        }
        if let Some(v) = overrides.string(KEY_TEMPLATE_FOLDER) {
            self.template_folder = paths.root().join(v);
        }
        if let Some(v) = overrides.duration(KEY_JWT_ACCESS_TOKEN_EXPIRES)? {
            self.jwt.access_token_expires = v;
        }
        if let Some(v) = overrides.duration(KEY_JWT_REFRESH_TOKEN_EXPIRES)? {
            self.jwt.refresh_token_expires = v;
        }
        if let Some(v) = overrides.duration(KEY_REMEMBER_ME_REFRESH_TOKEN_EXPIRES)? {
            self.jwt.remember_me_refresh_token_expires = v;
        }
        if let Some(v) = overrides.bool(KEY_JWT_BLACKLIST_ENABLED)? {
            self.jwt.blacklist_enabled = v;
        }
        if let Some(v) = overrides.token_types(KEY_JWT_BLACKLIST_TOKEN_CHECKS)? {
            self.jwt.blacklist_token_checks = v;
        }

        Ok(())
    }

    /// Overlay the values the instance file owns. A `debug` flag the file
    /// does not set leaves the current value alone.
    pub fn apply_instance(&mut self, instance: &InstanceConfig) {
        if let Some(debug) = instance.app.debug {
            self.debug = debug;
        }
        self.secret_key = Some(instance.app.secret_key.clone());
    }

    /// Name-keyed view over every option.
    pub fn entries(&self) -> BTreeMap<&'static str, ConfigValue> {
        SETTINGS_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    /// Look up one option by its exact name.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        let value = match key {
            KEY_DEBUG => ConfigValue::Bool(self.debug),
            KEY_SESSION_COOKIE_SECURE => ConfigValue::Bool(self.session.cookie_secure),
            KEY_SESSION_COOKIE_HTTPONLY => ConfigValue::Bool(self.session.cookie_httponly),
            KEY_PERMANENT_SESSION_LIFETIME => {
                ConfigValue::Duration(self.session.permanent_lifetime)
            }
            KEY_STATIC_FOLDER => ConfigValue::Path(self.static_folder.clone()),
            KEY_TEMPLATE_FOLDER => ConfigValue::Path(self.template_folder.clone()),
            KEY_JWT_ACCESS_TOKEN_EXPIRES => ConfigValue::Duration(self.jwt.access_token_expires),
            KEY_JWT_REFRESH_TOKEN_EXPIRES => ConfigValue::Duration(self.jwt.refresh_token_expires),
            KEY_REMEMBER_ME_REFRESH_TOKEN_EXPIRES => {
                ConfigValue::Duration(self.jwt.remember_me_refresh_token_expires)
            }
            KEY_JWT_BLACKLIST_ENABLED => ConfigValue::Bool(self.jwt.blacklist_enabled),
            KEY_JWT_BLACKLIST_TOKEN_CHECKS => ConfigValue::List(
                self.jwt
                    .blacklist_token_checks
                    .iter()
                    .map(|t| t.as_str().to_string())
                    .collect(),
            ),
            _ => return None,
        };
        Some(value)
    }

    /// Check the invariants the web layer relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        for (key, folder) in [
            (KEY_STATIC_FOLDER, &self.static_folder),
            (KEY_TEMPLATE_FOLDER, &self.template_folder),
        ] {
            if !folder.is_absolute() {
                return Err(ConfigError::validation(format!(
                    "{} must be an absolute path, got {}",
                    key,
                    folder.display()
                )));
            }
        }

        let checks = &self.jwt.blacklist_token_checks;
        if self.jwt.blacklist_enabled && checks.is_empty() {
            return Err(ConfigError::validation(format!(
                "{} must not be empty while {} is set",
                KEY_JWT_BLACKLIST_TOKEN_CHECKS, KEY_JWT_BLACKLIST_ENABLED
            )));
        }
        let unique: BTreeSet<&TokenType> = checks.iter().collect();
        if unique.len() != checks.len() {
            return Err(ConfigError::validation(format!(
                "{} lists a token type more than once",
                KEY_JWT_BLACKLIST_TOKEN_CHECKS
            )));
        }

        if let Some(secret) = &self.secret_key {
            secret.validate()?;
        }

        Ok(())
    }

    /// Create the static and template folders if they are missing.
    pub fn ensure_folders(&self) -> ConfigResult<()> {
        for folder in [&self.template_folder, &self.static_folder] {
            std::fs::create_dir_all(folder).map_err(|e| ConfigError::io(folder, e))?;
        }
        Ok(())
    }
}

/// Reads `BINGO_<KEY>` values through a lookup function.
struct EnvOverrides<'a, F> {
    lookup: &'a F,
}

impl<F> EnvOverrides<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn var_name(key: &str) -> String {
        format!("{}{}", ENV_PREFIX, key)
    }

    fn string(&self, key: &str) -> Option<String> {
        let name = Self::var_name(key);
        let value = (self.lookup)(&name)?;
        tracing::debug!("Override {} from {}", key, name);
        Some(value.trim().to_string())
    }

    fn bool(&self, key: &str) -> ConfigResult<Option<bool>> {
        let Some(raw) = self.string(key) else {
            return Ok(None);
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(ConfigError::invalid_value(
                Self::var_name(key),
                format!("expected a boolean, got '{}'", raw),
            )),
        }
    }

    fn duration(&self, key: &str) -> ConfigResult<Option<Duration>> {
        let Some(raw) = self.string(key) else {
            return Ok(None);
        };
        raw.parse::<u64>()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| {
                ConfigError::invalid_value(
                    Self::var_name(key),
                    format!("expected a whole number of seconds, got '{}'", raw),
                )
            })
    }

    fn token_types(&self, key: &str) -> ConfigResult<Option<Vec<TokenType>>> {
        let Some(raw) = self.string(key) else {
            return Ok(None);
        };
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<TokenType>().map_err(|e| {
                    ConfigError::invalid_value(Self::var_name(key), e.to_string())
                })
            })
            .collect::<ConfigResult<Vec<_>>>()
            .map(Some)
    }
}
