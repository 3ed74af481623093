//! Fully resolved configuration handed to the rest of the application.

use std::collections::BTreeMap;
use std::path::Path;

use common::ConfigResult;

use super::bootstrap::create_config_file_with;
use super::constants::KEY_MAX_TICKETS_PER_USER;
use super::instance::InstanceConfig;
use super::paths::ProjectPaths;
use super::secret::OsSecretGenerator;
use super::settings::{ConfigValue, Settings};

/// Settings merged with the instance file. Built once at startup and shared
/// by reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub settings: Settings,
    pub instance: InstanceConfig,
}

impl AppConfig {
    /// Defaults, then the instance file at `path`, then `BINGO_*` overrides.
    ///
    /// # Errors
    /// Fails if an override is malformed, the file cannot be read or parsed,
    /// or the merged result breaks an invariant.
    pub fn load(paths: &ProjectPaths, path: &Path) -> ConfigResult<Self> {
        let instance = InstanceConfig::load(path)?;
        Self::resolve(paths, instance, |key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load), generating the instance file first if it
    /// does not exist yet.
    pub fn bootstrap(paths: &ProjectPaths, path: &Path) -> ConfigResult<Self> {
        if create_config_file_with(path, paths, &OsSecretGenerator)? {
            tracing::info!("First run: generated a new secret");
        }
        Self::load(paths, path)
    }

    /// Merge an in-memory instance file with overrides from `lookup`.
    ///
    /// Overrides are applied last, so `BINGO_DEBUG` and `BINGO_SECRET_KEY`
    /// win over the values stored in the file.
    pub fn resolve<F>(paths: &ProjectPaths, instance: InstanceConfig, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::defaults_for(paths);
        settings.apply_instance(&instance);
        settings.apply_overrides(paths, lookup)?;
        settings.validate()?;

        Ok(Self { settings, instance })
    }

    /// Settings table plus the instance-level ticket allowance.
    pub fn entries(&self) -> BTreeMap<&'static str, ConfigValue> {
        let mut entries = self.settings.entries();
        entries.insert(
            KEY_MAX_TICKETS_PER_USER,
            ConfigValue::Integer(i64::from(self.instance.max_tickets_per_user)),
        );
        entries
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::secret::{MockSecretGenerator, SecretKey};

    const FILE_SECRET: &str = "app-config-test-secret-0123456789abcdef";

    fn paths() -> ProjectPaths {
        ProjectPaths::new("/srv/bingo")
    }

    fn instance(debug: Option<bool>) -> InstanceConfig {
        let mut secrets = MockSecretGenerator::new();
        secrets
            .expect_generate()
            .returning(|| SecretKey::new(FILE_SECRET));

        let mut config = InstanceConfig::generate(&paths(), &secrets);
        config.app.debug = debug;
        config
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_instance_file_wins_over_defaults() {
        let config = AppConfig::resolve(&paths(), instance(Some(true)), lookup(&[])).unwrap();

        assert!(config.settings.debug);
        assert_eq!(
            config.settings.secret_key.as_ref().map(SecretKey::expose),
            Some(FILE_SECRET)
        );
    }

    #[test]
    fn test_env_debug_wins_over_instance_file() {
        let config = AppConfig::resolve(
            &paths(),
            instance(Some(false)),
            lookup(&[("BINGO_DEBUG", "true")]),
        )
        .unwrap();

        assert!(config.settings.debug);
    }

    #[test]
    fn test_env_secret_wins_over_instance_file() {
        let config = AppConfig::resolve(
            &paths(),
            instance(Some(false)),
            lookup(&[("BINGO_SECRET_KEY", "env-secret-0123456789abcdefghijklmnop")]),
        )
        .unwrap();

        assert_eq!(
            config.settings.secret_key.as_ref().map(SecretKey::expose),
            Some("env-secret-0123456789abcdefghijklmnop")
        );
        // the file itself is untouched
        assert_eq!(config.instance.app.secret_key.expose(), FILE_SECRET);
    }

    #[test]
    fn test_unset_debug_in_file_keeps_default() {
        let config = AppConfig::resolve(&paths(), instance(None), lookup(&[])).unwrap();
        assert!(!config.settings.debug);
    }

    #[test]
    fn test_short_env_secret_fails_validation() {
        let result = AppConfig::resolve(
            &paths(),
            instance(None),
            lookup(&[("BINGO_SECRET_KEY", "short")]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_entries_include_ticket_allowance() {
        let config = AppConfig::resolve(&paths(), instance(Some(false)), lookup(&[])).unwrap();

        let entries = config.entries();
        assert_eq!(entries[KEY_MAX_TICKETS_PER_USER], ConfigValue::Integer(5));
        assert_eq!(entries.len(), 12);
    }
}
