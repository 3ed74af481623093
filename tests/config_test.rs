//! Configuration provider integration tests.

use std::path::Path;

use bingo::config::{
    create_config_file, create_config_file_with, load_default_config, load_test_config,
    AppConfig, ConfigValue, InstanceConfig, MockSecretGenerator, ProjectPaths, SecretKey,
    SETTINGS_KEYS, TEST_SECRET_KEY,
};
use bingo::ConfigError;

fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

// =============================================================================
// Defaults
// =============================================================================

#[test]
fn test_default_config_exposes_all_options() {
    let settings = load_default_config();
    let entries = settings.entries();

    for key in SETTINGS_KEYS {
        assert!(entries.contains_key(key), "missing option {}", key);
    }
    assert_eq!(entries.len(), 11);
    assert_eq!(entries["DEBUG"], ConfigValue::Bool(false));
    assert_eq!(entries["JWT_BLACKLIST_ENABLED"], ConfigValue::Bool(true));
}

#[test]
fn test_default_folders_are_absolute_client_build_paths() {
    let settings = load_default_config();

    assert!(settings.static_folder.is_absolute());
    assert!(settings.template_folder.is_absolute());
    assert!(settings.static_folder.ends_with("client/build/static"));
    assert!(settings.template_folder.ends_with("client/build"));
}

#[test]
fn test_default_folders_are_rooted_at_the_repository() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let settings = load_default_config();

    assert_eq!(settings.template_folder, root.join("client").join("build"));
    assert_eq!(
        settings.static_folder,
        root.join("client").join("build").join("static")
    );
}

// =============================================================================
// Test fixture config
// =============================================================================

#[test]
fn test_fixture_config_points_into_fixtures() {
    let settings = load_test_config();

    assert!(settings.debug);
    assert!(settings.static_folder.starts_with(fixtures_dir()));
    assert!(settings.template_folder.starts_with(fixtures_dir()));
    assert!(settings.static_folder.is_dir());
    assert!(settings.template_folder.join("index.html").is_file());
    assert_eq!(
        settings.secret_key.as_ref().map(SecretKey::expose),
        Some(TEST_SECRET_KEY)
    );
}

// =============================================================================
// Bootstrap
// =============================================================================

#[test]
fn test_create_config_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("config.toml");

    assert!(create_config_file(&target).unwrap());
    let first = std::fs::read_to_string(&target).unwrap();

    assert!(!create_config_file(&target).unwrap());
    let second = std::fs::read_to_string(&target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_generated_file_has_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("config.toml");
    create_config_file(&target).unwrap();

    let table: toml::Table = std::fs::read_to_string(&target).unwrap().parse().unwrap();
    for key in ["app", "max_tickets_per_user", "admins", "options"] {
        assert!(table.contains_key(key), "missing {}", key);
    }
    let app = table["app"].as_table().unwrap();
    assert_eq!(app["debug"].as_bool(), Some(false));
    assert!(app["database"]["filename"]
        .as_str()
        .unwrap()
        .ends_with("bingo.db3"));
}

#[test]
fn test_separate_files_get_different_secrets() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.toml");
    let second = dir.path().join("second.toml");

    create_config_file(&first).unwrap();
    create_config_file(&second).unwrap();

    let first = InstanceConfig::load(&first).unwrap();
    let second = InstanceConfig::load(&second).unwrap();
    assert_ne!(first.app.secret_key, second.app.secret_key);
    assert_eq!(first.app.secret_key.len(), 43);
}

#[test]
fn test_second_call_never_generates_a_secret() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("config.toml");
    let paths = ProjectPaths::new(dir.path());

    let mut secrets = MockSecretGenerator::new();
    secrets
        .expect_generate()
        .times(1)
        .returning(|| SecretKey::new("integration-secret-0123456789abcdefghij"));

    assert!(create_config_file_with(&target, &paths, &secrets).unwrap());
    assert!(!create_config_file_with(&target, &paths, &secrets).unwrap());
}

#[test]
fn test_unwritable_target_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no-such-dir").join("config.toml");

    match create_config_file(&target) {
        Err(ConfigError::Io { path, .. }) => assert_eq!(path, target),
        other => panic!("expected Io error, got {:?}", other),
    }
}

// =============================================================================
// Full load
// =============================================================================

#[test]
fn test_bootstrap_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("config.toml");
    let paths = ProjectPaths::new(dir.path());

    let config = AppConfig::bootstrap(&paths, &target).unwrap();
    let reloaded = AppConfig::load(&paths, &target).unwrap();

    assert_eq!(config.instance, reloaded.instance);
    assert!(config.settings.secret_key.is_some());
    assert_eq!(
        config.settings.static_folder,
        dir.path().join("client/build/static")
    );
}

#[test]
fn test_load_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("config.toml");
    std::fs::write(
        &target,
        r#"
max_tickets_per_user = 5
MAX_TICKETS = 9

[app]
secret_key = "0123456789abcdef0123456789abcdef"

[app.database]
provider = "sqlite"
filename = "/tmp/bingo.db3"
create_db = true
"#,
    )
    .unwrap();

    let result = AppConfig::load(&ProjectPaths::new(dir.path()), &target);
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn test_ensure_folders_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("config.toml");
    let paths = ProjectPaths::new(dir.path());

    let config = AppConfig::bootstrap(&paths, &target).unwrap();
    config.settings.ensure_folders().unwrap();

    assert!(paths.static_folder().is_dir());
    assert!(paths.template_folder().is_dir());
}
