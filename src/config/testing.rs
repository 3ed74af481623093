//! Fixed settings for the test suite.

use std::time::Duration;

use common::{JwtConfig, SessionConfig};

use super::paths::ProjectPaths;
use super::secret::SecretKey;
use super::settings::Settings;

/// Secret shared by every test run
pub const TEST_SECRET_KEY: &str = "test-secret-key-for-testing-only-32chars";

/// Settings for tests: debug on, a static secret, folders inside
/// `tests/fixtures`, and short token lifetimes. The environment is ignored.
pub fn load_test_config() -> Settings {
    let fixtures = ProjectPaths::from_manifest().fixtures_dir();

    Settings {
        debug: true,
        secret_key: Some(SecretKey::new(TEST_SECRET_KEY)),
        session: SessionConfig::default(),
        static_folder: fixtures.join("static"),
        template_folder: fixtures.join("templates"),
        jwt: JwtConfig {
            access_token_expires: Duration::from_secs(5),
            refresh_token_expires: Duration::from_secs(30),
            remember_me_refresh_token_expires: Duration::from_secs(60),
            ..JwtConfig::default()
        },
    }
}
