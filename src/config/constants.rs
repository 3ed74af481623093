//! Configuration constants
//!
//! Option names consumed by the web layer, file names, and the fixed values
//! used when generating a fresh instance file.

// =============================================================================
// Option Names
// =============================================================================

pub const KEY_DEBUG: &str = "DEBUG";
pub const KEY_SESSION_COOKIE_SECURE: &str = "SESSION_COOKIE_SECURE";
pub const KEY_SESSION_COOKIE_HTTPONLY: &str = "SESSION_COOKIE_HTTPONLY";
pub const KEY_PERMANENT_SESSION_LIFETIME: &str = "PERMANENT_SESSION_LIFETIME";
pub const KEY_STATIC_FOLDER: &str = "STATIC_FOLDER";
pub const KEY_TEMPLATE_FOLDER: &str = "TEMPLATE_FOLDER";
pub const KEY_JWT_ACCESS_TOKEN_EXPIRES: &str = "JWT_ACCESS_TOKEN_EXPIRES";
pub const KEY_JWT_REFRESH_TOKEN_EXPIRES: &str = "JWT_REFRESH_TOKEN_EXPIRES";
pub const KEY_REMEMBER_ME_REFRESH_TOKEN_EXPIRES: &str = "REMEMBER_ME_REFRESH_TOKEN_EXPIRES";
pub const KEY_JWT_BLACKLIST_ENABLED: &str = "JWT_BLACKLIST_ENABLED";
pub const KEY_JWT_BLACKLIST_TOKEN_CHECKS: &str = "JWT_BLACKLIST_TOKEN_CHECKS";

/// Instance-level option exposed alongside the settings table
pub const KEY_MAX_TICKETS_PER_USER: &str = "MAX_TICKETS_PER_USER";

/// Never listed in the settings table; only overridable
pub const KEY_SECRET_KEY: &str = "SECRET_KEY";

/// Every option a [`Settings`](super::Settings) exposes, in display order
pub const SETTINGS_KEYS: &[&str] = &[
    KEY_DEBUG,
    KEY_SESSION_COOKIE_SECURE,
    KEY_SESSION_COOKIE_HTTPONLY,
    KEY_PERMANENT_SESSION_LIFETIME,
    KEY_STATIC_FOLDER,
    KEY_TEMPLATE_FOLDER,
    KEY_JWT_ACCESS_TOKEN_EXPIRES,
    KEY_JWT_REFRESH_TOKEN_EXPIRES,
    KEY_REMEMBER_ME_REFRESH_TOKEN_EXPIRES,
    KEY_JWT_BLACKLIST_ENABLED,
    KEY_JWT_BLACKLIST_TOKEN_CHECKS,
];

// =============================================================================
// Environment
// =============================================================================

/// Overrides the project root used to derive folders and the database path
pub const ENV_ROOT: &str = "BINGO_ROOT";

/// Prefix for per-option overrides, e.g. `BINGO_JWT_ACCESS_TOKEN_EXPIRES`
pub const ENV_PREFIX: &str = "BINGO_";

// =============================================================================
// Filesystem Layout
// =============================================================================

/// Default name of the generated instance file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Database file name, relative to the project root
pub const DATABASE_FILE_NAME: &str = "bingo.db3";

/// Client build output, relative to the project root
pub const CLIENT_BUILD_DIR: &str = "client/build";

/// Static assets, relative to the client build output
pub const STATIC_SUBDIR: &str = "static";

/// Test fixtures, relative to the project root
pub const FIXTURES_DIR: &str = "tests/fixtures";

// =============================================================================
// Security
// =============================================================================

/// Number of random bytes in a generated secret
pub const SECRET_BYTES: usize = 32;

/// Minimum secret length accepted when loading (security requirement)
pub const MIN_SECRET_LENGTH: usize = 32;

// =============================================================================
// Instance Defaults
// =============================================================================

/// Ticket allowance written into a fresh instance file
pub const DEFAULT_MAX_TICKETS_PER_USER: u32 = 5;
