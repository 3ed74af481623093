//! Secret key value object and generation.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use common::{ConfigError, ConfigResult};

use super::constants::{MIN_SECRET_LENGTH, SECRET_BYTES};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Secret used to sign session cookies and tokens.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SecretKey(String);

// Never print the secret
impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SecretKey").field(&"[REDACTED]").finish()
    }
}

impl SecretKey {
    /// Wrap an existing secret without validating it.
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// URL-safe base64 (no padding) of the given bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reject secrets too short to sign with.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.0.len() < MIN_SECRET_LENGTH {
            return Err(ConfigError::validation(format!(
                "SECRET_KEY must be at least {} characters long",
                MIN_SECRET_LENGTH
            )));
        }
        Ok(())
    }
}

/// Source of fresh secrets.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait SecretGenerator {
    fn generate(&self) -> SecretKey;
}

/// Draws [`SECRET_BYTES`] bytes from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSecretGenerator;

impl SecretGenerator for OsSecretGenerator {
    fn generate(&self) -> SecretKey {
        let mut bytes = [0u8; SECRET_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        SecretKey::from_bytes(&bytes)
    }
}

/// Generate a new random secret.
pub fn generate_secret() -> SecretKey {
    OsSecretGenerator.generate()
}
