//! Project directory layout.
//!
//! Every filesystem location the configuration refers to is derived from a
//! single project root.

use std::path::{Path, PathBuf};

use super::constants::{
    CLIENT_BUILD_DIR, CONFIG_FILE_NAME, DATABASE_FILE_NAME, ENV_ROOT, FIXTURES_DIR, STATIC_SUBDIR,
};

/// Absolute project root and the locations derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Use `root` as the project root. Relative roots are resolved against the
    /// current directory; if that fails the manifest directory is used.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        if root.is_absolute() {
            return Self { root };
        }

        match std::path::absolute(&root) {
            Ok(root) => Self { root },
            Err(e) => {
                tracing::warn!(
                    "Could not resolve project root {}: {}, using {}",
                    root.display(),
                    e,
                    Self::manifest_root().display()
                );
                Self {
                    root: Self::manifest_root(),
                }
            }
        }
    }

    /// Resolve the root from `BINGO_ROOT`, falling back to the manifest directory.
    pub fn discover() -> Self {
        Self::discover_with(|key| std::env::var(key).ok())
    }

    /// Same as [`discover`](Self::discover) with an injectable variable lookup.
    pub fn discover_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(ENV_ROOT).filter(|v| !v.trim().is_empty()) {
            Some(root) => {
                tracing::debug!("Project root taken from {}", ENV_ROOT);
                Self::new(root.trim())
            }
            None => Self::from_manifest(),
        }
    }

    /// The directory this crate was built from, i.e. the repository root.
    pub fn from_manifest() -> Self {
        Self {
            root: Self::manifest_root(),
        }
    }

    fn manifest_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/client/build`
    pub fn template_folder(&self) -> PathBuf {
        self.root.join(CLIENT_BUILD_DIR)
    }

    /// `<root>/client/build/static`
    pub fn static_folder(&self) -> PathBuf {
        self.template_folder().join(STATIC_SUBDIR)
    }

    /// `<root>/bingo.db3`
    pub fn database_file(&self) -> PathBuf {
        self.root.join(DATABASE_FILE_NAME)
    }

    /// `<root>/config.toml`
    pub fn default_config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// `<root>/tests/fixtures`
    pub fn fixtures_dir(&self) -> PathBuf {
        self.root.join(FIXTURES_DIR)
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::from_manifest()
    }
}
