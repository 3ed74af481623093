//! First-run generation of the instance configuration file.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use common::{ConfigError, ConfigResult};

use super::instance::InstanceConfig;
use super::paths::ProjectPaths;
use super::secret::{OsSecretGenerator, SecretGenerator};

const FILE_HEADER: &str = "# Instance configuration for the bingo backend.\n\
# Generated on first run. Keep this file private: it holds the signing secret.\n\n";

/// Write a starter configuration file to `target` unless one already exists.
///
/// Returns `Ok(true)` if the file was created and `Ok(false)` if it was
/// already present. An existing file is never touched.
///
/// # Errors
/// Returns [`ConfigError::Io`] if the file cannot be created or written,
/// e.g. when the parent directory is missing or read-only.
pub fn create_config_file(target: &Path) -> ConfigResult<bool> {
    create_config_file_with(target, &ProjectPaths::discover(), &OsSecretGenerator)
}

/// [`create_config_file`] with an explicit project root and secret source.
pub fn create_config_file_with(
    target: &Path,
    paths: &ProjectPaths,
    secrets: &dyn SecretGenerator,
) -> ConfigResult<bool> {
    if target.exists() {
        tracing::info!("Configuration file {} already exists", target.display());
        return Ok(false);
    }

    let config = InstanceConfig::generate(paths, secrets);
    let content = format!("{}{}", FILE_HEADER, config.to_toml()?);

    // Exclusive create: if another process won the race since the check
    // above, its file and secret stay in place.
    let file = match open_new(target) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            tracing::info!(
                "Configuration file {} was created concurrently, keeping it",
                target.display()
            );
            return Ok(false);
        }
        Err(e) => return Err(ConfigError::io(target, e)),
    };

    write_or_remove(target, file, content.as_bytes(), |file| file.sync_all())?;

    tracing::info!("Created configuration file {}", target.display());
    Ok(true)
}

/// Write `content` to the freshly created `target` and run `finish`. On any
/// failure the file is removed: a truncated file would block the next run
/// from regenerating.
fn write_or_remove<W, F>(target: &Path, mut out: W, content: &[u8], finish: F) -> ConfigResult<()>
where
    W: Write,
    F: FnOnce(&mut W) -> std::io::Result<()>,
{
    let result = out.write_all(content).and_then(|()| finish(&mut out));
    drop(out);

    if let Err(e) = result {
        if let Err(cleanup) = std::fs::remove_file(target) {
            tracing::warn!("Could not remove partial {}: {}", target.display(), cleanup);
        }
        return Err(ConfigError::io(target, e));
    }
    Ok(())
}

#[cfg(unix)]
fn open_new(path: &Path) -> std::io::Result<File> {
    use std::os::unix::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .mode(0o600)
        .open(path)
}

#[cfg(not(unix))]
fn open_new(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}
