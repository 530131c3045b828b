//! Configuration file reading and writing.
//!
//! Files are parsed as JSON5, which also accepts plain JSON. Saving always
//! writes pretty-printed JSON since `serde_json5` cannot serialize.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./termcard.json5` or `./termcard.json`
//! 2. User: `~/.config/termcard/config.json5` or `~/.config/termcard/config.json`

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{ConfigError, Result};

/// Local configuration file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["termcard.json5", "termcard.json"];

/// Directory under the user config dir holding termcard files.
const USER_CONFIG_DIR: &str = "termcard";

/// User configuration file names, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Lists every path a configuration file is looked up at, highest priority first.
///
/// `user_config_dir` is the platform config directory (`~/.config` on
/// Linux), or `None` when no home directory is known.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use termcard_config::persistence::candidate_paths;
///
/// let paths = candidate_paths(Some(Path::new("/home/me/.config")));
/// assert_eq!(paths[0], PathBuf::from("termcard.json5"));
/// assert_eq!(paths[3], PathBuf::from("/home/me/.config/termcard/config.json"));
/// ```
#[must_use]
pub fn candidate_paths(user_config_dir: Option<&Path>) -> Vec<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = user_config_dir
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    local.chain(user).collect()
}

/// Finds the first existing configuration file.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let config_dir = dirs::config_dir();
    candidate_paths(config_dir.as_deref())
        .into_iter()
        .inspect(|path| trace!(path = %path.display(), "probing config path"))
        .find(|path| path.exists())
}

/// Returns the user configuration directory, typically `~/.config/termcard/`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Reads and parses a JSON5 (or JSON) configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its content cannot be parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read config file");

    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value as pretty-printed JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written, or the
/// value cannot be serialized.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, config: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(write_error)?;
    debug!(path = %path.display(), "wrote config file");
    Ok(())
}
