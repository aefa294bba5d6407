//! Settings file discovery and loading.
//!
//! The first existing file among `./.xtrc` and `~/.xtrc` is used. When
//! neither exists the built-in defaults apply; that is the documented
//! fallback, not an error.

use crate::error::ConfigError;
use crate::settings::Settings;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name searched for in the working directory and the home directory.
pub const XTRC_FILE_NAME: &str = ".xtrc";

/// Where a loaded record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    /// Parsed from this file
    File(PathBuf),
    /// No candidate file existed, or the chosen one could not be read
    Defaults,
}

impl fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsSource::File(path) => write!(f, "{}", path.display()),
            SettingsSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// Candidate settings files in search order: working directory, then home.
///
/// The home candidate is omitted when the home directory cannot be determined.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(XTRC_FILE_NAME)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(XTRC_FILE_NAME));
    }
    paths
}

/// Load settings from the standard candidate locations.
///
/// Re-reads the file on every call, so edits are picked up without restart.
pub fn load() -> Settings {
    load_from_candidates(&candidate_paths()).0
}

/// Load settings from the first readable candidate, reporting which one won.
///
/// Candidates that do not exist are skipped. A candidate that exists but
/// cannot be read ends the search with the defaults, the same outcome as
/// finding nothing.
pub fn load_from_candidates(paths: &[PathBuf]) -> (Settings, SettingsSource) {
    for path in paths {
        match load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {:?}", path);
                return (settings, SettingsSource::File(path.clone()));
            }
            Err(ConfigError::NotFound(_)) => {
                log::debug!("No settings file at {:?}", path);
            }
            Err(e) => {
                log::warn!("{e}; using built-in defaults");
                return (Settings::default(), SettingsSource::Defaults);
            }
        }
    }
    log::info!("No .xtrc or ~/.xtrc file found, using built-in defaults");
    (Settings::default(), SettingsSource::Defaults)
}

/// Load settings from an explicit file.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if `path` does not exist and
/// [`ConfigError::Io`] if it exists but cannot be read as UTF-8 text.
pub fn load_from(path: &Path) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    Ok(Settings::from_xtrc_str(&contents))
}
