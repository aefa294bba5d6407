//! Typed error variants for the xt-launch-config crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a settings file at an explicit path.
///
/// [`crate::load`] never returns these; it logs them and falls back to the
/// built-in defaults. They surface only from [`crate::load_from`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file does not exist.
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file exists but could not be read (permissions, invalid UTF-8, ...).
    #[error("failed to read settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
