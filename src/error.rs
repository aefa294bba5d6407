//! Typed errors for command launching.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while handing a built command to the operating system.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The terminal emulator binary could not be located.
    #[error("terminal emulator not found: {program}")]
    NotFound { program: String },

    /// The binary was found but the process could not be started.
    #[error("failed to start {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The command could not be appended to the command log.
    #[error("failed to write command log {}: {source}", path.display())]
    CommandLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Process exit status the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::NotFound { .. } => 127,
            LaunchError::Spawn { .. } | LaunchError::CommandLog { .. } => 1,
        }
    }
}
