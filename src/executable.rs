//! Terminal-binary resolution.
//!
//! A command names its program either as an explicit path (when `x_path` is
//! configured) or as a bare name to be looked up on `PATH`. Looking it up is
//! kept apart from building the command so building stays free of I/O.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// The terminal emulator launched by every command.
pub const TERMINAL_PROGRAM: &str = "xterm";

/// How a program is to be found at spawn time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Executable {
    /// `{x_path}/{program}`
    Explicit(PathBuf),
    /// Bare program name, resolved through `PATH`
    Search(String),
}

impl Executable {
    /// `program` inside `directory`, or a `PATH` lookup when `directory` is empty.
    pub fn in_directory(directory: &str, program: &str) -> Self {
        if directory.is_empty() {
            Executable::Search(program.to_string())
        } else {
            Executable::Explicit(Path::new(directory).join(program))
        }
    }

    /// The path or bare name as it would be passed to `exec`.
    pub fn as_os_str(&self) -> &OsStr {
        match self {
            Executable::Explicit(path) => path.as_os_str(),
            Executable::Search(name) => OsStr::new(name),
        }
    }

    /// Locate the binary, searching `path_var` (a `PATH`-style list) for bare names.
    ///
    /// Returns `None` when no executable file is found.
    pub fn locate(&self, path_var: Option<&OsStr>) -> Option<PathBuf> {
        match self {
            Executable::Explicit(path) => is_executable(path).then(|| path.clone()),
            Executable::Search(name) => {
                let path_var = path_var?;
                std::env::split_paths(path_var)
                    .filter(|dir| !dir.as_os_str().is_empty())
                    .map(|dir| dir.join(name))
                    .find(|candidate| is_executable(candidate))
            }
        }
    }

    /// [`Self::locate`] against the current process's `PATH`.
    pub fn locate_in_env(&self) -> Option<PathBuf> {
        let path_var = std::env::var_os("PATH");
        self.locate(path_var.as_deref())
    }
}

impl fmt::Display for Executable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Executable::Explicit(path) => write!(f, "{}", path.display()),
            Executable::Search(name) => f.write_str(name),
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
