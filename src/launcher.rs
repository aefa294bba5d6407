//! Hands a built [`Command`] to the operating system.

use crate::command::Command;
use crate::error::LaunchError;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Spawn-time options that are not part of the command itself.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Append each launched command line to this file
    pub command_log: Option<PathBuf>,
    /// `PATH`-style list used to resolve bare program names
    pub search_path: Option<OsString>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            command_log: None,
            search_path: std::env::var_os("PATH"),
        }
    }
}

impl LaunchOptions {
    /// `~/Documents/xterm.log`, if the home directory is known.
    pub fn default_command_log() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join("Documents").join("xterm.log"))
    }

    pub fn with_command_log(mut self, path: impl Into<PathBuf>) -> Self {
        self.command_log = Some(path.into());
        self
    }
}

/// Resolve the program a command would run.
///
/// # Errors
///
/// [`LaunchError::NotFound`] when the binary does not exist or is not
/// executable; callers report this instead of attempting the spawn.
pub fn resolve(command: &Command, options: &LaunchOptions) -> Result<PathBuf, LaunchError> {
    command
        .program()
        .locate(options.search_path.as_deref())
        .ok_or_else(|| LaunchError::NotFound {
            program: command.program().to_string(),
        })
}

/// Start the terminal detached from our stdio and return its process id.
///
/// The command log is written after a successful spawn. Failing to write it
/// is logged and does not turn the launch into an error, since the terminal
/// is already running.
pub fn launch(command: &Command, options: &LaunchOptions) -> Result<u32, LaunchError> {
    let program = resolve(command, options)?;
    log::debug!("Spawning {:?} with args {:?}", program, command.args());

    let child = std::process::Command::new(&program)
        .args(command.args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;
    let pid = child.id();
    log::info!("Launched {} (pid {pid}): {}", program.display(), command.title());

    if let Some(ref log_path) = options.command_log
        && let Err(e) = append_command_log(log_path, command)
    {
        log::warn!("{e}");
    }
    Ok(pid)
}

/// Append the command's shell line, surrounded by newlines, to `path`.
///
/// Creates the file and its parent directories if needed.
pub fn append_command_log(path: &Path, command: &Command) -> Result<(), LaunchError> {
    let wrap = |source: std::io::Error| LaunchError::CommandLog {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(wrap)?;
    write!(file, "\n{}\n", command.to_shell_string()).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Identity, Overrides, build};
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use xt_launch_config::Settings;

    fn sample(settings: &Settings) -> Command {
        let now = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        build(settings, &Overrides::default(), now, &Identity::new("u", "h"))
    }

    #[test]
    fn test_missing_terminal_is_not_found() {
        let empty = TempDir::new().unwrap();
        let options = LaunchOptions {
            command_log: Some(empty.path().join("xterm.log")),
            search_path: Some(empty.path().as_os_str().to_owned()),
        };
        let err = launch(&sample(&Settings::default()), &options).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound { ref program } if program == "xterm"));
        assert_eq!(err.exit_code(), 127);
        assert!(!empty.path().join("xterm.log").exists());
    }

    #[test]
    fn test_explicit_directory_not_found_names_full_path() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default().with_executable_path(dir.path().to_string_lossy());
        let err = resolve(&sample(&settings), &LaunchOptions::default()).unwrap_err();
        let LaunchError::NotFound { program } = err else {
            panic!("expected NotFound");
        };
        assert!(program.ends_with("xterm"));
        assert!(program.starts_with(&*dir.path().to_string_lossy()));
    }

    /// A directory holding `xterm` as a symlink to a no-op system binary.
    #[cfg(unix)]
    fn fake_terminal_dir() -> Option<TempDir> {
        let target = ["/bin/true", "/usr/bin/true"]
            .into_iter()
            .map(Path::new)
            .find(|p| p.exists())?;
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(target, dir.path().join("xterm")).unwrap();
        Some(dir)
    }

    #[cfg(unix)]
    #[test]
    fn test_launch_writes_command_log() {
        let Some(bin) = fake_terminal_dir() else {
            return;
        };
        let logs = TempDir::new().unwrap();
        let log_path = logs.path().join("xterm.log");
        let options = LaunchOptions {
            command_log: Some(log_path.clone()),
            search_path: Some(bin.path().as_os_str().to_owned()),
        };
        let cmd = sample(&Settings::default());

        launch(&cmd, &options).unwrap();
        let contents = fs::read_to_string(&log_path).unwrap();
        assert_eq!(contents, format!("\n{}\n", cmd.to_shell_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_unwritable_command_log_still_returns_pid() {
        let Some(bin) = fake_terminal_dir() else {
            return;
        };
        let logs = TempDir::new().unwrap();
        let blocker = logs.path().join("file");
        fs::write(&blocker, "").unwrap();
        let options = LaunchOptions {
            command_log: Some(blocker.join("xterm.log")),
            search_path: Some(bin.path().as_os_str().to_owned()),
        };

        let cmd = sample(&Settings::default());
        let pid = launch(&cmd, &options).unwrap();
        assert!(pid > 0);
        let err = append_command_log(&blocker.join("xterm.log"), &cmd).unwrap_err();
        assert!(matches!(err, LaunchError::CommandLog { .. }));
    }

    #[test]
    fn test_command_log_appends_lines() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("Documents").join("xterm.log");
        let cmd = sample(&Settings::default());

        append_command_log(&log_path, &cmd).unwrap();
        append_command_log(&log_path, &cmd).unwrap();

        let contents = fs::read_to_string(&log_path).unwrap();
        let line = cmd.to_shell_string();
        assert_eq!(contents, format!("\n{line}\n\n{line}\n"));
    }
}
