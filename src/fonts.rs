//! X font listing through `xlsfonts`.
//!
//! `xlsfonts` is looked up next to the terminal binary (the `x_path`
//! directory) or on `PATH`.

use crate::error::LaunchError;
use crate::executable::Executable;
use std::collections::HashSet;
use std::process::Stdio;
use xt_launch_config::Settings;

pub const XLSFONTS_PROGRAM: &str = "xlsfonts";

/// Run `xlsfonts` and return the available font names.
///
/// # Errors
///
/// [`LaunchError::NotFound`] if `xlsfonts` cannot be located and
/// [`LaunchError::Spawn`] if it cannot be run.
pub fn list_fonts(settings: &Settings) -> Result<Vec<String>, LaunchError> {
    let executable = Executable::in_directory(&settings.executable_path, XLSFONTS_PROGRAM);
    let program = executable
        .locate_in_env()
        .ok_or_else(|| LaunchError::NotFound {
            program: executable.to_string(),
        })?;

    let output = std::process::Command::new(&program)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|source| LaunchError::Spawn {
            program: program.clone(),
            source,
        })?;
    if !output.status.success() {
        log::warn!("{} exited with {}", program.display(), output.status);
    }

    let fonts = parse_font_list(&String::from_utf8_lossy(&output.stdout));
    log::debug!("{} fonts listed by {}", fonts.len(), program.display());
    Ok(fonts)
}

/// One font per non-blank line, trimmed, first occurrence kept.
pub fn parse_font_list(output: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_font_list() {
        let output = "fixed\n  9x15bold \n\n-misc-fixed-medium-r-normal--13-*\nfixed\r\n";
        assert_eq!(
            parse_font_list(output),
            ["fixed", "9x15bold", "-misc-fixed-medium-r-normal--13-*"]
        );
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_font_list("\n \n").is_empty());
    }

    #[test]
    fn test_missing_xlsfonts_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let settings = Settings::default().with_executable_path(dir.path().to_string_lossy());
        let err = list_fonts(&settings).unwrap_err();
        assert!(matches!(err, LaunchError::NotFound { .. }));
    }
}
