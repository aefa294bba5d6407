//! Launch-command synthesis.
//!
//! [`build`] turns a [`Settings`] record plus per-launch [`Overrides`] into a
//! [`Command`]. It performs no I/O: the timestamp and the user identity are
//! passed in, so equal inputs always give an equal command.

use crate::executable::{Executable, TERMINAL_PROGRAM};
use chrono::NaiveDateTime;
use std::fmt;
use xt_launch_config::{ColorPair, Settings, defaults};

/// Format of the timestamp in the window title.
pub const TITLE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flags that are always followed by a value token.
const VALUED_FLAGS: [&str; 7] = ["-sl", "-fa", "-fs", "-geometry", "-fg", "-bg", "-title"];

/// Per-launch values supplied by the UI. Never written back to `.xtrc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Palette pair of the button that was pressed
    pub preset: Option<ColorPair>,
    /// Colors typed into the custom color fields
    pub custom_colors: Option<ColorPair>,
    /// Use `custom_colors` instead of `preset`
    pub use_custom_colors: bool,
    /// Raw font-size text; wins over the stored size when present
    pub font_size: Option<String>,
    /// Font family text; wins over the stored family when non-blank
    pub font_family: Option<String>,
    /// Session logging; falls back to the stored flag when `None`
    pub logging_enabled: Option<bool>,
}

impl Overrides {
    /// Launch with one of the palette pairs.
    pub fn preset(pair: ColorPair) -> Self {
        Self {
            preset: Some(pair),
            ..Self::default()
        }
    }

    /// Launch with user-entered colors.
    pub fn custom(pair: ColorPair) -> Self {
        Self {
            custom_colors: Some(pair),
            use_custom_colors: true,
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = Some(enabled);
        self
    }
}

/// The `user@host` shown in window titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
}

impl Identity {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// Read the current user and host name, using `"unknown"` for either if unavailable.
    pub fn detect() -> Self {
        let host = hostname::get()
            .ok()
            .map(|h| h.to_string_lossy().to_string());

        let user = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok();

        Self::from_lookup(user, host)
    }

    /// Identity from looked-up values; missing or blank parts become `"unknown"`.
    pub fn from_lookup(user: Option<String>, host: Option<String>) -> Self {
        let known = |value: Option<String>| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| "unknown".to_string())
        };
        Self {
            user: known(user),
            host: known(host),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.user, self.host)
    }
}

/// A ready-to-execute terminal invocation.
///
/// `args()` holds one token per logical value, so values containing spaces
/// (the title, a font family) need no quoting when passed to `exec`.
/// [`Command::to_shell_string`] quotes them for a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    program: Executable,
    args: Vec<String>,
    title: String,
}

impl Command {
    pub fn program(&self) -> &Executable {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// `(flag, value)` pairs in argument order; bare flags have no value.
    ///
    /// Lets the UI show or check individual settings of a built command.
    pub fn flags(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        let mut tokens = self.args.iter().map(String::as_str);
        std::iter::from_fn(move || {
            let flag = tokens.next()?;
            let value = if VALUED_FLAGS.contains(&flag) {
                tokens.next()
            } else {
                None
            };
            Some((flag, value))
        })
    }

    /// Value of a valued flag such as `-geometry`. `None` for bare flags
    /// and for flags not present.
    pub fn value_of(&self, flag: &str) -> Option<&str> {
        self.flags()
            .find(|(name, _)| *name == flag)
            .and_then(|(_, value)| value)
    }

    /// Whether `flag` appears in flag position, never matching a value token.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags().any(|(name, _)| name == flag)
    }

    /// The program and arguments as a single POSIX-shell-safe line.
    pub fn to_shell_string(&self) -> String {
        let program = self.program.to_string();
        let words = std::iter::once(program.as_str()).chain(self.args.iter().map(String::as_str));
        shell_words::join(words)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_shell_string())
    }
}

/// Build the launch command for `settings` with `overrides` applied.
///
/// Precedence: custom colors when `use_custom_colors` is set, else the preset
/// pair, else the stored colors. Font-size and font-family overrides always
/// win over stored values. Values that cannot be used (a non-numeric font
/// size, zero dimensions, a blank font) fall back to the built-in defaults.
pub fn build(
    settings: &Settings,
    overrides: &Overrides,
    now: NaiveDateTime,
    identity: &Identity,
) -> Command {
    let colors = resolve_colors(settings, overrides);
    let font_family = resolve_font_family(settings, overrides);
    let font_size = resolve_font_size(settings, overrides);
    let logging = overrides
        .logging_enabled
        .unwrap_or(settings.logging_enabled);
    let geometry = format!(
        "{}x{}",
        non_zero(settings.cols, defaults::cols()),
        non_zero(settings.rows, defaults::rows())
    );
    let title = format!("{identity} {}", now.format(TITLE_TIMESTAMP_FORMAT));

    let mut args = vec![
        "-sl".to_string(),
        settings.scrollback_lines.to_string(),
        "-fa".to_string(),
        font_family,
        "-fs".to_string(),
        font_size.to_string(),
        "-geometry".to_string(),
        geometry,
        "-fg".to_string(),
        colors.foreground,
        "-bg".to_string(),
        colors.background,
        "-title".to_string(),
        title.clone(),
    ];
    if settings.scrollbar {
        args.push("-sb".to_string());
    }
    if logging {
        args.push("-l".to_string());
    }

    let command = Command {
        program: Executable::in_directory(&settings.executable_path, TERMINAL_PROGRAM),
        args,
        title,
    };
    log::debug!("cmd: {}", command);
    command
}

fn resolve_colors(settings: &Settings, overrides: &Overrides) -> ColorPair {
    let chosen = if overrides.use_custom_colors {
        overrides.custom_colors.as_ref()
    } else {
        overrides.preset.as_ref()
    };
    let stored = || ColorPair::new(&settings.background, &settings.foreground);
    let pair = chosen.cloned().unwrap_or_else(stored);
    ColorPair::new(
        non_blank(pair.background, defaults::background()),
        non_blank(pair.foreground, defaults::foreground()),
    )
}

fn resolve_font_family(settings: &Settings, overrides: &Overrides) -> String {
    let family = overrides
        .font_family
        .as_deref()
        .map(|f| f.chars().filter(|c| !c.is_whitespace()).collect::<String>())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| settings.font_family.clone());
    non_blank(family, defaults::font_family())
}

fn resolve_font_size(settings: &Settings, overrides: &Overrides) -> u32 {
    match overrides.font_size.as_deref() {
        Some(text) => match text.trim().parse::<u32>() {
            Ok(size) if size > 0 => size,
            _ => {
                log::warn!(
                    "font size {text:?} is not a positive integer, using {}",
                    defaults::font_size()
                );
                defaults::font_size()
            }
        },
        None => non_zero(settings.font_size, defaults::font_size()),
    }
}

fn non_zero(value: u32, fallback: u32) -> u32 {
    if value == 0 { fallback } else { value }
}

fn non_blank(value: String, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn steve() -> Identity {
        Identity::new("steve", "mini")
    }

    #[test]
    fn test_default_settings_argument_layout() {
        let cmd = build(&Settings::default(), &Overrides::default(), at(9, 5, 0), &steve());
        assert_eq!(cmd.program(), &Executable::Search("xterm".into()));
        assert_eq!(
            cmd.args(),
            [
                "-sl", "200", "-fa", "9x15bold", "-fs", "16", "-geometry", "80x24", "-fg",
                "black", "-bg", "grey", "-title", "steve@mini 2024-03-09 09:05:00",
            ]
        );
    }

    #[test]
    fn test_preset_ignores_stored_colors() {
        let settings = Settings::default().with_colors("red", "blue");
        let overrides = Overrides::preset(ColorPair::new("navy", "white"));
        let cmd = build(&settings, &overrides, at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-fg"), Some("white"));
        assert_eq!(cmd.value_of("-bg"), Some("navy"));
    }

    #[test]
    fn test_custom_colors_win_over_preset() {
        let overrides = Overrides {
            preset: Some(ColorPair::new("navy", "white")),
            custom_colors: Some(ColorPair::new("ivory", "DarkBlue")),
            use_custom_colors: true,
            ..Overrides::default()
        };
        let cmd = build(&Settings::default(), &overrides, at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-fg"), Some("DarkBlue"));
        assert_eq!(cmd.value_of("-bg"), Some("ivory"));
    }

    #[test]
    fn test_custom_flag_off_uses_preset_even_with_custom_pair() {
        let overrides = Overrides {
            preset: Some(ColorPair::new("maroon", "white")),
            custom_colors: Some(ColorPair::new("ivory", "DarkBlue")),
            use_custom_colors: false,
            ..Overrides::default()
        };
        let cmd = build(&Settings::default(), &overrides, at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-bg"), Some("maroon"));
    }

    #[test]
    fn test_blank_custom_color_falls_back() {
        let overrides = Overrides::custom(ColorPair::new("  ", "green"));
        let cmd = build(&Settings::default(), &overrides, at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-bg"), Some("grey"));
        assert_eq!(cmd.value_of("-fg"), Some("green"));
    }

    #[test]
    fn test_font_size_override_precedence_and_fallback() {
        let settings = Settings::default().with_font_size(12);
        let build_with = |o: Overrides| build(&settings, &o, at(0, 0, 0), &steve());

        assert_eq!(build_with(Overrides::default()).value_of("-fs"), Some("12"));
        assert_eq!(
            build_with(Overrides::default().with_font_size(" 20 ")).value_of("-fs"),
            Some("20")
        );
        assert_eq!(
            build_with(Overrides::default().with_font_size("big")).value_of("-fs"),
            Some("16")
        );
        assert_eq!(
            build_with(Overrides::default().with_font_size("0")).value_of("-fs"),
            Some("16")
        );
    }

    #[test]
    fn test_font_family_override_and_fallback() {
        let mut settings = Settings::default();
        let cmd = build(
            &settings,
            &Overrides::default().with_font_family("DejaVu Sans Mono"),
            at(0, 0, 0),
            &steve(),
        );
        assert_eq!(cmd.value_of("-fa"), Some("DejaVuSansMono"));

        settings.font_family.clear();
        let cmd = build(&settings, &Overrides::default(), at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-fa"), Some("9x15bold"));
    }

    #[test]
    fn test_logging_flag_is_trailing_and_bare() {
        let settings = Settings::default().with_logging(true);
        let cmd = build(&settings, &Overrides::default(), at(0, 0, 0), &steve());
        assert_eq!(cmd.args().last().map(String::as_str), Some("-l"));

        let cmd = build(
            &settings,
            &Overrides::default().with_logging(false),
            at(0, 0, 0),
            &steve(),
        );
        assert!(!cmd.has_flag("-l"));

        let cmd = build(
            &Settings::default(),
            &Overrides::default().with_logging(true),
            at(0, 0, 0),
            &steve(),
        );
        assert!(cmd.has_flag("-l"));
    }

    #[test]
    fn test_scrollbar_precedes_logging() {
        let settings = Settings::default().with_logging(true).with_scrollbar(true);
        let cmd = build(&settings, &Overrides::default(), at(0, 0, 0), &steve());
        let tail: Vec<&str> = cmd.args()[cmd.args().len() - 2..]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(tail, ["-sb", "-l"]);
    }

    #[test]
    fn test_flag_lookup_skips_value_tokens() {
        // A font family spelled like a bare flag must not read as that flag.
        let overrides = Overrides::default().with_font_family("-l");
        let cmd = build(&Settings::default(), &overrides, at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-fa"), Some("-l"));
        assert!(!cmd.has_flag("-l"));
        assert!(cmd.has_flag("-fa"));
    }

    #[test]
    fn test_bare_flags_have_no_value() {
        let settings = Settings::default().with_logging(true).with_scrollbar(true);
        let cmd = build(&settings, &Overrides::default(), at(0, 0, 0), &steve());
        assert!(cmd.has_flag("-l"));
        assert_eq!(cmd.value_of("-l"), None);
        assert_eq!(cmd.value_of("-sb"), None);
        assert_eq!(cmd.value_of("-nope"), None);
        let flags: Vec<(&str, Option<&str>)> = cmd.flags().collect();
        assert_eq!(flags.len(), 9);
        assert_eq!(flags[7], ("-sb", None));
        assert_eq!(flags[8], ("-l", None));
    }

    #[test]
    fn test_identity_lookup_fallback() {
        assert_eq!(
            Identity::from_lookup(None, None),
            Identity::new("unknown", "unknown")
        );
        assert_eq!(
            Identity::from_lookup(Some("steve".into()), Some("  ".into())),
            Identity::new("steve", "unknown")
        );
        assert_eq!(
            Identity::from_lookup(Some("".into()), Some("mini".into())).to_string(),
            "unknown@mini"
        );
    }

    #[test]
    fn test_detected_identity_is_never_blank() {
        let identity = Identity::detect();
        assert!(!identity.user.trim().is_empty());
        assert!(!identity.host.trim().is_empty());
    }

    #[test]
    fn test_zero_dimensions_fall_back() {
        let settings = Settings::default().with_dimensions(0, 0);
        let cmd = build(&settings, &Overrides::default(), at(0, 0, 0), &steve());
        assert_eq!(cmd.value_of("-geometry"), Some("80x24"));
    }

    #[test]
    fn test_explicit_executable_path() {
        let settings = Settings::default().with_executable_path("/opt/X11/bin");
        let cmd = build(&settings, &Overrides::default(), at(0, 0, 0), &steve());
        assert_eq!(
            cmd.program(),
            &Executable::Explicit("/opt/X11/bin/xterm".into())
        );
    }

    #[test]
    fn test_title_changes_with_time() {
        let settings = Settings::default();
        let a = build(&settings, &Overrides::default(), at(10, 0, 0), &steve());
        let b = build(&settings, &Overrides::default(), at(10, 0, 1), &steve());
        assert_ne!(a.title(), b.title());
        assert_eq!(b.title(), "steve@mini 2024-03-09 10:00:01");
    }

    #[test]
    fn test_shell_string_quotes_title() {
        let cmd = build(&Settings::default(), &Overrides::default(), at(9, 5, 0), &steve());
        let line = cmd.to_shell_string();
        assert!(line.starts_with("xterm -sl 200 -fa 9x15bold "));
        assert!(line.ends_with("-title 'steve@mini 2024-03-09 09:05:00'"));
        let round_trip = shell_words::split(&line).unwrap();
        assert_eq!(&round_trip[1..], cmd.args());
    }
}
