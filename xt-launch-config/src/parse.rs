//! Line-oriented `.xtrc` parser.
//!
//! Each line is a `#` comment, blank, or `key=value`. Unknown keys and lines
//! without `=` are ignored. A value that does not parse leaves the field at
//! its default without affecting any other key.

use crate::settings::{Settings, XtrcKey, strip_whitespace};

impl Settings {
    /// Parse `.xtrc` contents on top of the built-in defaults.
    ///
    /// Never fails. Later assignments to the same key win.
    pub fn from_xtrc_str(contents: &str) -> Self {
        let mut settings = Self::default();
        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, value)) = line.split_once('=') else {
                log::debug!("xtrc line {}: no '=', ignored", index + 1);
                continue;
            };
            let Some(key) = XtrcKey::from_name(name.trim()) else {
                log::debug!("xtrc line {}: unknown key {:?}, ignored", index + 1, name.trim());
                continue;
            };
            settings.apply(key, value.trim());
        }
        settings
    }

    /// Assign one already-trimmed value. Malformed values keep the default.
    fn apply(&mut self, key: XtrcKey, value: &str) {
        let defaults = Settings::default();
        match key {
            XtrcKey::Rows => self.rows = parse_count(key, value, defaults.rows),
            XtrcKey::Cols => self.cols = parse_count(key, value, defaults.cols),
            XtrcKey::FontSize => self.font_size = parse_count(key, value, defaults.font_size),
            XtrcKey::ScrollbackLines => {
                self.scrollback_lines = parse_count(key, value, defaults.scrollback_lines)
            }
            XtrcKey::Logging => {
                self.logging_enabled = parse_flag(key, value, defaults.logging_enabled)
            }
            XtrcKey::Scrollbar => self.scrollbar = parse_flag(key, value, defaults.scrollbar),
            XtrcKey::Foreground => self.foreground = non_empty(key, value, defaults.foreground),
            XtrcKey::Background => self.background = non_empty(key, value, defaults.background),
            XtrcKey::FontFamily => {
                self.font_family = non_empty(key, &strip_whitespace(value), defaults.font_family)
            }
            XtrcKey::ExecutablePath => self.executable_path = value.to_string(),
        }
    }
}

fn parse_count(key: XtrcKey, value: &str, default: u32) -> u32 {
    match value.parse::<u32>() {
        Ok(n) => n,
        Err(_) => {
            log::warn!("{key}: {value:?} is not a non-negative integer, using default {default}");
            default
        }
    }
}

/// Integer flag: `0` is off, any other integer is on.
fn parse_flag(key: XtrcKey, value: &str, default: bool) -> bool {
    match value.parse::<i64>() {
        Ok(n) => n != 0,
        Err(_) => {
            log::warn!("{key}: {value:?} is not an integer flag, using default {default}");
            default
        }
    }
}

fn non_empty(key: XtrcKey, value: &str, default: String) -> String {
    if value.is_empty() {
        log::warn!("{key}: empty value, using default {default:?}");
        default
    } else {
        value.to_string()
    }
}
