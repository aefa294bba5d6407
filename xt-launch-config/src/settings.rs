//! The resolved settings record and the `.xtrc` key table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recognized `.xtrc` key.
///
/// The mapping from key to [`Settings`] field is total: every field has
/// exactly one key and every key sets exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XtrcKey {
    Rows,
    Cols,
    Foreground,
    Background,
    FontFamily,
    FontSize,
    Logging,
    ScrollbackLines,
    ExecutablePath,
    Scrollbar,
}

impl XtrcKey {
    /// All keys, in the order they are reported and written.
    pub const ALL: [XtrcKey; 10] = [
        XtrcKey::Rows,
        XtrcKey::Cols,
        XtrcKey::Foreground,
        XtrcKey::Background,
        XtrcKey::FontFamily,
        XtrcKey::FontSize,
        XtrcKey::Logging,
        XtrcKey::ScrollbackLines,
        XtrcKey::ExecutablePath,
        XtrcKey::Scrollbar,
    ];

    /// The literal key as it appears in the file.
    pub fn as_str(self) -> &'static str {
        match self {
            XtrcKey::Rows => "x_rows",
            XtrcKey::Cols => "x_cols",
            XtrcKey::Foreground => "x_fg",
            XtrcKey::Background => "x_bg",
            XtrcKey::FontFamily => "x_fa",
            XtrcKey::FontSize => "x_fs",
            XtrcKey::Logging => "x_log",
            XtrcKey::ScrollbackLines => "x_sl",
            XtrcKey::ExecutablePath => "x_path",
            XtrcKey::Scrollbar => "x_sb",
        }
    }

    /// Look up a key by its literal name. Returns `None` for unknown keys.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for XtrcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved terminal preferences.
///
/// Every field always holds a value; absent or malformed keys fall back to
/// [`crate::defaults`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Terminal height in character cells
    #[serde(default = "crate::defaults::rows")]
    pub rows: u32,

    /// Terminal width in character cells
    #[serde(default = "crate::defaults::cols")]
    pub cols: u32,

    /// Foreground color name
    #[serde(default = "crate::defaults::foreground")]
    pub foreground: String,

    /// Background color name
    #[serde(default = "crate::defaults::background")]
    pub background: String,

    /// Font family, without embedded whitespace
    #[serde(default = "crate::defaults::font_family")]
    pub font_family: String,

    /// Font size in points
    #[serde(default = "crate::defaults::font_size")]
    pub font_size: u32,

    /// Lines of scrollback kept by the terminal
    #[serde(default = "crate::defaults::scrollback_lines")]
    pub scrollback_lines: u32,

    /// Pass xterm's `-l` session logging flag
    #[serde(default = "crate::defaults::logging_enabled")]
    pub logging_enabled: bool,

    /// Pass xterm's `-sb` scrollbar flag
    #[serde(default = "crate::defaults::scrollbar")]
    pub scrollbar: bool,

    /// Directory containing the terminal binary; empty means search `PATH`
    #[serde(default = "crate::defaults::executable_path")]
    pub executable_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rows: crate::defaults::rows(),
            cols: crate::defaults::cols(),
            foreground: crate::defaults::foreground(),
            background: crate::defaults::background(),
            font_family: crate::defaults::font_family(),
            font_size: crate::defaults::font_size(),
            scrollback_lines: crate::defaults::scrollback_lines(),
            logging_enabled: crate::defaults::logging_enabled(),
            scrollbar: crate::defaults::scrollbar(),
            executable_path: crate::defaults::executable_path(),
        }
    }
}

impl Settings {
    /// Create a record holding the built-in defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the terminal size in character cells
    pub fn with_dimensions(mut self, cols: u32, rows: u32) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Set the foreground and background colors
    pub fn with_colors(
        mut self,
        foreground: impl Into<String>,
        background: impl Into<String>,
    ) -> Self {
        self.foreground = foreground.into();
        self.background = background.into();
        self
    }

    /// Set the font family. Embedded whitespace is removed.
    pub fn with_font_family(mut self, family: &str) -> Self {
        self.font_family = strip_whitespace(family);
        self
    }

    /// Set the font size
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the scrollback length
    pub fn with_scrollback(mut self, lines: u32) -> Self {
        self.scrollback_lines = lines;
        self
    }

    /// Enable or disable xterm session logging
    pub fn with_logging(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Show or hide the xterm scrollbar
    pub fn with_scrollbar(mut self, enabled: bool) -> Self {
        self.scrollbar = enabled;
        self
    }

    /// Set the directory that contains the terminal binary
    pub fn with_executable_path(mut self, path: impl Into<String>) -> Self {
        self.executable_path = path.into();
        self
    }

    /// The value of `key` rendered the way it is written in a `.xtrc` file.
    ///
    /// Boolean flags are written as `0`/`1`.
    pub fn value_of(&self, key: XtrcKey) -> String {
        match key {
            XtrcKey::Rows => self.rows.to_string(),
            XtrcKey::Cols => self.cols.to_string(),
            XtrcKey::Foreground => self.foreground.clone(),
            XtrcKey::Background => self.background.clone(),
            XtrcKey::FontFamily => self.font_family.clone(),
            XtrcKey::FontSize => self.font_size.to_string(),
            XtrcKey::Logging => u8::from(self.logging_enabled).to_string(),
            XtrcKey::ScrollbackLines => self.scrollback_lines.to_string(),
            XtrcKey::ExecutablePath => self.executable_path.clone(),
            XtrcKey::Scrollbar => u8::from(self.scrollbar).to_string(),
        }
    }

    /// One `key:\tvalue` line per field.
    pub fn report(&self) -> String {
        XtrcKey::ALL
            .iter()
            .map(|key| format!("{key}:\t{}\n", self.value_of(*key)))
            .collect()
    }

    /// Render the record as a `.xtrc` file that loads back to the same record.
    pub fn to_xtrc_string(&self) -> String {
        let mut out = String::from("# xt-launch settings\n");
        for key in XtrcKey::ALL {
            out.push_str(&format!("{key}={}\n", self.value_of(key)));
        }
        out
    }
}

/// Remove every whitespace character. Font names in `.xtrc` have none.
pub(crate) fn strip_whitespace(value: &str) -> String {
    value.chars().filter(|c| !c.is_whitespace()).collect()
}
