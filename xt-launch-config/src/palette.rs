//! Preset color pairs for the one-click launch buttons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A background/foreground pair of X11 color names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub background: String,
    pub foreground: String,
}

impl ColorPair {
    pub fn new(background: impl Into<String>, foreground: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
        }
    }
}

impl fmt::Display for ColorPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.foreground, self.background)
    }
}

/// `(background, foreground)` for buttons 1 through 16.
pub const PRESETS: [(&str, &str); 16] = [
    ("black", "white"),
    ("white", "black"),
    ("navy", "white"),
    ("DarkGreen", "white"),
    ("maroon", "white"),
    ("DarkSlateGray", "white"),
    ("MidnightBlue", "yellow"),
    ("black", "green"),
    ("black", "orange"),
    ("LightYellow", "black"),
    ("honeydew", "black"),
    ("lavender", "black"),
    ("CadetBlue", "black"),
    ("grey", "black"),
    ("SteelBlue", "white"),
    ("DarkRed", "yellow"),
];

/// Preset by 1-based button number. `None` outside `1..=16`.
pub fn preset(number: usize) -> Option<ColorPair> {
    let index = number.checked_sub(1)?;
    PRESETS
        .get(index)
        .map(|(background, foreground)| ColorPair::new(*background, *foreground))
}

/// All presets paired with their button numbers.
pub fn presets() -> impl Iterator<Item = (usize, ColorPair)> {
    PRESETS
        .iter()
        .enumerate()
        .map(|(i, (bg, fg))| (i + 1, ColorPair::new(*bg, *fg)))
}
