//! Built-in default values for every settings field.
//!
//! A field whose key is absent from the `.xtrc` file, or whose value does not
//! parse, takes the value returned here.

pub fn rows() -> u32 {
    24
}

pub fn cols() -> u32 {
    80
}

pub fn foreground() -> String {
    "black".to_string()
}

pub fn background() -> String {
    "grey".to_string()
}

pub fn font_family() -> String {
    "9x15bold".to_string()
}

pub fn font_size() -> u32 {
    16
}

pub fn scrollback_lines() -> u32 {
    200
}

pub fn logging_enabled() -> bool {
    false
}

pub fn scrollbar() -> bool {
    false
}

/// Empty means "resolve the terminal binary through `PATH`".
pub fn executable_path() -> String {
    String::new()
}
