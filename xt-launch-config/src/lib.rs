//! Settings store for xt-launch.
//!
//! This crate resolves the user's terminal preferences from a `.xtrc` file.
//! It includes:
//!
//! - The [`Settings`] record and its built-in defaults
//! - The line-oriented `key=value` parser for `.xtrc` files
//! - Candidate-path search (`./.xtrc`, then `~/.xtrc`)
//! - The fixed palette of preset color pairs used by the launch buttons

pub mod defaults;
mod error;
pub mod palette;
mod parse;
pub mod persistence;
mod settings;

pub use error::ConfigError;
pub use palette::{ColorPair, PRESETS, preset, presets};
pub use persistence::{
    SettingsSource, XTRC_FILE_NAME, candidate_paths, load, load_from, load_from_candidates,
};
pub use settings::{Settings, XtrcKey};
