//! xt-launch: open xterm windows with preset colors, fonts, and geometry.
//!
//! Settings come from `xt_launch_config` (the `.xtrc` store). This crate turns
//! them, plus per-launch overrides, into a [`Command`] and hands it to the
//! operating system.

pub mod cli;
pub mod command;
pub mod debug;
pub mod error;
pub mod executable;
pub mod fonts;
pub mod launcher;

pub use command::{Command, Identity, Overrides, build};
pub use error::LaunchError;
pub use executable::Executable;
pub use launcher::LaunchOptions;
