//! Logging setup for the xt-launch binary.
//!
//! Library code logs through the `log` facade. The binary routes it to stderr
//! with `env_logger`:
//! - default filter: `warn`
//! - `RUST_LOG` replaces the default
//! - `-d/--debug` forces `debug` for this crate and the settings crate, so
//!   every built command is printed

use log::LevelFilter;

const DEFAULT_FILTER: &str = "warn";

/// Crates whose output `--debug` turns up.
const DEBUG_TARGETS: [&str; 2] = ["xt_launch", "xt_launch_config"];

/// Install the global logger. Call once, after argument parsing.
pub fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or(DEFAULT_FILTER);
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);
    if debug {
        for target in DEBUG_TARGETS {
            builder.filter_module(target, LevelFilter::Debug);
        }
    }
    if let Err(e) = builder.try_init() {
        eprintln!("xt-launch: logger already initialized: {e}");
    }
}
