//! Command-line interface for xt-launch.
//!
//! Replaces the button dashboards: `launch --preset N` is a palette button,
//! `launch --fg .. --bg ..` is the custom-colors button.

use crate::command::{self, Identity, Overrides};
use crate::error::LaunchError;
use crate::fonts;
use crate::launcher::{self, LaunchOptions};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use xt_launch_config::{ColorPair, Settings};

/// xt-launch - open preset-colored xterm windows
#[derive(Parser, Debug)]
#[command(name = "xt-launch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug output (prints each built command)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Read settings from this file instead of ./.xtrc or ~/.xtrc
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open a terminal window (the default when no subcommand is given)
    Launch(LaunchArgs),

    /// List the numbered preset color pairs
    Presets,

    /// Print the resolved settings
    ShowConfig {
        /// Output format
        #[arg(long, value_enum, default_value_t = ConfigFormat::Report)]
        format: ConfigFormat,
    },

    /// List fonts reported by xlsfonts
    ListFonts,
}

#[derive(Args, Debug, Default, Clone)]
pub struct LaunchArgs {
    /// Preset color pair number (see `presets`)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=16),
          conflicts_with_all = ["fg", "bg"])]
    pub preset: Option<u8>,

    /// Custom foreground color
    #[arg(long, value_name = "COLOR", requires = "bg")]
    pub fg: Option<String>,

    /// Custom background color
    #[arg(long, value_name = "COLOR", requires = "fg")]
    pub bg: Option<String>,

    /// Font size, overriding x_fs
    #[arg(long, value_name = "SIZE")]
    pub font_size: Option<String>,

    /// Font family, overriding x_fa
    #[arg(long, value_name = "NAME")]
    pub font: Option<String>,

    /// Enable xterm session logging (-l)
    #[arg(long, conflicts_with = "no_log")]
    pub log: bool,

    /// Disable xterm session logging even if x_log is set
    #[arg(long)]
    pub no_log: bool,

    /// Append the command line to FILE (default: ~/Documents/xterm.log)
    #[arg(long, value_name = "FILE", num_args = 0..=1)]
    pub log_command: Option<Option<PathBuf>>,

    /// Print the command instead of running it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// `key:<TAB>value` lines
    #[default]
    Report,
    /// JSON object
    Json,
    /// A `.xtrc` file
    Xtrc,
}

impl LaunchArgs {
    /// Translate flags into per-launch overrides.
    pub fn to_overrides(&self) -> Result<Overrides> {
        let mut overrides = match (self.preset, &self.fg, &self.bg) {
            (Some(n), _, _) => Overrides::preset(
                xt_launch_config::preset(usize::from(n))
                    .with_context(|| format!("no preset color pair {n}"))?,
            ),
            (None, Some(fg), Some(bg)) => Overrides::custom(ColorPair::new(bg, fg)),
            _ => Overrides::default(),
        };
        overrides.font_size = self.font_size.clone();
        overrides.font_family = self.font.clone();
        overrides.logging_enabled = match (self.log, self.no_log) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        Ok(overrides)
    }

    fn launch_options(&self) -> LaunchOptions {
        let command_log = match &self.log_command {
            Some(Some(path)) => Some(path.clone()),
            Some(None) => LaunchOptions::default_command_log(),
            None => None,
        };
        LaunchOptions {
            command_log,
            ..LaunchOptions::default()
        }
    }
}

/// Run the parsed command line and return the process exit code.
pub fn run(cli: &Cli) -> Result<i32> {
    let settings = load_settings(cli.config.as_deref())?;

    match &cli.command {
        None => launch(&settings, &LaunchArgs::default()),
        Some(Commands::Launch(args)) => launch(&settings, args),
        Some(Commands::Presets) => {
            print!("{}", presets_table());
            Ok(0)
        }
        Some(Commands::ShowConfig { format }) => {
            print!("{}", render_settings(&settings, *format)?);
            Ok(0)
        }
        Some(Commands::ListFonts) => match fonts::list_fonts(&settings) {
            Ok(fonts) => {
                for font in fonts {
                    println!("{font}");
                }
                Ok(0)
            }
            Err(e) => report_launch_error(e),
        },
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => xt_launch_config::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(xt_launch_config::load()),
    }
}

fn launch(settings: &Settings, args: &LaunchArgs) -> Result<i32> {
    let overrides = args.to_overrides()?;
    let now = chrono::Local::now().naive_local();
    let command = command::build(settings, &overrides, now, &Identity::detect());

    if args.dry_run {
        println!("{command}");
        return Ok(0);
    }

    match launcher::launch(&command, &args.launch_options()) {
        Ok(pid) => {
            log::info!("xterm started with pid {pid}");
            Ok(0)
        }
        Err(e) => report_launch_error(e),
    }
}

/// Not-found is reported with its own exit status; other failures propagate.
fn report_launch_error(e: LaunchError) -> Result<i32> {
    match e {
        LaunchError::NotFound { .. } => {
            eprintln!("xt-launch: {e}");
            Ok(e.exit_code())
        }
        other => Err(other.into()),
    }
}

fn presets_table() -> String {
    let mut out = String::new();
    for (number, pair) in xt_launch_config::presets() {
        out.push_str(&format!(
            "Xterm Window {number:02}  {:<14} {}\n",
            pair.background, pair.foreground
        ));
    }
    out
}

fn render_settings(settings: &Settings, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Report => settings.report(),
        ConfigFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(settings).context("serializing settings")?;
            json.push('\n');
            json
        }
        ConfigFormat::Xtrc => settings.to_xtrc_string(),
    })
}
