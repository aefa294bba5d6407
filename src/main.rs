use clap::Parser;
use xt_launch::cli::{self, Cli};

fn main() {
    // Parse first so --help/--version print before any logging
    let cli = Cli::parse();
    xt_launch::debug::init_logging(cli.debug);

    log::debug!("Starting xt-launch {}", env!("CARGO_PKG_VERSION"));

    match cli::run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("xt-launch: error: {e:#}");
            std::process::exit(1);
        }
    }
}
