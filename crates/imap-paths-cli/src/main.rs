//! IMAP paths CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use imap_paths_cli::{Args, error_adapter::render_reports};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);

    info!(log_level = args.log_level.as_str(); "Starting imap-paths");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = imap_paths_cli::run(&args) {
        for report in render_reports(&err) {
            error!("{report}");
        }
        process::exit(1);
    }

    info!("Completed successfully");
}

/// Install `env_logger` at `level`, falling back to `warn` for unknown names.
fn init_logging(level: &str) {
    let filter = match LevelFilter::from_str(level) {
        Ok(filter) => filter,
        Err(_) => {
            eprintln!("Invalid log level: {level}. Using 'warn' instead.");
            LevelFilter::Warn
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}
