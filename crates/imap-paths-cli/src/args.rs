//! Command-line argument definitions for the IMAP paths CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the files to check, the data directory
//! and configuration file, the report format, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the IMAP paths tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// IMAP filenames to validate
    #[arg(required = true, help = "Filenames or paths of IMAP files")]
    pub files: Vec<String>,

    /// Root directory for canonical paths, overriding the configuration
    #[arg(short, long)]
    pub data_dir: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Group the files into processing inputs
    #[arg(long)]
    pub collection: bool,

    /// Print the grouped files as a JSON array of filenames
    #[arg(long)]
    pub json: bool,

    /// Write the report to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
