//! CLI logic for the IMAP paths tool.
//!
//! Validates IMAP filenames and reports either their canonical storage paths
//! or their grouping into processing inputs.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{info, warn};

use imap_paths::{
    ImapFilePath, ImapPathsError, PathResolver, ProcessingInputCollection, ValidatedPath,
};

/// Run the IMAP paths CLI application
///
/// Every file is validated. The report (one canonical path per line, or the
/// processing-input grouping with `--collection` or `--json`) is written to
/// the output file or to standard output.
///
/// # Errors
///
/// Returns `ImapPathsError` for:
/// - Configuration loading errors
/// - Filenames that match no IMAP naming convention
/// - File I/O errors while writing the report
pub fn run(args: &Args) -> Result<(), ImapPathsError> {
    info!(files = args.files.len(); "Validating files");

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(data_dir) = &args.data_dir {
        app_config = app_config.with_data_dir(data_dir);
    }
    let resolver = PathResolver::new(app_config);

    let report = if args.collection || args.json {
        let collection = resolver.collect(&args.files)?;
        collection
            .iter()
            .flat_map(|input| input.imap_file_paths())
            .for_each(warn_suspicious);

        if args.json {
            format!("{}\n", collection.to_json()?)
        } else {
            collection_report(&collection)
        }
    } else {
        path_report(&resolver, &args.files)?
    };

    match &args.output {
        Some(output) => {
            fs::write(output, report)?;
            info!(output_file = output; "Report written");
        }
        None => print!("{report}"),
    }

    Ok(())
}

fn path_report(resolver: &PathResolver, files: &[String]) -> Result<String, ImapPathsError> {
    let mut report = String::new();
    for file in files {
        let resolved = resolver.resolve(file)?;
        warn_suspicious(&resolved);

        report.push_str(&resolver.path_for(&resolved).display().to_string());
        report.push('\n');
    }
    Ok(report)
}

fn collection_report(collection: &ProcessingInputCollection) -> String {
    let mut report: String = collection
        .iter()
        .map(|input| {
            format!(
                "{} {} {} {}: {}\n",
                input.input_type(),
                input.source(),
                input.data_type(),
                input.descriptor(),
                input.filename_list().join(" ")
            )
        })
        .collect();

    match collection.get_time_range() {
        Some((start, end)) => report.push_str(&format!("time range: {start} to {end}\n")),
        None => report.push_str("time range: none\n"),
    }
    report
}

/// Accepted files can still carry warnings, e.g. an inverted validity window.
fn warn_suspicious(path: &ImapFilePath) {
    if let ImapFilePath::Ancillary(ancillary) = path {
        for warning in ancillary.warnings() {
            warn!(filename = ancillary.filename(), warning:% = warning; "Suspicious filename");
        }
    }
}
