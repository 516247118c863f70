//! Error types for IMAP path operations.
//!
//! [`ImapPathsError`] wraps every error condition of the public API.

use std::io;

use thiserror::Error;

use imap_paths_parser::ParseError;

use crate::processing_input::ProcessingInputType;

/// The main error type for IMAP path operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the rejected file name as `src`; the spans of
/// its diagnostics index into it, which lets reporters underline bad fields.
#[derive(Debug, Error)]
pub enum ImapPathsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    /// Files grouped into one processing input disagree on their source.
    #[error(
        "{input_type} files must all come from the same source: `{filename}` is {found}, expected {expected}"
    )]
    InconsistentInput {
        input_type: ProcessingInputType,
        filename: String,
        expected: String,
        found: String,
    },

    #[error("a {0} input needs at least one filename")]
    EmptyInput(ProcessingInputType),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImapPathsError {
    /// Create a new `Parse` error. The source is the rejected file name.
    pub fn new_parse_error(err: ParseError) -> Self {
        let src = err.filename().to_owned();
        Self::Parse { err, src }
    }
}

impl From<ParseError> for ImapPathsError {
    fn from(err: ParseError) -> Self {
        Self::new_parse_error(err)
    }
}
