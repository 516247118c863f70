//! The ParseError type for rejected filenames.
//!
//! [`ParseError`] wraps every [`Diagnostic`] produced while checking one
//! filename, together with the convention that rejected it.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// A type alias for `Result<T, Diagnostic>`, the result of a field validator.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Which convention rejected a filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Invalid science file.
    Science,
    /// Invalid ancillary file.
    Ancillary,
    /// Invalid SPICE file.
    Spice,
    /// The filename matches none of the three conventions.
    Unrecognized,
}

impl ParseErrorKind {
    /// Name of the convention, as used in error messages.
    pub fn convention(&self) -> &'static str {
        match self {
            ParseErrorKind::Science => "science",
            ParseErrorKind::Ancillary => "ancillary",
            ParseErrorKind::Spice => "SPICE",
            ParseErrorKind::Unrecognized => "IMAP",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.convention())
    }
}

/// Error returned when a filename is rejected.
///
/// Carries every violation found, so one failed parse reports all of them.
#[derive(Debug, Clone)]
pub struct ParseError {
    kind: ParseErrorKind,
    filename: String,
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    /// Create a new parse error from diagnostics.
    pub fn new(
        kind: ParseErrorKind,
        filename: impl Into<String>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            kind,
            filename: filename.into(),
            diagnostics,
        }
    }

    /// Combine the failed attempts of the dispatcher into one error.
    ///
    /// The first diagnostic is an `E200` naming all three conventions; the
    /// diagnostics of each attempt follow in attempt order.
    pub fn unrecognized(filename: impl Into<String>, attempts: Vec<ParseError>) -> Self {
        let filename = filename.into();
        let summary = Diagnostic::error(format!(
            "`{filename}` matches none of the SPICE, science or ancillary file conventions"
        ))
        .with_code(ErrorCode::E200)
        .with_help(
            "science files look like `imap_mag_l1a_burst_20210101_v001.cdf`, \
             ancillary files like `imap_mag_l1b-cal_20250101_v001.cdf`, \
             SPICE kernels like `naif0012.tls`",
        );

        let diagnostics = std::iter::once(summary)
            .chain(attempts.into_iter().flat_map(ParseError::into_diagnostics))
            .collect();

        Self::new(ParseErrorKind::Unrecognized, filename, diagnostics)
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// The file name that was rejected.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Returns `true` if any diagnostic carries `code`.
    pub fn has_code(&self, code: ErrorCode) -> bool {
        self.diagnostics.iter().any(|d| d.code() == Some(code))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Unrecognized => write!(f, "unrecognized file `{}`", self.filename)?,
            kind => write!(f, "invalid {kind} file `{}`", self.filename)?,
        }
        for diagnostic in &self.diagnostics {
            write!(f, "\n  {diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
