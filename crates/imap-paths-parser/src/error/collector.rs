//! Collector for accumulating every violation found in one filename.
//!
//! Field validators return `Result<T, Diagnostic>`; the
//! [`DiagnosticCollector`] keeps going after a failed field so that a single
//! [`ParseError`] reports all of them.

use crate::error::{Diagnostic, ParseError, ParseErrorKind};

/// A collector for the diagnostics of one grammar attempt.
///
/// ```text
/// let mut collector = DiagnosticCollector::new();
///
/// let instrument = collector.check(validate_instrument(&captures));
/// let level = collector.check(validate_data_level(&captures));
///
/// let (Some(instrument), Some(level)) = (instrument, level) else {
///     return Err(collector.into_error(ParseErrorKind::Science, filename));
/// };
/// ```
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    ///
    /// The collector is marked as failed if the diagnostic is an error.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Unwrap a field result, emitting its diagnostic on failure.
    pub fn check<T>(&mut self, result: Result<T, Diagnostic>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(diagnostic) => {
                self.emit(diagnostic);
                None
            }
        }
    }

    /// Convert everything collected so far into a [`ParseError`].
    pub fn into_error(self, kind: ParseErrorKind, filename: &str) -> ParseError {
        ParseError::new(kind, filename, self.diagnostics)
    }

    /// Finish collection.
    ///
    /// - If any error was emitted, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the warnings, which do not reject the filename.
    pub fn finish(
        self,
        kind: ParseErrorKind,
        filename: &str,
    ) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(self.into_error(kind, filename))
        } else {
            Ok(self.diagnostics)
        }
    }
}
