//! Error adapter for converting ImapPathsError to miette diagnostics.
//!
//! This module provides the bridge between the library's error types and
//! miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A rejected filename usually violates several rules at once. Each
//! diagnostic of an [`imap_paths_parser::ParseError`] is rendered
//! independently, underlining the offending field of the filename.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan,
    Severity as MietteSeverity, SourceSpan,
};

use imap_paths::ImapPathsError;
use imap_paths_parser::error::{Diagnostic, Severity};

/// Adapter for a single filename diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// The filename the diagnostic's spans index into
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`ImapPathsError`] variants without filename diagnostics.
pub struct ErrorAdapter<'a>(pub &'a ImapPathsError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ImapPathsError::Io(_) => "imap_paths::io",
            ImapPathsError::Parse { .. } => return None,
            ImapPathsError::InconsistentInput { .. } => "imap_paths::inconsistent_input",
            ImapPathsError::EmptyInput(_) => "imap_paths::empty_input",
            ImapPathsError::Serialization(_) => "imap_paths::serialization",
            ImapPathsError::Config(_) => "imap_paths::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ImapPathsError::InconsistentInput { .. } => Some(Box::new(
                "files from different sources belong in separate processing inputs",
            )),
            _ => None,
        }
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A diagnostic pointing into a filename.
    Diagnostic(DiagnosticAdapter<'a>),
    /// An error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}

impl Reportable<'_> {
    fn inner(&self) -> &dyn MietteDiagnostic {
        match self {
            Reportable::Diagnostic(d) => d,
            Reportable::Error(e) => e,
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().code()
    }

    fn severity(&self) -> Option<MietteSeverity> {
        self.inner().severity()
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.inner().help()
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.inner().source_code()
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        self.inner().labels()
    }
}

/// Convert a filename [`Span`](imap_paths_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: imap_paths_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split an error into the reports the CLI prints.
///
/// A rejected filename yields one report per diagnostic so that each violated
/// rule gets its own underlined snippet. Everything else is a single report.
pub fn to_reportables(err: &ImapPathsError) -> Vec<Reportable<'_>> {
    match err {
        ImapPathsError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render every report of `err` as text for the log.
///
/// A report the graphical handler fails to draw is reduced to its message.
pub fn render_reports(err: &ImapPathsError) -> Vec<String> {
    let handler = GraphicalReportHandler::new();

    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut rendered = String::new();
            match handler.render_report(&mut rendered, reportable) {
                Ok(()) => rendered,
                Err(_) => reportable.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use imap_paths::{ProcessingInput, ProcessingInputType, parse_file_path};
    use imap_paths_parser::{Span, error::ErrorCode};

    use super::*;

    #[test]
    fn test_one_reportable_per_violation() {
        let parse_err = parse_file_path("imap_sdc_l9z_burst_20210101_v001.cdf").unwrap_err();
        let count = parse_err.diagnostics().len();
        let err = ImapPathsError::new_parse_error(parse_err);

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), count);
        assert!(
            reportables
                .iter()
                .all(|r| matches!(r, Reportable::Diagnostic(_)))
        );
        assert!(reportables[0].to_string().contains("matches none"));
    }

    #[test]
    fn test_labels_point_into_filename() {
        let src = "imap_sdc_l1a_burst_20210101_v001.cdf";
        let diag = Diagnostic::error("unknown instrument `sdc`")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(5..8), "not an IMAP instrument")
            .with_help("valid instruments are: mag, swe");

        let adapter = DiagnosticAdapter::new(&diag, src);

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 5);
        assert_eq!(labels[0].len(), 3);
        assert!(labels[0].primary());
        assert_eq!(adapter.code().unwrap().to_string(), "E101");
        assert_eq!(adapter.severity(), Some(MietteSeverity::Error));
    }

    #[test]
    fn test_secondary_labels_are_not_primary() {
        let diag = Diagnostic::error("extension does not fit the data level")
            .with_label(Span::new(33..37), "extension")
            .with_secondary_label(Span::new(9..12), "data level");

        let adapter = DiagnosticAdapter::new(&diag, "imap_mag_l1a_burst_20210101_v001.pkts");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert!(labels[0].primary());
        assert!(!labels[1].primary());
        assert_eq!(labels[1].label(), Some("data level"));
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::warning("end date precedes start date");

        let adapter = DiagnosticAdapter::new(&diag, "");

        assert_eq!(adapter.severity(), Some(MietteSeverity::Warning));
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_render_reports() {
        let err = ImapPathsError::new_parse_error(parse_file_path("test.txt").unwrap_err());

        let reports = render_reports(&err);

        assert_eq!(reports.len(), to_reportables(&err).len());
        assert!(reports[0].contains("matches none"), "{}", reports[0]);
        assert!(reports[0].contains("E200"), "{}", reports[0]);
    }

    #[test]
    fn test_render_reports_without_source() {
        let err = ImapPathsError::Config("Missing configuration file: absent.toml".to_string());

        let reports = render_reports(&err);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("absent.toml"), "{}", reports[0]);
    }

    #[test]
    fn test_non_parse_error() {
        let err = ProcessingInput::science(Vec::<String>::new()).unwrap_err();

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.code().unwrap().to_string(), "imap_paths::empty_input");
                assert!(e.to_string().contains(&ProcessingInputType::ScienceFile.to_string()));
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }
}
