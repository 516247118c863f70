//! Ancillary product filenames.
//!
//! `imap_<instrument>_<descriptor>_<YYYYMMDD>[_<YYYYMMDD>]_<vNNN>.<cdf|csv|json>`
//!
//! Ancillary products (calibration tables, lookup files) are valid from their
//! start date until the optional end date. Without an end date the validity is
//! open-ended.

use std::{
    hash::{Hash, Hasher},
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
};

use chrono::NaiveDate;
use log::{debug, trace};
use regex::Regex;

use imap_paths_core::{
    MISSION, extension::FileExtension, instrument::Instrument, version::Version,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, ParseErrorKind},
    fields::{self, Field},
    file_path::ValidatedPath,
};

static ANCILLARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<mission>imap)_(?P<instrument>[^_]+)_(?P<descriptor>[^_]+)_(?P<start_date>\d{8})(_(?P<end_date>\d{8}))?_(?P<version>v\d{3})\.(?P<extension>cdf|csv|json)$",
    )
    .expect("ancillary filename pattern is valid")
});

const ANCILLARY_SHAPE: &str =
    "expected `imap_<instrument>_<descriptor>_<YYYYMMDD>[_<YYYYMMDD>]_<vNNN>.<cdf|csv|json>`";

/// A validated ancillary product filename.
///
/// Two values are equal when they were parsed from the same file name.
#[derive(Debug, Clone)]
pub struct AncillaryFilePath {
    filename: String,
    instrument: Instrument,
    descriptor: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    version: Version,
    extension: FileExtension,
    warnings: Vec<Diagnostic>,
}

impl AncillaryFilePath {
    /// Parse the trailing file name of `path` as an ancillary filename.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let filename = fields::file_name(path.as_ref(), ParseErrorKind::Ancillary)?;
        Self::parse_name(filename)
    }

    /// Build a filename from its parts and validate it.
    ///
    /// An empty `end_time` is the same as `None`.
    pub fn generate_from_inputs(
        instrument: &str,
        descriptor: &str,
        version: &str,
        extension: &str,
        start_time: &str,
        end_time: Option<&str>,
    ) -> Result<Self, ParseError> {
        let end = end_time
            .filter(|end| !end.is_empty())
            .map(|end| format!("_{end}")).unwrap_or_default();
        let filename =
            format!("{MISSION}_{instrument}_{descriptor}_{start_time}{end}_{version}.{extension}");
        Self::parse_name(&filename)
    }

    fn parse_name(filename: &str) -> Result<Self, ParseError> {
        trace!(filename; "Matching ancillary pattern");

        let Some(captures) = ANCILLARY_PATTERN.captures(filename) else {
            let diagnostic = fields::mismatch(
                filename,
                ErrorCode::E002,
                format!("`{filename}` is not an ancillary filename"),
                ANCILLARY_SHAPE,
            );
            return Err(ParseError::new(ParseErrorKind::Ancillary, filename, vec![diagnostic]));
        };

        let mut collector = DiagnosticCollector::new();
        let field = |name| Field::required(&captures, name);

        collector.check(field("mission").and_then(fields::mission));
        let instrument = collector.check(field("instrument").and_then(fields::instrument));
        let descriptor = collector.check(field("descriptor"));
        let start_field = collector.check(field("start_date"));
        let start_date = start_field.and_then(|f| collector.check(fields::start_date(f)));
        let end_field = Field::capture(&captures, "end_date");
        let end_date = match end_field {
            Some(f) => collector.check(fields::end_date(f)).map(Some),
            None => Some(None),
        };
        let version = collector.check(field("version").and_then(fields::version));
        let extension = collector.check(
            field("extension").and_then(|f| fields::extension(f, &FileExtension::ANCILLARY)),
        );

        // Reversed validity windows are accepted but reported.
        if let (Some(start), Some(Some(end)), Some(start_field), Some(end_field)) =
            (start_date, end_date, start_field, end_field)
        {
            if end < start {
                collector.emit(
                    Diagnostic::warning(format!("end date {end} precedes start date {start}"))
                        .with_code(ErrorCode::E111)
                        .with_label(end_field.span(), "ends before it starts")
                        .with_secondary_label(start_field.span(), "start")
                        .with_help("swap the two dates"),
                );
            }
        }

        let (
            Some(instrument),
            Some(descriptor),
            Some(start_date),
            Some(end_date),
            Some(version),
            Some(extension),
        ) = (instrument, descriptor, start_date, end_date, version, extension)
        else {
            return Err(collector.into_error(ParseErrorKind::Ancillary, filename));
        };
        let warnings = collector.finish(ParseErrorKind::Ancillary, filename)?;
        if !warnings.is_empty() {
            debug!(
                filename = filename,
                warnings = warnings.len();
                "Ancillary filename accepted with warnings"
            );
        }

        Ok(Self {
            filename: filename.to_owned(),
            instrument,
            descriptor: descriptor.value().to_owned(),
            start_date,
            end_date,
            version,
            extension,
            warnings,
        })
    }

    pub fn mission(&self) -> &'static str {
        MISSION
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of validity. `None` means open-ended.
    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn extension(&self) -> FileExtension {
        self.extension
    }

    /// Non-fatal diagnostics found while parsing, such as a reversed date range.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

impl ValidatedPath for AncillaryFilePath {
    fn filename(&self) -> &str {
        &self.filename
    }

    /// `imap/ancillary/<instrument>/<filename>`
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(MISSION)
            .join("ancillary")
            .join(self.instrument.as_str())
            .join(&self.filename)
    }

    fn time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date, self.end_date.unwrap_or(self.start_date)))
    }
}

impl PartialEq for AncillaryFilePath {
    fn eq(&self, other: &Self) -> bool {
        self.filename == other.filename
    }
}

impl Eq for AncillaryFilePath {}

impl Hash for AncillaryFilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.filename.hash(state);
    }
}

impl FromStr for AncillaryFilePath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
