//! Field extraction and validation shared by the filename grammars.
//!
//! Each validator takes one regex capture and returns either the typed value
//! or a [`Diagnostic`] labelled with the capture's span. Grammars feed the
//! results through a `DiagnosticCollector` so that every bad field is
//! reported, not only the first one.

use std::{ffi::OsStr, path::Path, str::FromStr};

use chrono::NaiveDate;
use regex::Captures;

use imap_paths_core::{
    MISSION,
    data_level::DataLevel,
    extension::FileExtension,
    instrument::Instrument,
    time::{self, DayOfYear},
    version::Version,
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, ParseErrorKind, Result},
    span::Span,
};

/// The trailing file name component of `path`.
///
/// Directories in front of the name are ignored. Fails with `E004` when the
/// path has no usable final component.
pub(crate) fn file_name(
    path: &Path,
    kind: ParseErrorKind,
) -> std::result::Result<&str, ParseError> {
    path.file_name().and_then(OsStr::to_str).ok_or_else(|| {
        let shown = display_name(path);
        let diagnostic = Diagnostic::error(format!("`{shown}` has no UTF-8 file name"))
            .with_code(ErrorCode::E004)
            .with_label(Span::new(0..shown.len()), "expected a path ending in a file name");
        ParseError::new(kind, shown, vec![diagnostic])
    })
}

/// The text a rejected `path` is reported against.
///
/// This is the lossy file name, or the whole lossy path when there is no
/// final component. Diagnostic spans index into this string.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Diagnostic for a filename that does not have the shape of a grammar.
pub(crate) fn mismatch(
    filename: &str,
    code: ErrorCode,
    message: impl Into<String>,
    help: impl Into<String>,
) -> Diagnostic {
    Diagnostic::error(message)
        .with_code(code)
        .with_label(Span::new(0..filename.len()), "does not match the naming pattern")
        .with_help(help)
}

/// One named capture and where it sits in the filename.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Field<'h> {
    value: &'h str,
    span: Span,
}

impl<'h> Field<'h> {
    /// Look up a named capture group. `None` if the group did not participate.
    pub fn capture(captures: &Captures<'h>, name: &str) -> Option<Self> {
        captures.name(name).map(|m| Self {
            value: m.as_str(),
            span: Span::new(m.range()),
        })
    }

    /// Like [`Field::capture`], for groups that are never optional in a pattern.
    pub fn required(captures: &Captures<'h>, name: &str) -> Result<Self> {
        Self::capture(captures, name).ok_or_else(|| {
            Diagnostic::error(format!("missing `{name}` field")).with_code(ErrorCode::E001)
        })
    }

    pub fn value(&self) -> &'h str {
        self.value
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

pub(crate) fn mission(field: Field<'_>) -> Result<&'static str> {
    if field.value == MISSION {
        Ok(MISSION)
    } else {
        Err(Diagnostic::error(format!("invalid mission `{}`", field.value))
            .with_code(ErrorCode::E100)
            .with_label(field.span, "expected `imap`"))
    }
}

pub(crate) fn instrument(field: Field<'_>) -> Result<Instrument> {
    field.value.parse().map_err(|_| {
        Diagnostic::error(format!("unknown instrument `{}`", field.value))
            .with_code(ErrorCode::E101)
            .with_label(field.span, "not an IMAP instrument")
            .with_help(format!("choose one of: {}", Instrument::valid_names()))
    })
}

pub(crate) fn data_level(field: Field<'_>) -> Result<DataLevel> {
    field.value.parse().map_err(|_| {
        Diagnostic::error(format!("unknown data level `{}`", field.value))
            .with_code(ErrorCode::E102)
            .with_label(field.span, "not an IMAP data level")
            .with_help(format!("choose one of: {}", DataLevel::valid_names()))
    })
}

pub(crate) fn start_date(field: Field<'_>) -> Result<NaiveDate> {
    date(field, ErrorCode::E103, "start")
}

pub(crate) fn end_date(field: Field<'_>) -> Result<NaiveDate> {
    date(field, ErrorCode::E104, "end")
}

fn date(field: Field<'_>, code: ErrorCode, which: &str) -> Result<NaiveDate> {
    time::parse_date(field.value).ok_or_else(|| {
        Diagnostic::error(format!("invalid {which} date `{}`", field.value))
            .with_code(code)
            .with_label(field.span, "not a calendar date")
            .with_help("dates are written YYYYMMDD")
    })
}

pub(crate) fn version(field: Field<'_>) -> Result<Version> {
    match field.value.parse() {
        Ok(version @ Version::Numbered(_)) => Ok(version),
        _ => Err(Diagnostic::error(format!("invalid version `{}`", field.value))
            .with_code(ErrorCode::E105)
            .with_label(field.span, "expected `v` and three digits")),
    }
}

/// Check the `NNNNN` of a `-repointNNNNN` suffix.
pub(crate) fn repointing(field: Field<'_>) -> Result<u32> {
    let invalid = || {
        Diagnostic::error(format!("invalid repointing `{}`", field.value))
            .with_code(ErrorCode::E106)
            .with_label(field.span, "expected five digits")
    };

    if field.value.len() != 5 {
        return Err(invalid());
    }
    field.value.parse().map_err(|_| invalid())
}

pub(crate) fn extension(field: Field<'_>, allowed: &[FileExtension]) -> Result<FileExtension> {
    match field.value.parse::<FileExtension>() {
        Ok(extension) if allowed.contains(&extension) => Ok(extension),
        _ => {
            let names: Vec<_> = allowed.iter().map(FileExtension::as_str).collect();
            Err(Diagnostic::error(format!("invalid extension `{}`", field.value))
                .with_code(ErrorCode::E107)
                .with_label(field.span, "extension not allowed here")
                .with_help(format!("choose one of: {}", names.join(", "))))
        }
    }
}

/// Convert a digit run into an integer.
pub(crate) fn number<T: FromStr>(field: Field<'_>, name: &str) -> Result<T> {
    field.value.parse().map_err(|_| {
        Diagnostic::error(format!("{name} `{}` is out of range", field.value))
            .with_code(ErrorCode::E110)
            .with_label(field.span, "too large")
    })
}

/// Check a `YYYY_DOY` pair against the calendar.
pub(crate) fn day_of_year(year: Field<'_>, day: Field<'_>) -> Result<DayOfYear> {
    let year_number: u16 = number(year, "year")?;
    let day_number: u16 = number(day, "day of year")?;

    DayOfYear::new(year_number, day_number).ok_or_else(|| {
        Diagnostic::error(format!(
            "day {} does not exist in year {}",
            day.value, year.value
        ))
        .with_code(ErrorCode::E109)
        .with_label(day.span, "day of year out of range")
        .with_secondary_label(year.span.union(day.span), "in this date")
    })
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;

    fn field(value: &str) -> Field<'_> {
        Field {
            value,
            span: Span::new(0..value.len()),
        }
    }

    #[test]
    fn test_file_name_strips_directories() {
        let path = Path::new("/test/imap_mag_l1a_burst_20210101_v001.cdf");

        let name = file_name(path, ParseErrorKind::Science).unwrap();
        assert_eq!(name, "imap_mag_l1a_burst_20210101_v001.cdf");
    }

    #[test]
    fn test_file_name_missing() {
        let err = file_name(Path::new("/"), ParseErrorKind::Spice).unwrap_err();

        assert_eq!(err.kind(), ParseErrorKind::Spice);
        assert!(err.has_code(ErrorCode::E004));
    }

    #[test]
    fn test_file_name_label_matches_reported_name() {
        let path = Path::new("/data/imap/..");

        let err = file_name(path, ParseErrorKind::Science).unwrap_err();

        assert_eq!(err.filename(), display_name(path));
        let span = err.diagnostics()[0].labels()[0].span();
        assert_eq!(span.end(), err.filename().len());
    }

    #[test]
    fn test_capture_spans() {
        let re = Regex::new(r"^imap_(?P<instrument>[^_]+)_").unwrap();
        let captures = re.captures("imap_mag_l1a").unwrap();

        let instrument = Field::capture(&captures, "instrument").unwrap();
        assert_eq!(instrument.value(), "mag");
        assert_eq!(instrument.span(), Span::new(5..8));
        assert!(Field::capture(&captures, "descriptor").is_none());
        assert!(Field::required(&captures, "descriptor").is_err());
    }

    #[test]
    fn test_vocabulary_fields() {
        assert_eq!(mission(field("imap")).unwrap(), "imap");
        assert_eq!(mission(field("mars")).unwrap_err().code(), Some(ErrorCode::E100));

        assert_eq!(instrument(field("swapi")).unwrap(), Instrument::Swapi);
        let err = instrument(field("sdc")).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert!(err.help().unwrap().contains("codice"));

        assert_eq!(data_level(field("l1b")).unwrap(), DataLevel::L1b);
        assert_eq!(data_level(field("l4")).unwrap_err().code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_date_fields() {
        assert!(start_date(field("20210101")).is_ok());
        assert_eq!(start_date(field("20210132")).unwrap_err().code(), Some(ErrorCode::E103));
        assert_eq!(end_date(field("20251320")).unwrap_err().code(), Some(ErrorCode::E104));
    }

    #[test]
    fn test_version_and_repointing_fields() {
        assert_eq!(version(field("v001")).unwrap(), Version::Numbered(1));
        assert_eq!(version(field("latest")).unwrap_err().code(), Some(ErrorCode::E105));

        assert_eq!(repointing(field("00001")).unwrap(), 1);
        assert_eq!(repointing(field("0001")).unwrap_err().code(), Some(ErrorCode::E106));
    }

    #[test]
    fn test_extension_field() {
        assert_eq!(
            extension(field("json"), &FileExtension::ANCILLARY).unwrap(),
            FileExtension::Json
        );
        let err = extension(field("pkts"), &FileExtension::ANCILLARY).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E107));
        assert_eq!(err.help(), Some("choose one of: cdf, csv, json"));
    }

    #[test]
    fn test_number_overflow() {
        assert_eq!(number::<u32>(field("0012"), "version").unwrap(), 12);
        let err = number::<u32>(field("99999999999"), "version").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E110));
    }

    #[test]
    fn test_day_of_year_field() {
        let doy = day_of_year(field("2025"), field("032")).unwrap();
        assert_eq!((doy.year(), doy.day()), (2025, 32));

        assert!(day_of_year(field("0000"), field("000")).unwrap().is_placeholder());

        let err = day_of_year(field("2025"), field("410")).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E109));
        assert_eq!(err.labels().len(), 2);
    }
}
