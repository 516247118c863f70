//! Science product filenames.
//!
//! `imap_<instrument>_<level>_<descriptor>_<YYYYMMDD>[-repointNNNNN]_<vNNN>.<cdf|pkts>`

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
};

use chrono::{Datelike, NaiveDate};
use log::trace;
use regex::Regex;

use imap_paths_core::{
    MISSION, data_level::DataLevel, extension::FileExtension, instrument::Instrument,
    version::Version,
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, ParseErrorKind},
    fields::{self, Field},
    file_path::ValidatedPath,
};

static SCIENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<mission>imap)_(?P<instrument>[^_]+)_(?P<data_level>[^_]+)_(?P<descriptor>[^_]+)_(?P<start_date>\d{8})(-repoint(?P<repointing>\d{5}))?_(?P<version>v\d{3})\.(?P<extension>cdf|pkts)$",
    )
    .expect("science filename pattern is valid")
});

const SCIENCE_SHAPE: &str =
    "expected `imap_<instrument>_<level>_<descriptor>_<YYYYMMDD>[-repointNNNNN]_<vNNN>.<cdf|pkts>`";

/// A validated science product filename.
///
/// # Example
///
/// ```
/// # use imap_paths_parser::ScienceFilePath;
/// let path = ScienceFilePath::new("imap_mag_l1a_burst_20210101_v001.cdf").unwrap();
///
/// assert_eq!(path.instrument().as_str(), "mag");
/// assert_eq!(path.data_level().as_str(), "l1a");
/// assert_eq!(path.descriptor(), "burst");
/// assert_eq!(path.repointing(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScienceFilePath {
    filename: String,
    instrument: Instrument,
    data_level: DataLevel,
    descriptor: String,
    start_date: NaiveDate,
    repointing: Option<u32>,
    version: Version,
    extension: FileExtension,
}

impl ScienceFilePath {
    /// Parse the trailing file name of `path` as a science filename.
    ///
    /// Every violated rule is reported in the returned [`ParseError`].
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let filename = fields::file_name(path.as_ref(), ParseErrorKind::Science)?;
        Self::parse_name(filename)
    }

    /// Build a filename from its parts and validate it.
    ///
    /// The extension follows from the data level: `pkts` for `l0`, `cdf`
    /// otherwise. `start_time` is written `YYYYMMDD`. A repointing number of
    /// `0` is treated like `None` and leaves the segment out.
    pub fn generate_from_inputs(
        instrument: &str,
        data_level: &str,
        descriptor: &str,
        start_time: &str,
        version: &str,
        repointing: Option<u32>,
    ) -> Result<Self, ParseError> {
        let extension = data_level
            .parse::<DataLevel>()
            .map(FileExtension::for_data_level)
            .unwrap_or(FileExtension::Cdf);
        let repointing = repointing
            .filter(|&number| number != 0)
            .map(|number| format!("-repoint{number:05}"))
            .unwrap_or_default();

        let filename = format!(
            "{MISSION}_{instrument}_{data_level}_{descriptor}_{start_time}{repointing}_{version}.{extension}"
        );
        Self::parse_name(&filename)
    }

    fn parse_name(filename: &str) -> Result<Self, ParseError> {
        trace!(filename; "Matching science pattern");

        let Some(captures) = SCIENCE_PATTERN.captures(filename) else {
            let diagnostic = fields::mismatch(
                filename,
                ErrorCode::E001,
                format!("`{filename}` is not a science filename"),
                SCIENCE_SHAPE,
            );
            return Err(ParseError::new(ParseErrorKind::Science, filename, vec![diagnostic]));
        };

        let mut collector = DiagnosticCollector::new();
        let field = |name| Field::required(&captures, name);

        collector.check(field("mission").and_then(fields::mission));
        let instrument = collector.check(field("instrument").and_then(fields::instrument));
        let data_level_field = collector.check(field("data_level"));
        let data_level = data_level_field.and_then(|f| collector.check(fields::data_level(f)));
        let descriptor = collector.check(field("descriptor"));
        let start_date = collector.check(field("start_date").and_then(fields::start_date));
        let repointing = match Field::capture(&captures, "repointing") {
            Some(f) => collector.check(fields::repointing(f)).map(Some),
            None => Some(None),
        };
        let version = collector.check(field("version").and_then(fields::version));
        let extension_field = collector.check(field("extension"));
        let extension = extension_field
            .and_then(|f| collector.check(fields::extension(f, &FileExtension::SCIENCE)));

        if let (Some(level), Some(level_field), Some(ext), Some(ext_field)) =
            (data_level, data_level_field, extension, extension_field)
        {
            let expected = FileExtension::for_data_level(level);
            if ext != expected {
                collector.emit(
                    Diagnostic::error(format!(
                        "`{ext}` is not a valid extension for data level `{level}`"
                    ))
                    .with_code(ErrorCode::E107)
                    .with_label(ext_field.span(), format!("expected `{expected}`"))
                    .with_secondary_label(level_field.span(), "data level"),
                );
            }
        }

        let (
            Some(instrument),
            Some(data_level),
            Some(descriptor),
            Some(start_date),
            Some(repointing),
            Some(version),
            Some(extension),
        ) = (
            instrument, data_level, descriptor, start_date, repointing, version, extension,
        )
        else {
            return Err(collector.into_error(ParseErrorKind::Science, filename));
        };
        collector.finish(ParseErrorKind::Science, filename)?;

        Ok(Self {
            filename: filename.to_owned(),
            instrument,
            data_level,
            descriptor: descriptor.value().to_owned(),
            start_date,
            repointing,
            version,
            extension,
        })
    }

    pub fn mission(&self) -> &'static str {
        MISSION
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn data_level(&self) -> DataLevel {
        self.data_level
    }

    /// Free-form descriptor. May contain hyphens, never underscores.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Pointing epoch from a `-repointNNNNN` suffix.
    pub fn repointing(&self) -> Option<u32> {
        self.repointing
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn extension(&self) -> FileExtension {
        self.extension
    }
}

impl ValidatedPath for ScienceFilePath {
    fn filename(&self) -> &str {
        &self.filename
    }

    /// `imap/<instrument>/<level>/<YYYY>/<MM>/<filename>`
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(MISSION)
            .join(self.instrument.as_str())
            .join(self.data_level.as_str())
            .join(format!("{:04}", self.start_date.year()))
            .join(format!("{:02}", self.start_date.month()))
            .join(&self.filename)
    }

    fn time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date, self.start_date))
    }
}

impl FromStr for ScienceFilePath {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use imap_paths_core::time::format_date;

    use super::*;

    fn instrument_strategy() -> impl Strategy<Value = Instrument> {
        proptest::sample::select(Instrument::ALL.to_vec())
    }

    fn data_level_strategy() -> impl Strategy<Value = DataLevel> {
        proptest::sample::select(DataLevel::ALL.to_vec())
    }

    fn date_strategy() -> impl Strategy<Value = NaiveDate> {
        (1000i32..=9999, 1u32..=365)
            .prop_filter_map("ordinal outside year", |(y, o)| NaiveDate::from_yo_opt(y, o))
    }

    /// Generated filenames parse back to the fields they were built from.
    fn check_generated_round_trip(
        instrument: Instrument,
        data_level: DataLevel,
        descriptor: &str,
        date: NaiveDate,
        version: u16,
        repointing: Option<u32>,
    ) -> Result<(), TestCaseError> {
        let version = Version::Numbered(version);
        let path = ScienceFilePath::generate_from_inputs(
            instrument.as_str(),
            data_level.as_str(),
            descriptor,
            &format_date(date),
            &version.to_string(),
            repointing,
        )
        .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(path.instrument(), instrument);
        prop_assert_eq!(path.data_level(), data_level);
        prop_assert_eq!(path.descriptor(), descriptor);
        prop_assert_eq!(path.start_date(), date);
        prop_assert_eq!(path.repointing(), repointing);
        prop_assert_eq!(path.version(), version);
        prop_assert_eq!(path.extension(), FileExtension::for_data_level(data_level));

        let reparsed = ScienceFilePath::new(path.filename())
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
        prop_assert_eq!(reparsed, path);
        Ok(())
    }

    proptest! {
        #[test]
        fn generated_filenames_round_trip(
            instrument in instrument_strategy(),
            data_level in data_level_strategy(),
            descriptor in "[a-z0-9]{1,8}(-[a-z0-9]{1,6})?",
            date in date_strategy(),
            version in 0u16..=999,
            repointing in proptest::option::of(0u32..=99_999),
        ) {
            check_generated_round_trip(instrument, data_level, &descriptor, date, version, repointing)?;
        }
    }
}
