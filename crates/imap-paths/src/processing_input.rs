//! Processing inputs: groups of files of one kind handed to a processing step.
//!
//! A [`ProcessingInput`] holds one or more validated files that share a
//! source. Science inputs share instrument, data level and descriptor;
//! ancillary inputs share instrument and descriptor; SPICE inputs form a
//! single `spice` group.

use std::{fmt, path::Path, str::FromStr};

use chrono::NaiveDate;
use log::debug;

use imap_paths_parser::{
    AncillaryFilePath, ImapFilePath, ParseError, ScienceFilePath, SpiceFilePath, ValidatedPath,
};

use crate::ImapPathsError;

const SPICE_SOURCE: &str = "spice";
const ANCILLARY_DATA_TYPE: &str = "ancillary";

/// The kind of files in a [`ProcessingInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessingInputType {
    ScienceFile,
    AncillaryFile,
    SpiceFile,
}

impl ProcessingInputType {
    /// Wire name, e.g. `SCIENCE_FILE`.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

impl From<ProcessingInputType> for &'static str {
    fn from(value: ProcessingInputType) -> Self {
        match value {
            ProcessingInputType::ScienceFile => "SCIENCE_FILE",
            ProcessingInputType::AncillaryFile => "ANCILLARY_FILE",
            ProcessingInputType::SpiceFile => "SPICE_FILE",
        }
    }
}

impl FromStr for ProcessingInputType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCIENCE_FILE" => Ok(Self::ScienceFile),
            "ANCILLARY_FILE" => Ok(Self::AncillaryFile),
            "SPICE_FILE" => Ok(Self::SpiceFile),
            _ => Err(format!("Invalid processing input type: {s}")),
        }
    }
}

impl fmt::Display for ProcessingInputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What every file of one processing input has in common.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct GroupKey {
    input_type: ProcessingInputType,
    source: String,
    data_type: String,
    descriptor: String,
}

impl GroupKey {
    pub fn of(path: &ImapFilePath) -> Self {
        let (input_type, source, data_type, descriptor) = match path {
            ImapFilePath::Science(science) => (
                ProcessingInputType::ScienceFile,
                science.instrument().as_str(),
                science.data_level().as_str(),
                science.descriptor(),
            ),
            ImapFilePath::Ancillary(ancillary) => (
                ProcessingInputType::AncillaryFile,
                ancillary.instrument().as_str(),
                ANCILLARY_DATA_TYPE,
                ancillary.descriptor(),
            ),
            ImapFilePath::Spice(_) => (
                ProcessingInputType::SpiceFile,
                SPICE_SOURCE,
                SPICE_SOURCE,
                SPICE_SOURCE,
            ),
        };

        Self {
            input_type,
            source: source.to_owned(),
            data_type: data_type.to_owned(),
            descriptor: descriptor.to_owned(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "source `{}`, data type `{}`, descriptor `{}`",
            self.source, self.data_type, self.descriptor
        )
    }
}

/// One or more files of a single kind and source.
///
/// # Example
///
/// ```
/// # use imap_paths::processing_input::{ProcessingInput, ProcessingInputType};
/// let input = ProcessingInput::ancillary([
///     "imap_mag_l1b-cal_20250101_v001.cdf",
///     "imap_mag_l1b-cal_20250103_20250104_v002.cdf",
/// ])
/// .unwrap();
///
/// assert_eq!(input.input_type(), ProcessingInputType::AncillaryFile);
/// assert_eq!(input.source(), "mag");
/// assert_eq!(input.data_type(), "ancillary");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingInput {
    key: GroupKey,
    filename_list: Vec<String>,
    imap_file_paths: Vec<ImapFilePath>,
}

impl ProcessingInput {
    /// Group science files.
    ///
    /// # Errors
    ///
    /// Fails when a filename is not a valid science filename, when the files
    /// differ in instrument, data level or descriptor, or when no filename
    /// is given.
    pub fn science<I>(filenames: I) -> Result<Self, ImapPathsError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        Self::build(ProcessingInputType::ScienceFile, filenames, |path| {
            ScienceFilePath::new(path).map(Into::into)
        })
    }

    /// Group ancillary files.
    ///
    /// # Errors
    ///
    /// Fails when a filename is not a valid ancillary filename, when the files
    /// differ in instrument or descriptor, or when no filename is given.
    pub fn ancillary<I>(filenames: I) -> Result<Self, ImapPathsError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        Self::build(ProcessingInputType::AncillaryFile, filenames, |path| {
            AncillaryFilePath::new(path).map(Into::into)
        })
    }

    /// Group SPICE kernels. All kernels share the `spice` source.
    pub fn spice<I>(filenames: I) -> Result<Self, ImapPathsError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        Self::build(ProcessingInputType::SpiceFile, filenames, |path| {
            SpiceFilePath::new(path).map(Into::into)
        })
    }

    fn build<I>(
        input_type: ProcessingInputType,
        filenames: I,
        parse: fn(&Path) -> Result<ImapFilePath, ParseError>,
    ) -> Result<Self, ImapPathsError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut members = Vec::new();
        for filename in filenames {
            let path = filename.as_ref();
            let parsed = parse(path)?;
            members.push((path.to_string_lossy().into_owned(), parsed));
        }

        let Some((_, first)) = members.first() else {
            return Err(ImapPathsError::EmptyInput(input_type));
        };
        let key = GroupKey::of(first);

        Self::from_members(key, members)
    }

    /// Assemble an input from already validated files, enforcing that they
    /// all share `key`.
    pub(crate) fn from_members(
        key: GroupKey,
        members: Vec<(String, ImapFilePath)>,
    ) -> Result<Self, ImapPathsError> {
        if members.is_empty() {
            return Err(ImapPathsError::EmptyInput(key.input_type));
        }

        if let Some((_, stray)) = members
            .iter()
            .find(|(_, parsed)| GroupKey::of(parsed) != key)
        {
            return Err(ImapPathsError::InconsistentInput {
                input_type: key.input_type,
                filename: stray.filename().to_owned(),
                expected: key.to_string(),
                found: GroupKey::of(stray).to_string(),
            });
        }

        debug!(
            input_type = key.input_type.as_str(),
            source = key.source.as_str(),
            descriptor = key.descriptor.as_str(),
            files = members.len();
            "Processing input created"
        );

        let (filename_list, imap_file_paths) = members.into_iter().unzip();
        Ok(Self {
            key,
            filename_list,
            imap_file_paths,
        })
    }

    pub fn input_type(&self) -> ProcessingInputType {
        self.key.input_type
    }

    /// Instrument name, or `spice` for SPICE inputs.
    pub fn source(&self) -> &str {
        &self.key.source
    }

    pub fn descriptor(&self) -> &str {
        &self.key.descriptor
    }

    /// Data level for science inputs, `ancillary` or `spice` otherwise.
    pub fn data_type(&self) -> &str {
        &self.key.data_type
    }

    /// The filenames as they were given, in order.
    pub fn filename_list(&self) -> &[String] {
        &self.filename_list
    }

    pub fn imap_file_paths(&self) -> &[ImapFilePath] {
        &self.imap_file_paths
    }

    /// Earliest start and latest end date over all files.
    ///
    /// A file without an end date ends on its start date. Undated kernels do
    /// not contribute; `None` if no file carries a date.
    pub fn get_time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        merge_time_ranges(self.imap_file_paths.iter().filter_map(|path| path.time_range()))
    }
}

pub(crate) fn merge_time_ranges(
    ranges: impl IntoIterator<Item = (NaiveDate, NaiveDate)>,
) -> Option<(NaiveDate, NaiveDate)> {
    ranges
        .into_iter()
        .reduce(|(start, end), (next_start, next_end)| (start.min(next_start), end.max(next_end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_type_names() {
        assert_eq!(ProcessingInputType::ScienceFile.to_string(), "SCIENCE_FILE");
        assert_eq!(
            "ANCILLARY_FILE".parse::<ProcessingInputType>(),
            Ok(ProcessingInputType::AncillaryFile)
        );
        assert!("science".parse::<ProcessingInputType>().is_err());
    }

    #[test]
    fn test_empty_input() {
        let err = ProcessingInput::science(Vec::<&str>::new()).unwrap_err();

        assert!(matches!(
            err,
            ImapPathsError::EmptyInput(ProcessingInputType::ScienceFile)
        ));
    }

    #[test]
    fn test_wrong_kind_is_parse_error() {
        let err = ProcessingInput::science(["imap_mag_l1b-cal_20250101_v001.json"]).unwrap_err();

        assert!(matches!(err, ImapPathsError::Parse { .. }));
    }

    #[test]
    fn test_science_data_level_must_match() {
        let err = ProcessingInput::science([
            "imap_mag_l1a_norm-magi_20240312_v000.cdf",
            "imap_mag_l1b_norm-magi_20240312_v000.cdf",
        ])
        .unwrap_err();

        assert!(err.to_string().contains("same source"));
    }

    #[test]
    fn test_merge_time_ranges() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();

        assert_eq!(merge_time_ranges([]), None);
        assert_eq!(
            merge_time_ranges([(d(3), d(4)), (d(1), d(1)), (d(2), d(9))]),
            Some((d(1), d(9)))
        );
    }
}
