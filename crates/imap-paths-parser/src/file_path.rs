//! The validated path types and the behaviour they share.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{ancillary::AncillaryFilePath, science::ScienceFilePath, spice::SpiceFilePath};

/// Behaviour shared by every validated filename.
pub trait ValidatedPath {
    /// The file name that was parsed, without any directories.
    fn filename(&self) -> &str;

    /// Storage location relative to the data directory.
    fn relative_path(&self) -> PathBuf;

    /// Storage location below `data_dir`, or relative when no root is given.
    fn construct_path(&self, data_dir: Option<&Path>) -> PathBuf {
        match data_dir {
            Some(root) => root.join(self.relative_path()),
            None => self.relative_path(),
        }
    }

    /// First and last day covered by the file, if its name carries dates.
    fn time_range(&self) -> Option<(NaiveDate, NaiveDate)>;
}

/// Any validated IMAP filename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImapFilePath {
    Science(ScienceFilePath),
    Ancillary(AncillaryFilePath),
    Spice(SpiceFilePath),
}

impl ImapFilePath {
    pub fn as_science(&self) -> Option<&ScienceFilePath> {
        match self {
            ImapFilePath::Science(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_ancillary(&self) -> Option<&AncillaryFilePath> {
        match self {
            ImapFilePath::Ancillary(path) => Some(path),
            _ => None,
        }
    }

    pub fn as_spice(&self) -> Option<&SpiceFilePath> {
        match self {
            ImapFilePath::Spice(path) => Some(path),
            _ => None,
        }
    }

    fn inner(&self) -> &dyn ValidatedPath {
        match self {
            ImapFilePath::Science(path) => path,
            ImapFilePath::Ancillary(path) => path,
            ImapFilePath::Spice(path) => path,
        }
    }
}

impl ValidatedPath for ImapFilePath {
    fn filename(&self) -> &str {
        self.inner().filename()
    }

    fn relative_path(&self) -> PathBuf {
        self.inner().relative_path()
    }

    fn time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.inner().time_range()
    }
}

impl From<ScienceFilePath> for ImapFilePath {
    fn from(path: ScienceFilePath) -> Self {
        ImapFilePath::Science(path)
    }
}

impl From<AncillaryFilePath> for ImapFilePath {
    fn from(path: AncillaryFilePath) -> Self {
        ImapFilePath::Ancillary(path)
    }
}

impl From<SpiceFilePath> for ImapFilePath {
    fn from(path: SpiceFilePath) -> Self {
        ImapFilePath::Spice(path)
    }
}
