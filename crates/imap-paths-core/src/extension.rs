//! File extensions allowed for science and ancillary products.

use std::{fmt, str::FromStr};

use crate::{UnknownValueError, data_level::DataLevel};

/// Extension of a science or ancillary product.
///
/// Science products are either raw packet files (`pkts`, level 0 only) or CDF
/// files. Ancillary products may be CDF, CSV or JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileExtension {
    Pkts,
    Cdf,
    Csv,
    Json,
}

impl FileExtension {
    /// Extensions accepted for science products.
    pub const SCIENCE: [FileExtension; 2] = [FileExtension::Pkts, FileExtension::Cdf];

    /// Extensions accepted for ancillary products.
    pub const ANCILLARY: [FileExtension; 3] =
        [FileExtension::Cdf, FileExtension::Csv, FileExtension::Json];

    /// The extension without its leading dot.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The only extension a science product of `level` may carry.
    pub fn for_data_level(level: DataLevel) -> Self {
        if level.is_raw() {
            FileExtension::Pkts
        } else {
            FileExtension::Cdf
        }
    }

    pub fn is_science(&self) -> bool {
        Self::SCIENCE.contains(self)
    }

    pub fn is_ancillary(&self) -> bool {
        Self::ANCILLARY.contains(self)
    }
}

impl FromStr for FileExtension {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pkts" => Ok(Self::Pkts),
            "cdf" => Ok(Self::Cdf),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(UnknownValueError::new("extension", s)),
        }
    }
}

impl From<FileExtension> for &'static str {
    fn from(val: FileExtension) -> Self {
        match val {
            FileExtension::Pkts => "pkts",
            FileExtension::Cdf => "cdf",
            FileExtension::Csv => "csv",
            FileExtension::Json => "json",
        }
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
