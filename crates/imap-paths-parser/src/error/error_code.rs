//! Error codes for the filename diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Pattern errors (the filename does not have the convention's shape)
//! - `E1xx` - Field errors (the shape matched but a field is invalid)
//! - `E2xx` - Dispatch errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Pattern Errors (E0xx)
    // =========================================================================
    /// Science pattern mismatch.
    ///
    /// The filename does not have the shape
    /// `imap_<instrument>_<level>_<descriptor>_<YYYYMMDD>[-repointNNNNN]_<vNNN>.<cdf|pkts>`.
    E001,

    /// Ancillary pattern mismatch.
    ///
    /// The filename does not have the shape
    /// `imap_<instrument>_<descriptor>_<YYYYMMDD>[_<YYYYMMDD>]_<vNNN>.<cdf|csv|json>`.
    E002,

    /// SPICE pattern mismatch.
    ///
    /// None of the SPICE kernel naming grammars matched the filename.
    E003,

    /// Missing file name.
    ///
    /// The path has no final component, or the component is not valid UTF-8.
    E004,

    // =========================================================================
    // Field Errors (E1xx)
    // =========================================================================
    /// Invalid mission.
    ///
    /// The mission prefix must be `imap`.
    E100,

    /// Unknown instrument.
    E101,

    /// Unknown data level.
    E102,

    /// Invalid start date.
    ///
    /// Start dates must be real calendar dates written `YYYYMMDD`.
    E103,

    /// Invalid end date.
    ///
    /// End dates must be real calendar dates written `YYYYMMDD`.
    E104,

    /// Invalid version.
    ///
    /// Versions are written `v` followed by exactly three digits.
    E105,

    /// Invalid repointing.
    ///
    /// Repointing identifiers are written `repoint` followed by five digits.
    E106,

    /// Invalid extension.
    ///
    /// The extension is not allowed for the file kind, or does not match the
    /// data level (`pkts` for `l0`, `cdf` otherwise).
    E107,

    /// Unknown SPICE type.
    ///
    /// The type token is not in the SPICE type table, or is not valid for the
    /// kernel grammar that matched.
    E108,

    /// Invalid day of year.
    ///
    /// The day is not an ordinal of the given year.
    E109,

    /// Numeric field out of range.
    E110,

    /// End date precedes start date.
    ///
    /// Reported as a warning: the file is accepted.
    E111,

    // =========================================================================
    // Dispatch Errors (E2xx)
    // =========================================================================
    /// Unrecognized file.
    ///
    /// The filename matches none of the SPICE, science or ancillary conventions.
    E200,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Pattern errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            // Field errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E107 => "E107",
            ErrorCode::E108 => "E108",
            ErrorCode::E109 => "E109",
            ErrorCode::E110 => "E110",
            ErrorCode::E111 => "E111",
            // Dispatch errors
            ErrorCode::E200 => "E200",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Pattern errors
            ErrorCode::E001 => "science pattern mismatch",
            ErrorCode::E002 => "ancillary pattern mismatch",
            ErrorCode::E003 => "SPICE pattern mismatch",
            ErrorCode::E004 => "missing file name",
            // Field errors
            ErrorCode::E100 => "invalid mission",
            ErrorCode::E101 => "unknown instrument",
            ErrorCode::E102 => "unknown data level",
            ErrorCode::E103 => "invalid start date",
            ErrorCode::E104 => "invalid end date",
            ErrorCode::E105 => "invalid version",
            ErrorCode::E106 => "invalid repointing",
            ErrorCode::E107 => "invalid extension",
            ErrorCode::E108 => "unknown SPICE type",
            ErrorCode::E109 => "invalid day of year",
            ErrorCode::E110 => "numeric field out of range",
            ErrorCode::E111 => "end date precedes start date",
            // Dispatch errors
            ErrorCode::E200 => "unrecognized file",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
