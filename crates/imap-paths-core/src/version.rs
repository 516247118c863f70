//! Product versions and repointing identifiers.

use std::{fmt, str::FromStr};

use crate::UnknownValueError;

/// Version of a science or ancillary product.
///
/// Filenames always carry a numbered version written `vNNN`. Queries may use
/// the `latest` sentinel instead, which orders after every numbered version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    Numbered(u16),
    Latest,
}

impl Version {
    /// The numeric part, `None` for [`Version::Latest`].
    pub fn number(&self) -> Option<u16> {
        match self {
            Version::Numbered(number) => Some(*number),
            Version::Latest => None,
        }
    }
}

impl FromStr for Version {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "latest" {
            return Ok(Version::Latest);
        }

        match s.strip_prefix('v') {
            Some(digits) if digits.len() == 3 && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                .parse()
                .map(Version::Numbered)
                .map_err(|_| UnknownValueError::new("version", s)),
            _ => Err(UnknownValueError::new("version", s)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Numbered(number) => write!(f, "v{number:03}"),
            Version::Latest => write!(f, "latest"),
        }
    }
}

/// Check that `input` is `latest` or `v` followed by exactly three digits.
pub fn is_valid_version(input: &str) -> bool {
    input.parse::<Version>().is_ok()
}

/// Check that `input` is `repoint` followed by exactly five digits.
pub fn is_valid_repointing(input: &str) -> bool {
    input
        .strip_prefix("repoint")
        .is_some_and(|digits| digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_version() {
        assert!(is_valid_version("v001"));
        assert!(is_valid_version("v999"));
        assert!(is_valid_version("latest"));

        assert!(!is_valid_version("v01"));
        assert!(!is_valid_version("v0001"));
        assert!(!is_valid_version("001"));
        assert!(!is_valid_version("V001"));
        assert!(!is_valid_version("v+01"));
    }

    #[test]
    fn test_version_display_and_order() {
        assert_eq!(Version::Numbered(1).to_string(), "v001");
        assert_eq!(Version::Latest.to_string(), "latest");
        assert!(Version::Numbered(2) > Version::Numbered(1));
        assert!(Version::Latest > Version::Numbered(999));
        assert_eq!("v012".parse::<Version>().unwrap().number(), Some(12));
    }

    #[test]
    fn test_is_valid_repointing() {
        assert!(is_valid_repointing("repoint00001"));
        assert!(!is_valid_repointing("repoint0001"));
        assert!(!is_valid_repointing("00001"));
    }
}
