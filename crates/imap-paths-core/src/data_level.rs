//! Processing levels of IMAP science products.

use std::{fmt, str::FromStr};

use crate::UnknownValueError;

/// The processing level of a science product (`l0` raw packets through `l3d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataLevel {
    L0,
    L1,
    L1a,
    L1b,
    L1c,
    L1ca,
    L1cb,
    L1d,
    L2,
    L2pre,
    L3,
    L3a,
    L3b,
    L3c,
    L3d,
}

impl DataLevel {
    /// Every valid data level, lowest first.
    pub const ALL: [DataLevel; 15] = [
        DataLevel::L0,
        DataLevel::L1,
        DataLevel::L1a,
        DataLevel::L1b,
        DataLevel::L1c,
        DataLevel::L1ca,
        DataLevel::L1cb,
        DataLevel::L1d,
        DataLevel::L2,
        DataLevel::L2pre,
        DataLevel::L3,
        DataLevel::L3a,
        DataLevel::L3b,
        DataLevel::L3c,
        DataLevel::L3d,
    ];

    /// The lower-case name used in filenames.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Returns `true` for level 0 (raw telemetry packets).
    pub fn is_raw(&self) -> bool {
        matches!(self, DataLevel::L0)
    }

    /// Comma separated list of every valid name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(DataLevel::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for DataLevel {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l0" => Ok(Self::L0),
            "l1" => Ok(Self::L1),
            "l1a" => Ok(Self::L1a),
            "l1b" => Ok(Self::L1b),
            "l1c" => Ok(Self::L1c),
            "l1ca" => Ok(Self::L1ca),
            "l1cb" => Ok(Self::L1cb),
            "l1d" => Ok(Self::L1d),
            "l2" => Ok(Self::L2),
            "l2pre" => Ok(Self::L2pre),
            "l3" => Ok(Self::L3),
            "l3a" => Ok(Self::L3a),
            "l3b" => Ok(Self::L3b),
            "l3c" => Ok(Self::L3c),
            "l3d" => Ok(Self::L3d),
            _ => Err(UnknownValueError::new("data level", s)),
        }
    }
}

impl From<DataLevel> for &'static str {
    fn from(val: DataLevel) -> Self {
        match val {
            DataLevel::L0 => "l0",
            DataLevel::L1 => "l1",
            DataLevel::L1a => "l1a",
            DataLevel::L1b => "l1b",
            DataLevel::L1c => "l1c",
            DataLevel::L1ca => "l1ca",
            DataLevel::L1cb => "l1cb",
            DataLevel::L1d => "l1d",
            DataLevel::L2 => "l2",
            DataLevel::L2pre => "l2pre",
            DataLevel::L3 => "l3",
            DataLevel::L3a => "l3a",
            DataLevel::L3b => "l3b",
            DataLevel::L3c => "l3c",
            DataLevel::L3d => "l3d",
        }
    }
}

impl fmt::Display for DataLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_level_roundtrip() {
        for level in DataLevel::ALL {
            assert_eq!(level.as_str().parse::<DataLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_data_level_rejects_descriptor_like_tokens() {
        assert!("l1b-cal".parse::<DataLevel>().is_err());
        assert!("burst".parse::<DataLevel>().is_err());
    }

    #[test]
    fn test_only_l0_is_raw() {
        assert!(DataLevel::L0.is_raw());
        assert!(DataLevel::ALL.iter().skip(1).all(|level| !level.is_raw()));
    }
}
