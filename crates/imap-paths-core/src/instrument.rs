//! The instruments flying on IMAP.

use std::{fmt, str::FromStr};

use crate::UnknownValueError;

/// An IMAP instrument, as written in the `<instrument>` field of science and
/// ancillary filenames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Instrument {
    Codice,
    Glows,
    Hi,
    Hit,
    Idex,
    Lo,
    Mag,
    Swapi,
    Swe,
    Ultra,
}

impl Instrument {
    /// Every valid instrument, in alphabetical order.
    pub const ALL: [Instrument; 10] = [
        Instrument::Codice,
        Instrument::Glows,
        Instrument::Hi,
        Instrument::Hit,
        Instrument::Idex,
        Instrument::Lo,
        Instrument::Mag,
        Instrument::Swapi,
        Instrument::Swe,
        Instrument::Ultra,
    ];

    /// The lower-case name used in filenames.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Comma separated list of every valid name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(Instrument::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Instrument {
    type Err = UnknownValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "codice" => Ok(Self::Codice),
            "glows" => Ok(Self::Glows),
            "hi" => Ok(Self::Hi),
            "hit" => Ok(Self::Hit),
            "idex" => Ok(Self::Idex),
            "lo" => Ok(Self::Lo),
            "mag" => Ok(Self::Mag),
            "swapi" => Ok(Self::Swapi),
            "swe" => Ok(Self::Swe),
            "ultra" => Ok(Self::Ultra),
            _ => Err(UnknownValueError::new("instrument", s)),
        }
    }
}

impl From<Instrument> for &'static str {
    fn from(val: Instrument) -> Self {
        match val {
            Instrument::Codice => "codice",
            Instrument::Glows => "glows",
            Instrument::Hi => "hi",
            Instrument::Hit => "hit",
            Instrument::Idex => "idex",
            Instrument::Lo => "lo",
            Instrument::Mag => "mag",
            Instrument::Swapi => "swapi",
            Instrument::Swe => "swe",
            Instrument::Ultra => "ultra",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
