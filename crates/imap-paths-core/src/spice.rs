//! SPICE kernel type tables.
//!
//! SPICE filenames carry a raw type token (a suffix such as `ah.bc`, or a
//! product prefix such as `de` or `naif`). The token is resolved to a
//! semantic [`SpiceType`], and every semantic type is stored under a fixed
//! subdirectory of the `spice/` tree.
//!
//! # Example
//!
//! ```
//! # use imap_paths_core::spice::SpiceType;
//! let kind = SpiceType::from_token("ap.bc").unwrap();
//! assert_eq!(kind, SpiceType::AttitudePredict);
//! assert_eq!(kind.name(), "attitude_predict");
//! assert_eq!(kind.subdirectory(), "ck");
//! ```

use std::fmt;

/// Semantic type of a SPICE kernel or SPICE-adjacent product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpiceType {
    AttitudeHistory,
    AttitudePredict,
    Spin,
    Repoint,
    EphemerisReconstructed,
    EphemerisNominal,
    EphemerisPredicted,
    Ephemeris90Days,
    EphemerisLong,
    EphemerisLaunch,
    PlanetaryEphemeris,
    PlanetaryConstants,
    Leapseconds,
    SpacecraftClock,
    Frames,
    Metakernel,
    Thruster,
}

impl SpiceType {
    /// Every semantic type, in table order.
    pub const ALL: [SpiceType; 17] = [
        SpiceType::AttitudeHistory,
        SpiceType::AttitudePredict,
        SpiceType::Spin,
        SpiceType::Repoint,
        SpiceType::EphemerisReconstructed,
        SpiceType::EphemerisNominal,
        SpiceType::EphemerisPredicted,
        SpiceType::Ephemeris90Days,
        SpiceType::EphemerisLong,
        SpiceType::EphemerisLaunch,
        SpiceType::PlanetaryEphemeris,
        SpiceType::PlanetaryConstants,
        SpiceType::Leapseconds,
        SpiceType::SpacecraftClock,
        SpiceType::Frames,
        SpiceType::Metakernel,
        SpiceType::Thruster,
    ];

    /// Resolve a raw (lower-case) filename token into its semantic type.
    ///
    /// Returns `None` for tokens outside the table.
    pub fn from_token(token: &str) -> Option<Self> {
        let kind = match token {
            "ah.bc" => SpiceType::AttitudeHistory,
            "ap.bc" => SpiceType::AttitudePredict,
            "spin.csv" => SpiceType::Spin,
            "repoint.csv" => SpiceType::Repoint,
            "recon" => SpiceType::EphemerisReconstructed,
            "nom" => SpiceType::EphemerisNominal,
            "pred" => SpiceType::EphemerisPredicted,
            "90days" => SpiceType::Ephemeris90Days,
            "long" => SpiceType::EphemerisLong,
            "launch" => SpiceType::EphemerisLaunch,
            "de" => SpiceType::PlanetaryEphemeris,
            "pck" => SpiceType::PlanetaryConstants,
            "naif" => SpiceType::Leapseconds,
            "imapsclk_" => SpiceType::SpacecraftClock,
            "tf" => SpiceType::Frames,
            "tm" => SpiceType::Metakernel,
            "sff" => SpiceType::Thruster,
            _ => return None,
        };
        Some(kind)
    }

    /// Semantic name, e.g. `attitude_history`.
    pub fn name(&self) -> &'static str {
        match self {
            SpiceType::AttitudeHistory => "attitude_history",
            SpiceType::AttitudePredict => "attitude_predict",
            SpiceType::Spin => "spin",
            SpiceType::Repoint => "repoint",
            SpiceType::EphemerisReconstructed => "ephemeris_reconstructed",
            SpiceType::EphemerisNominal => "ephemeris_nominal",
            SpiceType::EphemerisPredicted => "ephemeris_predicted",
            SpiceType::Ephemeris90Days => "ephemeris_90days",
            SpiceType::EphemerisLong => "ephemeris_long",
            SpiceType::EphemerisLaunch => "ephemeris_launch",
            SpiceType::PlanetaryEphemeris => "planetary_ephemeris",
            SpiceType::PlanetaryConstants => "planetary_constants",
            SpiceType::Leapseconds => "leapseconds",
            SpiceType::SpacecraftClock => "spacecraft_clock",
            SpiceType::Frames => "frames",
            SpiceType::Metakernel => "metakernel",
            SpiceType::Thruster => "thruster",
        }
    }

    /// Storage subdirectory below `spice/`.
    pub fn subdirectory(&self) -> &'static str {
        match self {
            SpiceType::AttitudeHistory | SpiceType::AttitudePredict => "ck",
            SpiceType::Spin => "spin",
            SpiceType::Repoint => "repoint",
            SpiceType::EphemerisReconstructed
            | SpiceType::EphemerisNominal
            | SpiceType::EphemerisPredicted
            | SpiceType::Ephemeris90Days
            | SpiceType::EphemerisLong
            | SpiceType::EphemerisLaunch
            | SpiceType::PlanetaryEphemeris => "spk",
            SpiceType::PlanetaryConstants => "pck",
            SpiceType::Leapseconds => "lsk",
            SpiceType::SpacecraftClock => "sclk",
            SpiceType::Frames => "fk",
            SpiceType::Metakernel => "mk",
            SpiceType::Thruster => "activities",
        }
    }

    /// Comma separated list of every semantic name, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(SpiceType::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SpiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
