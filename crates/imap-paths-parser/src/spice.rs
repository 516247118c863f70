//! SPICE kernel filenames.
//!
//! SPICE products follow seven independent naming grammars. They are tried in
//! [`SpiceGrammar::ORDER`] against the ASCII lower-cased filename and the first
//! grammar whose pattern matches decides the outcome: if its fields then fail
//! validation the file is rejected, later grammars are not consulted.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
    sync::LazyLock,
};

use chrono::NaiveDate;
use log::trace;
use regex::{Captures, Regex};

use imap_paths_core::{MISSION, spice::SpiceType, time::DayOfYear};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, ParseErrorKind, Result},
    fields::{self, Field},
    file_path::ValidatedPath,
};

/// One of the SPICE filename grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpiceGrammar {
    /// `imap_YYYY_DOY_YYYY_DOY_<ver>.<ah.bc|ap.bc|spin.csv>`
    Attitude,
    /// `imap_YYYY_DOY_<ver>.repoint.csv`
    Repoint,
    /// `imap_<type>_<YYYYMMDD>_<YYYYMMDD>[_v<ver>].bsp`
    Ephemeris,
    /// `<type><ver>.<tls|tpc|bsp|tsc>`, e.g. `naif0012.tls`
    ProductVersion,
    /// `imap_<ver>.tf`
    Frames,
    /// `imap_YYYY_DOY_<mode>_<NN>.sff`
    Thruster,
    /// `imap_YYYY_v<NNN>.tm`
    Metakernel,
}

impl SpiceGrammar {
    /// Matching order. The first matching grammar wins.
    pub const ORDER: [SpiceGrammar; 7] = [
        SpiceGrammar::Attitude,
        SpiceGrammar::Repoint,
        SpiceGrammar::Ephemeris,
        SpiceGrammar::ProductVersion,
        SpiceGrammar::Frames,
        SpiceGrammar::Thruster,
        SpiceGrammar::Metakernel,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpiceGrammar::Attitude => "attitude",
            SpiceGrammar::Repoint => "repoint",
            SpiceGrammar::Ephemeris => "spacecraft ephemeris",
            SpiceGrammar::ProductVersion => "versioned product",
            SpiceGrammar::Frames => "frames",
            SpiceGrammar::Thruster => "thruster",
            SpiceGrammar::Metakernel => "metakernel",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            SpiceGrammar::Attitude => {
                r"^(?P<mission>imap)_(?P<start_year>\d{4})_(?P<start_doy>\d{3})_(?P<end_year>\d{4})_(?P<end_doy>\d{3})_(?P<version>\d+)\.(?P<type>ah\.bc|ap\.bc|spin\.csv)$"
            }
            SpiceGrammar::Repoint => {
                r"^(?P<mission>imap)_(?P<start_year>\d{4})_(?P<start_doy>\d{3})_(?P<version>\d+)\.(?P<type>repoint\.csv)$"
            }
            SpiceGrammar::Ephemeris => {
                r"^(?P<mission>imap)_(?P<type>[a-z0-9\-]+)_(?P<start_date>\d{8})_(?P<end_date>\d{8})(?:_v(?P<version>\d+))?\.(?P<extension>bsp)$"
            }
            SpiceGrammar::ProductVersion => {
                r"^(?P<type>[a-z\-_]+)(?P<version>\d+)\.(?P<extension>tls|tpc|bsp|tsc)$"
            }
            SpiceGrammar::Frames => r"^(?P<mission>imap)_(?P<version>\d+)\.(?P<type>tf)$",
            SpiceGrammar::Thruster => {
                r"^(?P<mission>imap)_(?P<start_year>\d{4})_(?P<start_doy>\d{3})_(?P<mode>[a-z0-9\-_]+)_(?P<version>\d{2})\.(?P<type>sff)$"
            }
            SpiceGrammar::Metakernel => {
                r"^(?P<mission>imap)_(?P<start_year>\d{4})_v(?P<version>\d{3})\.(?P<type>tm)$"
            }
        }
    }

    /// Whether a file of type `kind` may be named with this grammar.
    pub fn accepts(&self, kind: SpiceType) -> bool {
        use SpiceType::*;

        match self {
            SpiceGrammar::Attitude => matches!(kind, AttitudeHistory | AttitudePredict | Spin),
            SpiceGrammar::Repoint => kind == Repoint,
            SpiceGrammar::Ephemeris => matches!(
                kind,
                EphemerisReconstructed
                    | EphemerisNominal
                    | EphemerisPredicted
                    | Ephemeris90Days
                    | EphemerisLong
                    | EphemerisLaunch
            ),
            SpiceGrammar::ProductVersion => matches!(
                kind,
                PlanetaryEphemeris | PlanetaryConstants | Leapseconds | SpacecraftClock
            ),
            SpiceGrammar::Frames => kind == Frames,
            SpiceGrammar::Thruster => kind == Thruster,
            SpiceGrammar::Metakernel => kind == Metakernel,
        }
    }

    fn accepted_names(&self) -> String {
        SpiceType::ALL
            .iter()
            .filter(|kind| self.accepts(**kind))
            .map(SpiceType::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Validate the grammar specific fields of a match.
    fn extract(
        &self,
        captures: &Captures<'_>,
        collector: &mut DiagnosticCollector,
    ) -> Option<SpiceMetadata> {
        let field = |name| Field::required(captures, name);
        let version = || field("version").and_then(|f| fields::number::<u32>(f, "version"));
        let day_of_year = |year, day| {
            field(year).and_then(|year| field(day).and_then(|day| fields::day_of_year(year, day)))
        };

        match self {
            SpiceGrammar::Attitude => {
                let start = collector.check(day_of_year("start_year", "start_doy"));
                let end = collector.check(day_of_year("end_year", "end_doy"));
                let version = collector.check(version());
                Some(SpiceMetadata::Attitude {
                    start: start?,
                    end: end?,
                    version: version?,
                })
            }
            SpiceGrammar::Repoint => {
                let start = collector.check(day_of_year("start_year", "start_doy"));
                let version = collector.check(version());
                Some(SpiceMetadata::Repoint {
                    start: start?,
                    version: version?,
                })
            }
            SpiceGrammar::Ephemeris => {
                let start_date = collector.check(field("start_date").and_then(fields::start_date));
                let end_date = collector.check(field("end_date").and_then(fields::end_date));
                let version = match Field::capture(captures, "version") {
                    Some(f) => collector.check(fields::number::<u32>(f, "version")).map(Some),
                    None => Some(None),
                };
                Some(SpiceMetadata::Ephemeris {
                    start_date: start_date?,
                    end_date: end_date?,
                    version: version?,
                })
            }
            SpiceGrammar::ProductVersion => {
                let version = collector.check(version());
                let extension = collector.check(field("extension"));
                Some(SpiceMetadata::ProductVersion {
                    version: version?,
                    extension: extension?.value().to_owned(),
                })
            }
            SpiceGrammar::Frames => Some(SpiceMetadata::Frames {
                version: collector.check(version())?,
            }),
            SpiceGrammar::Thruster => {
                let start = collector.check(day_of_year("start_year", "start_doy"));
                let mode = collector.check(field("mode"));
                let version = collector.check(version());
                Some(SpiceMetadata::Thruster {
                    start: start?,
                    mode: mode?.value().to_owned(),
                    version: version?,
                })
            }
            SpiceGrammar::Metakernel => {
                let year = collector
                    .check(field("start_year").and_then(|f| fields::number::<u16>(f, "year")));
                let version = collector.check(version());
                Some(SpiceMetadata::Metakernel {
                    year: year?,
                    version: version?,
                })
            }
        }
    }
}

static SPICE_GRAMMARS: LazyLock<Vec<(SpiceGrammar, Regex)>> = LazyLock::new(|| {
    SpiceGrammar::ORDER
        .iter()
        .map(|grammar| {
            let regex = Regex::new(grammar.pattern()).expect("SPICE filename pattern is valid");
            (*grammar, regex)
        })
        .collect()
});

/// Typed fields of a SPICE filename, one variant per grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SpiceMetadata {
    Attitude {
        start: DayOfYear,
        end: DayOfYear,
        version: u32,
    },
    Repoint {
        start: DayOfYear,
        version: u32,
    },
    Ephemeris {
        start_date: NaiveDate,
        end_date: NaiveDate,
        version: Option<u32>,
    },
    ProductVersion {
        version: u32,
        extension: String,
    },
    Frames {
        version: u32,
    },
    Thruster {
        start: DayOfYear,
        mode: String,
        version: u32,
    },
    Metakernel {
        year: u16,
        version: u32,
    },
}

impl SpiceMetadata {
    /// The grammar these fields were read with.
    pub fn grammar(&self) -> SpiceGrammar {
        match self {
            SpiceMetadata::Attitude { .. } => SpiceGrammar::Attitude,
            SpiceMetadata::Repoint { .. } => SpiceGrammar::Repoint,
            SpiceMetadata::Ephemeris { .. } => SpiceGrammar::Ephemeris,
            SpiceMetadata::ProductVersion { .. } => SpiceGrammar::ProductVersion,
            SpiceMetadata::Frames { .. } => SpiceGrammar::Frames,
            SpiceMetadata::Thruster { .. } => SpiceGrammar::Thruster,
            SpiceMetadata::Metakernel { .. } => SpiceGrammar::Metakernel,
        }
    }

    fn start_doy(&self) -> Option<DayOfYear> {
        match self {
            SpiceMetadata::Attitude { start, .. }
            | SpiceMetadata::Repoint { start, .. }
            | SpiceMetadata::Thruster { start, .. } => Some(*start),
            _ => None,
        }
    }

    fn end_doy(&self) -> Option<DayOfYear> {
        match self {
            SpiceMetadata::Attitude { end, .. } => Some(*end),
            _ => None,
        }
    }
}

/// A validated SPICE kernel filename.
///
/// # Example
///
/// ```
/// # use imap_paths_parser::{SpiceFilePath, ValidatedPath};
/// # use imap_paths_core::spice::SpiceType;
/// let kernel = SpiceFilePath::new("naif0012.tls").unwrap();
///
/// assert_eq!(kernel.spice_type(), SpiceType::Leapseconds);
/// assert_eq!(kernel.version(), Some(12));
/// assert_eq!(kernel.relative_path().to_str(), Some("spice/lsk/naif0012.tls"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpiceFilePath {
    filename: String,
    spice_type: SpiceType,
    metadata: SpiceMetadata,
}

impl SpiceFilePath {
    /// Parse the trailing file name of `path` as a SPICE filename.
    ///
    /// Matching ignores ASCII case; the original spelling is kept for paths.
    pub fn new(path: impl AsRef<Path>) -> std::result::Result<Self, ParseError> {
        let filename = fields::file_name(path.as_ref(), ParseErrorKind::Spice)?;
        Self::parse_name(filename)
    }

    fn parse_name(filename: &str) -> std::result::Result<Self, ParseError> {
        // ASCII lowering keeps byte offsets, so spans still index `filename`.
        let lowered = filename.to_ascii_lowercase();

        for (grammar, regex) in SPICE_GRAMMARS.iter() {
            if let Some(captures) = regex.captures(&lowered) {
                trace!(filename, grammar = grammar.name(); "SPICE grammar matched");
                return Self::from_captures(filename, *grammar, &captures);
            }
        }

        trace!(filename; "No SPICE grammar matched");
        let diagnostic = fields::mismatch(
            filename,
            ErrorCode::E003,
            format!("`{filename}` does not follow any SPICE naming convention"),
            format!("supported SPICE types: {}", SpiceType::valid_names()),
        );
        Err(ParseError::new(ParseErrorKind::Spice, filename, vec![diagnostic]))
    }

    fn from_captures(
        filename: &str,
        grammar: SpiceGrammar,
        captures: &Captures<'_>,
    ) -> std::result::Result<Self, ParseError> {
        let mut collector = DiagnosticCollector::new();

        if let Some(mission) = Field::capture(captures, "mission") {
            collector.check(fields::mission(mission));
        }
        let spice_type = collector.check(
            Field::required(captures, "type").and_then(|token| resolve_type(grammar, token)),
        );
        let metadata = grammar.extract(captures, &mut collector);

        let (Some(spice_type), Some(metadata)) = (spice_type, metadata) else {
            return Err(collector.into_error(ParseErrorKind::Spice, filename));
        };
        collector.finish(ParseErrorKind::Spice, filename)?;

        Ok(Self {
            filename: filename.to_owned(),
            spice_type,
            metadata,
        })
    }

    pub fn spice_type(&self) -> SpiceType {
        self.spice_type
    }

    pub fn metadata(&self) -> &SpiceMetadata {
        &self.metadata
    }

    /// `imap` for mission kernels, `None` for generic products like `de440.bsp`.
    pub fn mission(&self) -> Option<&'static str> {
        match self.metadata {
            SpiceMetadata::ProductVersion { .. } => None,
            _ => Some(MISSION),
        }
    }

    /// Numeric version. Spacecraft ephemerides may omit it.
    pub fn version(&self) -> Option<u32> {
        match &self.metadata {
            SpiceMetadata::Attitude { version, .. }
            | SpiceMetadata::Repoint { version, .. }
            | SpiceMetadata::ProductVersion { version, .. }
            | SpiceMetadata::Frames { version }
            | SpiceMetadata::Thruster { version, .. }
            | SpiceMetadata::Metakernel { version, .. } => Some(*version),
            SpiceMetadata::Ephemeris { version, .. } => *version,
        }
    }

    pub fn start_year(&self) -> Option<u16> {
        match &self.metadata {
            SpiceMetadata::Metakernel { year, .. } => Some(*year),
            metadata => metadata.start_doy().map(|doy| doy.year()),
        }
    }

    pub fn start_doy(&self) -> Option<u16> {
        self.metadata.start_doy().map(|doy| doy.day())
    }

    pub fn end_year(&self) -> Option<u16> {
        self.metadata.end_doy().map(|doy| doy.year())
    }

    pub fn end_doy(&self) -> Option<u16> {
        self.metadata.end_doy().map(|doy| doy.day())
    }

    /// First covered day, `None` for undated kernels and `0000_000` placeholders.
    pub fn start_date(&self) -> Option<NaiveDate> {
        match &self.metadata {
            SpiceMetadata::Ephemeris { start_date, .. } => Some(*start_date),
            metadata => metadata.start_doy().and_then(|doy| doy.to_date()),
        }
    }

    /// Last covered day. Kernels with a single date end where they start.
    pub fn end_date(&self) -> Option<NaiveDate> {
        match &self.metadata {
            SpiceMetadata::Ephemeris { end_date, .. } => Some(*end_date),
            SpiceMetadata::Attitude { end, .. } => end.to_date(),
            _ => self.start_date(),
        }
    }

    /// Final extension of the file name, lower-cased.
    pub fn extension(&self) -> String {
        self.filename
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_ascii_lowercase())
            .unwrap_or_default()
    }
}

fn resolve_type(grammar: SpiceGrammar, token: Field<'_>) -> Result<SpiceType> {
    match SpiceType::from_token(token.value()) {
        Some(kind) if grammar.accepts(kind) => Ok(kind),
        _ => Err(Diagnostic::error(format!("unknown SPICE type `{}`", token.value()))
            .with_code(ErrorCode::E108)
            .with_label(
                token.span(),
                format!("not a {} kernel type", grammar.name()),
            )
            .with_help(format!("expected one of: {}", grammar.accepted_names()))),
    }
}

impl ValidatedPath for SpiceFilePath {
    fn filename(&self) -> &str {
        &self.filename
    }

    /// `spice/<subdirectory>/<filename>`
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("spice")
            .join(self.spice_type.subdirectory())
            .join(&self.filename)
    }

    fn time_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start_date().zip(self.end_date())
    }
}

impl FromStr for SpiceFilePath {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_canonical_paths() {
        for (filename, expected) in [
            ("imap_0000_000_0000_000_01.ap.bc", "spice/ck/imap_0000_000_0000_000_01.ap.bc"),
            ("imap_2025_122_2025_122_01.spin.csv", "spice/spin/imap_2025_122_2025_122_01.spin.csv"),
            ("imap_2025_122_01.repoint.csv", "spice/repoint/imap_2025_122_01.repoint.csv"),
            ("imap_0000_v000.tm", "spice/mk/imap_0000_v000.tm"),
            ("imap_0000_000_hist_00.sff", "spice/activities/imap_0000_000_hist_00.sff"),
            ("imap_001.tf", "spice/fk/imap_001.tf"),
            ("imapsclk_0001.tsc", "spice/sclk/imapsclk_0001.tsc"),
            ("de440.bsp", "spice/spk/de440.bsp"),
        ] {
            let path = SpiceFilePath::new(filename).unwrap();
            assert_eq!(path.relative_path(), PathBuf::from(expected), "{filename}");
        }
    }

    #[test]
    fn test_construct_path_with_data_dir() {
        let path = SpiceFilePath::new("imap_0000_000_0000_000_01.ap.bc").unwrap();

        assert_eq!(
            path.construct_path(Some(Path::new("/data"))),
            PathBuf::from("/data/spice/ck/imap_0000_000_0000_000_01.ap.bc")
        );
    }

    #[test]
    fn test_spin_fields() {
        let path = SpiceFilePath::new("imap_2025_122_2025_122_01.spin.csv").unwrap();

        assert_eq!(path.spice_type(), SpiceType::Spin);
        assert_eq!(path.mission(), Some("imap"));
        assert_eq!(path.version(), Some(1));
        assert_eq!(path.start_year(), Some(2025));
        assert_eq!(path.end_year(), Some(2025));
        assert_eq!(path.start_doy(), Some(122));
        assert_eq!(path.end_doy(), Some(122));
    }

    #[test]
    fn test_attitude_fields() {
        let path = SpiceFilePath::new("imap_2025_032_2025_034_003.ah.bc").unwrap();

        assert_eq!(path.spice_type(), SpiceType::AttitudeHistory);
        assert_eq!(path.spice_type().name(), "attitude_history");
        assert_eq!(path.version(), Some(3));
        assert_eq!(path.start_doy(), Some(32));
        assert_eq!(path.end_doy(), Some(34));
        assert_eq!(path.time_range(), Some((date(2025, 2, 1), date(2025, 2, 3))));
    }

    #[test]
    fn test_metakernel_fields() {
        let path = SpiceFilePath::new("imap_2025_v100.tm").unwrap();

        assert_eq!(path.spice_type(), SpiceType::Metakernel);
        assert_eq!(path.version(), Some(100));
        assert_eq!(path.start_year(), Some(2025));
        assert_eq!(path.time_range(), None);
    }

    #[test]
    fn test_versioned_products() {
        for (filename, kind, version, extension) in [
            ("naif0012.tls", SpiceType::Leapseconds, 12, "tls"),
            ("de440.bsp", SpiceType::PlanetaryEphemeris, 440, "bsp"),
            ("pck00010.tpc", SpiceType::PlanetaryConstants, 10, "tpc"),
        ] {
            let path = SpiceFilePath::new(filename).unwrap();
            assert_eq!(path.spice_type(), kind);
            assert_eq!(path.version(), Some(version));
            assert_eq!(path.extension(), extension);
            assert_eq!(path.mission(), None);
            assert_eq!(
                path.metadata(),
                &SpiceMetadata::ProductVersion {
                    version,
                    extension: extension.to_owned()
                }
            );
        }
    }

    #[test]
    fn test_spacecraft_ephemeris() {
        let path = SpiceFilePath::new("imap_90days_20251120_20260220_v01.bsp").unwrap();

        assert_eq!(path.spice_type(), SpiceType::Ephemeris90Days);
        assert_eq!(path.version(), Some(1));
        assert_eq!(path.start_date(), Some(date(2025, 11, 20)));
        assert_eq!(path.end_date(), Some(date(2026, 2, 20)));
        assert_eq!(path.extension(), "bsp");

        let unversioned = SpiceFilePath::new("imap_recon_20251120_20251121.bsp").unwrap();
        assert_eq!(unversioned.version(), None);
    }

    #[test]
    fn test_repoint_fields() {
        let path = SpiceFilePath::new("imap_2025_230_01.repoint.csv").unwrap();

        assert_eq!(path.spice_type(), SpiceType::Repoint);
        assert_eq!(path.version(), Some(1));
        assert_eq!(path.start_year(), Some(2025));
        assert_eq!(path.start_doy(), Some(230));
        assert_eq!(path.metadata().grammar(), SpiceGrammar::Repoint);
    }

    #[test]
    fn test_thruster_placeholder() {
        let path = SpiceFilePath::new("imap_0000_000_hist_00.sff").unwrap();

        assert_eq!(path.spice_type(), SpiceType::Thruster);
        assert!(matches!(path.metadata(), SpiceMetadata::Thruster { mode, .. } if mode == "hist"));
        assert_eq!(path.time_range(), None);
    }

    #[test]
    fn test_case_insensitive_match_keeps_spelling() {
        let path = SpiceFilePath::new("NAIF0012.TLS").unwrap();

        assert_eq!(path.spice_type(), SpiceType::Leapseconds);
        assert_eq!(path.relative_path(), PathBuf::from("spice/lsk/NAIF0012.TLS"));
    }

    #[test]
    fn test_invalid_dates() {
        let err = SpiceFilePath::new("imap_2025_032_2025_410_003.ah.bc").unwrap_err();
        assert!(err.has_code(ErrorCode::E109));

        let err = SpiceFilePath::new("imap_90days_20251320_20260220_v01.bsp").unwrap_err();
        assert!(err.has_code(ErrorCode::E103));

        let err = SpiceFilePath::new("imap_taco_20251320_20260220_v01.bsp").unwrap_err();
        assert!(err.has_code(ErrorCode::E108));
        assert!(err.has_code(ErrorCode::E103));
    }

    #[test]
    fn test_type_must_fit_grammar() {
        let err = SpiceFilePath::new("recon0001.bsp").unwrap_err();

        assert!(err.has_code(ErrorCode::E108));
    }

    #[test]
    fn test_no_grammar_matches() {
        let err = SpiceFilePath::new("test.txt").unwrap_err();

        assert_eq!(err.kind(), ParseErrorKind::Spice);
        assert!(err.has_code(ErrorCode::E003));
        assert!(err.diagnostics()[0].help().unwrap().contains("leapseconds"));
    }

    #[test]
    fn test_version_overflow() {
        let err = SpiceFilePath::new("imap_99999999999.tf").unwrap_err();

        assert!(err.has_code(ErrorCode::E110));
    }
}
