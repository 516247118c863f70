//! # IMAP Paths Parser
//!
//! Validation of IMAP mission filenames. Three naming conventions are
//! supported, each parsed into its own strongly typed value:
//!
//! - [`ScienceFilePath`]: instrument data products at a processing level
//! - [`AncillaryFilePath`]: calibration and lookup products with a validity window
//! - [`SpiceFilePath`]: SPICE geometry kernels
//!
//! [`parse_file_path`] tries all three and returns whichever matches as an
//! [`ImapFilePath`]. Every rejected filename yields a [`ParseError`] listing each
//! violated rule as a [`error::Diagnostic`] with a span into the filename.
//!
//! ## Usage
//!
//! ```
//! # use imap_paths_parser::{parse_file_path, ImapFilePath, ParseError, ValidatedPath};
//!
//! fn main() -> Result<(), ParseError> {
//!     let path = parse_file_path("imap_mag_l1a_burst_20210101_v001.cdf")?;
//!
//!     assert!(matches!(path, ImapFilePath::Science(_)));
//!     assert_eq!(
//!         path.relative_path().to_str(),
//!         Some("imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_v001.cdf")
//!     );
//!     Ok(())
//! }
//! ```

mod ancillary;
pub mod error;
mod fields;
mod file_path;
mod science;
mod span;
mod spice;

pub use ancillary::AncillaryFilePath;
pub use error::{ParseError, ParseErrorKind};
pub use file_path::{ImapFilePath, ValidatedPath};
pub use science::ScienceFilePath;
pub use span::Span;
pub use spice::{SpiceFilePath, SpiceGrammar, SpiceMetadata};

use std::path::Path;

use log::{debug, trace};

type Attempt = fn(&Path) -> Result<ImapFilePath, ParseError>;

/// Conventions in dispatch order.
const ATTEMPTS: [(ParseErrorKind, Attempt); 3] = [
    (ParseErrorKind::Spice, |path| SpiceFilePath::new(path).map(Into::into)),
    (ParseErrorKind::Science, |path| ScienceFilePath::new(path).map(Into::into)),
    (ParseErrorKind::Ancillary, |path| AncillaryFilePath::new(path).map(Into::into)),
];

/// Parse a filename against every IMAP naming convention.
///
/// The conventions are tried in order SPICE, science, ancillary; the first one
/// that accepts the filename wins. Only the trailing file name of `path` is
/// examined.
///
/// # Errors
///
/// Returns a [`ParseErrorKind::Unrecognized`] error when no convention
/// accepts the filename. It carries the diagnostics of every attempt.
pub fn parse_file_path(path: impl AsRef<Path>) -> Result<ImapFilePath, ParseError> {
    let path = path.as_ref();
    let mut failures = Vec::with_capacity(ATTEMPTS.len());

    for (kind, attempt) in ATTEMPTS {
        match attempt(path) {
            Ok(parsed) => {
                debug!(
                    convention = kind.convention(),
                    filename = parsed.filename();
                    "Filename recognized"
                );
                return Ok(parsed);
            }
            Err(err) => {
                trace!(
                    convention = kind.convention(),
                    diagnostics = err.diagnostics().len();
                    "Convention rejected filename"
                );
                failures.push(err);
            }
        }
    }

    Err(ParseError::unrecognized(fields::display_name(path), failures))
}
