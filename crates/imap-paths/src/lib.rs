//! IMAP Paths - validation and storage layout for IMAP mission files.
//!
//! Filenames are validated against the science, ancillary and SPICE naming
//! conventions, mapped to their canonical location below a data directory, and
//! grouped into processing inputs for downstream processing steps.

pub mod collection;
pub mod config;
pub mod processing_input;

mod error;

pub use imap_paths_core::{MISSION, data_level, extension, instrument, spice, time, version};
pub use imap_paths_parser::{
    AncillaryFilePath, ImapFilePath, ParseError, ParseErrorKind, ScienceFilePath, Span,
    SpiceFilePath, SpiceGrammar, SpiceMetadata, ValidatedPath, error as diagnostics,
    parse_file_path,
};

pub use collection::ProcessingInputCollection;
pub use error::ImapPathsError;
pub use processing_input::{ProcessingInput, ProcessingInputType};

use std::path::{Path, PathBuf};

use log::{debug, info, trace};

use config::AppConfig;

/// Resolves IMAP filenames to validated paths and storage locations.
///
/// # Examples
///
/// ```rust
/// use std::path::Path;
///
/// use imap_paths::{PathResolver, config::AppConfig};
///
/// let config = AppConfig::default().with_data_dir("/data");
/// let resolver = PathResolver::new(config);
///
/// let path = resolver
///     .canonical_path("imap_mag_l1a_burst_20210101_v001.cdf")
///     .expect("valid science filename");
///
/// assert_eq!(
///     path,
///     Path::new("/data/imap/mag/l1a/2021/01/imap_mag_l1a_burst_20210101_v001.cdf")
/// );
/// ```
#[derive(Debug, Default)]
pub struct PathResolver {
    config: AppConfig,
}

impl PathResolver {
    /// Create a new resolver with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Validate a filename against every IMAP naming convention.
    ///
    /// # Errors
    ///
    /// Returns [`ImapPathsError::Parse`] when no convention accepts the
    /// filename. The error lists the violations found by each convention.
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<ImapFilePath, ImapPathsError> {
        let path = path.as_ref();
        trace!(path:?; "Resolving file");

        let resolved = parse_file_path(path)?;
        debug!(filename = resolved.filename(); "File resolved");

        Ok(resolved)
    }

    /// Storage location of a validated file below the configured data
    /// directory.
    pub fn path_for(&self, file: &impl ValidatedPath) -> PathBuf {
        file.construct_path(self.config.data_dir())
    }

    /// Validate a filename and return its storage location.
    pub fn canonical_path(&self, path: impl AsRef<Path>) -> Result<PathBuf, ImapPathsError> {
        let resolved = self.resolve(path)?;
        let canonical = self.path_for(&resolved);
        debug!(filename = resolved.filename(), canonical:?; "Canonical path resolved");
        Ok(canonical)
    }

    /// Validate filenames and group them into processing inputs.
    ///
    /// # Errors
    ///
    /// Fails on the first filename no convention accepts.
    pub fn collect<I>(&self, filenames: I) -> Result<ProcessingInputCollection, ImapPathsError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        let mut collection = ProcessingInputCollection::new();
        collection.deserialize(filenames)?;

        info!(inputs = collection.len(); "Files grouped into processing inputs");
        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_path_without_data_dir_is_relative() {
        let resolver = PathResolver::default();

        let path = resolver.canonical_path("naif0012.tls").unwrap();

        assert_eq!(path, Path::new("spice/lsk/naif0012.tls"));
    }

    #[test]
    fn test_resolve_reports_filename() {
        let resolver = PathResolver::default();

        let err = resolver.resolve("/tmp/imap_sdc_l1a_burst_20210101_v001.cdf").unwrap_err();

        match err {
            ImapPathsError::Parse { err, src } => {
                assert_eq!(src, "imap_sdc_l1a_burst_20210101_v001.cdf");
                assert_eq!(err.kind(), ParseErrorKind::Unrecognized);
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_path_for_uses_data_dir() {
        let resolver = PathResolver::new(AppConfig::default().with_data_dir("/data"));
        let file = SpiceFilePath::new("imap_0000_000_0000_000_01.ap.bc").unwrap();

        assert_eq!(
            resolver.path_for(&file),
            Path::new("/data/spice/ck/imap_0000_000_0000_000_01.ap.bc")
        );
    }
}
