//! Configuration types for IMAP path resolution.
//!
//! [`AppConfig`] implements [`serde::Deserialize`] so it can be loaded from a
//! TOML file. Every field is optional.
//!
//! # Example
//!
//! ```
//! # use imap_paths::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.data_dir().is_none());
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Root below which canonical paths are built.
    ///
    /// When unset, canonical paths are relative.
    #[serde(default)]
    data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }

    /// Returns the data directory, if one is configured.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }

    /// Replace the data directory, e.g. with a command-line override.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_data_dir() {
        let config: AppConfig = toml::from_str(r#"data_dir = "/data/imap""#).unwrap();

        assert_eq!(config.data_dir(), Some(Path::new("/data/imap")));
    }

    #[test]
    fn test_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert!(config.data_dir().is_none());
    }

    #[test]
    fn test_with_data_dir_overrides() {
        let config = AppConfig::new(Some(PathBuf::from("/a"))).with_data_dir("/b");

        assert_eq!(config.data_dir(), Some(Path::new("/b")));
    }
}
