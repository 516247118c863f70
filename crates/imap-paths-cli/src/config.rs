//! Discovery and loading of the CLI's TOML configuration.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use imap_paths::{ImapPathsError, config::AppConfig};

/// Why a configuration file could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ImapPathsError {
    fn from(err: ConfigError) -> Self {
        ImapPathsError::Config(err.to_string())
    }
}

/// Find and load the configuration.
///
/// The first file found wins:
/// 1. `explicit_path`, which must exist
/// 2. `imap-paths/config.toml` below the working directory
/// 3. `config.toml` in the platform config directory
///
/// Without any file the default configuration is used.
///
/// # Errors
///
/// Returns [`ImapPathsError::Config`] when the explicit file is missing or a
/// file found cannot be parsed, and [`ImapPathsError::Io`] when it cannot be
/// read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ImapPathsError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading explicit configuration");
        return load_config_file(path);
    }

    match candidate_paths().into_iter().find(|path| path.exists()) {
        Some(path) => {
            info!(path = path.display().to_string(); "Loading discovered configuration");
            load_config_file(&path)
        }
        None => {
            debug!("No configuration file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Implicit configuration locations in search order.
fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from("imap-paths/config.toml")];

    match ProjectDirs::from("org", "imap", "imap-paths") {
        Some(dirs) => candidates.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }

    candidates
}

/// Load configuration from a TOML file
fn load_config_file(path: &Path) -> Result<AppConfig, ImapPathsError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config =
        toml::from_str::<AppConfig>(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    debug!(data_dir:? = config.data_dir(); "Configuration loaded");

    Ok(config)
}
