//! JSON configuration file.
//!
//! Missing fields take their defaults, so a file only needs the switches it
//! changes.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use huddle_core::HudConfig;
use thiserror::Error;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read or written.
    #[error("config file {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// File content is not valid configuration JSON.
    #[error("config file {path} is not valid config JSON: {source}")]
    Json {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
}

/// Load configuration from `path`, or the defaults when there is no file.
pub fn load_config(path: Option<&Path>) -> Result<HudConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(HudConfig::default());
    };

    let text = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_owned(), source })?;
    let config = serde_json::from_str(&text)
        .map_err(|source| ConfigError::Json { path: path.to_owned(), source })?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Write `config` to `path` as pretty JSON.
pub fn save_config(path: &Path, config: &HudConfig) -> Result<(), ConfigError> {
    let text = serde_json::to_string_pretty(config)
        .map_err(|source| ConfigError::Json { path: path.to_owned(), source })?;
    fs::write(path, text).map_err(|source| ConfigError::Io { path: path.to_owned(), source })
}
