//! Configuration loading — TOML file into a validated [`ScoringConfig`].
//!
//! Loading is fail-fast: a config that does not read, parse, and validate
//! never reaches a batch. Hot-reload between batches is a fresh `load`; the
//! engine holds an immutable copy per run.

use std::path::Path;

use thiserror::Error;

use signalforge_core::config::{ConfigError, ScoringConfig};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}'")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// Load and validate a scoring configuration from a TOML file.
///
/// Missing keys fall back to defaults section by section, so a partial file
/// overriding a single threshold is valid.
pub fn load_config(path: &Path) -> Result<ScoringConfig, ConfigLoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: ScoringConfig = toml::from_str(&text).map_err(|source| ConfigLoadError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
