//! Scoring configuration files.
//!
//! A config file is a TOML rendering of `ScoringConfig`. Missing sections
//! and fields take their defaults, so an empty file is valid.

use std::path::Path;

use sixscore_core::ScoringConfig;

use crate::data_loader::LoadError;

/// Read, parse and validate a scoring config file.
pub fn load_config(path: &Path) -> Result<ScoringConfig, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ScoringConfig::from_toml_str(&content).map_err(|source| LoadError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `path` when given, else the defaults.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ScoringConfig, LoadError> {
    match path {
        Some(p) => load_config(p),
        None => Ok(ScoringConfig::default()),
    }
}
