//! Configuration loaded from TOML
//!
//! A configuration file selects the culture used for number formatting and
//! the limits of the template cache. Every key is optional.
//!
//! ```toml
//! [culture]
//! name = "de-DE"
//! decimal_separator = ","
//! group_separator = "."
//!
//! [cache]
//! max_entries = 500
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::Culture;
use crate::template::CacheConfig;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for rendering and caching
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub culture: Culture,
    pub cache: CacheConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
