// src/config/mod.rs
pub mod types;

pub use self::types::{ColumnNames, Config, DisplayConfig, ExplorerConfig, RegistryConfig};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PedigreeError, Result};

pub const CONFIG_FILE: &str = "pedigree.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `pedigree.toml` from the current directory, or defaults when the
    /// file does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        if !path.exists() {
            debug!("no {CONFIG_FILE} found, using defaults");
            return Ok(Self::new());
        }
        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PedigreeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::parse_toml(&content).map_err(|message| PedigreeError::Config {
            path: path.to_path_buf(),
            message,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses TOML content. Missing sections and keys take their defaults.
    ///
    /// # Errors
    /// Returns the parser message on invalid TOML.
    pub fn parse_toml(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Writes the configuration to `path`.
    ///
    /// # Errors
    /// Returns error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let to_config_err = |message: String| PedigreeError::Config {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| to_config_err(e.to_string()))?;
        fs::write(path, content).map_err(|e| to_config_err(e.to_string()))
    }
}
