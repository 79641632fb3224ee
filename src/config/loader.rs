//! Configuration loader
//!
//! Loads settings from a TOML file and falls back to defaults when the
//! file is absent. The emulator memory layout lives here because the
//! translation offsets are build-specific transport parameters, not
//! constants of the console itself.

use crate::backend::rpcs3::{EmulatorLayout, DEFAULT_PROCESS_NAME};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "ps3mem.toml";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the emulator process to attach to
    pub process_name: String,

    /// Guest-to-host address translation offsets
    pub layout: EmulatorLayout,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            process_name: DEFAULT_PROCESS_NAME.to_string(),
            layout: EmulatorLayout::default(),
        }
    }
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for the given path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the configuration, returning defaults if the file is missing
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Saves a configuration to the loader's path
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default file location
pub fn load_config() -> Result<Config, ConfigError> {
    ConfigLoader::new(DEFAULT_CONFIG_FILE).load()
}
