//! Configuration
//!
//! Loads the demo settings from a RON file, falling back to defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest width or height `create_map` accepts
pub const MIN_MAP_DIMENSION: usize = 3;

const CONFIG_FILE: &str = "config.ron";

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub map: MapConfig,
    pub output: OutputFormat,
}

/// Dimensions of the generated arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 15,
            height: 13,
        }
    }
}

/// How the binary prints the generated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Map too small: {width}x{height}, both sides must be at least {min}", min = MIN_MAP_DIMENSION)]
    MapTooSmall { width: usize, height: usize },
}

impl Config {
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(content)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_ron_str(&content)
    }

    /// Load `config.ron` from the platform config directory (or default)
    pub fn load() -> Self {
        let path = config_path();

        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Config loaded from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Reject settings `create_map` cannot handle
    pub fn validate(&self) -> Result<(), ConfigError> {
        let MapConfig { width, height } = self.map;
        if width < MIN_MAP_DIMENSION || height < MIN_MAP_DIMENSION {
            return Err(ConfigError::MapTooSmall { width, height });
        }
        Ok(())
    }
}

/// Get the config file path
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "bombgrid", "Bombgrid") {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        PathBuf::from(".").join(CONFIG_FILE)
    }
}
