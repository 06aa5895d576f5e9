//! Configuration handling for the contact book
//!
//! Configuration is read from `~/.config/contacts/config.toml` (global) or
//! from an explicit file passed on the command line. Command-line flags are
//! applied on top by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{ContactStore, MalformedLines};

/// Backing file used when nothing else is configured
pub const DEFAULT_STORE_FILE: &str = "contacts.txt";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Contact book configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Path to the backing file
    pub file: PathBuf,

    /// Policy for lines that are not exactly three fields
    pub malformed_lines: MalformedLines,

    /// Default output format (text or json)
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_STORE_FILE),
            malformed_lines: MalformedLines::Skip,
            default_format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads configuration from an explicit file, or the global one
    ///
    /// A missing global file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::from_file(path)
            }
            None => Self::load_global(),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "contact-book", "contacts")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration
    fn load_global() -> Result<Self> {
        let config_dir = match Self::global_config_dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        let config_path = config_dir.join("config.toml");
        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Builds the store described by this configuration
    pub fn store(&self) -> ContactStore {
        ContactStore::new(&self.file).with_malformed_lines(self.malformed_lines)
    }
}
