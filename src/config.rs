//! Configuration file handling.
//!
//! The config lives at `<config dir>/vcon/config.toml`. Every key is
//! optional; missing keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default wrap width when neither the config nor the terminal provides one.
pub const DEFAULT_WIDTH: usize = 80;

/// Errors raised while locating, reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub wrap: WrapConfig,
    pub replay: ReplayConfig,
}

/// Defaults for the `wrap` command and `--width` on `replay`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    /// Maximum line length in characters. 0 means "terminal width".
    pub max_line_length: usize,
    /// Split tokens longer than the line instead of letting them overflow
    pub hard_wrap: bool,
    /// Prefix for every wrapped line
    pub indent: String,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            max_line_length: 0,
            hard_wrap: false,
            indent: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Remove escape sequences before rendering
    pub strip_ansi: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self { strip_ansi: true }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("vcon").join("config.toml"))
    }

    /// Load from `path`, or defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.to_toml()?;
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, content).map_err(write_err)
    }
}

impl WrapConfig {
    /// Resolve the effective width: explicit override, then config, then the
    /// terminal width, then [`DEFAULT_WIDTH`].
    pub fn effective_width(&self, override_width: Option<usize>) -> usize {
        override_width
            .filter(|&w| w > 0)
            .or((self.max_line_length > 0).then_some(self.max_line_length))
            .or_else(terminal_width)
            .unwrap_or(DEFAULT_WIDTH)
    }
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w as usize)
}
