//! TOML configuration for embedding applications.
//!
//! The level mini-language is the config-facing syntax for masks: the
//! `[general] level` string runs through the directive interpreter, so
//! `level = "gte.info lte.error"` and `level = "at.debug at.fatal"` both
//! work without any schema change.

use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// A completely empty config file must still produce a working logger — `#[serde(default)]`
/// on every field ensures zero-config works out of the box.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering applies to all outputs — it belongs above any specific backend.
    pub general: GeneralConfig,
    /// Terminal output needs its own settings independent of file output.
    pub terminal: TerminalConfig,
    /// File output has different concerns than terminal — path and timestamp format.
    pub file: FileConfig,
    /// JSONL output serves a different purpose (machine-readable queries) than text logs.
    pub json: JsonConfig,
}

/// Settings that apply to the logger as a whole.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Level mask in the directive mini-language; empty means unrestricted.
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "gte.info".to_string(),
        }
    }
}

/// Terminal backend settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub enabled: bool,
    pub colors: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            colors: true,
        }
    }
}

/// Plain-text file backend settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    /// Empty means the backend's XDG default path.
    pub path: String,
    pub timestamp_format: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            path: String::new(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

/// JSONL backend settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct JsonConfig {
    pub enabled: bool,
    /// Empty means the backend's XDG default path.
    pub path: String,
}

impl Config {
    /// Primary entry point — loads the user's config from the default location.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits
    /// a syntax error. A missing file is not an error; it yields defaults.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path instead of the default location.
    ///
    /// Useful for tests and embedding callers that manage their own paths.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// XDG-compliant path under the platform config directory.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory (unlikely on Linux).
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("gatelog").join("gatelog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Config stores the level as a mini-language string for TOML ergonomics —
    /// this builds the mask the logger needs. Garbled directives degrade to
    /// no-ops rather than failing the load.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        Level::from_spec(self.general.level.as_str())
    }
}
