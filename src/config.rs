//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{APP_NAME, CONFIG_DIR_ENV, DEFAULT_HISTORY_SIZE, MAX_HISTORY_SIZE};
use crate::engine::PaletteScheme;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Named color dataset (JSON array of `{name, r, g, b}`).
    /// The built-in CSS colors are used when unset.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
}

/// Recent-color history settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Record analyzed colors in the history
    #[serde(default = "default_history_enabled")]
    pub enabled: bool,
    /// Number of colors kept (1-100)
    #[serde(default = "default_history_size")]
    pub max_size: usize,
}

fn default_history_enabled() -> bool {
    true
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: default_history_enabled(),
            max_size: default_history_size(),
        }
    }
}

/// Palette generation preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PaletteConfig {
    /// Scheme used when `palette` is run without `--scheme`
    #[serde(default)]
    pub default_scheme: PaletteScheme,
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PixelHue/config.toml`
/// - macOS: `~/Library/Application Support/PixelHue/config.toml`
/// - Windows: `%APPDATA%\PixelHue\config.toml`
///
/// The directory can be overridden with the `PIXELHUE_CONFIG_DIR`
/// environment variable.
///
/// # Validation
///
/// - `history.max_size` must be between 1 and 100
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// History settings
    #[serde(default)]
    pub history: HistoryConfig,
    /// Palette settings
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// `PIXELHUE_CONFIG_DIR` wins when set and non-empty; otherwise:
    ///
    /// - Linux: `~/.config/PixelHue/`
    /// - macOS: `~/Library/Application Support/PixelHue/`
    /// - Windows: `%APPDATA%\PixelHue\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        debug!("Loaded config from {}", config_path.display());

        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `history.max_size` is between 1 and 100
    pub fn validate(&self) -> Result<()> {
        if self.history.max_size == 0 || self.history.max_size > MAX_HISTORY_SIZE {
            anyhow::bail!(
                "History size must be between 1 and {MAX_HISTORY_SIZE}, got {}",
                self.history.max_size
            );
        }

        Ok(())
    }
}
