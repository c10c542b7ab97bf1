//! Recent-color history.
//!
//! Keeps the most recently analyzed colors, newest first, without duplicate
//! hex values. The history is persisted as JSON next to the configuration
//! file and can be exported as a named palette.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::config::Config;
use crate::constants::DEFAULT_HISTORY_SIZE;
use crate::engine::ColorEngine;
use crate::models::RgbColor;

/// A color picked at some point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Lowercase "#rrggbb", used for de-duplication
    pub hex: String,
    /// When the color was picked, in Unix milliseconds
    pub timestamp: i64,
}

impl HistoryEntry {
    fn new(color: RgbColor, timestamp: i64) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
            hex: color.to_hex(),
            timestamp,
        }
    }

    /// The entry's color.
    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }
}

/// Bounded list of recently picked colors, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorHistory {
    entries: Vec<HistoryEntry>,
    max_size: usize,
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl ColorHistory {
    /// Creates an empty history holding at most `max_size` colors.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Gets the path of the history file inside the config directory.
    pub fn file_path() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("history.json"))
    }

    /// Records a color picked now.
    pub fn add(&mut self, color: RgbColor) {
        self.add_at(color, Utc::now().timestamp_millis());
    }

    /// Records a color with an explicit timestamp.
    ///
    /// An existing entry with the same hex is removed first, so re-picking a
    /// color moves it to the front. The oldest entries beyond the size bound
    /// are dropped.
    pub fn add_at(&mut self, color: RgbColor, timestamp: i64) {
        let entry = HistoryEntry::new(color, timestamp);
        self.entries.retain(|existing| existing.hex != entry.hex);
        self.entries.insert(0, entry);
        self.entries.truncate(self.max_size);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Loads a history file.
    ///
    /// A missing file gives an empty history. A file that cannot be parsed is
    /// logged and treated as empty, so a corrupted history never blocks
    /// picking colors. Entries beyond `max_size` are dropped.
    ///
    /// # Errors
    /// Returns an error only if an existing file cannot be read.
    pub fn load(path: &Path, max_size: usize) -> Result<Self> {
        let mut history = Self::new(max_size);

        if !path.exists() {
            return Ok(history);
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read history file: {}", path.display()))?;

        match serde_json::from_str::<Vec<HistoryEntry>>(&content) {
            Ok(mut entries) => {
                entries.truncate(history.max_size);
                debug!("Loaded {} history entries from {}", entries.len(), path.display());
                history.entries = entries;
            }
            Err(e) => {
                warn!("Could not load color history from {}: {e}", path.display());
            }
        }

        Ok(history)
    }

    /// Loads the history at `path`, adds `color` and saves it back.
    ///
    /// Reading and writing happen back to back, so another process that
    /// recorded a color in the meantime keeps its entry. There is no file
    /// lock: two writers that interleave between the read and the rename can
    /// still lose one entry.
    pub fn record(path: &Path, max_size: usize, color: RgbColor) -> Result<Self> {
        let mut history = Self::load(path, max_size)?;
        history.add(color);
        history.save(path)?;
        Ok(history)
    }

    /// Saves the history using atomic write.
    ///
    /// The file is replaced with this history's entries. Entries another
    /// process wrote after this history was loaded are overwritten; use
    /// [`ColorHistory::record`] to add a single color.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context(format!("Failed to create history directory: {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize color history")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content).context(format!(
            "Failed to write temp history file: {}",
            temp_path.display()
        ))?;
        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp history file to: {}",
            path.display()
        ))?;

        debug!("Saved {} history entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Builds a shareable palette from the history, newest first.
    ///
    /// # Errors
    /// Returns an error if the history is empty.
    pub fn export_palette(&self, engine: &ColorEngine) -> Result<SavedPalette> {
        self.export_palette_at(engine, Utc::now())
    }

    /// Builds a palette stamped with `created`.
    ///
    /// # Errors
    /// Returns an error if the history is empty.
    pub fn export_palette_at(
        &self,
        engine: &ColorEngine,
        created: DateTime<Utc>,
    ) -> Result<SavedPalette> {
        if self.is_empty() {
            anyhow::bail!("No colors in history to save");
        }

        let colors = self
            .entries
            .iter()
            .map(|entry| {
                let color = entry.to_rgb();
                SavedColor {
                    name: engine.closest_named_color(color).name,
                    hex: entry.hex.clone(),
                    rgb: color.to_css(),
                    hsl: color.to_hsl().to_string(),
                }
            })
            .collect();

        Ok(SavedPalette {
            name: format!("Color Palette {}", created.format("%Y-%m-%d")),
            colors,
            created: created.to_rfc3339(),
        })
    }
}

/// A palette exported from the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPalette {
    /// e.g. "Color Palette 2024-05-01"
    pub name: String,
    /// Colors, newest first
    pub colors: Vec<SavedColor>,
    /// Export time, RFC 3339
    pub created: String,
}

/// One exported color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedColor {
    /// Closest named color
    pub name: String,
    /// e.g. "#ff0000"
    pub hex: String,
    /// e.g. "rgb(255, 0, 0)"
    pub rgb: String,
    /// e.g. "hsl(0, 100%, 50%)"
    pub hsl: String,
}
