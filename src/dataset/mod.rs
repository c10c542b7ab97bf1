//! Named-color reference dataset.
//!
//! The dataset is an ordered list of `{name, r, g, b}` records. Order matters:
//! when two entries are equally close to a color, the first one wins. A
//! built-in list of the CSS named colors is embedded in the binary and used
//! whenever an external dataset is not supplied or cannot be read.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::models::NamedColor;

/// Immutable, ordered set of named colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedColorSet {
    colors: Vec<NamedColor>,
}

impl NamedColorSet {
    /// Creates a set from already-built entries, keeping their order.
    #[must_use]
    pub fn new(colors: Vec<NamedColor>) -> Self {
        Self { colors }
    }

    /// An empty set. Matching against it always yields "Unknown".
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a dataset from a JSON array of `{name, r, g, b}` objects.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or a channel is outside 0-255.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let colors: Vec<NamedColor> =
            serde_json::from_str(json).context("Failed to parse named color dataset")?;
        Ok(Self { colors })
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .context(format!("Failed to read color dataset: {}", path.display()))?;
        let set = Self::from_json_str(&content)
            .context(format!("Invalid color dataset: {}", path.display()))?;

        debug!(
            "Loaded {} named colors from {}",
            set.len(),
            path.display()
        );
        Ok(set)
    }

    /// The embedded fallback list of CSS named colors.
    #[must_use]
    pub fn builtin() -> Self {
        let json_data = include_str!("named_colors.json");
        match Self::from_json_str(json_data) {
            Ok(set) => set,
            Err(e) => {
                warn!("Embedded color dataset is unreadable: {e:#}");
                Self::empty()
            }
        }
    }

    /// Loads the dataset at `path`, falling back to [`NamedColorSet::builtin`]
    /// when no path is given or the file cannot be loaded.
    ///
    /// A file that loads successfully is used as-is, even if it is empty.
    #[must_use]
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::load(path) {
            Ok(set) => {
                if set.is_empty() {
                    warn!(
                        "Color dataset {} is empty; every color will match as Unknown",
                        path.display()
                    );
                }
                set
            }
            Err(e) => {
                warn!("Could not load color data, using built-in colors: {e:#}");
                Self::builtin()
            }
        }
    }

    /// Entries in dataset order.
    #[must_use]
    pub fn colors(&self) -> &[NamedColor] {
        &self.colors
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
