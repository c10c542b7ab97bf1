//! Color analysis engine.
//!
//! Every function here is pure: the same color always produces the same
//! result. The only state is the named-color dataset, which a
//! [`ColorEngine`] owns and never mutates, so an engine can be shared
//! freely across threads.

pub mod analysis;
pub mod matching;
pub mod palette;

pub use analysis::{calculate_brightness, calculate_luminance, color_temperature};
pub use matching::{color_distance, confidence_from_distance, find_closest_named_color};
pub use palette::{generate_palette, generate_palette_by_name, PaletteScheme};

use crate::dataset::NamedColorSet;
use crate::models::{ColorInfo, FormattedColorValues, NamedColorMatch, RgbColor};

/// Analysis engine bound to a named-color dataset.
///
/// The dataset is handed over at construction, so matching never sees a
/// partially loaded set.
///
/// # Examples
///
/// ```
/// use pixelhue::dataset::NamedColorSet;
/// use pixelhue::engine::ColorEngine;
/// use pixelhue::models::RgbColor;
///
/// let engine = ColorEngine::new(NamedColorSet::builtin());
/// let info = engine.color_info(RgbColor::new(255, 0, 0));
/// assert_eq!(info.hex, "#ff0000");
/// assert_eq!(info.named_color.name, "Red");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColorEngine {
    colors: NamedColorSet,
}

impl ColorEngine {
    /// Creates an engine that matches against `colors`.
    #[must_use]
    pub fn new(colors: NamedColorSet) -> Self {
        Self { colors }
    }

    /// Creates an engine backed by the built-in CSS named colors.
    #[must_use]
    pub fn with_builtin_colors() -> Self {
        Self::new(NamedColorSet::builtin())
    }

    /// The dataset this engine matches against.
    #[must_use]
    pub fn colors(&self) -> &NamedColorSet {
        &self.colors
    }

    /// Closest named color for `color`.
    #[must_use]
    pub fn closest_named_color(&self, color: RgbColor) -> NamedColorMatch {
        find_closest_named_color(self.colors.colors(), color)
    }

    /// Full analysis of one color.
    #[must_use]
    pub fn color_info(&self, color: RgbColor) -> ColorInfo {
        ColorInfo {
            rgb: color,
            hex: color.to_hex(),
            hsl: color.to_hsl(),
            hsv: color.to_hsv(),
            named_color: self.closest_named_color(color),
            brightness: calculate_brightness(color),
            luminance: calculate_luminance(color),
            temperature: color_temperature(color),
        }
    }

    /// Display strings for one color.
    #[must_use]
    pub fn formatted_values(&self, color: RgbColor) -> FormattedColorValues {
        self.color_info(color).format_values()
    }

    /// Palette for `color`. Kept on the engine so callers need one handle.
    #[must_use]
    pub fn palette(&self, color: RgbColor, scheme: PaletteScheme) -> Vec<RgbColor> {
        generate_palette(color, scheme)
    }
}
