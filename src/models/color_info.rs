//! Aggregate analysis result for a single sampled color.

use serde::Serialize;

use super::{ColorTemperature, HslColor, HsvColor, NamedColorMatch, RgbColor};

/// Everything the engine knows about one color.
///
/// Computed fresh for every query by
/// [`ColorEngine::color_info`](crate::engine::ColorEngine::color_info).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorInfo {
    /// The sampled color
    pub rgb: RgbColor,
    /// Lowercase "#rrggbb"
    pub hex: String,
    /// HSL representation
    pub hsl: HslColor,
    /// HSV representation
    pub hsv: HsvColor,
    /// Closest entry of the named-color dataset
    pub named_color: NamedColorMatch,
    /// Perceived brightness in percent (0-100)
    pub brightness: u8,
    /// WCAG relative luminance (0.0-1.0)
    pub luminance: f64,
    /// Temperature band of the hue
    pub temperature: ColorTemperature,
}

/// Display strings for a [`ColorInfo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedColorValues {
    /// e.g. "rgb(255, 0, 0)"
    pub rgb: String,
    /// e.g. "#ff0000"
    pub hex: String,
    /// e.g. "hsl(0, 100%, 50%)"
    pub hsl: String,
    /// e.g. "hsv(0, 100%, 100%)"
    pub hsv: String,
    /// Name of the closest named color
    pub named_color: String,
    /// Match confidence in percent
    pub confidence: u8,
    /// e.g. "30%"
    pub brightness: String,
    /// Luminance with three decimals, e.g. "0.213"
    pub luminance: String,
    /// e.g. "Warm (Red-Yellow)"
    pub temperature: String,
}

impl ColorInfo {
    /// Formats every value for display.
    #[must_use]
    pub fn format_values(&self) -> FormattedColorValues {
        FormattedColorValues {
            rgb: self.rgb.to_css(),
            hex: self.hex.clone(),
            hsl: self.hsl.to_string(),
            hsv: self.hsv.to_string(),
            named_color: self.named_color.name.clone(),
            confidence: self.named_color.confidence,
            brightness: format!("{}%", self.brightness),
            luminance: format!("{:.3}", self.luminance),
            temperature: self.temperature.label().to_string(),
        }
    }
}
