//! Value types for colors, named-color matches and analysis results.
//!
//! Models are plain data: they carry no dataset and hold no shared state.

pub mod color_info;
pub mod hsl;
pub mod named_color;
pub mod rgb;
pub mod temperature;

// Re-export all model types
pub use color_info::{ColorInfo, FormattedColorValues};
pub use hsl::{HslColor, HsvColor};
pub use named_color::{ConfidenceLevel, NamedColor, NamedColorMatch, UNKNOWN_COLOR_NAME};
pub use rgb::RgbColor;
pub use temperature::ColorTemperature;
