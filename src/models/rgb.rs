//! RGB color handling with hex parsing, CSS-style parsing and color space conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in hue sector selection (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{HslColor, HsvColor};

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// This is the atomic input unit of the analysis engine: every derived
/// value (HSL, HSV, named match, luminance...) is computed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb" and the
    /// three digit shorthand "#RGB" (each digit is doubled).
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelhue::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("f80").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 136, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        let expanded;
        let hex = match hex.len() {
            6 => hex,
            3 if hex.is_ascii() => {
                expanded = hex.chars().flat_map(|c| [c, c]).collect::<String>();
                expanded.as_str()
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB) or 3 (RGB)"
            ),
        };

        // from_str_radix alone would accept a leading '+'
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected hex digits 0-9, a-f");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Parses a color from user input.
    ///
    /// Accepts hex notation (see [`RgbColor::from_hex`]), a bare `r,g,b`
    /// triple, or CSS functional notation `rgb(r, g, b)`. Channels must be
    /// integers in 0-255.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelhue::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse("12,34,56").unwrap(), RgbColor::new(12, 34, 56));
    /// assert_eq!(RgbColor::parse("rgb(255, 0, 0)").unwrap(), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::parse("#00ff00").unwrap(), RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches none of the supported notations
    /// or a channel is out of range.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let lowered = input.to_ascii_lowercase();

        let triple = if let Some(inner) = lowered
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            inner.to_string()
        } else if input.contains(',') {
            lowered.clone()
        } else {
            return Self::from_hex(input);
        };

        let channels = triple
            .split(',')
            .map(|part| {
                let part = part.trim();
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    anyhow::bail!("Invalid channel value '{part}'. Expected an integer 0-255");
                }
                part.parse::<u8>()
                    .context(format!("Invalid channel value '{part}'. Expected an integer 0-255"))
            })
            .collect::<Result<Vec<u8>>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => anyhow::bail!(
                "Invalid RGB triple '{input}'. Expected exactly three channels (r,g,b)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelhue::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#ff0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Formats the color in CSS functional notation, e.g. `rgb(255, 0, 0)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Channels normalized to 0.0-1.0.
    fn normalized(&self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Converts the RGB color to HSL (Hue, Saturation, Lightness).
    ///
    /// Hue is rounded to whole degrees in 0-359, saturation and lightness to
    /// whole percent. Achromatic colors (all channels equal) have hue 0 and
    /// saturation 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelhue::models::{HslColor, RgbColor};
    ///
    /// assert_eq!(RgbColor::new(0, 255, 0).to_hsl(), HslColor::new(120, 100, 50));
    /// assert_eq!(RgbColor::new(128, 128, 128).to_hsl(), HslColor::new(0, 0, 50));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> HslColor {
        let (r, g, b) = self.normalized();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return HslColor::new(0, 0, round_percent(l));
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = hue_fraction(r, g, b, max, d);

        HslColor::new(round_degrees(h), round_percent(s), round_percent(l))
    }

    /// HSL hue rounded to whole degrees without wrapping, so 360 stays 360.
    ///
    /// Temperature bands are inclusive of their upper edge, which needs the
    /// unwrapped value.
    pub(crate) fn rounded_hue(&self) -> u16 {
        let (r, g, b) = self.normalized();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max == min {
            return 0;
        }

        unwrapped_degrees(hue_fraction(r, g, b, max, max - min))
    }

    /// Converts the RGB color to HSV (Hue, Saturation, Value).
    ///
    /// Uses the same hue sectors as [`RgbColor::to_hsl`]. Pure black yields
    /// `hsv(0, 0%, 0%)`.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn to_hsv(&self) -> HsvColor {
        let (r, g, b) = self.normalized();

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let d = max - min;

        let s = if max == 0.0 { 0.0 } else { d / max };
        let h = if max == min {
            0.0
        } else {
            hue_fraction(r, g, b, max, d)
        };

        HsvColor::new(round_degrees(h), round_percent(s), round_percent(max))
    }
}

/// Hue as a fraction of a full turn (0.0-1.0), picked from the sector of the
/// dominant channel. `d` must be non-zero.
fn hue_fraction(r: f64, g: f64, b: f64, max: f64, d: f64) -> f64 {
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h / 6.0
}

/// Rounds a hue fraction to whole degrees, 0-360 inclusive.
fn unwrapped_degrees(fraction: f64) -> u16 {
    (fraction * 360.0).round() as u16
}

/// Rounds a hue fraction to whole degrees. A value that rounds up to 360
/// wraps to 0.
fn round_degrees(fraction: f64) -> u16 {
    unwrapped_degrees(fraction) % 360
}

fn round_percent(value: f64) -> u8 {
    (value * 100.0).round().clamp(0.0, 100.0) as u8
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
