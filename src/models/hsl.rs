//! HSL and HSV color representations.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Color in HSL (Hue, Saturation, Lightness) space with integer components.
///
/// Derived from an [`RgbColor`]; palette generation is the only place that
/// builds one directly and converts it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HslColor {
    /// Hue in whole degrees (0-359)
    pub h: u16,
    /// Saturation in whole percent (0-100)
    pub s: u8,
    /// Lightness in whole percent (0-100)
    pub l: u8,
}

impl HslColor {
    /// Creates a new `HslColor`.
    #[must_use]
    pub const fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }
    }

    /// Returns the same color rotated by `degrees` around the hue circle.
    ///
    /// Negative offsets rotate backwards; the result is always in 0-359.
    #[must_use]
    pub fn rotate_hue(&self, degrees: i32) -> Self {
        let h = (i32::from(self.h) + degrees).rem_euclid(360) as u16;
        Self { h, ..*self }
    }

    /// Returns the same color with lightness shifted by `delta` percent,
    /// clamped to 0-100.
    #[must_use]
    pub fn shift_lightness(&self, delta: i32) -> Self {
        let l = (i32::from(self.l) + delta).clamp(0, 100) as u8;
        Self { l, ..*self }
    }

    /// Converts back to RGB.
    ///
    /// Each channel is rounded independently, so converting an RGB color to
    /// HSL and back may drift by a few units per channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelhue::models::{HslColor, RgbColor};
    ///
    /// assert_eq!(HslColor::new(0, 100, 50).to_rgb(), RgbColor::new(255, 0, 0));
    /// assert_eq!(HslColor::new(0, 0, 50).to_rgb(), RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        let h = f64::from(self.h) / 360.0;
        let s = f64::from(self.s) / 100.0;
        let l = f64::from(self.l) / 100.0;

        if self.s == 0 {
            let v = to_channel(l);
            return RgbColor::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        RgbColor::new(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }
}

/// Piecewise channel interpolation over the six hue sectors.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for HslColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

/// Color in HSV (Hue, Saturation, Value) space with integer components.
///
/// Display only; there is no conversion back to RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HsvColor {
    /// Hue in whole degrees (0-359)
    pub h: u16,
    /// Saturation in whole percent (0-100)
    pub s: u8,
    /// Value in whole percent (0-100)
    pub v: u8,
}

impl HsvColor {
    /// Creates a new `HsvColor`.
    #[must_use]
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({}, {}%, {}%)", self.h, self.s, self.v)
    }
}
