//! Palette generation from a base color.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::RgbColor;

/// Lightness step between monochromatic shades, in percent.
const MONOCHROMATIC_STEP: i32 = 15;
/// Hue step between analogous colors, in degrees.
const ANALOGOUS_STEP: i32 = 30;
/// Hue step between triadic colors, in degrees.
const TRIADIC_STEP: i32 = 120;

/// Palette generation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteScheme {
    /// 9 shades and tints of the base hue
    #[default]
    Monochromatic,
    /// 5 neighbours on the color wheel, 30° apart
    Analogous,
    /// The base color and its opposite
    Complementary,
    /// 3 colors 120° apart
    Triadic,
}

impl PaletteScheme {
    /// All schemes, in display order.
    pub const ALL: [Self; 4] = [
        Self::Monochromatic,
        Self::Analogous,
        Self::Complementary,
        Self::Triadic,
    ];

    /// Lowercase scheme name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
        }
    }

    /// Number of colors this scheme produces.
    #[must_use]
    pub const fn color_count(&self) -> usize {
        match self {
            Self::Monochromatic => 9,
            Self::Analogous => 5,
            Self::Complementary => 2,
            Self::Triadic => 3,
        }
    }

    /// Generates the palette for `base`.
    #[must_use]
    pub fn generate(&self, base: RgbColor) -> Vec<RgbColor> {
        match self {
            Self::Monochromatic => monochromatic(base),
            Self::Analogous => analogous(base),
            Self::Complementary => complementary(base),
            Self::Triadic => triadic(base),
        }
    }
}

impl fmt::Display for PaletteScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteScheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown palette scheme '{wanted}'. Must be one of: monochromatic, analogous, complementary, triadic"
                )
            })
    }
}

/// Generates a palette for `base` using `scheme`.
#[must_use]
pub fn generate_palette(base: RgbColor, scheme: PaletteScheme) -> Vec<RgbColor> {
    scheme.generate(base)
}

/// Generates a palette by scheme name. Unknown names yield an empty palette.
///
/// # Examples
///
/// ```
/// use pixelhue::engine::generate_palette_by_name;
/// use pixelhue::models::RgbColor;
///
/// let base = RgbColor::new(255, 0, 0);
/// assert_eq!(generate_palette_by_name(base, "triadic").len(), 3);
/// assert!(generate_palette_by_name(base, "unknown-scheme").is_empty());
/// ```
#[must_use]
pub fn generate_palette_by_name(base: RgbColor, scheme: &str) -> Vec<RgbColor> {
    scheme
        .parse::<PaletteScheme>()
        .map(|scheme| scheme.generate(base))
        .unwrap_or_default()
}

/// Lightness shifted in steps of 15 from -60 to +60, clamped to 0-100.
fn monochromatic(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    (-4..=4)
        .map(|step| hsl.shift_lightness(step * MONOCHROMATIC_STEP).to_rgb())
        .collect()
}

/// Hue rotated by -60, -30, 0, +30 and +60 degrees.
fn analogous(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    (-2..=2)
        .map(|step| hsl.rotate_hue(step * ANALOGOUS_STEP).to_rgb())
        .collect()
}

/// The base color itself followed by the hue rotated 180 degrees.
fn complementary(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    vec![base, hsl.rotate_hue(180).to_rgb()]
}

/// Hue rotated by 0, 120 and 240 degrees.
fn triadic(base: RgbColor) -> Vec<RgbColor> {
    let hsl = base.to_hsl();
    (0..3)
        .map(|step| hsl.rotate_hue(step * TRIADIC_STEP).to_rgb())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: RgbColor = RgbColor::new(255, 0, 0);
    const RUST: RgbColor = RgbColor::new(200, 100, 50);

    #[test]
    fn test_scheme_lengths() {
        for scheme in PaletteScheme::ALL {
            assert_eq!(scheme.generate(RUST).len(), scheme.color_count(), "{scheme}");
        }
    }

    #[test]
    fn test_monochromatic() {
        let palette = generate_palette(RED, PaletteScheme::Monochromatic);
        assert_eq!(
            palette,
            vec![
                RgbColor::new(0, 0, 0),
                RgbColor::new(26, 0, 0),
                RgbColor::new(102, 0, 0),
                RgbColor::new(179, 0, 0),
                RgbColor::new(255, 0, 0),
                RgbColor::new(255, 77, 77),
                RgbColor::new(255, 153, 153),
                RgbColor::new(255, 229, 229),
                RgbColor::new(255, 255, 255),
            ]
        );
    }

    #[test]
    fn test_monochromatic_clamps_lightness() {
        // Base lightness is 49%, so the darkest steps clamp to black
        let palette = generate_palette(RUST, PaletteScheme::Monochromatic);
        assert_eq!(palette[0], RgbColor::new(0, 0, 0));
        assert_eq!(palette[4], RUST);
        assert_eq!(palette[8], RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_analogous() {
        let palette = generate_palette(RED, PaletteScheme::Analogous);
        assert_eq!(
            palette,
            vec![
                RgbColor::new(255, 0, 255),
                RgbColor::new(255, 0, 128),
                RgbColor::new(255, 0, 0),
                RgbColor::new(255, 128, 0),
                RgbColor::new(255, 255, 0),
            ]
        );
    }

    #[test]
    fn test_complementary() {
        let palette = generate_palette(RED, PaletteScheme::Complementary);
        assert_eq!(palette, vec![RED, RgbColor::new(0, 255, 255)]);

        let palette = generate_palette(RUST, PaletteScheme::Complementary);
        assert_eq!(palette, vec![RUST, RgbColor::new(50, 150, 200)]);
    }

    #[test]
    fn test_complementary_hue_is_opposite() {
        let bases = [
            RgbColor::new(0, 0, 255),
            RgbColor::new(30, 144, 255),
            RgbColor::new(70, 130, 180),
            RgbColor::new(255, 165, 0),
            RUST,
        ];
        for base in bases {
            let palette = generate_palette(base, PaletteScheme::Complementary);
            assert_eq!(palette.len(), 2);
            assert_eq!(palette[0], base);
            assert_eq!(
                palette[1].to_hsl().h,
                (palette[0].to_hsl().h + 180) % 360,
                "base {base}"
            );
        }
    }

    #[test]
    fn test_triadic() {
        assert_eq!(
            generate_palette(RED, PaletteScheme::Triadic),
            vec![
                RgbColor::new(255, 0, 0),
                RgbColor::new(0, 255, 0),
                RgbColor::new(0, 0, 255),
            ]
        );
        assert_eq!(
            generate_palette(RUST, PaletteScheme::Triadic),
            vec![
                RgbColor::new(200, 100, 50),
                RgbColor::new(50, 200, 100),
                RgbColor::new(100, 50, 200),
            ]
        );
    }

    #[test]
    fn test_achromatic_base_stays_gray() {
        let gray = RgbColor::new(128, 128, 128);
        for color in generate_palette(gray, PaletteScheme::Triadic) {
            assert_eq!(color, gray);
        }
    }

    #[test]
    fn test_by_name() {
        assert_eq!(generate_palette_by_name(RED, "complementary").len(), 2);
        assert_eq!(generate_palette_by_name(RED, "Analogous").len(), 5);
        assert!(generate_palette_by_name(RED, "unknown-scheme").is_empty());
        assert!(generate_palette_by_name(RED, "").is_empty());
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!(
            "triadic".parse::<PaletteScheme>().unwrap(),
            PaletteScheme::Triadic
        );
        assert_eq!(
            " MONOCHROMATIC ".parse::<PaletteScheme>().unwrap(),
            PaletteScheme::Monochromatic
        );
        let err = "tetradic".parse::<PaletteScheme>().unwrap_err();
        assert!(err.to_string().contains("Unknown palette scheme"));
    }

    #[test]
    fn test_scheme_serde() {
        let json = serde_json::to_string(&PaletteScheme::Complementary).unwrap();
        assert_eq!(json, "\"complementary\"");
        let scheme: PaletteScheme = serde_json::from_str("\"analogous\"").unwrap();
        assert_eq!(scheme, PaletteScheme::Analogous);
    }
}
