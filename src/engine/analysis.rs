//! Brightness, luminance and temperature derivations.

// Allow intentional type casts for percentage math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::models::{ColorTemperature, RgbColor};

/// Perceived brightness in whole percent (0-100).
///
/// Weighted average `(299 R + 587 G + 114 B) / 1000`, scaled to a percent of 255.
#[must_use]
pub fn calculate_brightness(color: RgbColor) -> u8 {
    let weighted =
        (f64::from(color.r) * 299.0 + f64::from(color.g) * 587.0 + f64::from(color.b) * 114.0)
            / 1000.0;
    (weighted / 255.0 * 100.0).round() as u8
}

/// WCAG relative luminance (0.0 for black, 1.0 for white).
///
/// # Examples
///
/// ```
/// use pixelhue::engine::calculate_luminance;
/// use pixelhue::models::RgbColor;
///
/// assert!(calculate_luminance(RgbColor::new(0, 0, 0)).abs() < 1e-12);
/// assert!((calculate_luminance(RgbColor::new(255, 255, 255)) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn calculate_luminance(color: RgbColor) -> f64 {
    let r = linearize(f64::from(color.r) / 255.0);
    let g = linearize(f64::from(color.g) / 255.0);
    let b = linearize(f64::from(color.b) / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// sRGB gamma expansion of a normalized channel, with the WCAG 2.x threshold.
fn linearize(channel: f64) -> f64 {
    if channel <= 0.039_28 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Temperature band of the color's HSL hue.
///
/// Uses the rounded hue before it wraps to 0, so a hue of 360 lands in the
/// magenta-red band. Achromatic colors have hue 0 and therefore report warm.
#[must_use]
pub fn color_temperature(color: RgbColor) -> ColorTemperature {
    ColorTemperature::from_hue(color.rounded_hue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness() {
        assert_eq!(calculate_brightness(RgbColor::new(0, 0, 0)), 0);
        assert_eq!(calculate_brightness(RgbColor::new(255, 255, 255)), 100);
        assert_eq!(calculate_brightness(RgbColor::new(255, 0, 0)), 30);
        assert_eq!(calculate_brightness(RgbColor::new(0, 255, 0)), 59);
        assert_eq!(calculate_brightness(RgbColor::new(0, 0, 255)), 11);
        assert_eq!(calculate_brightness(RgbColor::new(128, 128, 128)), 50);
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(calculate_luminance(RgbColor::new(0, 0, 0)).abs() < 1e-12);
        assert!((calculate_luminance(RgbColor::new(255, 255, 255)) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_primaries_use_channel_weights() {
        assert!((calculate_luminance(RgbColor::new(255, 0, 0)) - 0.2126).abs() < 1e-12);
        assert!((calculate_luminance(RgbColor::new(0, 255, 0)) - 0.7152).abs() < 1e-12);
        assert!((calculate_luminance(RgbColor::new(0, 0, 255)) - 0.0722).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_mid_gray() {
        let lum = calculate_luminance(RgbColor::new(128, 128, 128));
        assert!((lum - 0.215_860_500_113_899_2).abs() < 1e-9, "got {lum}");
    }

    #[test]
    fn test_luminance_linear_segment() {
        // 10/255 = 0.0392 is below the 0.03928 threshold
        let lum = calculate_luminance(RgbColor::new(10, 10, 10));
        let expected = 10.0 / 255.0 / 12.92;
        assert!((lum - expected).abs() < 1e-12);
    }

    #[test]
    fn test_luminance_is_monotonic_for_grays() {
        let mut previous = -1.0;
        for v in 0..=255u8 {
            let lum = calculate_luminance(RgbColor::new(v, v, v));
            assert!(lum > previous, "luminance not increasing at {v}");
            assert!((0.0..=1.0 + 1e-12).contains(&lum));
            previous = lum;
        }
    }

    #[test]
    fn test_temperature() {
        assert_eq!(
            color_temperature(RgbColor::new(255, 0, 0)).label(),
            "Warm (Red-Yellow)"
        );
        // hsl(200, 100%, 50%)
        assert_eq!(
            color_temperature(RgbColor::new(0, 170, 255)).label(),
            "Cool (Cyan-Blue)"
        );
        assert_eq!(
            color_temperature(RgbColor::new(0, 255, 0)),
            ColorTemperature::NeutralYellowGreen
        );
        assert_eq!(
            color_temperature(RgbColor::new(255, 0, 128)),
            ColorTemperature::WarmMagentaRed
        );
    }

    #[test]
    fn test_temperature_hue_rounding_to_360() {
        // Hue 359.76 rounds to 360: displayed as 0 but classified magenta-red
        let color = RgbColor::new(255, 0, 1);
        assert_eq!(color.to_hsl().h, 0);
        assert_eq!(color_temperature(color), ColorTemperature::WarmMagentaRed);

        // Hue 359.06 rounds to 359
        assert_eq!(
            color_temperature(RgbColor::new(255, 0, 4)),
            ColorTemperature::WarmMagentaRed
        );
    }

    #[test]
    fn test_temperature_matches_display_hue_below_360() {
        for r in (0..=255u8).step_by(17) {
            for g in (0..=255u8).step_by(17) {
                for b in (0..=255u8).step_by(17) {
                    let color = RgbColor::new(r, g, b);
                    let hue = color.rounded_hue();
                    if hue < 360 {
                        assert_eq!(hue, color.to_hsl().h, "{color}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_temperature_achromatic_is_warm() {
        assert_eq!(
            color_temperature(RgbColor::new(128, 128, 128)),
            ColorTemperature::WarmRedYellow
        );
    }
}
