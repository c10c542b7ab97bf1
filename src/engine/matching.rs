//! Nearest named-color classification.

// Allow intentional type casts for percentage math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use crate::constants::MAX_RGB_DISTANCE;
use crate::models::{NamedColor, NamedColorMatch, RgbColor};

/// Euclidean distance between two colors in RGB space.
#[must_use]
pub fn color_distance(a: RgbColor, b: RgbColor) -> f64 {
    let dr = f64::from(a.r) - f64::from(b.r);
    let dg = f64::from(a.g) - f64::from(b.g);
    let db = f64::from(a.b) - f64::from(b.b);
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Converts a distance to a 0-100 confidence percentage.
///
/// Normalized by the fixed constant 441 rather than the exact maximum
/// distance (~441.67), so the farthest possible colors floor at 0.
#[must_use]
pub fn confidence_from_distance(distance: f64) -> u8 {
    ((1.0 - distance / MAX_RGB_DISTANCE) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8
}

/// Finds the dataset entry closest to `color`.
///
/// Scans every entry; on equal distances the earlier entry wins. An empty
/// dataset yields [`NamedColorMatch::unknown`].
///
/// # Examples
///
/// ```
/// use pixelhue::engine::find_closest_named_color;
/// use pixelhue::models::{NamedColor, RgbColor};
///
/// let colors = vec![NamedColor::new("Red", 255, 0, 0), NamedColor::new("Blue", 0, 0, 255)];
/// let found = find_closest_named_color(&colors, RgbColor::new(250, 10, 5));
/// assert_eq!(found.name, "Red");
/// ```
#[must_use]
pub fn find_closest_named_color(colors: &[NamedColor], color: RgbColor) -> NamedColorMatch {
    let mut closest: Option<(&NamedColor, f64)> = None;

    for candidate in colors {
        let distance = color_distance(color, candidate.to_rgb());
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((candidate, distance)),
        }
    }

    match closest {
        Some((named, distance)) => NamedColorMatch {
            name: named.name.clone(),
            confidence: confidence_from_distance(distance),
            distance: Some(distance),
        },
        None => NamedColorMatch::unknown(),
    }
}
