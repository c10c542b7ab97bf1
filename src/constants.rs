//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed values of the color engine.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "PixelHue";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "pixelhue";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "PIXELHUE_CONFIG_DIR";

/// Normalization constant for match confidence.
///
/// Approximates the largest possible RGB distance, `sqrt(3 * 255²) ≈ 441.67`.
/// Kept at 441 so confidence percentages stay stable across releases.
pub const MAX_RGB_DISTANCE: f64 = 441.0;

/// Default number of colors kept in the recent-color history.
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Upper bound accepted for the configured history size.
pub const MAX_HISTORY_SIZE: usize = 100;

/// Largest image file accepted for pixel sampling (10 MiB).
pub const MAX_IMAGE_FILE_SIZE: u64 = 10 * 1024 * 1024;
