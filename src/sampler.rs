//! Pixel sampling from image files.
//!
//! Images are decoded once into 8-bit RGBA. Coordinates are in image pixels
//! with the origin at the top-left corner.

use anyhow::{Context, Result};
use image::RgbaImage;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::MAX_IMAGE_FILE_SIZE;
use crate::models::RgbColor;

/// A single pixel read from an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SampledPixel {
    /// Column, 0-based from the left edge
    pub x: u32,
    /// Row, 0-based from the top edge
    pub y: u32,
    /// Color channels, alpha discarded
    pub color: RgbColor,
    /// Alpha channel (255 is opaque)
    pub alpha: u8,
}

/// Decoded image ready for pixel lookups.
#[derive(Debug, Clone)]
pub struct ImageSampler {
    pixels: RgbaImage,
}

impl ImageSampler {
    /// Wraps an already decoded image.
    #[must_use]
    pub fn new(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    /// Opens and decodes an image file.
    ///
    /// The format is detected from the file contents. PNG, JPEG, GIF, WebP
    /// and BMP are supported.
    ///
    /// # Errors
    /// Returns an error if the file is missing, larger than
    /// [`MAX_IMAGE_FILE_SIZE`], or cannot be decoded.
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path)
            .context(format!("Failed to read image file: {}", path.display()))?;
        if metadata.len() > MAX_IMAGE_FILE_SIZE {
            anyhow::bail!(
                "Image file too large: {} ({} bytes, maximum {} MB)",
                path.display(),
                metadata.len(),
                MAX_IMAGE_FILE_SIZE / (1024 * 1024)
            );
        }

        let decoded = image::ImageReader::open(path)
            .context(format!("Failed to open image: {}", path.display()))?
            .with_guessed_format()
            .context(format!("Failed to read image: {}", path.display()))?
            .decode()
            .context(format!(
                "Failed to decode image {}. The file may be corrupted or in an unsupported format",
                path.display()
            ))?;

        let sampler = Self::new(decoded.to_rgba8());
        let (width, height) = sampler.dimensions();
        debug!("Loaded {}x{} image from {}", width, height, path.display());
        Ok(sampler)
    }

    /// Image size as `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    /// Reads the pixel at `(x, y)`.
    ///
    /// # Errors
    /// Returns an error if the coordinates are outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Result<SampledPixel> {
        let (width, height) = self.dimensions();
        let Some(pixel) = self.pixels.get_pixel_checked(x, y) else {
            anyhow::bail!(
                "Coordinates ({x}, {y}) out of bounds for {width}x{height} image. Valid range is (0-{}, 0-{})",
                width.saturating_sub(1),
                height.saturating_sub(1)
            );
        };

        let [r, g, b, alpha] = pixel.0;
        Ok(SampledPixel {
            x,
            y,
            color: RgbColor::new(r, g, b),
            alpha,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use tempfile::TempDir;

    /// 3x2 image: top row red, green, blue; bottom row half-transparent gray.
    fn sample_image() -> RgbaImage {
        RgbaImage::from_fn(3, 2, |x, y| match (x, y) {
            (0, 0) => Rgba([255, 0, 0, 255]),
            (1, 0) => Rgba([0, 255, 0, 255]),
            (2, 0) => Rgba([0, 0, 255, 255]),
            _ => Rgba([128, 128, 128, 128]),
        })
    }

    #[test]
    fn test_pixel_lookup() {
        let sampler = ImageSampler::new(sample_image());
        assert_eq!(sampler.dimensions(), (3, 2));

        let pixel = sampler.pixel(1, 0).unwrap();
        assert_eq!(pixel.color, RgbColor::new(0, 255, 0));
        assert_eq!(pixel.alpha, 255);
        assert_eq!((pixel.x, pixel.y), (1, 0));

        let pixel = sampler.pixel(2, 1).unwrap();
        assert_eq!(pixel.color, RgbColor::new(128, 128, 128));
        assert_eq!(pixel.alpha, 128);
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let sampler = ImageSampler::new(sample_image());
        assert!(sampler.pixel(3, 0).is_err());
        assert!(sampler.pixel(0, 2).is_err());

        let err = sampler.pixel(10, 10).unwrap_err();
        assert!(err.to_string().contains("out of bounds for 3x2 image"));
    }

    #[test]
    fn test_open_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample.png");
        sample_image().save(&path).unwrap();

        let sampler = ImageSampler::open(&path).unwrap();
        assert_eq!(sampler.dimensions(), (3, 2));
        assert_eq!(sampler.pixel(0, 0).unwrap().color, RgbColor::new(255, 0, 0));
        assert_eq!(sampler.pixel(2, 0).unwrap().color, RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_open_detects_format_from_contents() {
        let temp_dir = TempDir::new().unwrap();
        let png_path = temp_dir.path().join("sample.png");
        sample_image().save(&png_path).unwrap();

        let renamed = temp_dir.path().join("sample.dat");
        fs::rename(&png_path, &renamed).unwrap();

        let sampler = ImageSampler::open(&renamed).unwrap();
        assert_eq!(sampler.dimensions(), (3, 2));
    }

    #[test]
    fn test_open_rejects_non_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.png");
        fs::write(&path, "definitely not a png").unwrap();

        assert!(ImageSampler::open(&path).is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = ImageSampler::open(&temp_dir.path().join("missing.png")).unwrap_err();
        assert!(err.to_string().contains("Failed to read image file"));
    }
}
