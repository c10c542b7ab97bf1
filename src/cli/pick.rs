//! Pixel picking command.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::cli::info::{print_human_readable, InfoOutput};
use crate::sampler::ImageSampler;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Sample a pixel from an image and analyze its color
#[derive(Debug, Clone, Args)]
pub struct PickArgs {
    /// Image file (PNG, JPEG, GIF, WebP or BMP)
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Column of the pixel, 0 is the left edge
    #[arg(value_name = "X")]
    pub x: u32,

    /// Row of the pixel, 0 is the top edge
    #[arg(value_name = "Y")]
    pub y: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not record the color in the history
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Debug, Serialize)]
struct PickOutput {
    image: String,
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    alpha: u8,
    #[serde(flatten)]
    analysis: InfoOutput,
}

impl PickArgs {
    /// Execute the pick command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let sampler = ImageSampler::open(&self.image)
            .map_err(|e| CliError::io(format!("Failed to load image: {e:#}")))?;
        let (width, height) = sampler.dimensions();

        let pixel = sampler
            .pixel(self.x, self.y)
            .map_err(|e| CliError::validation(e.to_string()))?;

        let engine = ctx.engine();
        let output = PickOutput {
            image: self.image.to_string_lossy().to_string(),
            width,
            height,
            x: pixel.x,
            y: pixel.y,
            alpha: pixel.alpha,
            analysis: InfoOutput::new(engine.color_info(pixel.color)),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!(
                "Pixel:        ({}, {}) of {}x{} {}",
                output.x,
                output.y,
                output.width,
                output.height,
                self.image.display()
            );
            if output.alpha < u8::MAX {
                println!("Alpha:        {}", output.alpha);
            }
            print_human_readable(&output.analysis);
        }

        ctx.record_color(pixel.color, self.no_history);

        Ok(())
    }
}
