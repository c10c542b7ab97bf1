//! Color analysis command.

use crate::cli::common::{parse_color, print_json, CliContext, CliResult};
use crate::models::{ColorInfo, ConfidenceLevel, FormattedColorValues};
use clap::Args;
use serde::Serialize;

/// Analyze a color: hex, HSL, HSV, named match, brightness, luminance, temperature
#[derive(Debug, Clone, Args)]
pub struct InfoArgs {
    /// Color to analyze ("#rrggbb", "#rgb", "r,g,b" or "rgb(r, g, b)")
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Do not record the color in the history
    #[arg(long)]
    pub no_history: bool,
}

/// JSON shape of a full color analysis, shared with `pick`.
#[derive(Debug, Serialize)]
pub(super) struct InfoOutput {
    #[serde(flatten)]
    pub(super) info: ColorInfo,
    pub(super) confidence_level: ConfidenceLevel,
    pub(super) formatted: FormattedColorValues,
}

impl InfoOutput {
    pub(super) fn new(info: ColorInfo) -> Self {
        Self {
            confidence_level: info.named_color.level(),
            formatted: info.format_values(),
            info,
        }
    }
}

impl InfoArgs {
    /// Execute the info command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let engine = ctx.engine();

        let output = InfoOutput::new(engine.color_info(color));

        if self.json {
            print_json(&output)?;
        } else {
            print_human_readable(&output);
        }

        ctx.record_color(color, self.no_history);

        Ok(())
    }
}

pub(super) fn print_human_readable(output: &InfoOutput) {
    let formatted = &output.formatted;
    println!("Hex:          {}", formatted.hex);
    println!("RGB:          {}", formatted.rgb);
    println!("HSL:          {}", formatted.hsl);
    println!("HSV:          {}", formatted.hsv);
    println!(
        "Named color:  {} ({}% match, {})",
        formatted.named_color,
        formatted.confidence,
        output.confidence_level
    );
    println!("Brightness:   {}", formatted.brightness);
    println!("Luminance:    {}", formatted.luminance);
    println!("Temperature:  {}", formatted.temperature);
}
