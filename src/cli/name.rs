//! Named color lookup command.

use crate::cli::common::{parse_color, print_json, CliContext, CliResult};
use crate::models::ConfidenceLevel;
use clap::Args;
use serde::Serialize;

/// Find the closest named color
#[derive(Debug, Clone, Args)]
pub struct NameArgs {
    /// Color to classify ("#rrggbb", "#rgb", "r,g,b" or "rgb(r, g, b)")
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NameOutput {
    input: String,
    hex: String,
    name: String,
    confidence: u8,
    level: ConfidenceLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    dataset_size: usize,
}

impl NameArgs {
    /// Execute the name command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let color = parse_color(&self.color)?;
        let engine = ctx.engine();
        let found = engine.closest_named_color(color);

        let output = NameOutput {
            input: self.color.clone(),
            hex: color.to_hex(),
            level: found.level(),
            name: found.name,
            confidence: found.confidence,
            distance: found.distance,
            dataset_size: engine.colors().len(),
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("Color:      {}", output.hex);
            println!("Name:       {}", output.name);
            println!("Confidence: {}% ({})", output.confidence, output.level);
            if let Some(distance) = output.distance {
                println!("Distance:   {:.2}", distance);
            }
        }

        Ok(())
    }
}
