//! Palette generation command.

use crate::cli::common::{parse_color, print_json, CliContext, CliError, CliResult};
use crate::engine::PaletteScheme;
use clap::Args;
use serde::Serialize;

/// Generate a palette from a base color
#[derive(Debug, Clone, Args)]
pub struct PaletteArgs {
    /// Base color ("#rrggbb", "#rgb", "r,g,b" or "rgb(r, g, b)")
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Scheme: monochromatic, analogous, complementary or triadic
    /// (defaults to the configured scheme)
    #[arg(short, long, value_name = "SCHEME")]
    pub scheme: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PaletteOutput {
    base: String,
    scheme: PaletteScheme,
    colors: Vec<PaletteEntry>,
}

#[derive(Debug, Serialize)]
struct PaletteEntry {
    hex: String,
    r: u8,
    g: u8,
    b: u8,
    name: String,
}

impl PaletteArgs {
    /// Execute the palette command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let color = parse_color(&self.color)?;

        let scheme = match &self.scheme {
            Some(name) => name
                .parse::<PaletteScheme>()
                .map_err(|e| CliError::validation(e.to_string()))?,
            None => ctx.config.palette.default_scheme,
        };

        let engine = ctx.engine();
        let colors = engine
            .palette(color, scheme)
            .into_iter()
            .map(|c| PaletteEntry {
                hex: c.to_hex(),
                r: c.r,
                g: c.g,
                b: c.b,
                name: engine.closest_named_color(c).name,
            })
            .collect::<Vec<_>>();

        let output = PaletteOutput {
            base: color.to_hex(),
            scheme,
            colors,
        };

        if self.json {
            print_json(&output)?;
        } else {
            println!("{} palette for {}", output.scheme, output.base);
            for (index, entry) in output.colors.iter().enumerate() {
                println!(
                    "  {}. {}  rgb({}, {}, {})  {}",
                    index + 1,
                    entry.hex,
                    entry.r,
                    entry.g,
                    entry.b,
                    entry.name
                );
            }
        }

        Ok(())
    }
}
