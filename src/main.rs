//! PixelHue - color analysis from the command line
//!
//! Samples pixels from images, analyzes colors and generates palettes.
//! Analyzed colors are kept in a short history that can be exported as a
//! palette.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::warn;

use pixelhue::cli::{
    CliContext, CliResult, ConfigArgs, ExitCode, HistoryArgs, InfoArgs, NameArgs,
    PaletteArgs, PickArgs,
};
use pixelhue::config::Config;
use pixelhue::constants::APP_BINARY_NAME;
use pixelhue::logging;

/// PixelHue - analyze colors and build palettes
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Named color dataset to match against (JSON array of {name, r, g, b})
    #[arg(long, value_name = "FILE", global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a color
    Info(InfoArgs),
    /// Sample a pixel from an image and analyze it
    Pick(PickArgs),
    /// Find the closest named color
    Name(NameArgs),
    /// Generate a palette from a base color
    Palette(PaletteArgs),
    /// Manage the recent color history
    History(HistoryArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

fn run(cli: Cli) -> CliResult<()> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load configuration, using defaults: {e:#}");
        Config::default()
    });
    let ctx = CliContext::new(config, cli.dataset);

    match &cli.command {
        Command::Info(args) => args.execute(&ctx),
        Command::Pick(args) => args.execute(&ctx),
        Command::Name(args) => args.execute(&ctx),
        Command::Palette(args) => args.execute(&ctx),
        Command::History(args) => args.execute(&ctx),
        Command::Config(args) => args.execute(&ctx),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(code.code());
}
