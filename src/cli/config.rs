//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::config::Config;
use crate::constants::{APP_NAME, MAX_HISTORY_SIZE};
use crate::dataset::NamedColorSet;
use crate::engine::PaletteScheme;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Named color dataset (JSON array of {name, r, g, b})
    #[arg(long, value_name = "FILE")]
    dataset: Option<PathBuf>,

    /// Number of colors kept in the history (1-100)
    #[arg(long, value_name = "N")]
    history_size: Option<usize>,

    /// Record analyzed colors in the history (true or false)
    #[arg(long, value_name = "BOOL")]
    history_enabled: Option<bool>,

    /// Default palette scheme (monochromatic, analogous, complementary, triadic)
    #[arg(long, value_name = "SCHEME")]
    default_scheme: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    history: HistoryOutput,
    palette: PaletteOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    dataset: Option<String>,
    config_dir: String,
}

#[derive(Serialize, Debug)]
struct HistoryOutput {
    enabled: bool,
    max_size: usize,
}

#[derive(Serialize, Debug)]
struct PaletteOutput {
    default_scheme: PaletteScheme,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(ctx),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let config_dir = Config::config_dir()
            .map_err(|e| CliError::io(format!("Failed to locate config directory: {}", e)))?;

        if self.json {
            output_json(&ctx.config, config_dir)?;
        } else {
            output_human_readable(&ctx.config, config_dir);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.dataset.is_none()
            && self.history_size.is_none()
            && self.history_enabled.is_none()
            && self.default_scheme.is_none()
        {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --dataset, --history-size, --history-enabled, or --default-scheme",
            ));
        }

        // Load current configuration
        let mut config = Config::load().unwrap_or_else(|_| Config::default());

        if let Some(path) = &self.dataset {
            let set = NamedColorSet::load(path)
                .map_err(|e| CliError::validation(format!("Invalid color dataset: {e:#}")))?;
            if set.is_empty() {
                return Err(CliError::validation(format!(
                    "Color dataset is empty: {}",
                    path.display()
                )));
            }
            config.paths.dataset = Some(path.clone());
        }

        if let Some(size) = self.history_size {
            if size == 0 || size > MAX_HISTORY_SIZE {
                return Err(CliError::validation(format!(
                    "History size must be between 1 and {}",
                    MAX_HISTORY_SIZE
                )));
            }
            config.history.max_size = size;
        }

        if let Some(enabled) = self.history_enabled {
            config.history.enabled = enabled;
        }

        if let Some(scheme) = &self.default_scheme {
            config.palette.default_scheme = scheme
                .parse()
                .map_err(|e: anyhow::Error| CliError::validation(e.to_string()))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {:#}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, config_dir: PathBuf) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            dataset: config
                .paths
                .dataset
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            config_dir: config_dir.to_string_lossy().to_string(),
        },
        history: HistoryOutput {
            enabled: config.history.enabled,
            max_size: config.history.max_size,
        },
        palette: PaletteOutput {
            default_scheme: config.palette.default_scheme,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, config_dir: PathBuf) {
    println!("{} Configuration", APP_NAME);
    println!("======================");
    println!();

    println!("Paths:");
    println!("  Config Directory: {}", config_dir.display());
    if let Some(dataset) = &config.paths.dataset {
        println!("  Color Dataset: {}", dataset.display());
    } else {
        println!("  Color Dataset: (built-in CSS colors)");
    }
    println!();

    println!("History:");
    println!("  Enabled: {}", config.history.enabled);
    println!("  Max Size: {}", config.history.max_size);
    println!();

    println!("Palette:");
    println!("  Default Scheme: {}", config.palette.default_scheme);
    println!();
}
