//! Color history CLI commands.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::history::HistoryEntry;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Recent color history commands
#[derive(Args, Debug)]
pub struct HistoryArgs {
    #[command(subcommand)]
    command: HistoryCommand,
}

#[derive(Subcommand, Debug)]
enum HistoryCommand {
    /// List recently analyzed colors, newest first
    List(HistoryListArgs),
    /// Remove every color from the history
    Clear,
    /// Export the history as a JSON palette
    Export(HistoryExportArgs),
}

/// List recently analyzed colors
#[derive(Args, Debug)]
pub struct HistoryListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Export the history as a JSON palette
#[derive(Args, Debug)]
pub struct HistoryExportArgs {
    /// Output file (prints to stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct HistoryListOutput<'a> {
    count: usize,
    max_size: usize,
    colors: &'a [HistoryEntry],
}

impl HistoryArgs {
    /// Execute history subcommand
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        match &self.command {
            HistoryCommand::List(args) => args.execute(ctx),
            HistoryCommand::Clear => execute_clear(ctx),
            HistoryCommand::Export(args) => args.execute(ctx),
        }
    }
}

impl HistoryListArgs {
    /// Execute list command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let (history, _) = ctx.load_history()?;

        if self.json {
            return print_json(&HistoryListOutput {
                count: history.len(),
                max_size: history.max_size(),
                colors: history.entries(),
            });
        }

        if history.is_empty() {
            println!("No colors picked yet");
            return Ok(());
        }

        for (index, entry) in history.entries().iter().enumerate() {
            let picked = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();
            println!(
                "{:>2}. {}  rgb({}, {}, {})  {}",
                index + 1,
                entry.hex,
                entry.r,
                entry.g,
                entry.b,
                picked
            );
        }

        Ok(())
    }
}

fn execute_clear(ctx: &CliContext) -> CliResult<()> {
    let (mut history, path) = ctx.load_history()?;

    if history.is_empty() {
        println!("History is already empty");
        return Ok(());
    }

    history.clear();
    history
        .save(&path)
        .map_err(|e| CliError::io(format!("Failed to save color history: {e:#}")))?;

    println!("Color history cleared");
    Ok(())
}

impl HistoryExportArgs {
    /// Execute export command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let (history, _) = ctx.load_history()?;
        let engine = ctx.engine();

        let palette = history
            .export_palette(&engine)
            .map_err(|e| CliError::validation(e.to_string()))?;

        match &self.output {
            Some(path) => {
                let json = serde_json::to_string_pretty(&palette)
                    .map_err(|e| CliError::io(format!("Failed to serialize palette: {e}")))?;
                std::fs::write(path, json).map_err(|e| {
                    CliError::io(format!("Failed to write palette {}: {e}", path.display()))
                })?;
                println!(
                    "Saved {} colors to {}",
                    palette.colors.len(),
                    path.display()
                );
            }
            None => print_json(&palette)?,
        }

        Ok(())
    }
}
