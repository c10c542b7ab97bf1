//! Shared CLI plumbing: errors, exit codes and engine construction.

use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::dataset::NamedColorSet;
use crate::engine::ColorEngine;
use crate::history::ColorHistory;
use crate::models::RgbColor;
use tracing::{debug, warn};

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Bad user input (color, scheme, option values)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error category for CLI failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// Bad user input
    Validation,
    /// File system or serialization failure
    Io,
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Category, determines the exit code
    pub kind: CliErrorKind,
    /// Message shown to the user
    pub message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self.kind {
            CliErrorKind::Validation => ExitCode::ValidationError,
            CliErrorKind::Io => ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// State shared by every command of one invocation.
#[derive(Debug, Clone)]
pub struct CliContext {
    /// Loaded configuration
    pub config: Config,
    /// `--dataset` override, wins over `paths.dataset`
    pub dataset_override: Option<PathBuf>,
}

impl CliContext {
    /// Creates a context.
    #[must_use]
    pub fn new(config: Config, dataset_override: Option<PathBuf>) -> Self {
        Self {
            config,
            dataset_override,
        }
    }

    /// Builds the engine from the configured dataset, falling back to the
    /// built-in colors.
    #[must_use]
    pub fn engine(&self) -> ColorEngine {
        let path = self
            .dataset_override
            .as_deref()
            .or(self.config.paths.dataset.as_deref());
        ColorEngine::new(NamedColorSet::load_or_builtin(path))
    }

    /// Loads the persisted history with the configured bound.
    pub fn load_history(&self) -> CliResult<(ColorHistory, PathBuf)> {
        let path = ColorHistory::file_path()
            .map_err(|e| CliError::io(format!("Failed to locate history file: {e}")))?;
        let history = ColorHistory::load(&path, self.config.history.max_size)
            .map_err(|e| CliError::io(format!("Failed to load color history: {e:#}")))?;
        Ok((history, path))
    }

    /// Records `color` in the persisted history when history is enabled and
    /// `skip` is false. Failures are logged, not fatal.
    pub fn record_color(&self, color: RgbColor, skip: bool) {
        if skip || !self.config.history.enabled {
            return;
        }

        let path = match ColorHistory::file_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Could not locate history file: {e:#}");
                return;
            }
        };

        match ColorHistory::record(&path, self.config.history.max_size, color) {
            Ok(_) => debug!("Recorded {} in history", color),
            Err(e) => warn!("Could not record color in history: {e:#}"),
        }
    }
}

/// Parses a color argument, mapping failures to a validation error.
pub fn parse_color(input: &str) -> CliResult<RgbColor> {
    RgbColor::parse(input).map_err(|e| CliError::validation(format!("Invalid color: {e:#}")))
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{}", json);
    Ok(())
}
