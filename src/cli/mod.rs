//! CLI command handlers for PixelHue.
//!
//! This module provides headless, scriptable access to the color analysis
//! engine. Colors are given as text or sampled from an image, then analyzed,
//! named or expanded into palettes. Analyzed colors land in a history.

pub mod common;
pub mod config;
pub mod history;
pub mod info;
pub mod name;
pub mod palette;
pub mod pick;

// Re-export types used by main.rs and tests
pub use common::{CliContext, CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use history::HistoryArgs;
pub use info::InfoArgs;
pub use name::NameArgs;
pub use palette::PaletteArgs;
pub use pick::PickArgs;
