//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the pixelhue binary
pub fn pixelhue_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pixelhue")
}

/// An isolated configuration directory.
///
/// Every command built from it sees its own `config.toml` and
/// `history.json`, so tests can run in parallel.
pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The isolated config directory.
    pub fn config_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the history file inside the config directory.
    pub fn history_path(&self) -> PathBuf {
        self.dir.path().join("history.json")
    }

    /// Builds a command that uses this environment.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(pixelhue_bin());
        cmd.env("PIXELHUE_CONFIG_DIR", self.dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Runs a command and returns its output.
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Runs a command, asserts it succeeded and parses stdout as JSON.
    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let output = self.run(args);
        assert_eq!(
            output.status.code(),
            Some(0),
            "Command {:?} failed. stderr: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout).expect("Should parse JSON output")
    }

    /// Writes a dataset file into the environment and returns its path.
    pub fn write_dataset(&self, file_name: &str, json: &str) -> PathBuf {
        let path = self.dir.path().join(file_name);
        fs::write(&path, json).expect("Failed to write dataset");
        path
    }

    /// Writes a 4x2 PNG into the environment and returns its path.
    ///
    /// Top row: red, green, blue, white. Bottom row: tomato at half alpha,
    /// then black.
    pub fn write_png(&self, file_name: &str) -> PathBuf {
        let image = image::RgbaImage::from_fn(4, 2, |x, y| match (x, y) {
            (0, 0) => image::Rgba([255, 0, 0, 255]),
            (1, 0) => image::Rgba([0, 255, 0, 255]),
            (2, 0) => image::Rgba([0, 0, 255, 255]),
            (3, 0) => image::Rgba([255, 255, 255, 255]),
            (0, 1) => image::Rgba([255, 99, 71, 128]),
            _ => image::Rgba([0, 0, 0, 255]),
        });
        let path = self.dir.path().join(file_name);
        image.save(&path).expect("Failed to write PNG");
        path
    }
}

/// A small dataset with a duplicated value to exercise tie-breaking.
pub const PRIMARY_DATASET: &str = r#"[
  {"name": "Red", "r": 255, "g": 0, "b": 0},
  {"name": "Scarlet", "r": 255, "g": 0, "b": 0},
  {"name": "Green", "r": 0, "g": 255, "b": 0},
  {"name": "Blue", "r": 0, "g": 0, "b": 255}
]"#;
