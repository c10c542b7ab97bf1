//! Named color reference records and match results.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RgbColor;

/// Name reported when the reference dataset is empty.
pub const UNKNOWN_COLOR_NAME: &str = "Unknown";

/// A single entry of the named-color reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    /// Display name (e.g., "CornflowerBlue").
    pub name: String,
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl NamedColor {
    /// Creates a new named color entry.
    #[must_use]
    pub fn new(name: impl Into<String>, r: u8, g: u8, b: u8) -> Self {
        Self {
            name: name.into(),
            r,
            g,
            b,
        }
    }

    /// Convert this entry to an RgbColor.
    #[must_use]
    pub const fn to_rgb(&self) -> RgbColor {
        RgbColor::new(self.r, self.g, self.b)
    }
}

/// Result of matching a color against the named-color dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedColorMatch {
    /// Name of the closest dataset entry, or "Unknown".
    pub name: String,
    /// How close the match is, in whole percent (0-100).
    pub confidence: u8,
    /// Euclidean RGB distance to the match. `None` when nothing was matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

impl NamedColorMatch {
    /// The result returned when there is nothing to match against.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            name: UNKNOWN_COLOR_NAME.to_string(),
            confidence: 0,
            distance: None,
        }
    }

    /// Qualitative bucket for the confidence percentage.
    #[must_use]
    pub const fn level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_confidence(self.confidence)
    }
}

/// Qualitative grouping of match confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// 80% and above
    High,
    /// 60-79%
    Medium,
    /// Below 60%
    Low,
}

impl ConfidenceLevel {
    /// Buckets a confidence percentage.
    #[must_use]
    pub const fn from_confidence(confidence: u8) -> Self {
        if confidence >= 80 {
            Self::High
        } else if confidence >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Lowercase label used in CLI output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
