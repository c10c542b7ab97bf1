//! Perceived color temperature bands.

use serde::{Serialize, Serializer};
use std::fmt;

/// Temperature band of a hue, in six 60° slices of the color wheel.
///
/// Each band includes its upper edge: hue 60 is still `WarmRedYellow`,
/// hue 61 is `NeutralYellowGreen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTemperature {
    /// 0-60°
    WarmRedYellow,
    /// 61-120°
    NeutralYellowGreen,
    /// 121-180°
    CoolGreenCyan,
    /// 181-240°
    CoolCyanBlue,
    /// 241-300°
    CoolBlueMagenta,
    /// 301-360°
    WarmMagentaRed,
}

impl ColorTemperature {
    /// Classifies a hue in degrees.
    ///
    /// Hues past 360 fall into the last band, matching the inclusive upper
    /// edge of each slice.
    #[must_use]
    pub const fn from_hue(hue: u16) -> Self {
        match hue {
            0..=60 => Self::WarmRedYellow,
            61..=120 => Self::NeutralYellowGreen,
            121..=180 => Self::CoolGreenCyan,
            181..=240 => Self::CoolCyanBlue,
            241..=300 => Self::CoolBlueMagenta,
            _ => Self::WarmMagentaRed,
        }
    }

    /// Human readable label, e.g. "Warm (Red-Yellow)".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::WarmRedYellow => "Warm (Red-Yellow)",
            Self::NeutralYellowGreen => "Neutral (Yellow-Green)",
            Self::CoolGreenCyan => "Cool (Green-Cyan)",
            Self::CoolCyanBlue => "Cool (Cyan-Blue)",
            Self::CoolBlueMagenta => "Cool (Blue-Magenta)",
            Self::WarmMagentaRed => "Warm (Magenta-Red)",
        }
    }
}

impl fmt::Display for ColorTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ColorTemperature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
