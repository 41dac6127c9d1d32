//! Light condition classification
//!
//! Maps a lux value onto an ordered set of bands. The mapping is a pure
//! function with fixed boundaries; it carries no state and cannot fail.
//! Boundaries are half-open on the lower side, so a reading equal to a
//! boundary lands in the brighter band.

use crate::constants::sensors::{LUX_BRIGHT_MAX, LUX_DARK_MAX, LUX_DIM_MAX, LUX_NORMAL_MAX};

/// Ordered ambient light bands, darkest first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightCondition {
    /// Below 10 lux: night, lights off
    #[default]
    Dark,
    /// 10 to 50 lux: hallway or mood lighting
    Dim,
    /// 50 to 300 lux: typical indoor lighting
    Normal,
    /// 300 to 1000 lux: well-lit workspace
    Bright,
    /// 1000 lux and up: direct sun or studio lighting
    VeryBright,
}

impl LightCondition {
    /// Classify a lux value into its band
    pub fn classify(lux: f32) -> Self {
        if lux < LUX_DARK_MAX {
            Self::Dark
        } else if lux < LUX_DIM_MAX {
            Self::Dim
        } else if lux < LUX_NORMAL_MAX {
            Self::Normal
        } else if lux < LUX_BRIGHT_MAX {
            Self::Bright
        } else {
            Self::VeryBright
        }
    }

    /// Human-readable band label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Dim => "Dim",
            Self::Normal => "Normal",
            Self::Bright => "Bright",
            Self::VeryBright => "Very Bright",
        }
    }
}

impl core::fmt::Display for LightCondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
