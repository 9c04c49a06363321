//! Accessory selection and styling.

use serde::{Deserialize, Serialize};

/// Which accessory to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryKind {
    /// Band + gem on each tracked index fingertip
    Ring,
    /// Bead arc hung from the neck center
    Necklace,
    /// Crown across the forehead
    Tiara,
}

impl AccessoryKind {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "necklace" => Self::Necklace,
            "tiara" => Self::Tiara,
            "ring" => Self::Ring,
            _ => Self::Ring,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ring => "ring",
            Self::Necklace => "necklace",
            Self::Tiara => "tiara",
        }
    }

    pub const ALL: [AccessoryKind; 3] = [Self::Ring, Self::Necklace, Self::Tiara];
}

impl Default for AccessoryKind {
    fn default() -> Self {
        Self::Ring
    }
}

/// Tuning applied uniformly to the draw routines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessoryStyle {
    /// Multiplier on the accessory's base dimensions
    pub size_scale: f32,
    /// Overall opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for AccessoryStyle {
    fn default() -> Self {
        Self {
            size_scale: 1.0,
            opacity: 1.0,
        }
    }
}
