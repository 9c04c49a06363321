//! Configuration parsing and management for bijou

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BijouError, ConfigError};
use crate::overlay::{AccessoryKind, AccessoryStyle};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub surface: SurfaceConfig,
    pub accessory: AccessoryConfig,
    pub replay: ReplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            accessory: AccessoryConfig::default(),
            replay: ReplayConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BijouError> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::ReadFile(format!("{}: {}", path.as_ref().display(), e))
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(s: &str) -> Result<Self, BijouError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load configuration from default paths
    pub fn load() -> Result<Self, BijouError> {
        let paths = [
            PathBuf::from("bijou.toml"),
            PathBuf::from("config/bijou.toml"),
            dirs_path().join("bijou.toml"),
        ];

        for path in &paths {
            if path.exists() {
                tracing::info!("Loading config from: {}", path.display());
                return Self::from_file(path);
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), BijouError> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::InvalidValue {
                field: "surface".to_string(),
                message: "Surface dimensions must be greater than 0".to_string(),
            }
            .into());
        }

        if !(0.0..=1.0).contains(&self.accessory.opacity) {
            return Err(ConfigError::InvalidValue {
                field: "accessory.opacity".to_string(),
                message: "Opacity must be between 0.0 and 1.0".to_string(),
            }
            .into());
        }

        if self.accessory.size_scale <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "accessory.size_scale".to_string(),
                message: "Size scale must be greater than 0".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

/// Target drawing-surface dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Accessory selection and styling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessoryConfig {
    /// Accessory to draw: "ring", "necklace", or "tiara"
    pub kind: AccessoryKind,
    /// Multiplier on the accessory's base dimensions
    pub size_scale: f32,
    /// Overall opacity (0.0 - 1.0)
    pub opacity: f32,
}

impl Default for AccessoryConfig {
    fn default() -> Self {
        Self {
            kind: AccessoryKind::Ring,
            size_scale: 1.0,
            opacity: 1.0,
        }
    }
}

impl AccessoryConfig {
    /// Styling subset consumed by the draw routines
    pub fn style(&self) -> AccessoryStyle {
        AccessoryStyle {
            size_scale: self.size_scale,
            opacity: self.opacity,
        }
    }
}

/// Capture replay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Delay between frames in milliseconds (0 = no pacing)
    pub frame_interval_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 0,
        }
    }
}

/// Get the platform-specific configuration directory
fn dirs_path() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        if let Some(config_dir) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(config_dir).join("bijou");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config/bijou");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Application Support/bijou");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("bijou");
        }
    }

    PathBuf::from(".")
}
