//! Screen configuration.
//!
//! YAML settings for the framebuffer dimensions and the initial drawing color.
//! Every field is optional and falls back to a 512x256 screen drawing in white.

use crate::color::Color565;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial drawing color as 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    /// Red channel.
    #[serde(default = "default_channel")]
    pub r: u8,
    /// Green channel.
    #[serde(default = "default_channel")]
    pub g: u8,
    /// Blue channel.
    #[serde(default = "default_channel")]
    pub b: u8,
}

fn default_channel() -> u8 {
    0xFF
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            r: default_channel(),
            g: default_channel(),
            b: default_channel(),
        }
    }
}

impl ColorConfig {
    /// Packed form of this color.
    #[must_use]
    pub const fn packed(&self) -> Color565 {
        Color565::pack(self.r, self.g, self.b)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Initial drawing color.
    #[serde(default)]
    pub color: ColorConfig,
}

fn default_version() -> u32 {
    1
}
fn default_width() -> u32 {
    512
}
fn default_height() -> u32 {
    256
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            width: default_width(),
            height: default_height(),
            color: ColorConfig::default(),
        }
    }
}

impl ScreenConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or a
    /// [`Error::ConfigInvalid`] if the values are unusable.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks that the dimensions describe a non-empty screen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the zero dimension.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(Error::ConfigInvalid {
                    key: key.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }
}
