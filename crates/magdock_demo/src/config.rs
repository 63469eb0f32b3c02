//! Demo configuration, loaded once at startup from a TOML file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use magdock_ui::DockConfig;

/// Errors that can occur while loading the demo configuration.
#[derive(Error, Debug)]
pub enum DemoConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying io error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying parse error.
        source: toml::de::Error,
    },
}

/// Top-level demo configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Frames to simulate.
    pub frames: u32,
    /// Items per bar.
    pub items: usize,
    /// Whether the metrics panel renders.
    pub show_metrics: bool,
    /// Dock tuning shared by all four bars (anchors are overridden per bar).
    pub dock: DockConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            frames: 240,
            items: 8,
            show_metrics: true,
            dock: DockConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file is not an error: the defaults apply. A file that exists
    /// but cannot be read or parsed is.
    pub fn load(path: &Path) -> Result<Self, DemoConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| DemoConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| DemoConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}
