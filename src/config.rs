//! Configuration file handling for asciicam.
//!
//! Loads configuration from `~/.config/asciicam/config.toml` or a custom
//! path. Values go through the same validation as CLI flags, so a config
//! file cannot smuggle an invalid setting past the settings boundary.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::render::GlyphRamp;
use crate::settings::{
    validate_brightness, validate_target_fps, RenderSettings, SettingsError, SizePreset,
};

/// Configuration file structure for asciicam.
/// Loaded from ~/.config/asciicam/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize)]
pub struct CameraConfig {
    /// Camera device index
    #[serde(default)]
    pub device: u32,
    /// Mirror horizontally (facing-the-user effect)
    #[serde(default = "default_true")]
    pub mirror: bool,
    /// Start capturing on launch instead of waiting for the hotkey
    #[serde(default)]
    pub autostart: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: 0,
            mirror: true, // matches RenderSettings::default
            autostart: false,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RenderConfig {
    /// Output grid resolution, e.g. "40x24"
    #[serde(default)]
    pub resolution: Option<String>,
    /// Glyph ramp name: classic, simple, detailed
    #[serde(default)]
    pub ramp: Option<String>,
    /// Brightness multiplier (0.1-3.0)
    #[serde(default)]
    pub brightness: Option<f32>,
    /// Target frame rate (1-60)
    #[serde(default)]
    pub fps: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UiConfig {
    /// Show the status line
    #[serde(default = "default_true")]
    pub status_bar: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { status_bar: true }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Apply the file's render values onto a settings struct.
    ///
    /// Every value passes through the settings boundary; the first invalid
    /// one aborts with its `SettingsError`.
    pub fn apply(&self, settings: &mut RenderSettings) -> Result<(), SettingsError> {
        if let Some(resolution) = &self.render.resolution {
            settings.size = SizePreset::parse(resolution)?;
        }
        if let Some(ramp) = &self.render.ramp {
            settings.ramp = GlyphRamp::from_name(ramp)
                .ok_or_else(|| SettingsError::UnknownRamp(ramp.clone()))?;
        }
        if let Some(brightness) = self.render.brightness {
            settings.brightness = validate_brightness(brightness)?;
        }
        if let Some(fps) = self.render.fps {
            settings.target_fps = validate_target_fps(fps)?;
        }
        settings.mirror = self.camera.mirror;
        Ok(())
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    directories::ProjectDirs::from("com", "asciicam", "asciicam")
        .map(|d| d.config_dir().to_path_buf().join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/asciicam/config.toml")
        })
}
