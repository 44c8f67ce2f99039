//! Render settings and the validated value boundaries around them.
//!
//! All user-facing values (resolution preset, ramp name, brightness, target
//! frame rate) are validated here, at the settings boundary. The tick loop
//! never sees an invalid value.

use crate::render::GlyphRamp;

/// Lowest accepted brightness multiplier.
pub const MIN_BRIGHTNESS: f32 = 0.1;

/// Highest accepted brightness multiplier.
pub const MAX_BRIGHTNESS: f32 = 3.0;

/// Brightness hotkey step.
pub const BRIGHTNESS_STEP: f32 = 0.1;

/// Lowest accepted target frame rate.
pub const MIN_TARGET_FPS: u32 = 1;

/// Highest accepted target frame rate.
pub const MAX_TARGET_FPS: u32 = 60;

/// Target frame rate hotkey step.
pub const FPS_STEP: u32 = 5;

/// Errors produced at the settings boundary.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid resolution '{0}'. Use WIDTHxHEIGHT from: 40x24, 60x36, 80x48, 100x56, 120x60")]
    InvalidResolution(String),
    #[error("unknown ramp '{0}'. Available ramps: classic, simple, detailed")]
    UnknownRamp(String),
    #[error("brightness must be between 0.1 and 3.0, got {0}")]
    BrightnessOutOfRange(f32),
    #[error("target frame rate must be between 1 and 60 fps, got {0}")]
    FpsOutOfRange(u32),
}

/// Validate a brightness multiplier.
pub fn validate_brightness(value: f32) -> Result<f32, SettingsError> {
    if (MIN_BRIGHTNESS..=MAX_BRIGHTNESS).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::BrightnessOutOfRange(value))
    }
}

/// Validate a target frame rate.
pub fn validate_target_fps(value: u32) -> Result<u32, SettingsError> {
    if (MIN_TARGET_FPS..=MAX_TARGET_FPS).contains(&value) {
        Ok(value)
    } else {
        Err(SettingsError::FpsOutOfRange(value))
    }
}

/// Output grid resolution preset.
///
/// The catalog is small on purpose: each step roughly doubles the glyph
/// count, and 120x60 is already at the edge of what a terminal shows well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizePreset {
    /// 40x24 glyphs
    #[default]
    Small,
    /// 60x36 glyphs
    Medium,
    /// 80x48 glyphs
    Large,
    /// 100x56 glyphs
    XLarge,
    /// 120x60 glyphs
    Huge,
}

impl SizePreset {
    /// Get the output grid dimensions as (width, height) in glyphs.
    pub fn dimensions(&self) -> (u16, u16) {
        match self {
            SizePreset::Small => (40, 24),
            SizePreset::Medium => (60, 36),
            SizePreset::Large => (80, 48),
            SizePreset::XLarge => (100, 56),
            SizePreset::Huge => (120, 60),
        }
    }

    /// Cycle to the next preset.
    ///
    /// Order: Small -> Medium -> Large -> XLarge -> Huge -> Small
    pub fn next(&self) -> Self {
        match self {
            SizePreset::Small => SizePreset::Medium,
            SizePreset::Medium => SizePreset::Large,
            SizePreset::Large => SizePreset::XLarge,
            SizePreset::XLarge => SizePreset::Huge,
            SizePreset::Huge => SizePreset::Small,
        }
    }

    /// Get a human-readable name for the preset.
    pub fn name(&self) -> &'static str {
        match self {
            SizePreset::Small => "small",
            SizePreset::Medium => "medium",
            SizePreset::Large => "large",
            SizePreset::XLarge => "xlarge",
            SizePreset::Huge => "huge",
        }
    }

    /// Parse a `WIDTHxHEIGHT` string against the preset catalog.
    ///
    /// Malformed strings and sizes outside the catalog are both rejected;
    /// arbitrary grid dimensions are not supported.
    pub fn parse(s: &str) -> Result<Self, SettingsError> {
        let (w, h) = s
            .split_once('x')
            .ok_or_else(|| SettingsError::InvalidResolution(s.to_string()))?;
        let width: u16 = w
            .parse()
            .map_err(|_| SettingsError::InvalidResolution(s.to_string()))?;
        let height: u16 = h
            .parse()
            .map_err(|_| SettingsError::InvalidResolution(s.to_string()))?;

        [
            SizePreset::Small,
            SizePreset::Medium,
            SizePreset::Large,
            SizePreset::XLarge,
            SizePreset::Huge,
        ]
        .into_iter()
        .find(|p| p.dimensions() == (width, height))
        .ok_or_else(|| SettingsError::InvalidResolution(s.to_string()))
    }
}

impl std::fmt::Display for SizePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.dimensions();
        write!(f, "{}x{}", w, h)
    }
}

/// Live render settings.
///
/// Mutated only by user interaction (CLI, config file, hotkeys); the pacing
/// tick reads them once per tick, so a mid-run change takes effect on the
/// next tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Output grid resolution
    pub size: SizePreset,
    /// Selected glyph ramp
    pub ramp: GlyphRamp,
    /// Brightness multiplier (0.1-3.0)
    pub brightness: f32,
    /// Target frame rate (1-60 fps)
    pub target_fps: u32,
    /// Mirror horizontally (facing-the-user effect)
    pub mirror: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size: SizePreset::default(),
            ramp: GlyphRamp::default(),
            brightness: 1.0,
            target_fps: 15,
            mirror: true, // facing the user by default
        }
    }
}

impl RenderSettings {
    /// Output grid dimensions as (width, height) in glyphs.
    pub fn grid_dimensions(&self) -> (u16, u16) {
        self.size.dimensions()
    }

    /// Cycle to the next resolution preset.
    pub fn cycle_size(&mut self) {
        self.size = self.size.next();
    }

    /// Cycle to the next glyph ramp.
    pub fn cycle_ramp(&mut self) {
        self.ramp = self.ramp.next();
    }

    /// Toggle the mirror effect.
    pub fn toggle_mirror(&mut self) {
        self.mirror = !self.mirror;
    }

    /// Increase brightness by one step, clamped to the valid range.
    pub fn brightness_up(&mut self) {
        self.brightness = round_step(self.brightness + BRIGHTNESS_STEP).min(MAX_BRIGHTNESS);
    }

    /// Decrease brightness by one step, clamped to the valid range.
    pub fn brightness_down(&mut self) {
        self.brightness = round_step(self.brightness - BRIGHTNESS_STEP).max(MIN_BRIGHTNESS);
    }

    /// Increase the target frame rate by one step, clamped.
    pub fn fps_up(&mut self) {
        self.target_fps = (self.target_fps + FPS_STEP).min(MAX_TARGET_FPS);
    }

    /// Decrease the target frame rate by one step, clamped.
    pub fn fps_down(&mut self) {
        self.target_fps = self.target_fps.saturating_sub(FPS_STEP).max(MIN_TARGET_FPS);
    }
}

/// Round to one decimal so repeated 0.1 steps don't accumulate float error.
fn round_step(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
