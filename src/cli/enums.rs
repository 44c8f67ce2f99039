//! CLI enum types for resolution and ramp options.

use clap::ValueEnum;

use crate::render::GlyphRamp;
use crate::settings::SizePreset;

/// Output grid resolution preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ResolutionArg {
    /// 40x24 glyphs
    #[default]
    Small,
    /// 60x36 glyphs
    Medium,
    /// 80x48 glyphs
    Large,
    /// 100x56 glyphs
    Xlarge,
    /// 120x60 glyphs
    Huge,
}

impl From<ResolutionArg> for SizePreset {
    fn from(r: ResolutionArg) -> Self {
        match r {
            ResolutionArg::Small => SizePreset::Small,
            ResolutionArg::Medium => SizePreset::Medium,
            ResolutionArg::Large => SizePreset::Large,
            ResolutionArg::Xlarge => SizePreset::XLarge,
            ResolutionArg::Huge => SizePreset::Huge,
        }
    }
}

/// Glyph ramp selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RampArg {
    /// Classic 10-level density ramp
    #[default]
    Classic,
    /// Block characters (5 levels)
    Simple,
    /// 70-level ramp for smooth gradients
    Detailed,
}

impl From<RampArg> for GlyphRamp {
    fn from(r: RampArg) -> Self {
        match r {
            RampArg::Classic => GlyphRamp::Classic,
            RampArg::Simple => GlyphRamp::Simple,
            RampArg::Detailed => GlyphRamp::Detailed,
        }
    }
}
