//! Glyph ramp definitions for ASCII rendering.
//!
//! A ramp is an ordered character sequence used as a grayscale-to-glyph
//! lookup table. The FIRST character is the densest/darkest glyph and the
//! last the sparsest; the mapper selects from the far end for dark pixels,
//! so an all-black frame renders as spaces.

/// Classic ASCII density ramp (10 levels).
/// Densest glyph (@) first, space last.
pub const CLASSIC_RAMP: &[char] = &['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Block character ramp (5 levels).
/// Uses Unicode block characters for a chunkier, high-contrast look.
pub const SIMPLE_RAMP: &[char] = &['█', '▓', '▒', '░', ' '];

/// Detailed ramp (70 levels) for smooth gradients at larger grid sizes.
#[rustfmt::skip]
pub const DETAILED_RAMP: &[char] = &[
    '$', '@', 'B', '%', '8', '&', 'W', 'M', '#', '*',
    'o', 'a', 'h', 'k', 'b', 'd', 'p', 'q', 'w', 'm',
    'Z', 'O', '0', 'Q', 'L', 'C', 'J', 'U', 'Y', 'X',
    'z', 'c', 'v', 'u', 'n', 'x', 'r', 'j', 'f', 't',
    '/', '\\', '|', '(', ')', '1', '{', '}', '[', ']',
    '?', '-', '_', '+', '~', '<', '>', 'i', '!', 'l',
    'I', ';', ':', ',', '"', '^', '`', '\'', '.', ' ',
];

/// Glyph ramp selection for ASCII rendering.
///
/// Allows cycling through the ramp catalog with hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphRamp {
    /// Classic 10-level density ramp
    #[default]
    Classic,
    /// Block characters (5 levels)
    Simple,
    /// 70-level ramp for smooth gradients
    Detailed,
}

impl GlyphRamp {
    /// Get the glyph slice for this ramp, densest character first.
    pub fn chars(&self) -> &'static [char] {
        match self {
            GlyphRamp::Classic => CLASSIC_RAMP,
            GlyphRamp::Simple => SIMPLE_RAMP,
            GlyphRamp::Detailed => DETAILED_RAMP,
        }
    }

    /// Cycle to the next ramp.
    ///
    /// Order: Classic -> Simple -> Detailed -> Classic
    pub fn next(&self) -> Self {
        match self {
            GlyphRamp::Classic => GlyphRamp::Simple,
            GlyphRamp::Simple => GlyphRamp::Detailed,
            GlyphRamp::Detailed => GlyphRamp::Classic,
        }
    }

    /// Get a human-readable name for the ramp.
    pub fn name(&self) -> &'static str {
        match self {
            GlyphRamp::Classic => "classic",
            GlyphRamp::Simple => "simple",
            GlyphRamp::Detailed => "detailed",
        }
    }

    /// Look up a ramp by catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "classic" => Some(GlyphRamp::Classic),
            "simple" => Some(GlyphRamp::Simple),
            "detailed" => Some(GlyphRamp::Detailed),
            _ => None,
        }
    }
}
