//! Glyph rendering module: ramps, luminance mapping, and layout fitting.
//!
//! The pipeline for one frame:
//!
//! 1. **Sampling** - the camera module downsamples the capture frame to a
//!    small [`RasterFrame`](crate::camera::RasterFrame)
//! 2. **Mapping** - [`to_glyph_grid`] converts pixels to ramp glyphs
//! 3. **Fitting** - [`fit_font_size`] sizes the grid to the viewport

mod fit;
mod mapper;
pub mod ramp;

pub use fit::{fit_font_size, FALLBACK_FONT_SIZE, GLYPH_ASPECT, MAX_FONT_SIZE, MIN_FONT_SIZE};
pub use mapper::to_glyph_grid;
pub use ramp::{GlyphRamp, CLASSIC_RAMP, DETAILED_RAMP, SIMPLE_RAMP};
