//! Luminance to glyph mapping.

use crate::camera::RasterFrame;

/// Convert a raster frame to a glyph grid.
///
/// For every pixel the perceptual luminance is computed as
/// `L = 0.299*R + 0.587*G + 0.114*B` (rounded), scaled by the brightness
/// factor and clamped to [0, 255]. The adjusted value selects a ramp index
/// `i = floor((L'/255) * (len-1))` and the emitted glyph is
/// `ramp[len-1-i]`: the ramp's first character is the densest glyph, so
/// dark pixels land at the sparse end and bright pixels at the dense end.
/// Luminance 0 always yields `ramp[len-1]` and luminance 255 at brightness
/// 1.0 always yields `ramp[0]`.
///
/// Rows are emitted top-to-bottom, each terminated by a line break.
///
/// Pure and deterministic: identical inputs produce byte-identical output.
/// An empty ramp is a caller contract violation.
///
/// # Arguments
/// * `frame` - Downsampled RGB frame at the output grid resolution
/// * `ramp` - Glyph ramp, densest character first
/// * `brightness` - Brightness multiplier (> 0, typically 0.1-3.0)
///
/// # Returns
/// The glyph grid as a string, one line per pixel row.
pub fn to_glyph_grid(frame: &RasterFrame, ramp: &[char], brightness: f32) -> String {
    debug_assert!(!ramp.is_empty(), "glyph ramp must not be empty");

    let width = frame.width();
    let height = frame.height();
    let levels = ramp.len();

    // +1 per row for the line break; block glyphs are multi-byte so this is
    // a lower bound, which is fine for String::with_capacity.
    let mut grid = String::with_capacity((width as usize + 1) * height as usize);

    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = frame.pixel(x, y);
            grid.push(glyph_for(r, g, b, ramp, levels, brightness));
        }
        grid.push('\n');
    }

    grid
}

/// Map one RGB pixel to its glyph.
#[inline]
fn glyph_for(r: u8, g: u8, b: u8, ramp: &[char], levels: usize, brightness: f32) -> char {
    let gray = (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32).round();
    let adjusted = (gray * brightness).clamp(0.0, 255.0);
    let index = ((adjusted / 255.0) * (levels - 1) as f32).floor() as usize;
    ramp[levels - 1 - index]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ramp::CLASSIC_RAMP;

    fn single_pixel(r: u8, g: u8, b: u8) -> RasterFrame {
        let mut frame = RasterFrame::new(1, 1);
        frame.set_pixel(0, 0, (r, g, b));
        frame
    }

    #[test]
    fn test_black_pixel_selects_last_ramp_glyph() {
        let grid = to_glyph_grid(&single_pixel(0, 0, 0), CLASSIC_RAMP, 1.0);
        assert_eq!(grid, " \n");
    }

    #[test]
    fn test_white_pixel_selects_first_ramp_glyph() {
        let grid = to_glyph_grid(&single_pixel(255, 255, 255), CLASSIC_RAMP, 1.0);
        assert_eq!(grid, "@\n");
    }

    #[test]
    fn test_luminance_weights() {
        // Pure green carries the most weight: round(0.587*255) = 150,
        // i = floor(150/255 * 9) = 5, selected glyph ramp[9-5] = '+'.
        let grid = to_glyph_grid(&single_pixel(0, 255, 0), CLASSIC_RAMP, 1.0);
        assert_eq!(grid, "+\n");
    }

    #[test]
    fn test_rows_end_with_line_break() {
        let frame = RasterFrame::new(3, 2);
        let grid = to_glyph_grid(&frame, CLASSIC_RAMP, 1.0);
        assert_eq!(grid, "   \n   \n");
    }
}
