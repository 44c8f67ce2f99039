//! Font size fitting for the glyph grid.

/// Assumed average glyph aspect ratio (width/height) for a monospaced font.
pub const GLYPH_ASPECT: f32 = 0.65;

/// Smallest fitted font size in device-independent pixels.
pub const MIN_FONT_SIZE: u16 = 6;

/// Largest fitted font size in device-independent pixels.
pub const MAX_FONT_SIZE: u16 = 24;

/// Fallback font size when the viewport has not been laid out yet.
pub const FALLBACK_FONT_SIZE: u16 = 12;

/// Choose a font size so the glyph grid fits the viewport without scrolling.
///
/// Fits independently against width (`viewport_width / (grid_width * 0.65)`)
/// and height (`viewport_height / grid_height`), takes the smaller of the
/// two and clamps the result to [6, 24]. Any zero input means the viewport
/// (or grid) is not usable yet and the fixed fallback of 12 is returned.
///
/// Pure function; callable from any resize notification with the current
/// grid and viewport dimensions, no shared state involved.
///
/// # Arguments
/// * `grid_width` - Output grid width in glyphs
/// * `grid_height` - Output grid height in glyphs
/// * `viewport_width` - Available display width in pixels
/// * `viewport_height` - Available display height in pixels
pub fn fit_font_size(
    grid_width: u16,
    grid_height: u16,
    viewport_width: u32,
    viewport_height: u32,
) -> u16 {
    if grid_width == 0 || grid_height == 0 || viewport_width == 0 || viewport_height == 0 {
        return FALLBACK_FONT_SIZE;
    }

    let by_width = (viewport_width as f32 / (grid_width as f32 * GLYPH_ASPECT)).floor() as u16;
    let by_height = (viewport_height / grid_height as u32) as u16;

    by_width.min(by_height).clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_takes_smaller_axis() {
        // by_width = floor(640 / (40 * 0.65)) = 24, by_height = floor(360 / 24) = 15
        assert_eq!(fit_font_size(40, 24, 640, 360), 15);
    }

    #[test]
    fn test_fit_clamps_to_max() {
        assert_eq!(fit_font_size(40, 24, 10_000, 10_000), MAX_FONT_SIZE);
    }

    #[test]
    fn test_fit_clamps_to_min() {
        assert_eq!(fit_font_size(120, 60, 100, 100), MIN_FONT_SIZE);
    }

    #[test]
    fn test_fit_zero_viewport_falls_back() {
        assert_eq!(fit_font_size(40, 24, 0, 0), FALLBACK_FONT_SIZE);
        assert_eq!(fit_font_size(40, 24, 640, 0), FALLBACK_FONT_SIZE);
        assert_eq!(fit_font_size(0, 24, 640, 360), FALLBACK_FONT_SIZE);
    }
}
