//! Unit tests for the glyph mapper and layout fitter.
//!
//! The mapper's polarity is easy to get backwards: the ramp's FIRST glyph
//! is the densest, luminance 0 selects the LAST glyph. The boundary tests
//! here are the authoritative statement of that behavior.

use asciicam::camera::RasterFrame;
use asciicam::render::{
    fit_font_size, to_glyph_grid, CLASSIC_RAMP, DETAILED_RAMP, FALLBACK_FONT_SIZE, SIMPLE_RAMP,
};

/// Build a raster filled with a single color.
fn filled_raster(width: u16, height: u16, rgb: (u8, u8, u8)) -> RasterFrame {
    let mut raster = RasterFrame::new(width, height);
    raster.fill(rgb);
    raster
}

/// Build a 1x1 raster holding one pixel.
fn single_pixel(r: u8, g: u8, b: u8) -> RasterFrame {
    filled_raster(1, 1, (r, g, b))
}

/// The glyph selected for one pixel at the given brightness.
fn selected_glyph(r: u8, g: u8, b: u8, ramp: &[char], brightness: f32) -> char {
    let grid = to_glyph_grid(&single_pixel(r, g, b), ramp, brightness);
    grid.chars().next().unwrap()
}

// ==================== Polarity Boundaries ====================

#[test]
fn test_luminance_zero_selects_last_glyph() {
    for ramp in [CLASSIC_RAMP, SIMPLE_RAMP, DETAILED_RAMP] {
        assert_eq!(
            selected_glyph(0, 0, 0, ramp, 1.0),
            *ramp.last().unwrap(),
            "black pixel must select the ramp's last glyph"
        );
    }
}

#[test]
fn test_luminance_max_selects_first_glyph() {
    for ramp in [CLASSIC_RAMP, SIMPLE_RAMP, DETAILED_RAMP] {
        assert_eq!(
            selected_glyph(255, 255, 255, ramp, 1.0),
            ramp[0],
            "white pixel at brightness 1.0 must select the ramp's first glyph"
        );
    }
}

#[test]
fn test_all_black_frame_is_all_spaces() {
    let frame = filled_raster(40, 24, (0, 0, 0));
    let grid = to_glyph_grid(&frame, CLASSIC_RAMP, 1.0);

    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 24);
    for line in lines {
        assert_eq!(line, " ".repeat(40));
    }
}

#[test]
fn test_all_white_frame_is_all_at_signs() {
    let frame = filled_raster(40, 24, (255, 255, 255));
    let grid = to_glyph_grid(&frame, CLASSIC_RAMP, 1.0);

    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines.len(), 24);
    for line in lines {
        assert_eq!(line, "@".repeat(40));
    }
}

// ==================== Mapping Properties ====================

#[test]
fn test_single_pixel_yields_single_ramp_glyph() {
    // Sweep a coarse grid over the RGB cube and brightness range; every
    // 1x1 frame must yield exactly one glyph, and it must come from the ramp
    for r in (0..=255u16).step_by(51) {
        for g in (0..=255u16).step_by(51) {
            for b in (0..=255u16).step_by(51) {
                for brightness in [0.1, 0.5, 1.0, 2.0, 3.0] {
                    let grid = to_glyph_grid(
                        &single_pixel(r as u8, g as u8, b as u8),
                        CLASSIC_RAMP,
                        brightness,
                    );
                    let mut chars = grid.chars();
                    let glyph = chars.next().unwrap();
                    assert_eq!(chars.next(), Some('\n'));
                    assert_eq!(chars.next(), None);
                    assert!(
                        CLASSIC_RAMP.contains(&glyph),
                        "glyph {:?} not in ramp for rgb=({},{},{}) brightness={}",
                        glyph,
                        r,
                        g,
                        b,
                        brightness
                    );
                }
            }
        }
    }
}

#[test]
fn test_mapping_is_monotonic_in_luminance() {
    // Brighter gray must never map to a denser glyph (lower ramp position)
    // ... never a denser one than a darker gray, that is: position in the
    // ramp is non-increasing toward the dense end as luminance rises.
    for brightness in [0.5, 1.0, 2.0] {
        let mut last_position = CLASSIC_RAMP.len();
        for gray in 0..=255u16 {
            let v = gray as u8;
            let glyph = selected_glyph(v, v, v, CLASSIC_RAMP, brightness);
            let position = CLASSIC_RAMP.iter().position(|&c| c == glyph).unwrap();
            assert!(
                position <= last_position,
                "gray {} mapped to position {} after position {} (brightness {})",
                gray,
                position,
                last_position,
                brightness
            );
            last_position = position;
        }
    }
}

#[test]
fn test_mapping_is_deterministic() {
    // Byte-identical output for identical inputs
    let mut frame = RasterFrame::new(16, 16);
    for y in 0..16u16 {
        for x in 0..16u16 {
            let v = (x * 16 + y) as u8;
            frame.set_pixel(x, y, (v, v.wrapping_mul(3), v.wrapping_add(40)));
        }
    }

    let first = to_glyph_grid(&frame, DETAILED_RAMP, 1.3);
    let second = to_glyph_grid(&frame, DETAILED_RAMP, 1.3);
    assert_eq!(first, second);
}

#[test]
fn test_brightness_clamps_at_255() {
    // 200 * 3.0 = 600 clamps to 255, selecting the densest glyph; no wrap
    assert_eq!(selected_glyph(200, 200, 200, CLASSIC_RAMP, 3.0), '@');
    // And the clamp at 0 holds too: black stays black under any factor
    assert_eq!(selected_glyph(0, 0, 0, CLASSIC_RAMP, 3.0), ' ');
}

#[test]
fn test_brightness_darkens_below_one() {
    // 255 * 0.1 = 25.5 -> i = floor(25.5/255 * 9) = 0 -> sparsest glyph
    assert_eq!(selected_glyph(255, 255, 255, CLASSIC_RAMP, 0.1), ' ');
}

#[test]
fn test_mid_gray_mapping() {
    // round(0.299*128 + 0.587*128 + 0.114*128) = 128,
    // i = floor(128/255 * 9) = 4, selected glyph ramp[9-4] = '='
    assert_eq!(selected_glyph(128, 128, 128, CLASSIC_RAMP, 1.0), '=');
}

#[test]
fn test_luminance_uses_perceptual_weights() {
    // Equal-intensity channels produce different luminance: green (round
    // 150) lands on a denser glyph than red (round 76) or blue (round 29)
    assert_eq!(selected_glyph(255, 0, 0, CLASSIC_RAMP, 1.0), ':'); // i=2
    assert_eq!(selected_glyph(0, 255, 0, CLASSIC_RAMP, 1.0), '+'); // i=5
    assert_eq!(selected_glyph(0, 0, 255, CLASSIC_RAMP, 1.0), '.'); // i=1
}

#[test]
fn test_grid_row_structure() {
    // Rows are top-to-bottom, each terminated by a line break, and the
    // last row's break is present
    let mut frame = RasterFrame::new(3, 2);
    // Top row white, bottom row black
    for x in 0..3 {
        frame.set_pixel(x, 0, (255, 255, 255));
    }
    let grid = to_glyph_grid(&frame, CLASSIC_RAMP, 1.0);
    assert_eq!(grid, "@@@\n   \n");
}

#[test]
fn test_block_ramp_multibyte_glyphs() {
    let frame = filled_raster(2, 1, (255, 255, 255));
    let grid = to_glyph_grid(&frame, SIMPLE_RAMP, 1.0);
    assert_eq!(grid, "██\n");
}

// ==================== Layout Fitter ====================

#[test]
fn test_fit_font_size_width_constrained() {
    // by_width = floor(520 / (80 * 0.65)) = 10, by_height = floor(700 / 48) = 14
    assert_eq!(fit_font_size(80, 48, 520, 700), 10);
}

#[test]
fn test_fit_font_size_height_constrained() {
    // by_width = floor(640 / (40 * 0.65)) = 24, by_height = floor(360 / 24) = 15
    assert_eq!(fit_font_size(40, 24, 640, 360), 15);
}

#[test]
fn test_fit_font_size_clamps() {
    assert_eq!(fit_font_size(40, 24, 100_000, 100_000), 24);
    assert_eq!(fit_font_size(120, 60, 50, 50), 6);
}

#[test]
fn test_fit_font_size_unavailable_viewport() {
    assert_eq!(fit_font_size(40, 24, 0, 360), FALLBACK_FONT_SIZE);
    assert_eq!(fit_font_size(40, 24, 640, 0), FALLBACK_FONT_SIZE);
}
