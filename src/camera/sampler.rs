//! Downsampling of capture frames into the output raster.

use super::raster::RasterFrame;
use super::types::Frame;

/// Downsampler owning the output raster buffer.
///
/// Maps capture-frame pixels to raster cells by averaging the color of all
/// pixels within each cell band, reusing the same buffer every frame. The
/// raster always matches the current output resolution; [`resize`] applies
/// a settings change before the next conversion, never mid-conversion.
///
/// [`resize`]: Sampler::resize
#[derive(Debug)]
pub struct Sampler {
    raster: RasterFrame,
}

impl Sampler {
    /// Create a sampler with a raster of the given output dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            raster: RasterFrame::new(width, height),
        }
    }

    /// Borrow the current raster content.
    pub fn raster(&self) -> &RasterFrame {
        &self.raster
    }

    /// Resize the raster to new output dimensions (no-op if unchanged).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.raster.resize(width, height);
    }

    /// Draw the latest capture frame into the raster, downsampled to the
    /// raster's dimensions.
    ///
    /// Each raster cell is the box average of the capture pixels it covers.
    /// With `mirror` set, cell x reads the source band of cell
    /// `width-1-x` - a horizontal coordinate reflection for the
    /// facing-the-user effect, not a rewrite of the source data. Never
    /// blocks; a degenerate source frame leaves the raster untouched
    /// (callers check stream readiness first).
    pub fn sample(&mut self, frame: &Frame, mirror: bool) -> &RasterFrame {
        let img_width = frame.width;
        let img_height = frame.height;
        let char_width = self.raster.width();
        let char_height = self.raster.height();

        if img_width == 0
            || img_height == 0
            || char_width == 0
            || char_height == 0
            || frame.data.is_empty()
        {
            return &self.raster;
        }

        // Size of each cell in capture pixels (floats for accurate mapping)
        let cell_w = img_width as f32 / char_width as f32;
        let cell_h = img_height as f32 / char_height as f32;

        for cy in 0..char_height {
            for cx in 0..char_width {
                // Horizontal reflection happens here, on cell coordinates
                let sx = if mirror { char_width - 1 - cx } else { cx };

                let start_x = (sx as f32 * cell_w) as u32;
                let end_x = ((sx + 1) as f32 * cell_w) as u32;
                let start_y = (cy as f32 * cell_h) as u32;
                let end_y = ((cy + 1) as f32 * cell_h) as u32;

                let mut sum_r = 0u32;
                let mut sum_g = 0u32;
                let mut sum_b = 0u32;
                let mut count = 0u32;

                for py in start_y..end_y {
                    for px in start_x..end_x {
                        let idx = ((py * img_width + px) * 3) as usize;
                        if idx + 2 < frame.data.len() {
                            sum_r += frame.data[idx] as u32;
                            sum_g += frame.data[idx + 1] as u32;
                            sum_b += frame.data[idx + 2] as u32;
                            count += 1;
                        }
                    }
                }

                let rgb = if count > 0 {
                    (
                        (sum_r / count) as u8,
                        (sum_g / count) as u8,
                        (sum_b / count) as u8,
                    )
                } else {
                    (0, 0, 0)
                };
                self.raster.set_pixel(cx, cy, rgb);
            }
        }

        &self.raster
    }
}
