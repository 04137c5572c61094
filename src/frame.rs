use crate::region::Region;

/// A decoded grayscale raster frame. Width and height are fixed for the
/// duration of a capture session.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, background: u8) -> Self {
        Frame {
            width,
            height,
            pixels: vec![background; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Luminance at (x, y), clamped to the frame edges so that trackers may
    /// sample search windows that overlap the border.
    pub fn luma(&self, x: i32, y: i32) -> u8 {
        let x = x.clamp(0, self.width as i32 - 1) as u32;
        let y = y.clamp(0, self.height as i32 - 1) as u32;
        self.pixels[(y * self.width + x) as usize]
    }

    /// Fill the intersection of `region` with the frame.
    pub fn fill_region(&mut self, region: &Region, luma: u8) {
        let x0 = region.x.max(0) as u32;
        let y0 = region.y.max(0) as u32;
        let x1 = (region.x + region.width as i32).clamp(0, self.width as i32) as u32;
        let y1 = (region.y + region.height as i32).clamp(0, self.height as i32) as u32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.pixels[(y * self.width + x) as usize] = luma;
            }
        }
    }
}
