use log::debug;

use crate::frame::Frame;
use crate::region::Region;

/// Pull-based frame source: one decoded frame per call, `None` once the
/// source is exhausted (or the device goes away).
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Frame>;
}

const BACKGROUND_LUMA: u8 = 16;
const BLOB_LUMA: u8 = 230;
const BLOB_SIZE: u32 = 48;

/// Deterministic stand-in for a camera: a single bright square drifting
/// across a dark background, bouncing off the frame edges. Optionally the
/// square disappears after a number of frames, so that sustained tracking
/// loss (and eviction) can be demonstrated without covering the lens.
pub struct SyntheticCapture {
    width: u32,
    height: u32,
    position: (f32, f32),
    velocity: (f32, f32),
    frame_limit: Option<usize>,
    blob_lifetime: Option<usize>,
    frame_index: usize,
}

impl SyntheticCapture {
    pub fn new(width: u32, height: u32) -> Self {
        SyntheticCapture {
            width,
            height,
            position: (100.0, 100.0),
            velocity: (3.0, 2.0),
            frame_limit: None,
            blob_lifetime: None,
            frame_index: 0,
        }
    }

    /// Stop yielding frames after `count` frames.
    pub fn with_frame_limit(mut self, count: usize) -> Self {
        self.frame_limit = Some(count);
        self
    }

    /// Remove the bright square from the scene after `count` frames.
    pub fn with_blob_lifetime(mut self, count: usize) -> Self {
        self.blob_lifetime = Some(count);
        self
    }

    /// Where the square currently sits, for scripted selections and tests.
    pub fn blob_region(&self) -> Region {
        Region::new(
            self.position.0 as i32,
            self.position.1 as i32,
            BLOB_SIZE,
            BLOB_SIZE,
        )
    }

    fn advance(&mut self) {
        let (mut x, mut y) = self.position;
        let (mut vx, mut vy) = self.velocity;
        x += vx;
        y += vy;
        if x < 0.0 || x + BLOB_SIZE as f32 > self.width as f32 {
            vx = -vx;
            x += vx * 2.0;
        }
        if y < 0.0 || y + BLOB_SIZE as f32 > self.height as f32 {
            vy = -vy;
            y += vy * 2.0;
        }
        self.position = (x, y);
        self.velocity = (vx, vy);
    }
}

impl FrameSource for SyntheticCapture {
    fn next_frame(&mut self) -> Option<Frame> {
        if let Some(limit) = self.frame_limit {
            if self.frame_index >= limit {
                debug!("synthetic capture exhausted after {} frames", limit);
                return None;
            }
        }
        let mut frame = Frame::new(self.width, self.height, BACKGROUND_LUMA);
        let blob_visible = match self.blob_lifetime {
            Some(lifetime) => self.frame_index < lifetime,
            None => true,
        };
        if blob_visible {
            frame.fill_region(&self.blob_region(), BLOB_LUMA);
            self.advance();
        }
        self.frame_index += 1;
        Some(frame)
    }
}
