use crate::frame::Frame;
use crate::region::Region;

use super::VisualTracker;

/// How far (in pixels, per axis) the object may move between frames.
const SEARCH_RADIUS: i32 = 24;

/// Mean absolute luminance difference above which a match is rejected.
const MAX_MEAN_DIFF: f32 = 32.0;

/// Follows the object by exhaustively matching the luminance patch sampled
/// at registration time against a bounded search window around the last
/// known position. The template is not re-learned, so appearance drift will
/// eventually show up as tracking failure rather than as model corruption.
pub struct TemplateTracker {
    template: Vec<u8>,
    size: (u32, u32),
    last: Region,
}

impl TemplateTracker {
    pub fn init(frame: &Frame, region: &Region) -> Self {
        let mut template = Vec::with_capacity((region.width * region.height) as usize);
        for dy in 0..region.height as i32 {
            for dx in 0..region.width as i32 {
                template.push(frame.luma(region.x + dx, region.y + dy));
            }
        }
        TemplateTracker {
            template,
            size: (region.width, region.height),
            last: *region,
        }
    }

    fn mean_diff_at(&self, frame: &Frame, x: i32, y: i32) -> f32 {
        let (w, h) = self.size;
        let mut total = 0u32;
        for dy in 0..h as i32 {
            for dx in 0..w as i32 {
                let sample = frame.luma(x + dx, y + dy) as i32;
                let reference = self.template[(dy as u32 * w + dx as u32) as usize] as i32;
                total += sample.abs_diff(reference);
            }
        }
        total as f32 / (w * h) as f32
    }

    fn best_match(&self, frame: &Frame) -> (i32, i32, f32) {
        let mut best = (self.last.x, self.last.y);
        let mut best_score = f32::INFINITY;
        for y in self.last.y - SEARCH_RADIUS..=self.last.y + SEARCH_RADIUS {
            for x in self.last.x - SEARCH_RADIUS..=self.last.x + SEARCH_RADIUS {
                let score = self.mean_diff_at(frame, x, y);
                if score < best_score {
                    best_score = score;
                    best = (x, y);
                }
            }
        }
        (best.0, best.1, best_score)
    }
}

impl VisualTracker for TemplateTracker {
    fn update(&mut self, frame: &Frame) -> Option<Region> {
        let (x, y, score) = self.best_match(frame);
        if score > MAX_MEAN_DIFF {
            return None;
        }
        self.last = Region::new(x, y, self.size.0, self.size.1);
        Some(self.last)
    }
}
