use crate::frame::Frame;
use crate::region::Region;

use super::VisualTracker;

const BINS: usize = 16;
const MAX_ITERATIONS: usize = 8;
const CONVERGENCE_EPSILON: f64 = 0.5;

/// Bhattacharyya similarity below which the object counts as lost.
const MIN_SIMILARITY: f64 = 0.5;

/// Mean-shift over a luminance histogram: the target model is the
/// kernel-weighted histogram of the selected region, and each update walks
/// the window towards the mode of the back-projection weights.
pub struct MeanShiftTracker {
    target_model: Vec<f64>,
    center: (f64, f64),
    window: (u32, u32),
}

impl MeanShiftTracker {
    pub fn init(frame: &Frame, region: &Region) -> Self {
        let window = (region.width, region.height);
        let center = region.center();
        let target_model = histogram(frame, center, window);
        MeanShiftTracker {
            target_model,
            center,
            window,
        }
    }

    fn shift_once(&self, frame: &Frame, center: (f64, f64)) -> (f64, f64) {
        let candidate = histogram(frame, center, self.window);
        let (half_w, half_h) = half_extent(self.window);
        let (cx, cy) = center;

        let mut weighted_x = 0.0;
        let mut weighted_y = 0.0;
        let mut total_weight = 0.0;
        for_each_window_sample(frame, center, self.window, |x, y, _kernel, bin| {
            let weight = (self.target_model[bin] / (candidate[bin] + 1e-6)).sqrt();
            weighted_x += x * weight;
            weighted_y += y * weight;
            total_weight += weight;
        });

        if total_weight > 0.0 {
            (weighted_x / total_weight, weighted_y / total_weight)
        } else {
            (cx.clamp(half_w, frame.width() as f64 - half_w), cy.clamp(half_h, frame.height() as f64 - half_h))
        }
    }
}

impl VisualTracker for MeanShiftTracker {
    fn update(&mut self, frame: &Frame) -> Option<Region> {
        let mut center = self.center;
        for _ in 0..MAX_ITERATIONS {
            let next = self.shift_once(frame, center);
            let step = ((next.0 - center.0).powi(2) + (next.1 - center.1).powi(2)).sqrt();
            center = next;
            if step < CONVERGENCE_EPSILON {
                break;
            }
        }

        let candidate = histogram(frame, center, self.window);
        let similarity: f64 = self
            .target_model
            .iter()
            .zip(candidate.iter())
            .map(|(t, c)| (t * c).sqrt())
            .sum();
        if similarity < MIN_SIMILARITY {
            return None;
        }

        self.center = center;
        let (w, h) = self.window;
        Some(Region::new(
            (center.0 - w as f64 / 2.0).round() as i32,
            (center.1 - h as f64 / 2.0).round() as i32,
            w,
            h,
        ))
    }
}

fn half_extent(window: (u32, u32)) -> (f64, f64) {
    (window.0 as f64 / 2.0, window.1 as f64 / 2.0)
}

/// Visit every pixel inside the elliptical Epanechnikov support of the
/// window centred at `center`, passing the kernel weight and histogram bin.
fn for_each_window_sample<F>(frame: &Frame, center: (f64, f64), window: (u32, u32), mut visit: F)
where
    F: FnMut(f64, f64, f64, usize),
{
    let (half_w, half_h) = half_extent(window);
    let (cx, cy) = center;
    let min_x = (cx - half_w).floor() as i32;
    let max_x = (cx + half_w).ceil() as i32;
    let min_y = (cy - half_h).floor() as i32;
    let max_y = (cy + half_h).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let dx = (x as f64 - cx) / half_w;
            let dy = (y as f64 - cy) / half_h;
            let dist_sq = dx * dx + dy * dy;
            if dist_sq < 1.0 {
                let kernel = 1.0 - dist_sq;
                let bin = frame.luma(x, y) as usize * BINS / 256;
                visit(x as f64, y as f64, kernel, bin);
            }
        }
    }
}

fn histogram(frame: &Frame, center: (f64, f64), window: (u32, u32)) -> Vec<f64> {
    let mut bins = vec![0.0f64; BINS];
    let mut total = 0.0;
    for_each_window_sample(frame, center, window, |_x, _y, kernel, bin| {
        bins[bin] += kernel;
        total += kernel;
    });
    if total > 0.0 {
        for value in bins.iter_mut() {
            *value /= total;
        }
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{FrameSource, SyntheticCapture};

    #[test]
    fn recentres_on_the_moving_blob() {
        let mut capture = SyntheticCapture::new(320, 240);
        let target = capture.blob_region();
        let first = capture.next_frame().unwrap();
        let mut tracker = MeanShiftTracker::init(&first, &target);

        let mut expected = capture.blob_region();
        for _ in 0..5 {
            let frame = capture.next_frame().unwrap();
            let estimate = tracker.update(&frame).expect("blob should still be found");
            let (ex, ey) = expected.center();
            let (gx, gy) = estimate.center();
            assert!((gx - ex).abs() <= 6.0, "x estimate {gx} too far from {ex}");
            assert!((gy - ey).abs() <= 6.0, "y estimate {gy} too far from {ey}");
            expected = capture.blob_region();
        }
    }

    #[test]
    fn reports_failure_when_the_blob_disappears() {
        let mut capture = SyntheticCapture::new(320, 240).with_blob_lifetime(1);
        let target = capture.blob_region();
        let first = capture.next_frame().unwrap();
        let mut tracker = MeanShiftTracker::init(&first, &target);

        let empty = capture.next_frame().unwrap();
        assert!(tracker.update(&empty).is_none());
    }
}
