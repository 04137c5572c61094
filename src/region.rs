use serde::{Deserialize, Serialize};

use crate::PixelPoint;

/// An axis-aligned rectangle in pixel coordinates, describing either a
/// tracked area or a pending selection.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalize two drag endpoints, in either relative order, into a
    /// rectangle with non-negative extent.
    pub fn from_corners(p0: PixelPoint, p1: PixelPoint) -> Self {
        let (x0, y0) = p0;
        let (x1, y1) = p1;
        Region {
            x: x0.min(x1),
            y: y0.min(y1),
            width: (x1 - x0).unsigned_abs(),
            height: (y1 - y0).unsigned_abs(),
        }
    }

    /// A zero-extent selection spawns nothing; the registry refuses it.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }
}
