pub mod registry;
pub mod render;
pub mod selection;

use anyhow::{Context, Result};

use crate::frame::Frame;
use crate::settings::Cli;
use crate::trackers::AlgorithmKind;
use crate::tracking::TrackedRegion;

use self::registry::TrackerRegistry;
use self::selection::{PointerEvent, SelectionGesture};

pub struct Systems {
    pub registry: TrackerRegistry,
    pub selection: SelectionGesture,
}

impl Systems {
    pub fn new(settings: &Cli) -> Result<Systems> {
        let algorithm: AlgorithmKind = settings
            .algorithm
            .parse()
            .context("invalid tracking algorithm selection")?;
        Ok(Systems {
            registry: TrackerRegistry::new(algorithm, settings.loss_threshold),
            selection: SelectionGesture::new(),
        })
    }

    /// One full cycle for one frame: feed this frame's pointer events to
    /// the gesture interpreter, register a committed selection if one is
    /// pending, then run the update-or-evict pass over every object.
    pub fn process_frame(&mut self, frame: &Frame, events: &[PointerEvent]) -> Vec<TrackedRegion> {
        for event in events {
            self.selection.handle_event(event);
        }
        if let Some(region) = self.selection.take_committed() {
            self.registry.register_selection(frame, region);
        }
        self.registry.update_all(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{FrameSource, SyntheticCapture};
    use crate::region::Region;

    fn settings(algorithm: &str, loss_threshold: u32) -> Cli {
        Cli {
            capture_device: 0,
            capture_width: 320,
            capture_height: 240,
            algorithm: algorithm.to_string(),
            loss_threshold,
            log_level: "info".to_string(),
            script_path: None,
            max_frames: None,
            dump_tracking: false,
        }
    }

    #[test]
    fn unknown_algorithm_fails_construction() {
        assert!(Systems::new(&settings("BOOSTING", 100)).is_err());
    }

    /// Full lifecycle against real frames: drag over the blob, watch it
    /// being tracked, then watch it being dropped once it disappears and
    /// the loss tolerance runs out.
    #[test]
    fn drag_track_lose_evict() {
        let mut capture = SyntheticCapture::new(320, 240).with_blob_lifetime(6);
        let mut systems = Systems::new(&settings("template", 2)).unwrap();

        // Frame 0: nothing selected yet.
        let frame = capture.next_frame().unwrap();
        assert!(systems.process_frame(&frame, &[]).is_empty());
        assert!(systems.registry.is_empty());

        // Frame 1: drag a rectangle around the blob and commit it.
        let blob = capture.blob_region();
        let frame = capture.next_frame().unwrap();
        let events = [
            PointerEvent::Press {
                x: blob.x - 4,
                y: blob.y - 4,
            },
            PointerEvent::Move {
                x: blob.x + 20,
                y: blob.y + 20,
            },
            PointerEvent::Release {
                x: blob.x + blob.width as i32 + 4,
                y: blob.y + blob.height as i32 + 4,
            },
        ];
        let tracked = systems.process_frame(&frame, &events);
        assert_eq!(systems.registry.len(), 1);
        assert_eq!(tracked.len(), 1);

        // Frames 2..6: the blob is still visible and keeps being tracked.
        for _ in 2..6 {
            let expected = capture.blob_region();
            let frame = capture.next_frame().unwrap();
            let tracked = systems.process_frame(&frame, &[]);
            assert_eq!(tracked.len(), 1);
            let estimate = tracked[0].region;
            assert!((estimate.x - expected.x).abs() <= 8);
            assert!((estimate.y - expected.y).abs() <= 8);
        }

        // The blob is gone now; with a loss threshold of 2 the object
        // survives two failed frames and is evicted on the third.
        for _ in 0..2 {
            let frame = capture.next_frame().unwrap();
            assert!(systems.process_frame(&frame, &[]).is_empty());
            assert_eq!(systems.registry.len(), 1);
        }
        let frame = capture.next_frame().unwrap();
        assert!(systems.process_frame(&frame, &[]).is_empty());
        assert!(systems.registry.is_empty());
    }

    #[test]
    fn degenerate_drag_spawns_nothing() {
        let mut capture = SyntheticCapture::new(320, 240);
        let mut systems = Systems::new(&settings("meanshift", 100)).unwrap();
        let frame = capture.next_frame().unwrap();

        let events = [
            PointerEvent::Press { x: 50, y: 50 },
            PointerEvent::Release { x: 50, y: 90 },
        ];
        assert!(systems.process_frame(&frame, &events).is_empty());
        assert!(systems.registry.is_empty());
    }

    #[test]
    fn each_committed_drag_spawns_one_object() {
        let mut capture = SyntheticCapture::new(320, 240);
        let mut systems = Systems::new(&settings("template", 100)).unwrap();
        let blob = capture.blob_region();
        let frame = capture.next_frame().unwrap();

        let drag = |origin: Region| {
            [
                PointerEvent::Press {
                    x: origin.x,
                    y: origin.y,
                },
                PointerEvent::Release {
                    x: origin.x + origin.width as i32,
                    y: origin.y + origin.height as i32,
                },
            ]
        };

        systems.process_frame(&frame, &drag(blob));
        assert_eq!(systems.registry.len(), 1);

        // No events: the object count stays put.
        systems.process_frame(&frame, &[]);
        assert_eq!(systems.registry.len(), 1);

        systems.process_frame(&frame, &drag(Region::new(10, 10, 30, 30)));
        assert_eq!(systems.registry.len(), 2);
    }
}
