use anyhow::Result;
use log::debug;

use crate::frame::Frame;
use crate::region::Region;
use crate::tracking::TrackedRegion;

/// Display boundary: consumes the current frame, the surviving objects'
/// regions and the live selection candidate. Nothing it does feeds back
/// into tracking.
pub trait RenderSink {
    fn present(
        &mut self,
        frame: &Frame,
        tracked: &[TrackedRegion],
        candidate: Option<&Region>,
    ) -> Result<()>;
}

/// Render sink for the headless binary: per-frame log lines, or one JSON
/// line per frame when machine-readable output is wanted.
pub struct ConsoleSink {
    dump_json: bool,
    frame_index: usize,
}

impl ConsoleSink {
    pub fn new(dump_json: bool) -> Self {
        ConsoleSink {
            dump_json,
            frame_index: 0,
        }
    }
}

impl RenderSink for ConsoleSink {
    fn present(
        &mut self,
        _frame: &Frame,
        tracked: &[TrackedRegion],
        candidate: Option<&Region>,
    ) -> Result<()> {
        if self.dump_json {
            println!("{}", serde_json::to_string(tracked)?);
        } else {
            debug!(
                "frame {}: {} tracked object(s){}",
                self.frame_index,
                tracked.len(),
                match candidate {
                    Some(region) => format!(", selecting {:?}", region),
                    None => String::new(),
                }
            );
        }
        self.frame_index += 1;
        Ok(())
    }
}
