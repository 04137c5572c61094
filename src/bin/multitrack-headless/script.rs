use std::fs;

use anyhow::{Context, Result};
use serde::Deserialize;

use multitrack_demo::region::Region;
use multitrack_demo::systems::selection::PointerEvent;

/// One scheduled pointer event: delivered at the start of frame `frame`.
#[derive(Deserialize, Debug, Clone)]
pub struct ScriptEntry {
    pub frame: usize,
    pub event: PointerEvent,
}

/// A scripted pointer stream, standing in for a real input device.
pub struct PointerScript {
    entries: Vec<ScriptEntry>,
}

impl PointerScript {
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read pointer script {}", path))?;
        let entries: Vec<ScriptEntry> = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse pointer script {}", path))?;
        Ok(PointerScript { entries })
    }

    /// Built-in demo: drag a generous rectangle over where the synthetic
    /// blob sits a few frames in.
    pub fn demo(blob_at_commit: Region) -> Self {
        let Region {
            x,
            y,
            width,
            height,
        } = blob_at_commit;
        PointerScript {
            entries: vec![
                ScriptEntry {
                    frame: 2,
                    event: PointerEvent::Press { x: x - 8, y: y - 8 },
                },
                ScriptEntry {
                    frame: 3,
                    event: PointerEvent::Move {
                        x: x + width as i32 / 2,
                        y: y + height as i32 / 2,
                    },
                },
                ScriptEntry {
                    frame: 4,
                    event: PointerEvent::Release {
                        x: x + width as i32 + 8,
                        y: y + height as i32 + 8,
                    },
                },
            ],
        }
    }

    pub fn events_for(&self, frame: usize) -> Vec<PointerEvent> {
        self.entries
            .iter()
            .filter(|entry| entry.frame == frame)
            .map(|entry| entry.event)
            .collect()
    }
}
