use serde::{Deserialize, Serialize};

use crate::region::Region;
use crate::PixelPoint;

/// A raw pointer event, as delivered by whatever input device drives the
/// demo (GUI drags, or a scripted stream in the headless binary).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Press { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragStatus {
    Idle,
    Dragging,
    Committed,
}

/// Turns the pointer event stream into committed selection rectangles.
/// A press anchors the drag, moves republish the live candidate, and the
/// release finalizes the candidate with the same normalization a move
/// would have applied to the release coordinates, then raises a one-shot
/// committed edge.
pub struct SelectionGesture {
    status: DragStatus,
    anchor: PixelPoint,
    candidate: Region,
}

impl SelectionGesture {
    pub fn new() -> Self {
        SelectionGesture {
            status: DragStatus::Idle,
            anchor: (0, 0),
            candidate: Region::new(0, 0, 0, 0),
        }
    }

    pub fn handle_event(&mut self, event: &PointerEvent) {
        match *event {
            PointerEvent::Press { x, y } => {
                self.status = DragStatus::Dragging;
                self.anchor = (x, y);
                self.candidate = Region::from_corners(self.anchor, (x, y));
            }
            PointerEvent::Move { x, y } => {
                if self.status == DragStatus::Dragging {
                    self.candidate = Region::from_corners(self.anchor, (x, y));
                }
            }
            PointerEvent::Release { x, y } => {
                if self.status == DragStatus::Dragging {
                    self.candidate = Region::from_corners(self.anchor, (x, y));
                    self.status = DragStatus::Committed;
                }
            }
        }
    }

    /// Consume the committed selection, if one is pending. The edge is
    /// cleared by this call, so each committed drag registers exactly once.
    pub fn take_committed(&mut self) -> Option<Region> {
        if self.status == DragStatus::Committed {
            self.status = DragStatus::Idle;
            Some(self.candidate)
        } else {
            None
        }
    }

    /// The in-progress candidate rectangle, for rendering while dragging.
    pub fn live_candidate(&self) -> Option<&Region> {
        if self.status == DragStatus::Dragging {
            Some(&self.candidate)
        } else {
            None
        }
    }
}

impl Default for SelectionGesture {
    fn default() -> Self {
        SelectionGesture::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_move_release_commits_the_normalized_rectangle() {
        let mut gesture = SelectionGesture::new();
        gesture.handle_event(&PointerEvent::Press { x: 60, y: 80 });
        gesture.handle_event(&PointerEvent::Move { x: 30, y: 40 });
        gesture.handle_event(&PointerEvent::Release { x: 10, y: 20 });

        assert_eq!(gesture.take_committed(), Some(Region::new(10, 20, 50, 60)));
    }

    #[test]
    fn release_coordinates_finalize_the_candidate() {
        // The commit must use the release point exactly as a move would,
        // even when it differs from the last move.
        let mut gesture = SelectionGesture::new();
        gesture.handle_event(&PointerEvent::Press { x: 0, y: 0 });
        gesture.handle_event(&PointerEvent::Move { x: 100, y: 100 });
        gesture.handle_event(&PointerEvent::Release { x: 25, y: 30 });

        assert_eq!(gesture.take_committed(), Some(Region::new(0, 0, 25, 30)));
    }

    #[test]
    fn committed_edge_is_one_shot() {
        let mut gesture = SelectionGesture::new();
        gesture.handle_event(&PointerEvent::Press { x: 0, y: 0 });
        gesture.handle_event(&PointerEvent::Release { x: 10, y: 10 });

        assert!(gesture.take_committed().is_some());
        assert!(gesture.take_committed().is_none());
    }

    #[test]
    fn candidate_is_live_only_while_dragging() {
        let mut gesture = SelectionGesture::new();
        assert!(gesture.live_candidate().is_none());

        gesture.handle_event(&PointerEvent::Press { x: 5, y: 5 });
        gesture.handle_event(&PointerEvent::Move { x: 15, y: 25 });
        assert_eq!(gesture.live_candidate(), Some(&Region::new(5, 5, 10, 20)));

        gesture.handle_event(&PointerEvent::Release { x: 15, y: 25 });
        assert!(gesture.live_candidate().is_none());
    }

    #[test]
    fn stray_move_and_release_without_a_press_are_ignored() {
        let mut gesture = SelectionGesture::new();
        gesture.handle_event(&PointerEvent::Move { x: 15, y: 25 });
        gesture.handle_event(&PointerEvent::Release { x: 40, y: 40 });
        assert!(gesture.take_committed().is_none());
        assert!(gesture.live_candidate().is_none());
    }

    #[test]
    fn click_without_movement_commits_a_degenerate_region() {
        let mut gesture = SelectionGesture::new();
        gesture.handle_event(&PointerEvent::Press { x: 7, y: 7 });
        gesture.handle_event(&PointerEvent::Release { x: 7, y: 7 });

        // The gesture still commits; rejecting zero-extent selections is
        // the registry's job.
        let committed = gesture.take_committed().unwrap();
        assert!(committed.is_degenerate());
    }
}
