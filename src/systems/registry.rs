use indexmap::IndexMap;
use log::{debug, info};

use crate::frame::Frame;
use crate::region::Region;
use crate::trackers::{AlgorithmKind, VisualTracker};
use crate::tracking::{ObjectId, TrackedRegion};

/// One object under tracking: the algorithm instance bound to it at
/// registration, the loss-tolerance counter, and the selection it was
/// spawned from (kept for audit, never mutated afterwards).
struct TrackedObject {
    tracker: Box<dyn VisualTracker>,
    consecutive_failures: u32,
    origin: Region,
}

/// Owns the full set of tracked objects and their lifecycle: creation on a
/// committed selection, per-frame update-or-evict, and teardown at
/// shutdown. Objects are kept in insertion order; dropping an object drops
/// its tracker, so no separate release call exists anywhere.
pub struct TrackerRegistry {
    algorithm: AlgorithmKind,
    loss_threshold: u32,
    objects: IndexMap<ObjectId, TrackedObject>,
    next_id: ObjectId,
}

impl TrackerRegistry {
    pub fn new(algorithm: AlgorithmKind, loss_threshold: u32) -> Self {
        TrackerRegistry {
            algorithm,
            loss_threshold,
            objects: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Spawn a new tracked object from a committed selection, binding a
    /// fresh tracker to the frame the selection was committed in.
    /// Degenerate selections are ignored.
    pub fn register_selection(&mut self, frame: &Frame, region: Region) -> Option<ObjectId> {
        if region.is_degenerate() {
            debug!("ignoring degenerate selection {:?}", region);
            return None;
        }
        let tracker = self.algorithm.create(frame, &region);
        Some(self.admit(region, tracker))
    }

    fn admit(&mut self, origin: Region, tracker: Box<dyn VisualTracker>) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        self.objects.insert(
            id,
            TrackedObject {
                tracker,
                consecutive_failures: 0,
                origin,
            },
        );
        info!("registered object {} ({} tracker) at {:?}", id, self.algorithm, origin);
        id
    }

    /// Re-estimate every object against `frame`. Objects that succeed have
    /// their failure counter reset and contribute their new region to the
    /// output, in registration order. Objects that fail contribute nothing
    /// this frame; once an object's consecutive failures pass the loss
    /// threshold it is evicted within the same pass.
    pub fn update_all(&mut self, frame: &Frame) -> Vec<TrackedRegion> {
        let mut updates = Vec::with_capacity(self.objects.len());
        // Iterate over a snapshot of ids so mid-pass eviction cannot skip
        // or double-visit a surviving member.
        let ids: Vec<ObjectId> = self.objects.keys().copied().collect();
        for id in ids {
            let Some(object) = self.objects.get_mut(&id) else {
                continue;
            };
            match object.tracker.update(frame) {
                Some(region) => {
                    object.consecutive_failures = 0;
                    updates.push(TrackedRegion { id, region });
                }
                None => {
                    object.consecutive_failures += 1;
                    debug!(
                        "object {} lost this frame ({} consecutive)",
                        id, object.consecutive_failures
                    );
                    if object.consecutive_failures > self.loss_threshold {
                        info!(
                            "object {} dropped after {} consecutive failures",
                            id, object.consecutive_failures
                        );
                        self.objects.shift_remove(&id);
                    }
                }
            }
        }
        updates
    }

    /// Release every remaining object. Safe to call on an already-empty
    /// registry.
    pub fn teardown(&mut self) {
        if !self.objects.is_empty() {
            info!("releasing {} tracked object(s)", self.objects.len());
        }
        self.objects.clear();
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn consecutive_failures(&self, id: ObjectId) -> Option<u32> {
        self.objects.get(&id).map(|o| o.consecutive_failures)
    }

    pub fn origin(&self, id: ObjectId) -> Option<&Region> {
        self.objects.get(&id).map(|o| &o.origin)
    }
}
