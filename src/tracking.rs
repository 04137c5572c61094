use serde::{Deserialize, Serialize};

use crate::region::Region;

pub type ObjectId = usize;

/// One surviving object's re-estimated position for the current frame, as
/// produced by the registry's update pass and consumed by render sinks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedRegion {
    pub id: ObjectId,
    pub region: Region,
}
