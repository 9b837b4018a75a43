//! Per-step trace records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::{FrameId, PageId};
use crate::engine::frame_set::PageList;

/// Whether a reference found its page resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Hit,
    Miss,
}

impl Outcome {
    #[inline]
    pub fn is_hit(&self) -> bool {
        *self == Outcome::Hit
    }

    #[inline]
    pub fn is_miss(&self) -> bool {
        *self == Outcome::Miss
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Hit => write!(f, "HIT"),
            Outcome::Miss => write!(f, "MISS"),
        }
    }
}

/// What one call to [`ReplacementEngine::step`](crate::ReplacementEngine::step)
/// did.
///
/// A read-only record: renderers draw from it, nothing flows back into the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Position in the reference string consumed by this step.
    pub index: usize,

    /// The referenced page.
    pub page: PageId,

    pub outcome: Outcome,

    /// Frame contents after the step, in slot order.
    pub frames: Vec<PageId>,

    /// Page removed to make room; only set on a replacing miss.
    pub evicted: Option<PageId>,

    /// Slot the page was loaded into; `None` on a hit.
    pub slot: Option<FrameId>,

    /// Cumulative fault count including this step.
    pub faults: u64,
}

impl StepResult {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.outcome.is_hit()
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {} → {} (Frames: {})",
            self.page,
            self.outcome,
            PageList(&self.frames)
        )
    }
}
