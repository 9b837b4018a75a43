//! Optimal (Belady) replacement.

use tracing::trace;

use crate::common::{FrameId, PageId};
use crate::engine::replacer::Replacer;
use crate::engine::FrameSet;

/// Evicts the resident page whose next use is furthest away.
///
/// A page that is never referenced again counts as infinitely far.
/// Ties go to the lowest slot, so the trace is deterministic.
///
/// # Cost
/// Each replacing miss scans the rest of the reference string once per
/// resident page: O(misses × remaining length). Fine for interactive
/// strings; a precomputed next-occurrence table would be needed for long
/// traces.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalReplacer;

impl OptimalReplacer {
    pub fn new() -> Self {
        OptimalReplacer
    }
}

impl Replacer for OptimalReplacer {
    fn victim(&self, frames: &FrameSet, upcoming: &[PageId]) -> FrameId {
        let mut victim = FrameId::new(0);
        let mut furthest = 0;

        for (slot, page) in frames.iter().enumerate() {
            let Some(next_use) = upcoming.iter().position(|p| p == page) else {
                // Never used again: nothing can beat it, and any later tie
                // would lose to this lower slot anyway.
                trace!(slot, page = page.0, "victim never referenced again");
                return FrameId::new(slot);
            };

            if slot == 0 || next_use > furthest {
                furthest = next_use;
                victim = FrameId::new(slot);
            }
        }

        trace!(slot = victim.0, next_use = furthest, "victim used furthest ahead");
        victim
    }

    fn install(&mut self, frames: &mut FrameSet, victim: FrameId, page: PageId) -> FrameId {
        frames.replace(victim, page);
        victim
    }
}
