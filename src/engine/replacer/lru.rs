//! Age-ordered replacement.
//!
//! The frame set itself is the queue: front = oldest, back = newest.
//! Eviction always takes the front and new pages join at the back.

use tracing::trace;

use crate::common::{FrameId, PageId};
use crate::engine::replacer::Replacer;
use crate::engine::FrameSet;

/// Evicts the page at the front of the frame set.
///
/// With `promote_on_hit` off (the [`Policy::Lru`](crate::Policy::Lru)
/// default) the front is simply the page loaded longest ago. With it on,
/// a hit moves the page to the back, so the front is the page referenced
/// longest ago.
#[derive(Debug, Clone, Default)]
pub struct LruReplacer {
    promote_on_hit: bool,
}

impl LruReplacer {
    /// Arrival-order replacer; hits leave the order untouched.
    pub fn new() -> Self {
        Self {
            promote_on_hit: false,
        }
    }

    /// Recency-order replacer; hits refresh the page.
    pub fn promoting() -> Self {
        Self {
            promote_on_hit: true,
        }
    }

    /// True for the recency-order variant.
    pub fn promotes_on_hit(&self) -> bool {
        self.promote_on_hit
    }
}

impl Replacer for LruReplacer {
    fn record_hit(&mut self, frames: &mut FrameSet, slot: FrameId) {
        if self.promotes_on_hit() {
            let moved_to = frames.promote(slot);
            trace!(from = slot.0, to = moved_to.0, "promoted hit page");
        }
    }

    fn victim(&self, _frames: &FrameSet, _upcoming: &[PageId]) -> FrameId {
        FrameId::new(0)
    }

    fn install(&mut self, frames: &mut FrameSet, victim: FrameId, page: PageId) -> FrameId {
        frames.remove(victim);
        frames.push(page)
    }
}
