//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`LruReplacer`] - evicts the oldest resident page; optionally promotes
//!   pages on a hit (see [`Policy::Lru`] vs [`Policy::TrueLru`])
//! - [`OptimalReplacer`] - Belady's algorithm, evicts the page used
//!   furthest in the future
//!
//! A new policy is one more [`Replacer`] implementation plus one more
//! [`Policy`] variant.

mod lru;
mod optimal;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, FrameId, PageId};
use crate::engine::FrameSet;

pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;

/// The strategy interface the engine steps through.
///
/// The engine handles hit detection, the empty-slot case and all
/// bookkeeping. A replacer only decides what happens to frame order on a hit
/// and which slot to give up on a full-frame miss.
pub trait Replacer: fmt::Debug {
    /// A reference found its page in `slot`.
    fn record_hit(&mut self, _frames: &mut FrameSet, _slot: FrameId) {}

    /// Choose the slot to evict on a full-frame miss.
    ///
    /// `upcoming` is the remainder of the reference string strictly after
    /// the reference being served.
    fn victim(&self, frames: &FrameSet, upcoming: &[PageId]) -> FrameId;

    /// Put `page` in place of the page in `victim`.
    ///
    /// Returns the slot `page` ends up in.
    fn install(&mut self, frames: &mut FrameSet, victim: FrameId, page: PageId) -> FrameId;
}

/// Selects the replacement policy for a run.
///
/// # Example
/// ```
/// use pagesim::Policy;
///
/// let policy: Policy = "Optimal".parse().unwrap();
/// assert_eq!(policy, Policy::Optimal);
/// assert_eq!(policy.to_string(), "Optimal");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Policy {
    /// Evicts in arrival order; a hit does not refresh a page.
    ///
    /// This is the historical behavior of the visualizer's "LRU" mode and is
    /// kept as is so traces stay comparable. It behaves like FIFO.
    Lru,

    /// Textbook LRU: a hit moves the page to the most recent position.
    TrueLru,

    /// Belady's optimal policy.
    Optimal,
}

impl Policy {
    /// Every policy, in display order.
    pub const ALL: [Policy; 3] = [Policy::Lru, Policy::TrueLru, Policy::Optimal];

    /// Short name accepted by [`FromStr`] and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Lru => "lru",
            Policy::TrueLru => "true-lru",
            Policy::Optimal => "optimal",
        }
    }

    /// Build a fresh replacer for one run.
    pub fn replacer(self) -> Box<dyn Replacer> {
        match self {
            Policy::Lru => Box::new(LruReplacer::new()),
            Policy::TrueLru => Box::new(LruReplacer::promoting()),
            Policy::Optimal => Box::new(OptimalReplacer::new()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Lru => write!(f, "LRU"),
            Policy::TrueLru => write!(f, "True LRU"),
            Policy::Optimal => write!(f, "Optimal"),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lru" => Ok(Policy::Lru),
            "true-lru" | "true_lru" | "truelru" => Ok(Policy::TrueLru),
            "optimal" | "opt" | "belady" => Ok(Policy::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
