//! Run statistics tracking.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::Policy;

/// Counters kept by the engine over one run.
///
/// Plain integers: a run is owned by a single engine and never shared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// References that found their page resident.
    pub hits: u64,

    /// References that had to load their page (page faults).
    pub faults: u64,

    /// Faults that also pushed another page out.
    pub evictions: u64,
}

impl RunStats {
    /// Create a new tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub fn record_fault(&mut self) {
        self.faults += 1;
    }

    #[inline]
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of references processed so far.
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        hit_rate(self.hits, self.faults)
    }
}

fn hit_rate(hits: u64, faults: u64) -> f64 {
    let total = hits + faults;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64
    }
}

/// The final metrics of a run, tagged with what produced them.
///
/// # Example
/// ```
/// use pagesim::{pages, Policy, ReplacementEngine};
///
/// let mut engine = ReplacementEngine::new(pages(&[5, 5, 5]), 1, Policy::Lru).unwrap();
/// engine.run_to_completion();
///
/// let summary = engine.summary();
/// assert_eq!(summary.faults, 1);
/// assert_eq!(summary.hits, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub policy: Policy,
    pub frame_size: usize,
    /// References processed (the whole string once the run is complete).
    pub references: u64,
    pub hits: u64,
    pub faults: u64,
    pub evictions: u64,
}

impl RunSummary {
    pub fn new(policy: Policy, frame_size: usize, stats: &RunStats) -> Self {
        Self {
            policy,
            frame_size,
            references: stats.references(),
            hits: stats.hits,
            faults: stats.faults,
            evictions: stats.evictions,
        }
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        hit_rate(self.hits, self.faults)
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {{ frames: {}, references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.policy,
            self.frame_size,
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
