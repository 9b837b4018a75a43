//! Replacement Engine - the step-by-step page-replacement simulator.
//!
//! The [`ReplacementEngine`] provides:
//! - Deterministic replay of a reference string
//! - One structured [`StepResult`] per reference
//! - Pluggable eviction policies
//! - Final fault tally

use tracing::{debug, info, trace};

use crate::common::config::SimulationConfig;
use crate::common::{Error, PageId, Result};
use crate::engine::replacer::{Policy, Replacer};
use crate::engine::{FrameSet, Outcome, PageTable, RunStats, RunSummary, StepResult};

/// Replays a reference string against a fixed number of frames.
///
/// # Architecture
/// ```text
/// ┌─────────────────────────────────────────────────────────────┐
/// │                    ReplacementEngine                        │
/// │  ┌──────────────┐  ┌───────────────────────────────────┐   │
/// │  │  sequence    │  │        frames: FrameSet           │   │
/// │  │ 7 0 1 2 0 .. │  │  [slot0] [slot1] [slot2] ...      │   │
/// │  │     ▲cursor  │  └───────────────────────────────────┘   │
/// │  └──────────────┘                                          │
/// │  ┌──────────────┐  ┌──────────────┐  ┌──────────────┐      │
/// │  │ page_table   │  │   replacer   │  │    stats     │      │
/// │  │PageId → Res. │  │ dyn Replacer │  │   RunStats   │      │
/// │  └──────────────┘  └──────────────┘  └──────────────┘      │
/// └─────────────────────────────────────────────────────────────┘
/// ```
///
/// Each run gets its own engine. There is no reset: build a new one to start
/// over with different parameters.
///
/// The engine never sleeps or waits. Pacing belongs to whoever calls
/// [`step`](Self::step).
///
/// # Usage
/// ```
/// use pagesim::{pages, Outcome, Policy, ReplacementEngine};
///
/// let mut engine = ReplacementEngine::new(pages(&[1, 2, 1]), 2, Policy::Lru).unwrap();
///
/// let step = engine.step().unwrap();
/// assert_eq!(step.outcome, Outcome::Miss);
///
/// engine.step();
/// let step = engine.step().unwrap();
/// assert_eq!(step.outcome, Outcome::Hit);
///
/// assert!(engine.step().is_none());
/// assert_eq!(engine.faults(), 2);
/// ```
#[derive(Debug)]
pub struct ReplacementEngine {
    /// The reference string, fixed for the run.
    sequence: Vec<PageId>,

    /// Resident pages.
    frames: FrameSet,

    /// Residency status for display.
    page_table: PageTable,

    /// Eviction strategy for full-frame misses.
    replacer: Box<dyn Replacer>,

    /// Which policy `replacer` implements.
    policy: Policy,

    stats: RunStats,

    /// Index of the next reference to serve.
    cursor: usize,
}

impl ReplacementEngine {
    /// Create an engine for one run.
    ///
    /// # Arguments
    /// * `sequence` - The page reference string (may be empty)
    /// * `frame_size` - Number of frames
    /// * `policy` - Replacement policy used on full-frame misses
    ///
    /// # Errors
    /// - `Error::InvalidFrameSize` if `frame_size` is 0
    pub fn new(sequence: impl Into<Vec<PageId>>, frame_size: usize, policy: Policy) -> Result<Self> {
        if frame_size == 0 {
            return Err(Error::InvalidFrameSize(0));
        }

        let sequence = sequence.into();
        let page_table = PageTable::from_sequence(&sequence);

        debug!(
            %policy,
            frame_size,
            references = sequence.len(),
            distinct_pages = page_table.len(),
            "new simulation run"
        );

        Ok(Self {
            sequence,
            frames: FrameSet::new(frame_size),
            page_table,
            replacer: policy.replacer(),
            policy,
            stats: RunStats::new(),
            cursor: 0,
        })
    }

    /// Create an engine from a [`SimulationConfig`].
    ///
    /// # Errors
    /// - `Error::InvalidFrameSize` if the config has 0 frames
    pub fn with_config(sequence: impl Into<Vec<PageId>>, config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        Self::new(sequence, config.frame_size, config.policy)
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Serve the next reference.
    ///
    /// Returns `None` once the whole string has been served; calling again
    /// after that changes nothing.
    pub fn step(&mut self) -> Option<StepResult> {
        let index = self.cursor;
        let page = *self.sequence.get(index)?;

        let (outcome, evicted, slot) = match self.frames.position(page) {
            Some(slot) => {
                self.replacer.record_hit(&mut self.frames, slot);
                self.stats.record_hit();
                (Outcome::Hit, None, None)
            }
            None => {
                self.stats.record_fault();

                if !self.frames.is_full() {
                    // Empty slot available, nothing to evict
                    let slot = self.frames.push(page);
                    (Outcome::Miss, None, Some(slot))
                } else {
                    let upcoming = &self.sequence[index + 1..];
                    let victim = self.replacer.victim(&self.frames, upcoming);
                    let evicted = self.frames.get(victim);
                    let slot = self.replacer.install(&mut self.frames, victim, page);
                    self.stats.record_eviction();

                    trace!(victim = victim.0, evicted = ?evicted, "replaced page");
                    (Outcome::Miss, evicted, Some(slot))
                }
            }
        };

        self.page_table.mark_in_memory(page);
        self.cursor += 1;

        let step = StepResult {
            index,
            page,
            outcome,
            frames: self.frames.to_vec(),
            evicted,
            slot,
            faults: self.stats.faults,
        };

        debug!(index, page = page.0, %outcome, faults = step.faults, "step");

        if self.is_complete() {
            info!(
                policy = %self.policy,
                faults = self.stats.faults,
                references = self.sequence.len(),
                "simulation complete"
            );
        }

        Some(step)
    }

    /// Serve every remaining reference and return their trace.
    pub fn run_to_completion(&mut self) -> Vec<StepResult> {
        self.by_ref().collect()
    }

    // ========================================================================
    // Inspection
    // ========================================================================

    /// True once every reference has been served.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.sequence.len()
    }

    /// Index of the next reference to serve.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// References not yet served.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.cursor
    }

    /// Cumulative page faults so far.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.stats.faults
    }

    /// Current frame contents, in slot order.
    pub fn frames(&self) -> &[PageId] {
        self.frames.as_slice()
    }

    pub fn frame_size(&self) -> usize {
        self.frames.capacity()
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn sequence(&self) -> &[PageId] {
        &self.sequence
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Metrics of the run so far; final once [`is_complete`](Self::is_complete).
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.policy, self.frame_size(), &self.stats)
    }
}

impl Iterator for ReplacementEngine {
    type Item = StepResult;

    fn next(&mut self) -> Option<StepResult> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ReplacementEngine {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{pages, FrameId};
    use crate::engine::Residency;

    fn engine(ids: &[u32], frame_size: usize, policy: Policy) -> ReplacementEngine {
        ReplacementEngine::new(pages(ids), frame_size, policy).unwrap()
    }

    #[test]
    fn test_zero_frames_rejected() {
        let result = ReplacementEngine::new(pages(&[1, 2]), 0, Policy::Lru);
        assert!(matches!(result, Err(Error::InvalidFrameSize(0))));
    }

    #[test]
    fn test_frame_size_beyond_sequence() {
        let mut engine = engine(&[1, 2], usize::MAX / 2, Policy::Lru);
        let trace = engine.run_to_completion();

        assert!(trace.iter().all(|step| step.evicted.is_none()));
        assert_eq!(engine.faults(), 2);
        assert_eq!(engine.frame_size(), usize::MAX / 2);
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(&[4, 2, 4], 2, Policy::Optimal);

        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.faults(), 0);
        assert!(engine.frames().is_empty());
        assert_eq!(engine.frame_size(), 2);
        assert_eq!(engine.policy(), Policy::Optimal);
        assert_eq!(engine.page_table().len(), 2);
        assert_eq!(engine.page_table().status(PageId(4)), Some(Residency::OnDisk));
    }

    #[test]
    fn test_first_reference_is_miss_into_slot_zero() {
        let mut engine = engine(&[7], 3, Policy::Lru);

        let step = engine.step().unwrap();
        assert_eq!(step.index, 0);
        assert_eq!(step.page, PageId(7));
        assert_eq!(step.outcome, Outcome::Miss);
        assert_eq!(step.slot, Some(FrameId::new(0)));
        assert_eq!(step.evicted, None);
        assert_eq!(step.faults, 1);
        assert!(engine.is_complete());
    }

    #[test]
    fn test_step_past_end_is_noop() {
        let mut engine = engine(&[1], 1, Policy::Lru);
        engine.step();

        let frames_before = engine.frames().to_vec();
        assert!(engine.step().is_none());
        assert!(engine.step().is_none());

        assert_eq!(engine.cursor(), 1);
        assert_eq!(engine.faults(), 1);
        assert_eq!(engine.frames(), frames_before.as_slice());
    }

    #[test]
    fn test_hit_reports_no_slot() {
        let mut engine = engine(&[3, 3], 2, Policy::Lru);
        engine.step();

        let step = engine.step().unwrap();
        assert!(step.is_hit());
        assert_eq!(step.slot, None);
        assert_eq!(step.evicted, None);
        assert_eq!(step.faults, 1);
    }

    #[test]
    fn test_page_table_flips_and_never_reverts() {
        let mut engine = engine(&[1, 2, 3], 1, Policy::Lru);

        engine.step();
        assert_eq!(engine.page_table().status(PageId(1)), Some(Residency::InMemory));
        assert_eq!(engine.page_table().status(PageId(2)), Some(Residency::OnDisk));

        engine.run_to_completion();

        // Page 1 was evicted, but its entry stays InMemory
        assert!(!engine.frames().contains(&PageId(1)));
        assert_eq!(engine.page_table().status(PageId(1)), Some(Residency::InMemory));
        assert_eq!(engine.page_table().in_memory_count(), 3);
    }

    #[test]
    fn test_iterator_size_hint() {
        let mut engine = engine(&[1, 2, 3, 4], 2, Policy::TrueLru);
        assert_eq!(engine.len(), 4);

        engine.step();
        assert_eq!(engine.size_hint(), (3, Some(3)));
        assert_eq!(engine.remaining(), 3);
    }

    #[test]
    fn test_with_config() {
        let config = SimulationConfig::new(2, Policy::Optimal);
        let engine = ReplacementEngine::with_config(pages(&[1]), &config).unwrap();
        assert_eq!(engine.policy(), Policy::Optimal);
        assert_eq!(engine.frame_size(), 2);

        let bad = SimulationConfig::new(0, Policy::Lru);
        assert!(ReplacementEngine::with_config(pages(&[1]), &bad).is_err());
    }

    #[test]
    fn test_summary_after_run() {
        let mut engine = engine(&[1, 2, 1, 3], 2, Policy::Lru);
        engine.run_to_completion();

        let summary = engine.summary();
        assert_eq!(summary.references, 4);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.faults, 3);
        assert_eq!(summary.evictions, 1);
        assert_eq!(summary.policy, Policy::Lru);
    }
}
