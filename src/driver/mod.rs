//! Driving a simulation: pacing, rendering, comparing.
//!
//! The engine only knows how to take one step. Everything about *when* a
//! step happens and *where* its output goes lives here.
//!
//! # Components
//! - [`Driver`] - Fixed-cadence loop around [`ReplacementEngine::step`]
//! - [`Renderer`] - Output sink for a run ([`TextRenderer`], [`JsonRenderer`])
//! - [`compare_policies`] - Run every policy on the same input

mod render;

use std::thread;
use std::time::Duration;

use tracing::{debug, info};

use crate::common::config::SimulationConfig;
use crate::common::{PageId, Result};
use crate::engine::{Policy, ReplacementEngine, RunSummary};

pub use render::{frame_row, JsonRenderer, Renderer, RunHeader, TextRenderer};

/// Steps an engine to completion at a fixed pace.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use pagesim::{pages, Driver, JsonRenderer, Policy, ReplacementEngine};
///
/// let engine = ReplacementEngine::new(pages(&[1, 2, 1]), 2, Policy::Lru).unwrap();
/// let mut renderer = JsonRenderer::new(Vec::new());
///
/// let summary = Driver::new(Duration::ZERO).run(engine, &mut renderer).unwrap();
/// assert_eq!(summary.faults, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Driver {
    step_delay: Duration,
}

impl Driver {
    /// Create a driver that pauses `step_delay` between steps.
    ///
    /// `Duration::ZERO` runs without pausing.
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.step_delay)
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Run `engine` to completion, feeding every step to `renderer`.
    ///
    /// Sleeps between steps, never after the last one. Returns the final
    /// summary, which has also been passed to [`Renderer::finish`].
    ///
    /// # Errors
    /// Whatever the renderer fails with; the run stops at that step.
    pub fn run<R>(&self, mut engine: ReplacementEngine, renderer: &mut R) -> Result<RunSummary>
    where
        R: Renderer + ?Sized,
    {
        renderer.begin(&RunHeader::from_engine(&engine))?;

        while let Some(step) = engine.step() {
            renderer.render_step(&step)?;

            if !engine.is_complete() && !self.step_delay.is_zero() {
                thread::sleep(self.step_delay);
            }
        }

        let summary = engine.summary();
        renderer.finish(&summary)?;
        debug!(policy = %summary.policy, faults = summary.faults, "run rendered");
        Ok(summary)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

/// Run every [`Policy`] on the same reference string, without pacing.
///
/// Summaries come back in [`Policy::ALL`] order.
///
/// # Errors
/// - `Error::InvalidFrameSize` if `frame_size` is 0
pub fn compare_policies(sequence: &[PageId], frame_size: usize) -> Result<Vec<RunSummary>> {
    Policy::ALL
        .iter()
        .map(|&policy| {
            let mut engine = ReplacementEngine::new(sequence, frame_size, policy)?;
            engine.run_to_completion();

            let summary = engine.summary();
            info!(%policy, faults = summary.faults, "policy compared");
            Ok(summary)
        })
        .collect()
}
