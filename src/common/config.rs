//! Configuration constants and run settings for pagesim.

use std::time::Duration;

use crate::common::{Error, Result};
use crate::engine::Policy;

/// Number of frames used when the user does not pick one.
pub const DEFAULT_FRAME_SIZE: usize = 3;

/// Delay between animation steps, in milliseconds.
///
/// Slow enough to follow each decision by eye, fast enough that a
/// twenty-reference string finishes in well under half a minute.
pub const DEFAULT_STEP_DELAY_MS: u64 = 800;

/// Settings for one simulation run.
///
/// The engine only cares about `frame_size` and `policy`; `step_delay` is
/// read by the pacing [`Driver`](crate::driver::Driver).
///
/// # Example
/// ```
/// use pagesim::{Policy, SimulationConfig};
///
/// let config = SimulationConfig::default();
/// assert_eq!(config.frame_size, 3);
/// assert_eq!(config.policy, Policy::Lru);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of frames available to resident pages.
    pub frame_size: usize,

    /// Replacement policy used on full-frame misses.
    pub policy: Policy,

    /// Pause between two steps when animating.
    pub step_delay: Duration,
}

impl SimulationConfig {
    /// Create a config with the default delay.
    pub fn new(frame_size: usize, policy: Policy) -> Self {
        Self {
            frame_size,
            policy,
            step_delay: Duration::from_millis(DEFAULT_STEP_DELAY_MS),
        }
    }

    /// Replace the step delay.
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Check the settings before a run starts.
    ///
    /// # Errors
    /// - `Error::InvalidFrameSize` if `frame_size` is 0
    pub fn validate(&self) -> Result<()> {
        if self.frame_size == 0 {
            return Err(Error::InvalidFrameSize(0));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_SIZE, Policy::Lru)
    }
}
