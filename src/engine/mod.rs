//! Page-replacement simulation engine.
//!
//! The engine replays a reference string against a fixed number of frames
//! and reports every decision it makes.
//!
//! # Components
//! - [`ReplacementEngine`] - Owns one run and steps through it
//! - [`FrameSet`] - The resident pages, in slot order
//! - [`PageTable`] - Residency status of every page, for display
//! - [`StepResult`] - The trace record of one step
//! - [`RunStats`] / [`RunSummary`] - Hit, fault and eviction counts
//! - [`replacer`] - Eviction policy implementations

mod frame_set;
mod page_table;
mod replacement_engine;
pub mod replacer;
mod stats;
mod step;

pub use frame_set::FrameSet;
pub use page_table::{PageTable, Residency};
pub use replacement_engine::ReplacementEngine;
pub use replacer::{Policy, Replacer};
pub use stats::{RunStats, RunSummary};
pub use step::{Outcome, StepResult};
