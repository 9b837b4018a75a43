//! pagesim - A step-by-step simulator for page-replacement policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Input Layer (input/)                        │   │
//! │  │       "7 0 1 2" → Vec<PageId>,  "3" → frame size         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Engine (engine/)  [Policy chosen per run]          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │   Replacement Policies: LRU | True LRU | Optimal │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │   ReplacementEngine + FrameSet + PageTable + RunStats   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓ StepResult                       │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Driver Layer (driver/)                         │   │
//! │  │     Driver (pacing) + TextRenderer / JsonRenderer        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config, logging)
//! - [`engine`] - The replacement engine and eviction policies
//! - [`input`] - Parsing reference strings and frame sizes
//! - [`driver`] - Pacing loop, renderers, policy comparison
//!
//! # Quick Start
//! ```
//! use pagesim::{input::parse_sequence, Policy, ReplacementEngine};
//!
//! let sequence = parse_sequence("7 0 1 2 0 3 0 4").unwrap();
//! let mut engine = ReplacementEngine::new(sequence, 3, Policy::Optimal).unwrap();
//!
//! for step in engine.by_ref() {
//!     println!("{}", step);
//! }
//! assert_eq!(engine.faults(), 6);
//! ```

pub mod common;
pub mod driver;
pub mod engine;
pub mod input;

// Re-export commonly used items at crate root for convenience
pub use common::config::{SimulationConfig, DEFAULT_FRAME_SIZE, DEFAULT_STEP_DELAY_MS};
pub use common::{pages, Error, FrameId, PageId, Result};

pub use driver::{compare_policies, Driver, JsonRenderer, Renderer, RunHeader, TextRenderer};
pub use engine::{
    FrameSet, Outcome, PageTable, Policy, ReplacementEngine, Residency, RunStats, RunSummary,
    StepResult,
};
