//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`SimulationConfig`](config::SimulationConfig)
//! - Error types
//! - Identifiers (PageId, FrameId)
//! - Logging setup

pub mod config;
pub mod error;
mod frame_id;
pub mod logger;
mod page_id;

pub use error::{Error, Result};
pub use frame_id::FrameId;
pub use page_id::{pages, PageId};
