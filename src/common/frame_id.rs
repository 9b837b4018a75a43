//! Frame slot identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A slot in the simulated memory, counted from zero.
///
/// The engine and replacers index with the raw value. People read frames
/// counted from one, which is what [`number`](Self::number) and `Display`
/// give: slot 0 prints as `Frame 1`.
///
/// # Example
/// ```
/// use pagesim::FrameId;
///
/// let slot = FrameId::new(2);
/// assert_eq!(slot.number(), 3);
/// assert_eq!(slot.to_string(), "Frame 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrameId(pub usize);

impl FrameId {
    #[inline]
    pub fn new(slot: usize) -> Self {
        FrameId(slot)
    }

    /// One-based frame number for display.
    #[inline]
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame {}", self.number())
    }
}
