//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a virtual page referenced by the simulation.
///
/// Page numbers are non-negative integers; `u32` covers anything a user can
/// reasonably type into a reference string.
///
/// # Example
/// ```
/// use pagesim::PageId;
///
/// let page_id = PageId::new(42);
/// assert_eq!(page_id.0, 42);
/// assert_eq!(page_id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u32);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PageId(id)
    }
}

impl From<u32> for PageId {
    #[inline]
    fn from(id: u32) -> Self {
        PageId(id)
    }
}

// Bare number: log lines read "Page 7", frame lists read "[7, 0, 1]".
// Width and alignment pass through, so `{:^5}` centers the number.
impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Build a reference sequence from raw page numbers.
///
/// Mostly a convenience for tests and benches.
pub fn pages(ids: &[u32]) -> Vec<PageId> {
    ids.iter().copied().map(PageId).collect()
}
