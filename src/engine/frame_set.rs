//! FrameSet - the pages currently resident in memory.

use std::fmt;

use crate::common::{FrameId, PageId};

/// The ordered, capacity-bounded set of resident pages.
///
/// Slot order is meaningful: replacers that evict by age read the front as
/// the oldest page. Slots are addressed by [`FrameId`].
///
/// # Invariants
/// - `len() <= capacity()`
/// - no page appears twice
///
/// Both are upheld by the engine, which only pushes a page after checking
/// `contains` and `is_full`; they are re-checked with `debug_assert!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSet {
    slots: Vec<PageId>,
    capacity: usize,
}

impl FrameSet {
    /// Create an empty frame set with room for `capacity` pages.
    ///
    /// `capacity` is only a bound; storage grows with the pages actually
    /// loaded, so a frame count far above the reference string is fine.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Maximum number of resident pages.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when a miss has to evict.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.slots.contains(&page)
    }

    /// Slot holding `page`, if resident.
    pub fn position(&self, page: PageId) -> Option<FrameId> {
        self.slots.iter().position(|&p| p == page).map(FrameId::new)
    }

    /// Page held in `slot`, if the slot is occupied.
    pub fn get(&self, slot: FrameId) -> Option<PageId> {
        self.slots.get(slot.0).copied()
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = &PageId> {
        self.slots.iter()
    }

    /// Snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<PageId> {
        self.slots.clone()
    }

    /// Load `page` into the next empty slot.
    pub fn push(&mut self, page: PageId) -> FrameId {
        debug_assert!(!self.is_full(), "push into full frame set");
        debug_assert!(!self.contains(page), "page {} already resident", page);

        self.slots.push(page);
        FrameId::new(self.slots.len() - 1)
    }

    /// Overwrite `slot` with `page`, returning the page that was there.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub fn replace(&mut self, slot: FrameId, page: PageId) -> PageId {
        debug_assert!(!self.contains(page), "page {} already resident", page);
        std::mem::replace(&mut self.slots[slot.0], page)
    }

    /// Remove the page in `slot`, shifting later slots forward.
    ///
    /// # Panics
    /// Panics if `slot` is not occupied.
    pub fn remove(&mut self, slot: FrameId) -> PageId {
        self.slots.remove(slot.0)
    }

    /// Move the page in `slot` to the back (most recent position).
    ///
    /// Returns the slot it now occupies.
    pub fn promote(&mut self, slot: FrameId) -> FrameId {
        let page = self.slots.remove(slot.0);
        self.slots.push(page);
        FrameId::new(self.slots.len() - 1)
    }
}

/// Formats a page list as `[7, 0, 1]`.
pub(crate) struct PageList<'a>(pub &'a [PageId]);

impl fmt::Display for PageList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")
    }
}

impl fmt::Display for FrameSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        PageList(&self.slots).fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::pages;

    fn filled(ids: &[u32], capacity: usize) -> FrameSet {
        let mut frames = FrameSet::new(capacity);
        for page in pages(ids) {
            frames.push(page);
        }
        frames
    }

    #[test]
    fn test_push_until_full() {
        let mut frames = FrameSet::new(2);
        assert!(frames.is_empty());

        assert_eq!(frames.push(PageId(7)), FrameId::new(0));
        assert_eq!(frames.push(PageId(0)), FrameId::new(1));

        assert!(frames.is_full());
        assert_eq!(frames.len(), 2);
        assert_eq!(frames.capacity(), 2);
    }

    #[test]
    fn test_huge_capacity_allocates_lazily() {
        let mut frames = FrameSet::new(usize::MAX / 2);

        frames.push(PageId(1));
        assert_eq!(frames.capacity(), usize::MAX / 2);
        assert!(!frames.is_full());
    }

    #[test]
    fn test_position_and_get() {
        let frames = filled(&[7, 0, 1], 3);

        assert_eq!(frames.position(PageId(1)), Some(FrameId::new(2)));
        assert_eq!(frames.position(PageId(9)), None);
        assert_eq!(frames.get(FrameId::new(0)), Some(PageId(7)));
        assert_eq!(frames.get(FrameId::new(3)), None);
    }

    #[test]
    fn test_replace_keeps_slot_order() {
        let mut frames = filled(&[7, 0, 1], 3);

        let old = frames.replace(FrameId::new(1), PageId(4));
        assert_eq!(old, PageId(0));
        assert_eq!(frames.as_slice(), pages(&[7, 4, 1]).as_slice());
    }

    #[test]
    fn test_remove_shifts_forward() {
        let mut frames = filled(&[7, 0, 1], 3);

        assert_eq!(frames.remove(FrameId::new(0)), PageId(7));
        assert_eq!(frames.as_slice(), pages(&[0, 1]).as_slice());
        assert!(!frames.is_full());
    }

    #[test]
    fn test_promote_moves_to_back() {
        let mut frames = filled(&[7, 0, 1], 3);

        assert_eq!(frames.promote(FrameId::new(0)), FrameId::new(2));
        assert_eq!(frames.as_slice(), pages(&[0, 1, 7]).as_slice());
    }

    #[test]
    fn test_display() {
        assert_eq!(filled(&[7, 0, 1], 3).to_string(), "[7, 0, 1]");
        assert_eq!(FrameSet::new(3).to_string(), "[]");
    }
}
