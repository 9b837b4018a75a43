//! Page table - residency status of every page in the reference string.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::PageId;

/// Where a page lives, as far as the display is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Residency {
    OnDisk,
    InMemory,
}

impl fmt::Display for Residency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Residency::OnDisk => write!(f, "On Disk"),
            Residency::InMemory => write!(f, "In Memory"),
        }
    }
}

/// Maps each page of the reference string to its [`Residency`].
///
/// Seeded with every distinct page as `OnDisk`. A page flips to `InMemory`
/// the first time it is referenced and stays there for the rest of the run,
/// even after it is evicted from the frames.
///
/// Entries iterate in ascending page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageTable {
    entries: BTreeMap<PageId, Residency>,
}

impl PageTable {
    /// Build a table with every page of `sequence` on disk.
    pub fn from_sequence(sequence: &[PageId]) -> Self {
        let entries = sequence
            .iter()
            .map(|&page| (page, Residency::OnDisk))
            .collect();
        Self { entries }
    }

    /// Status of `page`, or `None` if it is not part of the run.
    pub fn status(&self, page: PageId) -> Option<Residency> {
        self.entries.get(&page).copied()
    }

    /// Record that `page` has been referenced.
    pub fn mark_in_memory(&mut self, page: PageId) {
        self.entries.insert(page, Residency::InMemory);
    }

    /// Number of distinct pages in the run.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pages that have been referenced at least once.
    pub fn in_memory_count(&self) -> usize {
        self.entries
            .values()
            .filter(|&&status| status == Residency::InMemory)
            .count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageId, Residency)> + '_ {
        self.entries.iter().map(|(&page, &status)| (page, status))
    }
}
