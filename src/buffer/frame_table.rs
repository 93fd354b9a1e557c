//! Frame table - the bounded set of resident pages.
//!
//! A [`FrameTable`] is the state both replacers share: which pages are
//! resident and in what order they were admitted. Policy-specific state
//! (the FIFO queue, the aging counters) lives in the replacers themselves.

use std::collections::HashSet;

use crate::common::{Error, PageId, Result};

/// A fixed-capacity set of resident pages.
///
/// # Layout
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ slots:    [p3] [p7] [p1] ...   (admission)  │
/// │ resident: {p1, p3, p7}         (O(1) test)  │
/// └─────────────────────────────────────────────┘
/// ```
///
/// Iteration follows admission order among the pages still resident. Removing
/// a page closes the gap, so a later admission always lands at the tail.
///
/// # Example
/// ```
/// use pagesim::buffer::FrameTable;
/// use pagesim::PageId;
///
/// let mut table = FrameTable::new(2).unwrap();
/// table.admit(PageId::new(4));
/// assert!(table.contains(PageId::new(4)));
/// assert!(!table.is_full());
/// ```
#[derive(Debug, Clone)]
pub struct FrameTable {
    /// Resident pages in admission order.
    slots: Vec<PageId>,

    /// Set for O(1) membership check.
    resident: HashSet<PageId>,

    /// Number of frames (immutable after construction).
    capacity: usize,
}

impl FrameTable {
    /// Create an empty frame table with `capacity` frames.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrameCount` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidFrameCount(capacity));
        }

        Ok(Self {
            slots: Vec::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
            capacity,
        })
    }

    /// Check whether a page is resident.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        self.resident.contains(&page)
    }

    /// Whether every frame is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Number of resident pages.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no page is resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of frames.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Admit a page into a free frame.
    ///
    /// The caller must make room first; admitting into a full table or
    /// admitting a page twice is a replacer bug.
    pub fn admit(&mut self, page: PageId) {
        debug_assert!(!self.is_full(), "admit into a full frame table");
        let inserted = self.resident.insert(page);
        debug_assert!(inserted, "page {} admitted twice", page);
        self.slots.push(page);
    }

    /// Remove a resident page, freeing its frame.
    ///
    /// Returns false if the page was not resident.
    pub fn remove(&mut self, page: PageId) -> bool {
        if !self.resident.remove(&page) {
            return false;
        }
        if let Some(pos) = self.slots.iter().position(|&p| p == page) {
            self.slots.remove(pos);
        }
        true
    }

    /// Iterate resident pages in admission order.
    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.slots.iter().copied()
    }
}
