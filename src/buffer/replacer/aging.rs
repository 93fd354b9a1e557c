//! Aging replacement policy.
//!
//! A software approximation of LRU. Every resident page owns an 8-bit shift
//! register. On every reference step all registers shift right by one bit and
//! the referenced page gets its high bit set:
//!
//! ```text
//! step      ref   page A     page B
//! t         A     1000_0000  0000_0000
//! t+1       B     0100_0000  1000_0000
//! t+2       A     1010_0000  0100_0000
//! ```
//!
//! A page untouched for eight steps decays to zero. On a miss at capacity the
//! page with the numerically smallest register is evicted.

use std::collections::HashMap;

use crate::buffer::replacer::{Access, Policy, Replacer};
use crate::buffer::FrameTable;
use crate::common::{PageId, Result};

/// Bit set on the register of the page referenced this step.
pub const REFERENCED_BIT: u8 = 0x80;

/// An aging eviction policy.
///
/// Invariant: the key set of `counters` equals the resident set.
///
/// # Tie-break
/// When several pages share the minimum register value, the one admitted
/// earliest (first in [`FrameTable::iter`] order) is evicted. Fault counts
/// depend on this order, so it must stay stable.
#[derive(Debug, Clone)]
pub struct AgingReplacer {
    table: FrameTable,

    /// Aging register per resident page.
    counters: HashMap<PageId, u8>,
}

impl AgingReplacer {
    /// Create an aging replacer managing `num_frames` frames.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrameCount` if `num_frames` is 0.
    pub fn new(num_frames: usize) -> Result<Self> {
        Ok(Self {
            table: FrameTable::new(num_frames)?,
            counters: HashMap::with_capacity(num_frames),
        })
    }

    /// Current register of a resident page.
    pub fn counter(&self, page: PageId) -> Option<u8> {
        self.counters.get(&page).copied()
    }

    /// Pick the resident page with the smallest register.
    ///
    /// `min_by_key` keeps the first minimum, which gives the admission-order
    /// tie-break.
    fn select_victim(&self) -> Option<PageId> {
        self.table
            .iter()
            .min_by_key(|page| self.counters.get(page).copied().unwrap_or(0))
    }

    /// Shift every register and mark the referenced page.
    fn age(&mut self, referenced: PageId) {
        for page in self.table.iter() {
            if let Some(counter) = self.counters.get_mut(&page) {
                *counter >>= 1;
                if page == referenced {
                    *counter |= REFERENCED_BIT;
                }
            }
        }
    }
}

impl Replacer for AgingReplacer {
    fn policy(&self) -> Policy {
        Policy::Aging
    }

    fn frames(&self) -> &FrameTable {
        &self.table
    }

    fn access(&mut self, page: PageId) -> Access {
        let outcome = if self.table.contains(page) {
            Access::Hit
        } else {
            let evicted = if self.table.is_full() {
                let victim = self.select_victim();
                if let Some(victim) = victim {
                    self.table.remove(victim);
                    self.counters.remove(&victim);
                }
                victim
            } else {
                None
            };

            // Admitted at zero; the aging pass below sets its high bit.
            self.table.admit(page);
            self.counters.insert(page, 0);

            Access::Fault { evicted }
        };

        self.age(page);
        outcome
    }
}
