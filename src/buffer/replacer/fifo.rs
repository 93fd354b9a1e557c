//! FIFO (First-In-First-Out) replacement policy.
//!
//! Evicts the page that has been resident longest, regardless of how often
//! or how recently it was referenced. FIFO is not a stack algorithm: adding
//! frames can increase the fault count (Belady's anomaly).

use std::collections::VecDeque;

use crate::buffer::replacer::{Access, Policy, Replacer};
use crate::buffer::FrameTable;
use crate::common::{PageId, Result};

/// A FIFO eviction policy.
///
/// Invariant: `queue` holds exactly the resident pages, oldest at the front.
#[derive(Debug, Clone)]
pub struct FifoReplacer {
    table: FrameTable,

    /// Resident pages in admission order (front = oldest).
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    /// Create a FIFO replacer managing `num_frames` frames.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrameCount` if `num_frames` is 0.
    pub fn new(num_frames: usize) -> Result<Self> {
        Ok(Self {
            table: FrameTable::new(num_frames)?,
            queue: VecDeque::with_capacity(num_frames),
        })
    }

    /// Pages in eviction order (next victim first).
    pub fn queue(&self) -> impl Iterator<Item = PageId> + '_ {
        self.queue.iter().copied()
    }
}

impl Replacer for FifoReplacer {
    fn policy(&self) -> Policy {
        Policy::Fifo
    }

    fn frames(&self) -> &FrameTable {
        &self.table
    }

    fn access(&mut self, page: PageId) -> Access {
        // Re-access never reorders.
        if self.table.contains(page) {
            return Access::Hit;
        }

        let evicted = if self.table.is_full() {
            let victim = self.queue.pop_front();
            if let Some(victim) = victim {
                self.table.remove(victim);
            }
            victim
        } else {
            None
        };

        self.table.admit(page);
        self.queue.push_back(page);

        Access::Fault { evicted }
    }
}
