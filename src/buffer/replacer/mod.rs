//! Eviction policy implementations (replacers).
//!
//! Currently implements:
//! - [`FifoReplacer`] - evicts the oldest-admitted page
//! - [`AgingReplacer`] - evicts the page with the smallest 8-bit aging counter
//!
//! Both own a [`FrameTable`] and expose the same [`Replacer::access`]
//! operation, so the simulator drives them without knowing which is which.

mod aging;
mod fifo;

use std::fmt;

pub use aging::AgingReplacer;
pub use fifo::FifoReplacer;

use crate::buffer::FrameTable;
use crate::common::{PageId, Result};

/// Outcome of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,

    /// The page faulted; `evicted` names the victim when the table was full.
    Fault { evicted: Option<PageId> },
}

impl Access {
    /// Whether this reference was a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }
}

/// A page-replacement policy driving its own bounded frame table.
pub trait Replacer {
    /// Which policy this replacer implements.
    fn policy(&self) -> Policy;

    /// The resident set.
    fn frames(&self) -> &FrameTable;

    /// Reference a page, admitting it (and evicting a victim) on a miss.
    fn access(&mut self, page: PageId) -> Access;
}

/// The eviction policies under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Policy {
    Fifo,
    Aging,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 2] = [Policy::Fifo, Policy::Aging];

    /// Display name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "FIFO",
            Policy::Aging => "Aging",
        }
    }

    /// Build a fresh replacer of this policy with `num_frames` frames.
    ///
    /// # Errors
    /// Returns `Error::InvalidFrameCount` if `num_frames` is 0.
    pub fn replacer(self, num_frames: usize) -> Result<Box<dyn Replacer>> {
        Ok(match self {
            Policy::Fifo => Box::new(FifoReplacer::new(num_frames)?),
            Policy::Aging => Box::new(AgingReplacer::new(num_frames)?),
        })
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn test_policy_builds_matching_replacer() {
        for policy in Policy::ALL {
            let replacer = policy.replacer(4).unwrap();
            assert_eq!(replacer.policy(), policy);
            assert_eq!(replacer.frames().capacity(), 4);
            assert!(replacer.frames().is_empty());
        }
    }

    #[test]
    fn test_policy_rejects_zero_frames() {
        for policy in Policy::ALL {
            assert!(matches!(
                policy.replacer(0),
                Err(Error::InvalidFrameCount(0))
            ));
        }
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(Policy::Fifo.to_string(), "FIFO");
        assert_eq!(Policy::Aging.to_string(), "Aging");
    }

    #[test]
    fn test_access_is_fault() {
        assert!(!Access::Hit.is_fault());
        assert!(Access::Fault { evicted: None }.is_fault());
    }
}
