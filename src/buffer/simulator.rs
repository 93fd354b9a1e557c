//! Simulation entry points - drive a replacer over a reference stream.
//!
//! Every call builds a fresh replacer, so no state leaks between runs.

use log::debug;

use crate::buffer::replacer::{Access, Policy, Replacer};
use crate::buffer::SimStats;
use crate::common::{PageId, Result};

/// Feed every reference through `replacer`, counting hits and faults.
pub fn run_replacer(replacer: &mut dyn Replacer, references: &[PageId]) -> SimStats {
    let mut stats = SimStats::default();

    for &page in references {
        match replacer.access(page) {
            Access::Hit => stats.record_hit(),
            Access::Fault { evicted } => stats.record_fault(evicted.is_some()),
        }
    }

    stats
}

/// Simulate `policy` with `num_frames` frames over `references`.
///
/// # Errors
/// Returns `Error::InvalidFrameCount` if `num_frames` is 0.
pub fn simulate(policy: Policy, references: &[PageId], num_frames: usize) -> Result<SimStats> {
    let mut replacer = policy.replacer(num_frames)?;
    let stats = run_replacer(replacer.as_mut(), references);

    debug!(
        "{} with {} frames over {} references: {}",
        policy,
        num_frames,
        references.len(),
        stats
    );

    Ok(stats)
}

/// Page faults under FIFO.
///
/// # Example
/// ```
/// use pagesim::buffer::fifo;
/// use pagesim::PageId;
///
/// let refs: Vec<PageId> = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
///     .into_iter()
///     .map(PageId::new)
///     .collect();
/// assert_eq!(fifo(&refs, 3).unwrap(), 9);
/// assert_eq!(fifo(&refs, 4).unwrap(), 10);
/// ```
pub fn fifo(references: &[PageId], num_frames: usize) -> Result<u64> {
    Ok(simulate(Policy::Fifo, references, num_frames)?.faults)
}

/// Page faults under Aging.
///
/// # Example
/// ```
/// use pagesim::buffer::aging;
/// use pagesim::PageId;
///
/// let refs: Vec<PageId> = [1, 2, 1, 3, 2, 1].into_iter().map(PageId::new).collect();
/// assert_eq!(aging(&refs, 2).unwrap(), 5);
/// ```
pub fn aging(references: &[PageId], num_frames: usize) -> Result<u64> {
    Ok(simulate(Policy::Aging, references, num_frames)?.faults)
}
