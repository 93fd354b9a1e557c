//! Configuration constants and run parameters for the simulator.

use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::common::{Error, Result};

/// Total number of references generated across all processes.
pub const DEFAULT_TOTAL_REFERENCES: usize = 10_000;

/// Number of simulated processes sharing the reference budget.
pub const DEFAULT_NUM_PROCESSES: usize = 5;

/// Size of the page universe; random references fall in `[0, 99]`.
pub const DEFAULT_PAGE_UNIVERSE: u32 = 100;

/// Working set sizes are drawn uniformly from this range.
pub const DEFAULT_WORKING_SET_SIZE: RangeInclusive<u32> = 5..=20;

/// Working set lifetimes (in reference steps) are drawn from this range.
///
/// A lifetime `d` is applied as a per-step renewal probability of `1/d`.
pub const DEFAULT_WORKING_SET_DURATION: RangeInclusive<u32> = 200..=500;

/// Probability that a reference targets the current working set.
pub const DEFAULT_LOCALITY: f64 = 0.8;

/// Frame budgets tested when the user gives none (or gives garbage).
pub const DEFAULT_FRAME_BUDGETS: [usize; 5] = [3, 5, 10, 15, 20];

/// Where the generated reference sequence is logged.
pub const DEFAULT_LOG_PATH: &str = "references.txt";

/// Parameters for generating a reference stream.
///
/// # Example
/// ```
/// use pagesim::SimConfig;
///
/// let config = SimConfig::default();
/// assert_eq!(config.references_per_process(), 2000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Requested number of references across all processes.
    pub total_references: usize,

    /// Number of processes; each gets `total_references / num_processes`.
    pub num_processes: usize,

    /// Random (non-local) references are drawn from `[0, page_universe)`.
    pub page_universe: u32,

    /// Smallest working set size.
    pub working_set_min: u32,

    /// Largest working set size.
    pub working_set_max: u32,

    /// Shortest working set lifetime.
    pub duration_min: u32,

    /// Longest working set lifetime.
    pub duration_max: u32,

    /// Probability of a working-set reference.
    pub locality: f64,

    /// Destination of the human-readable reference log.
    pub log_path: PathBuf,

    /// Seed for the random source; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// References generated for each process.
    ///
    /// Integer division: a remainder is dropped, never redistributed.
    #[inline]
    pub fn references_per_process(&self) -> usize {
        if self.num_processes == 0 {
            0
        } else {
            self.total_references / self.num_processes
        }
    }

    /// Length of the full concatenated stream.
    #[inline]
    pub fn stream_len(&self) -> usize {
        self.references_per_process() * self.num_processes
    }

    /// Check that the configuration describes a runnable workload.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.num_processes == 0 {
            return Err(Error::InvalidConfig(
                "num_processes must be at least 1".to_string(),
            ));
        }
        if self.page_universe == 0 {
            return Err(Error::InvalidConfig(
                "page_universe must be at least 1".to_string(),
            ));
        }
        if self.working_set_min == 0 || self.working_set_min > self.working_set_max {
            return Err(Error::InvalidConfig(format!(
                "working set size range {}..={} is empty or starts at 0",
                self.working_set_min, self.working_set_max
            )));
        }
        if self.duration_min == 0 || self.duration_min > self.duration_max {
            return Err(Error::InvalidConfig(format!(
                "working set duration range {}..={} is empty or starts at 0",
                self.duration_min, self.duration_max
            )));
        }
        if !(0.0..=1.0).contains(&self.locality) {
            return Err(Error::InvalidConfig(format!(
                "locality {} is outside [0, 1]",
                self.locality
            )));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_references: DEFAULT_TOTAL_REFERENCES,
            num_processes: DEFAULT_NUM_PROCESSES,
            page_universe: DEFAULT_PAGE_UNIVERSE,
            working_set_min: *DEFAULT_WORKING_SET_SIZE.start(),
            working_set_max: *DEFAULT_WORKING_SET_SIZE.end(),
            duration_min: *DEFAULT_WORKING_SET_DURATION.start(),
            duration_max: *DEFAULT_WORKING_SET_DURATION.end(),
            locality: DEFAULT_LOCALITY,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_partition_is_even() {
        let config = SimConfig::default();
        assert_eq!(config.references_per_process(), 2000);
        assert_eq!(config.stream_len(), DEFAULT_TOTAL_REFERENCES);
    }

    #[test]
    fn test_remainder_is_dropped() {
        let config = SimConfig {
            total_references: 10,
            num_processes: 3,
            ..SimConfig::default()
        };
        assert_eq!(config.references_per_process(), 3);
        assert_eq!(config.stream_len(), 9);
    }

    #[test]
    fn test_validate_rejects_zero_processes() {
        let config = SimConfig {
            num_processes: 0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert_eq!(config.references_per_process(), 0);
    }

    #[test]
    fn test_validate_rejects_inverted_ranges() {
        let config = SimConfig {
            working_set_min: 30,
            working_set_max: 20,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());

        let config = SimConfig {
            duration_min: 0,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_locality() {
        let config = SimConfig {
            locality: 1.5,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_frame_budgets() {
        assert_eq!(DEFAULT_FRAME_BUDGETS, [3, 5, 10, 15, 20]);
        assert!(DEFAULT_FRAME_BUDGETS.iter().all(|&f| f > 0));
    }
}
