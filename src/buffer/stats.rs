//! Simulation statistics.

use std::fmt;

/// Counters collected by one simulation run.
///
/// Each run owns its own `SimStats`; nothing is shared between runs, so plain
/// integers are enough.
///
/// # Example
/// ```
/// use pagesim::SimStats;
///
/// let mut stats = SimStats::default();
/// stats.record_fault(false);
/// stats.record_hit();
/// assert_eq!(stats.references(), 2);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// References found resident.
    pub hits: u64,

    /// References that missed (page faults).
    pub faults: u64,

    /// Faults that had to evict a resident page.
    pub evictions: u64,
}

impl SimStats {
    /// Record a resident reference.
    #[inline]
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a page fault, noting whether a victim was evicted.
    #[inline]
    pub fn record_fault(&mut self, evicted: bool) {
        self.faults += 1;
        if evicted {
            self.evictions += 1;
        }
    }

    /// Total references processed.
    #[inline]
    pub fn references(&self) -> u64 {
        self.hits + self.faults
    }

    /// Calculate hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.references();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Faults per 1000 references.
    pub fn faults_per_thousand(&self) -> f64 {
        faults_per_thousand(self.faults, self.references() as usize)
    }
}

/// Faults per 1000 references; 0.0 for an empty stream.
pub fn faults_per_thousand(faults: u64, references: usize) -> f64 {
    if references == 0 {
        0.0
    } else {
        faults as f64 / references as f64 * 1000.0
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SimStats::default();
        assert_eq!(stats.references(), 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.faults_per_thousand(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = SimStats::default();
        for _ in 0..7 {
            stats.record_hit();
        }
        stats.record_fault(false);
        stats.record_fault(true);
        stats.record_fault(true);

        assert_eq!(stats.faults, 3);
        assert_eq!(stats.evictions, 2);
        assert_eq!(stats.hit_rate(), 0.7);
        assert_eq!(stats.faults_per_thousand(), 300.0);
    }

    #[test]
    fn test_faults_per_thousand() {
        assert_eq!(faults_per_thousand(25, 2000), 12.5);
        assert_eq!(faults_per_thousand(5, 0), 0.0);
    }

    #[test]
    fn test_stats_display() {
        let stats = SimStats {
            hits: 80,
            faults: 20,
            evictions: 5,
        };

        let display = format!("{}", stats);
        assert!(display.contains("hits: 80"));
        assert!(display.contains("faults: 20"));
        assert!(display.contains("80.00%"));
    }
}
