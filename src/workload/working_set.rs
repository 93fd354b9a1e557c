//! Working set - the pages a process is currently favoring.

use rand::Rng;

use crate::common::{Error, PageId, Result, SimConfig};

/// A working set of `size` pages enumerated as `0..size`.
///
/// Every working set starts at page 0, so consecutive working sets of one
/// process overlap; only the size changes on renewal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingSet {
    size: u32,
}

impl WorkingSet {
    /// Create a working set of `size` pages.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `size` is 0.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidConfig(
                "working set needs at least one page".to_string(),
            ));
        }
        Ok(Self { size })
    }

    /// Draw a working set with a size uniform in the configured range.
    ///
    /// The configuration must already be validated.
    pub(crate) fn draw<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Self {
        Self {
            size: rng.gen_range(config.working_set_min..=config.working_set_max),
        }
    }

    /// Number of pages in the set.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Whether `page` belongs to the set.
    #[inline]
    pub fn contains(&self, page: PageId) -> bool {
        page.0 < self.size
    }

    /// Pages in the set, in order.
    pub fn pages(&self) -> impl Iterator<Item = PageId> {
        (0..self.size).map(PageId::new)
    }

    /// Pick a page uniformly from the set.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PageId {
        PageId::new(rng.gen_range(0..self.size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pages_are_contiguous_from_zero() {
        let ws = WorkingSet::new(5).unwrap();
        let pages: Vec<u32> = ws.pages().map(|p| p.0).collect();
        assert_eq!(pages, vec![0, 1, 2, 3, 4]);
        assert!(ws.contains(PageId::new(4)));
        assert!(!ws.contains(PageId::new(5)));
    }

    #[test]
    fn test_empty_working_set_rejected() {
        assert!(matches!(WorkingSet::new(0), Err(Error::InvalidConfig(_))));
        assert_eq!(WorkingSet::new(1).unwrap().size(), 1);
    }

    #[test]
    fn test_draw_respects_size_range() {
        let config = SimConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let ws = WorkingSet::draw(&config, &mut rng);
            assert!((5..=20).contains(&ws.size()));
        }
    }

    #[test]
    fn test_sample_stays_inside() {
        let ws = WorkingSet::new(12).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            assert!(ws.contains(ws.sample(&mut rng)));
        }
    }
}
