//! Reference generator - the working-set locality model.
//!
//! For each process:
//! ```text
//! ws  = draw size in [5, 20]; pages 0..size
//! d   = draw lifetime in [200, 500]
//! repeat refs_per_process times:
//!     p < 0.8  -> emit uniform page from ws
//!     else     -> emit uniform page from [0, universe)
//!     p < 1/d  -> ws = fresh working set (size redrawn)
//! ```
//! The lifetime is drawn once per process and acts as a renewal probability,
//! not a countdown.

use log::{debug, info};
use rand::Rng;

use crate::common::{PageId, Result, SimConfig};
use crate::workload::{ReferenceStream, WorkingSet};

/// Reference iterator for a single simulated process.
///
/// Yields exactly `config.references_per_process()` pages. The working set
/// reported by [`ProcessStream::working_set`] before a call to `next` is the
/// one that call samples from.
pub struct ProcessStream<'a, R: Rng + ?Sized> {
    config: &'a SimConfig,
    rng: &'a mut R,
    working_set: WorkingSet,
    /// Per-step renewal probability, `1 / duration`.
    renewal: f64,
    remaining: usize,
    renewals: usize,
}

impl<'a, R: Rng + ?Sized> ProcessStream<'a, R> {
    /// Start a process: draw its first working set and its lifetime.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if the configuration fails validation.
    pub fn new(config: &'a SimConfig, rng: &'a mut R) -> Result<Self> {
        config.validate()?;

        let working_set = WorkingSet::draw(config, rng);
        let duration = rng.gen_range(config.duration_min..=config.duration_max);

        Ok(Self {
            config,
            rng,
            working_set,
            renewal: 1.0 / f64::from(duration),
            remaining: config.references_per_process(),
            renewals: 0,
        })
    }

    /// The working set the next reference is drawn from.
    #[inline]
    pub fn working_set(&self) -> WorkingSet {
        self.working_set
    }

    /// How many times the working set has been replaced so far.
    #[inline]
    pub fn renewals(&self) -> usize {
        self.renewals
    }

    fn next_page(&mut self) -> PageId {
        if self.rng.gen_bool(self.config.locality) {
            self.working_set.sample(self.rng)
        } else {
            PageId::new(self.rng.gen_range(0..self.config.page_universe))
        }
    }
}

impl<R: Rng + ?Sized> Iterator for ProcessStream<'_, R> {
    type Item = PageId;

    fn next(&mut self) -> Option<PageId> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let page = self.next_page();

        if self.rng.gen_bool(self.renewal) {
            self.working_set = WorkingSet::draw(self.config, self.rng);
            self.renewals += 1;
        }

        Some(page)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Generate the full reference stream, one process after another.
///
/// Each process contributes `total_references / num_processes` references;
/// any remainder is dropped.
///
/// # Errors
/// Returns `Error::InvalidConfig` if the configuration fails validation.
///
/// # Example
/// ```
/// use pagesim::workload::generate;
/// use pagesim::SimConfig;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let config = SimConfig { total_references: 100, num_processes: 4, ..SimConfig::default() };
/// let stream = generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(stream.len(), 100);
/// assert_eq!(stream.processes().count(), 4);
/// ```
pub fn generate<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Result<ReferenceStream> {
    config.validate()?;

    let per_process = config.references_per_process();
    let mut pages = Vec::with_capacity(config.stream_len());

    for process in 0..config.num_processes {
        let mut stream = ProcessStream::new(config, rng)?;
        debug!(
            "process {}: initial working set of {} pages, renewal p = {:.4}",
            process + 1,
            stream.working_set().size(),
            stream.renewal
        );

        pages.extend(stream.by_ref());

        debug!(
            "process {}: {} references, {} working set renewals",
            process + 1,
            per_process,
            stream.renewals()
        );
    }

    let stream = ReferenceStream::new(pages, config.num_processes)?;
    info!(
        "generated {} references for {} processes (fingerprint {:08x})",
        stream.len(),
        stream.num_processes(),
        stream.fingerprint()
    );

    Ok(stream)
}
