//! Run aggregator - every policy over every scope and frame budget.
//!
//! For each requested budget the [`Aggregator`] runs FIFO and Aging over
//! each process's substream and over the full stream, timing every run.

use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use parking_lot::Mutex;

use crate::buffer::{faults_per_thousand, simulate, Policy};
use crate::common::{Error, PageId, Result};
use crate::workload::ReferenceStream;

/// Which part of the stream a result covers.
///
/// Ordering puts every process before the total, processes by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scope {
    /// One process's substream (0-based index).
    Process(usize),

    /// The full concatenated stream.
    Total,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Process(index) => write!(f, "Process {}", index + 1),
            Scope::Total => f.write_str("Total"),
        }
    }
}

/// One (policy, scope, frame budget) measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultEntry {
    pub policy: Policy,
    pub scope: Scope,
    pub frames: usize,
    pub faults: u64,
    /// Length of the stream the policy ran over.
    pub references: usize,
    /// Wall-clock time of the simulation.
    pub elapsed: Duration,
}

impl ResultEntry {
    /// Faults per 1000 references of this entry's scope.
    pub fn faults_per_thousand(&self) -> f64 {
        faults_per_thousand(self.faults, self.references)
    }
}

/// All measurements of one run, in scope / budget / policy order.
#[derive(Debug, Clone, Default)]
pub struct ResultsTable {
    budgets: Vec<usize>,
    entries: Vec<ResultEntry>,
}

impl ResultsTable {
    /// Create an empty table for the given frame budgets.
    pub fn new(budgets: &[usize]) -> Self {
        Self {
            budgets: budgets.to_vec(),
            entries: Vec::new(),
        }
    }

    /// Append a measurement.
    pub fn push(&mut self, entry: ResultEntry) {
        self.entries.push(entry);
    }

    /// Frame budgets in the order they were requested.
    pub fn budgets(&self) -> &[usize] {
        &self.budgets
    }

    /// Every entry.
    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Distinct scopes, processes first.
    pub fn scopes(&self) -> Vec<Scope> {
        let mut scopes: Vec<Scope> = self.entries.iter().map(|e| e.scope).collect();
        scopes.sort();
        scopes.dedup();
        scopes
    }

    /// Entries of one scope, in budget order.
    pub fn scope_entries(&self, scope: Scope) -> impl Iterator<Item = &ResultEntry> + '_ {
        self.entries.iter().filter(move |e| e.scope == scope)
    }

    /// Entries of one policy within one scope, in budget order.
    pub fn series(&self, policy: Policy, scope: Scope) -> impl Iterator<Item = &ResultEntry> + '_ {
        self.scope_entries(scope).filter(move |e| e.policy == policy)
    }

    /// Fault counts of one policy within one scope, in budget order.
    pub fn faults(&self, policy: Policy, scope: Scope) -> Vec<u64> {
        self.series(policy, scope).map(|e| e.faults).collect()
    }

    /// Look up a single measurement.
    pub fn get(&self, policy: Policy, scope: Scope, frames: usize) -> Option<&ResultEntry> {
        self.series(policy, scope).find(|e| e.frames == frames)
    }

    fn sort(&mut self) {
        // Stable: keeps budget / policy order inside each scope.
        self.entries.sort_by_key(|e| e.scope);
    }
}

/// Runs both policies over every scope for a set of frame budgets.
///
/// # Example
/// ```
/// use pagesim::runner::{Aggregator, Scope};
/// use pagesim::workload::ReferenceStream;
/// use pagesim::buffer::Policy;
///
/// let stream = ReferenceStream::from_processes([vec![1, 2, 3, 1], vec![4, 4, 5, 6]]).unwrap();
/// let table = Aggregator::new(&stream, &[1, 2]).run().unwrap();
///
/// // 2 policies x 2 budgets x (2 processes + total)
/// assert_eq!(table.len(), 12);
/// assert_eq!(table.faults(Policy::Fifo, Scope::Total).len(), 2);
/// ```
pub struct Aggregator<'a> {
    stream: &'a ReferenceStream,
    budgets: &'a [usize],
    parallel: bool,
}

impl<'a> Aggregator<'a> {
    /// Create a sequential aggregator.
    pub fn new(stream: &'a ReferenceStream, budgets: &'a [usize]) -> Self {
        Self {
            stream,
            budgets,
            parallel: false,
        }
    }

    /// Evaluate process substreams on one thread each.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run every combination and collect the results.
    ///
    /// # Errors
    /// - `Error::EmptyFrameBudgets` if no budgets were given
    /// - `Error::InvalidFrameCount` if any budget is 0 (checked before any run)
    pub fn run(&self) -> Result<ResultsTable> {
        if self.budgets.is_empty() {
            return Err(Error::EmptyFrameBudgets);
        }
        if let Some(&bad) = self.budgets.iter().find(|&&f| f == 0) {
            return Err(Error::InvalidFrameCount(bad));
        }

        info!(
            "evaluating {} policies x {} budgets over {} processes{}",
            Policy::ALL.len(),
            self.budgets.len(),
            self.stream.num_processes(),
            if self.parallel { " (parallel)" } else { "" }
        );

        let mut table = if self.parallel {
            self.run_processes_parallel()?
        } else {
            self.run_processes_sequential()?
        };

        for entry in evaluate_scope(Scope::Total, self.stream.pages(), self.budgets)? {
            table.push(entry);
        }

        table.sort();
        Ok(table)
    }

    fn run_processes_sequential(&self) -> Result<ResultsTable> {
        let mut table = ResultsTable::new(self.budgets);
        for (index, pages) in self.stream.processes().enumerate() {
            for entry in evaluate_scope(Scope::Process(index), pages, self.budgets)? {
                table.push(entry);
            }
        }
        Ok(table)
    }

    fn run_processes_parallel(&self) -> Result<ResultsTable> {
        let table = Mutex::new(ResultsTable::new(self.budgets));
        let budgets = self.budgets;

        thread::scope(|s| {
            let handles: Vec<_> = self
                .stream
                .processes()
                .enumerate()
                .map(|(index, pages)| {
                    let table = &table;
                    s.spawn(move || -> Result<()> {
                        let entries = evaluate_scope(Scope::Process(index), pages, budgets)?;
                        // One lock per worker keeps its block contiguous.
                        let mut table = table.lock();
                        for entry in entries {
                            table.push(entry);
                        }
                        Ok(())
                    })
                })
                .collect();

            for handle in handles {
                match handle.join() {
                    Ok(result) => result?,
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
            Ok::<(), Error>(())
        })?;

        Ok(table.into_inner())
    }
}

/// Run both policies over `pages` for every budget.
fn evaluate_scope(scope: Scope, pages: &[PageId], budgets: &[usize]) -> Result<Vec<ResultEntry>> {
    let mut entries = Vec::with_capacity(budgets.len() * Policy::ALL.len());

    for &frames in budgets {
        for policy in Policy::ALL {
            let start = Instant::now();
            let stats = simulate(policy, pages, frames)?;
            let elapsed = start.elapsed();

            debug!(
                "{} / {} / {} frames: {} faults in {:?}",
                scope, policy, frames, stats.faults, elapsed
            );

            entries.push(ResultEntry {
                policy,
                scope,
                frames,
                faults: stats.faults,
                references: pages.len(),
                elapsed,
            });
        }
    }

    Ok(entries)
}
