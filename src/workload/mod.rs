//! Reference stream generation.
//!
//! Produces page references with temporal locality: most references land in
//! a small working set that is periodically replaced, the rest are cold
//! references anywhere in the page universe.
//!
//! # Components
//! - [`WorkingSet`] - The pages a process currently favors
//! - [`ProcessStream`] - Per-process reference iterator
//! - [`generate`] - Build the full process-partitioned stream
//! - [`ReferenceStream`] - The immutable result consumed by the replacers

mod generator;
mod stream;
mod working_set;

pub use generator::{generate, ProcessStream};
pub use stream::ReferenceStream;
pub use working_set::WorkingSet;
