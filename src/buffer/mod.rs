//! Frame-table simulation.
//!
//! The buffer layer models a bounded set of resident pages and the policies
//! that decide which page to give up on a miss.
//!
//! # Components
//! - [`FrameTable`] - The bounded resident set, in admission order
//! - [`replacer`] - Eviction policy implementations
//! - [`SimStats`] - Hit / fault / eviction counters for one run
//! - [`simulate`] / [`fifo`] / [`aging`] - Run a policy over a stream

mod frame_table;
pub mod replacer;
mod simulator;
mod stats;

pub use frame_table::FrameTable;
pub use replacer::{Access, AgingReplacer, FifoReplacer, Policy, Replacer};
pub use simulator::{aging, fifo, run_replacer, simulate};
pub use stats::{faults_per_thousand, SimStats};
