//! Run orchestration and reporting.
//!
//! - [`Aggregator`] - Runs every policy over every scope and budget
//! - [`ResultsTable`] / [`ResultEntry`] - The collected measurements
//! - [`report`] - Summary statistics, text report, and chart

mod aggregator;
pub mod report;

pub use aggregator::{Aggregator, ResultEntry, ResultsTable, Scope};
