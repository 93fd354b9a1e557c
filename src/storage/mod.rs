//! Storage layer - durable artifacts of a run.
//!
//! - [`ReferenceLog`] - Human-readable dump of the generated stream
//! - [`write_chart`] - Fault-rate chart written next to the log

mod reference_log;

pub use reference_log::{write_reference_log, ReferenceLog, LOG_HEADER};

use std::fs;
use std::path::Path;

use crate::common::Result;

/// Write a rendered chart to `path`, replacing any previous file.
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_chart<P: AsRef<Path>>(path: P, chart: &str) -> Result<()> {
    fs::write(path, chart)?;
    Ok(())
}
