//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Evictors have no recoverable failure modes once their preconditions hold,
/// so most variants describe bad input rather than runtime faults.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while writing the reference log or chart.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A replacer was asked to manage fewer than one frame.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// A frame budget token was not a positive integer.
    #[error("invalid frame budget '{0}': expected a positive integer")]
    InvalidFrameBudget(String),

    /// The frame budget list was empty.
    #[error("no frame budgets given")]
    EmptyFrameBudgets,

    /// The simulation configuration cannot produce a meaningful run.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
