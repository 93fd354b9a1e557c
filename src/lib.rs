//! pagesim - page-replacement simulation on a working-set reference stream.
//!
//! Answers one question: with a bounded number of resident frames, how many
//! page faults does a policy incur on a reference stream with realistic
//! locality? FIFO (recency-oblivious) is compared against Aging (an 8-bit
//! software approximation of LRU).
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Workload (workload/)                          │   │
//! │  │   WorkingSet → ProcessStream → ReferenceStream           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                 ↓                            ↓                  │
//! │  ┌──────────────────────────────┐  ┌──────────────────────┐    │
//! │  │  Buffer (buffer/)            │  │ Storage (storage/)   │    │
//! │  │  FrameTable + Replacer       │  │ ReferenceLog, chart  │    │
//! │  │  FIFO | Aging → SimStats     │  └──────────────────────┘    │
//! │  └──────────────────────────────┘                              │
//! │                 ↓                                               │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Runner (runner/)                              │   │
//! │  │   Aggregator → ResultsTable → report (stats, chart)      │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, SimConfig, Error)
//! - [`workload`] - Reference stream generation
//! - [`buffer`] - Frame table and eviction policies
//! - [`storage`] - Reference log and chart files
//! - [`runner`] - Aggregation and reporting
//! - [`input`] - Frame budget parsing
//!
//! # Quick Start
//! ```
//! use pagesim::buffer::Policy;
//! use pagesim::runner::{Aggregator, Scope};
//! use pagesim::workload::generate;
//! use pagesim::SimConfig;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = SimConfig::default();
//! let stream = generate(&config, &mut StdRng::seed_from_u64(7)).unwrap();
//!
//! let table = Aggregator::new(&stream, &[3, 10]).run().unwrap();
//! let fifo = table.faults(Policy::Fifo, Scope::Total);
//! assert_eq!(fifo.len(), 2);
//! ```

pub mod buffer;
pub mod common;
pub mod input;
pub mod runner;
pub mod storage;
pub mod workload;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, PageId, Result, SimConfig};

pub use buffer::{aging, fifo, simulate, FrameTable, Policy, Replacer, SimStats};
pub use runner::{Aggregator, ResultEntry, ResultsTable, Scope};
pub use workload::{generate, ReferenceStream};
