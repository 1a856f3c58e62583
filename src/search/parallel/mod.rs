//! Parallel execution of a range search.
//!
//! The parallel search consists of:
//! - A **coordinator** that partitions the range, spawns one thread per
//!   sub-range and joins them in range order
//! - **Workers** that compare each candidate of their sub-range against the
//!   target
//! - A **channel** carrying `Found`/`Finished` reports back to the coordinator
//! - **Shared progress**: an atomic termination flag (claimed once, with
//!   compare-and-set) and an atomic iteration accumulator
//!
//! # Example
//!
//! ```ignore
//! use rangeguess::search::{SearchConfig, run_range_search};
//!
//! let config = SearchConfig::default().with_max(1_000_000).with_workers(8);
//! let report = run_range_search(123_456, &config)?;
//! println!("{}", report);
//! ```

pub mod channel;
pub mod coordinator;
pub mod worker;

pub use channel::{ScanOutcome, SearchProgress};
pub use coordinator::{DispatchResult, dispatch, run_range_search};
pub use worker::scan;
