//! Exhaustive range search for a single target number
//!
//! The range `[0, max]` is cut into contiguous sub-ranges, each scanned by
//! its own thread; the first thread to reach the target claims the match and
//! every thread adds its comparison count to a shared total.

pub mod config;
pub mod parallel;
pub mod range;
pub mod result;

pub use config::{DEFAULT_MAX, DEFAULT_WORKERS, SearchConfig};
pub use parallel::run_range_search;
pub use range::{SearchRange, partition};
pub use result::{SearchReport, WorkerStatistics};
