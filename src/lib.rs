//! Parallel brute-force search for a number in `[0, 999999999999999]`.
//!
//! The range is split into up to 10000 contiguous sub-ranges, each scanned by
//! its own OS thread. The first thread to reach the target claims the match;
//! every thread adds its comparison count to a shared total, which is
//! reported together with the elapsed wall-clock time.

pub mod error;
pub mod input;
pub mod logging;
pub mod search;
