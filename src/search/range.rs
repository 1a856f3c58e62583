//! Search ranges and the partitioning of `[0, max]` across workers.

use crate::search::config::SearchConfig;
use std::fmt;

/// A contiguous, inclusive interval of candidates scanned by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    pub start: u64,
    pub end: u64,
}

impl SearchRange {
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "empty range [{}, {}]", start, end);
        Self { start, end }
    }

    /// Number of integers in the range.
    pub fn width(&self) -> u64 {
        (self.end - self.start).saturating_add(1)
    }

    pub fn contains(&self, value: u64) -> bool {
        self.start <= value && value <= self.end
    }
}

impl fmt::Display for SearchRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Divide `[0, config.max]` into contiguous ranges, one per worker.
///
/// With `per = max / workers` the first range is `[0, per]`, each following
/// range holds `per` integers, and the last one is stretched to `max`.
/// Generation stops at the first range whose start lies past `target`, so
/// the returned ranges always end with the one containing `target` (when
/// `target <= max`).
pub fn partition(target: u64, config: &SearchConfig) -> Vec<SearchRange> {
    let workers = config.effective_workers();
    let per = config.max / workers as u64;

    let mut ranges = Vec::with_capacity(workers.min(1024));
    let mut start = 0;
    let mut end = per;

    for i in 0..workers {
        if start > target {
            break;
        }
        if i + 1 == workers {
            ranges.push(SearchRange::new(start, config.max));
            break;
        }
        ranges.push(SearchRange::new(start, end));
        start = end + 1;
        end = start + per - 1;
    }

    ranges
}
