//! Configuration for the range search.

/// Default upper bound of the searched range (inclusive).
pub const DEFAULT_MAX: u64 = 999_999_999_999_999;

/// Default number of worker threads the range is divided among.
pub const DEFAULT_WORKERS: usize = 10_000;

/// Configuration for a range search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound of the searched range; the range is `[0, max]`.
    pub max: u64,
    /// Number of workers the range is divided among.
    pub workers: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl SearchConfig {
    /// Set the upper bound of the searched range.
    pub fn with_max(mut self, max: u64) -> Self {
        self.max = max;
        self
    }

    /// Set the number of workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Number of workers actually used for partitioning.
    ///
    /// At least one, and never more than `max` so that every chunk of
    /// `max / workers` integers is non-empty.
    pub fn effective_workers(&self) -> usize {
        let ceiling = usize::try_from(self.max.max(1)).unwrap_or(usize::MAX);
        self.workers.clamp(1, ceiling)
    }

    /// Whether `value` lies in `[0, max]`.
    pub fn contains(&self, value: u64) -> bool {
        value <= self.max
    }
}
