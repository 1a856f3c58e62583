//! Search report and per-worker statistics

use crate::search::parallel::channel::ScanOutcome;
use crate::search::range::SearchRange;
use std::fmt;
use std::time::Duration;

/// Thread name given to the worker with the given id.
pub fn worker_name(worker_id: usize) -> String {
    format!("worker-{}", worker_id)
}

/// What one worker did during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerStatistics {
    pub worker_id: usize,
    /// Range assigned to the worker
    pub range: SearchRange,
    /// Local comparison count
    pub iterations: u64,
    pub outcome: ScanOutcome,
}

impl WorkerStatistics {
    pub fn name(&self) -> String {
        worker_name(self.worker_id)
    }
}

/// Result of a complete range search run.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The number that was searched for
    pub target: u64,
    /// Upper bound of the searched range
    pub max: u64,
    /// Number of workers actually created after partitioning
    pub workers_created: usize,
    /// Value of the shared accumulator once every worker finished
    pub total_iterations: u64,
    /// Wall-clock time from dispatch to the last join
    pub elapsed_time: Duration,
    /// Per-worker statistics, in range order
    pub worker_statistics: Vec<WorkerStatistics>,
}

impl SearchReport {
    /// The worker that matched the target, if any.
    pub fn finder(&self) -> Option<&WorkerStatistics> {
        self.worker_statistics
            .iter()
            .find(|w| w.outcome == ScanOutcome::Matched)
    }

    /// Sum of the local counts reported by the workers.
    pub fn worker_iteration_sum(&self) -> u64 {
        self.worker_statistics.iter().map(|w| w.iterations).sum()
    }

    /// Elapsed time in seconds at millisecond resolution.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_time.as_millis() as f64 / 1000.0
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(finder) = self.finder() else {
            return writeln!(
                f,
                "\nNo worker found {} between 0 and {}.",
                self.target, self.max
            );
        };

        writeln!(
            f,
            "\n{} found the number with {} iterations.",
            finder.name(),
            finder.iterations
        )?;
        writeln!(
            f,
            "\nThe number of total threads created to find the number is {}",
            self.workers_created
        )?;
        writeln!(
            f,
            "\nThe number of iterations to find the number between 0 and {} is {}",
            self.max, self.total_iterations
        )?;
        writeln!(f, "Total elapsed time:  {:?} seconds.", self.elapsed_seconds())
    }
}
