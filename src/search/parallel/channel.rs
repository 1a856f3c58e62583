//! Shared state and reporting channel between scan workers and the coordinator.

use crate::search::result::WorkerStatistics;
use crossbeam_channel::{Receiver, Sender, unbounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// How a worker's scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The termination flag was already set before the scan began.
    Skipped,
    /// The worker reached the target and set the termination flag.
    Matched,
    /// The worker walked its range without setting the flag.
    Exhausted,
}

/// State shared by every worker of one run.
#[derive(Debug, Default)]
pub struct SearchProgress {
    /// Set exactly once, by the worker that finds the target.
    found: AtomicBool,
    /// Sum of the local comparison counts of finished workers.
    total_iterations: AtomicU64,
}

impl SearchProgress {
    /// Try to claim the match. Returns true for exactly one caller per run.
    pub fn try_claim(&self) -> bool {
        self.found
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Whether some worker has already found the target.
    pub fn is_found(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }

    /// Add a finished worker's local count to the global total.
    pub fn record(&self, iterations: u64) {
        self.total_iterations.fetch_add(iterations, Ordering::SeqCst);
    }

    /// Current global total.
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations.load(Ordering::SeqCst)
    }
}

/// Channel endpoints for a worker.
#[derive(Clone)]
pub struct WorkerChannels {
    /// Send the finished worker's statistics to the coordinator.
    pub to_coordinator: Sender<WorkerStatistics>,
    /// Shared flag and accumulator.
    pub progress: Arc<SearchProgress>,
}

/// Channel endpoints for the coordinator.
pub struct CoordinatorChannels {
    /// Statistics of finished workers, one per worker.
    pub from_workers: Receiver<WorkerStatistics>,
    /// Shared state.
    pub progress: Arc<SearchProgress>,
}

/// Create a reporting channel and fresh shared state for one run.
///
/// The returned worker endpoints are cloned into each spawned worker; the
/// coordinator must drop its own copy once spawning is done so the channel
/// disconnects when the last worker exits.
pub fn create_channels() -> (CoordinatorChannels, WorkerChannels) {
    let progress = Arc::new(SearchProgress::default());

    // Unbounded so workers never block on reporting
    let (worker_tx, coordinator_rx) = unbounded();

    let coordinator = CoordinatorChannels {
        from_workers: coordinator_rx,
        progress: Arc::clone(&progress),
    };
    let workers = WorkerChannels {
        to_coordinator: worker_tx,
        progress,
    };

    (coordinator, workers)
}
