//! Brute-force scan performed by each worker thread.

use crate::search::parallel::channel::{ScanOutcome, SearchProgress, WorkerChannels};
use crate::search::range::SearchRange;
use crate::search::result::WorkerStatistics;
use tracing::{debug, info};

/// Compare every candidate of `range` against `target`, in increasing order.
///
/// Returns how the scan ended and the number of comparisons made. The shared
/// flag is only consulted before the first comparison; once started, a scan
/// runs until it matches or reaches the end of its range. A range that ends
/// below the target cannot contain it and is not walked at all.
pub fn scan(range: SearchRange, target: u64, progress: &SearchProgress) -> (ScanOutcome, u64) {
    if progress.is_found() {
        return (ScanOutcome::Skipped, 0);
    }

    let mut iterations = 0;
    if target <= range.end {
        for candidate in range.start..=range.end {
            iterations += 1;
            if candidate == target {
                let outcome = if progress.try_claim() {
                    ScanOutcome::Matched
                } else {
                    ScanOutcome::Exhausted
                };
                return (outcome, iterations);
            }
        }
    }

    (ScanOutcome::Exhausted, iterations)
}

/// Worker thread body: scan, publish the count, report to the coordinator.
pub(crate) fn run_worker(
    worker_id: usize,
    range: SearchRange,
    target: u64,
    channels: WorkerChannels,
) {
    debug!(worker_id, %range, "worker started");

    let (outcome, iterations) = scan(range, target, &channels.progress);

    if outcome == ScanOutcome::Matched {
        info!(worker_id, iterations, target, "target found");
    }

    channels.progress.record(iterations);

    debug!(worker_id, ?outcome, iterations, "worker finished");
    let _ = channels.to_coordinator.send(WorkerStatistics {
        worker_id,
        range,
        iterations,
        outcome,
    });
}
