//! Range search coordinator that spawns one scan worker per range.

use crate::error::{Result, SearchError};
use crate::search::config::SearchConfig;
use crate::search::parallel::channel::create_channels;
use crate::search::parallel::worker::run_worker;
use crate::search::range::{SearchRange, partition};
use crate::search::result::{SearchReport, WorkerStatistics, worker_name};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Stack size for scan workers. A scan is a flat loop, so the default
/// 2 MiB per thread is wasted across thousands of workers.
const WORKER_STACK_SIZE: usize = 256 * 1024;

/// Aggregated outcome of dispatching workers over a set of ranges.
#[derive(Debug)]
pub struct DispatchResult {
    /// Final value of the shared accumulator.
    pub total_iterations: u64,
    /// Time from just before the first spawn to just after the last join.
    pub elapsed_time: Duration,
    /// Per-worker statistics, in range order.
    pub worker_statistics: Vec<WorkerStatistics>,
}

/// Partition `[0, config.max]` and search it for `target` in parallel.
pub fn run_range_search(target: u64, config: &SearchConfig) -> Result<SearchReport> {
    if !config.contains(target) {
        return Err(SearchError::TargetOutOfRange {
            target,
            max: config.max,
        });
    }

    let ranges = partition(target, config);
    info!(
        target,
        max = config.max,
        requested = config.workers,
        created = ranges.len(),
        "partitioned search range"
    );

    let dispatch_result = dispatch(&ranges, target)?;

    let report = SearchReport {
        target,
        max: config.max,
        workers_created: ranges.len(),
        total_iterations: dispatch_result.total_iterations,
        elapsed_time: dispatch_result.elapsed_time,
        worker_statistics: dispatch_result.worker_statistics,
    };
    debug_assert_eq!(report.total_iterations, report.worker_iteration_sum());

    Ok(report)
}

/// Start one worker thread per range and wait for all of them.
///
/// If a thread cannot be spawned, the workers already started are joined
/// before the error is returned.
pub fn dispatch(ranges: &[SearchRange], target: u64) -> Result<DispatchResult> {
    let (coordinator_channels, worker_channels) = create_channels();
    let start_time = Instant::now();

    let mut handles = Vec::with_capacity(ranges.len());
    for (worker_id, &range) in ranges.iter().enumerate() {
        let channels = worker_channels.clone();
        let spawned = thread::Builder::new()
            .name(worker_name(worker_id))
            .stack_size(WORKER_STACK_SIZE)
            .spawn(move || run_worker(worker_id, range, target, channels));

        match spawned {
            Ok(handle) => handles.push(handle),
            Err(source) => {
                warn!(
                    worker_id,
                    started = handles.len(),
                    "worker spawn failed, waiting for started workers"
                );
                // A panic among the started workers is secondary to the spawn failure
                let _ = join_workers(handles);
                return Err(SearchError::Spawn { worker_id, source });
            }
        }
    }
    // Only workers hold senders now, so the channel closes when the last exits
    drop(worker_channels);
    debug!(workers = handles.len(), "all workers started");

    let progress = Arc::clone(&coordinator_channels.progress);
    let mut worker_statistics: Vec<_> = coordinator_channels.from_workers.iter().collect();

    join_workers(handles)?;
    let elapsed_time = start_time.elapsed();

    worker_statistics.sort_by_key(|w| w.worker_id);
    let total_iterations = progress.total_iterations();
    debug!(
        total_iterations,
        elapsed_ms = elapsed_time.as_millis() as u64,
        "all workers joined"
    );

    Ok(DispatchResult {
        total_iterations,
        elapsed_time,
        worker_statistics,
    })
}

/// Join every handle in order, one blocking wait each.
///
/// All handles are joined even after a panic; the first panicked worker is
/// reported.
fn join_workers(handles: Vec<JoinHandle<()>>) -> Result<()> {
    let mut first_panic = None;

    for (worker_id, handle) in handles.into_iter().enumerate() {
        if handle.join().is_err() && first_panic.is_none() {
            first_panic = Some(worker_id);
        }
    }

    match first_panic {
        Some(worker_id) => Err(SearchError::WorkerPanicked { worker_id }),
        None => Ok(()),
    }
}
