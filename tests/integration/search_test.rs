use rangeguess::search::parallel::ScanOutcome;
use rangeguess::search::{SearchConfig, partition, run_range_search};
use std::time::Duration;

#[test]
fn test_default_ranges_have_expected_width() {
    let config = SearchConfig::default();
    let ranges = partition(config.max, &config);

    assert_eq!(ranges.len(), 10_000);
    // Every range between the first and the last spans max / workers integers
    for range in &ranges[1..ranges.len() - 1] {
        assert_eq!(range.width(), 99_999_999_999);
    }
    assert_eq!(ranges[ranges.len() - 1].end, 999_999_999_999_999);
}

#[test]
fn test_concrete_target_range() {
    let config = SearchConfig::default();
    let target = 500_000_000_000_000;
    let ranges = partition(target, &config);

    let containing = ranges.iter().filter(|r| r.contains(target)).count();
    assert_eq!(containing, 1);
    assert!(ranges[ranges.len() - 1].contains(target));
    assert!(ranges.len() <= 10_000);
}

#[test]
fn test_concrete_target_search_end_to_end() {
    let config = SearchConfig::default();
    let target = 500_000_000_000_000;
    let width = 99_999_999_999;

    let report = run_range_search(target, &config).unwrap();
    let finder = report.finder().expect("target must be found");

    assert!(finder.range.contains(target));
    assert_eq!(finder.iterations, target - finder.range.start + 1);
    assert_eq!(report.workers_created, partition(target, &config).len());
    assert!(report.total_iterations >= 1);
    assert!(report.total_iterations <= 10_000 * width);
    assert!(report.total_iterations <= config.max + 1);
    assert_eq!(report.total_iterations, report.worker_iteration_sum());
    assert!(report.elapsed_time > Duration::ZERO);
}

#[test]
fn test_target_at_last_range_start_uses_every_worker() {
    let config = SearchConfig::default();
    let last = partition(config.max, &config)[9_999];

    let report = run_range_search(last.start, &config).unwrap();
    let finder = report.finder().unwrap();

    assert_eq!(report.workers_created, 10_000);
    assert_eq!(finder.worker_id, 9_999);
    assert_eq!(finder.iterations, 1);
    assert_eq!(report.total_iterations, 1);
    assert!(report.elapsed_time > Duration::ZERO);
}

#[test]
fn test_report_is_consistent_across_runs() {
    let config = SearchConfig::default().with_max(1_000_000).with_workers(16);
    let target = 654_321;

    for _ in 0..3 {
        let report = run_range_search(target, &config).unwrap();
        let finder = report.finder().unwrap();

        assert_eq!(finder.iterations, target - finder.range.start + 1);
        assert_eq!(report.total_iterations, report.worker_iteration_sum());
        assert!(report.total_iterations <= config.max + 1);
        assert_eq!(
            report
                .worker_statistics
                .iter()
                .filter(|w| w.outcome == ScanOutcome::Matched)
                .count(),
            1
        );
    }
}

#[test]
fn test_many_workers_with_small_range() {
    // More workers than integers: the pool shrinks so no range is empty
    let config = SearchConfig::default().with_max(50).with_workers(10_000);
    let report = run_range_search(50, &config).unwrap();

    assert_eq!(report.workers_created, 50);
    assert!(report.finder().is_some());
    assert!(report.total_iterations >= 1);
}
