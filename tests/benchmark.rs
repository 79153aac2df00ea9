use rand::rngs::StdRng;
use rand::SeedableRng;

use search_timer::bench::{run, BenchConfig, BenchError, BenchmarkRunner, SearchKind, ARRAY_SIZE};

#[test]
fn default_run_renders_two_rows() {
    let mut rng = StdRng::seed_from_u64(1000);
    let report = BenchmarkRunner::new(BenchConfig::default())
        .run(&mut rng)
        .unwrap();

    let rendered = report.to_string();
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Search Type  # Searches   Array Size"));
    assert_eq!(lines[1], "-".repeat(79));
    assert!(lines[2].starts_with("Linear       1000         1000         "));
    assert!(lines[3].starts_with("Binary       1000         1000         "));
}

#[test]
fn binary_needs_far_fewer_comparisons() {
    let mut rng = StdRng::seed_from_u64(77);
    let report = BenchmarkRunner::new(BenchConfig::with_array_size(ARRAY_SIZE))
        .run(&mut rng)
        .unwrap();

    let linear = report.phase(SearchKind::Linear).unwrap().avg_comparisons();
    let binary = report.phase(SearchKind::Binary).unwrap().avg_comparisons();

    // Every target is present: linear averages about n / 2, binary at most
    // ceil(log2(1001)) = 10.
    assert!(linear > 300.0, "linear average {linear}");
    assert!(binary <= 10.0, "binary average {binary}");
}

#[test]
fn seeded_runs_count_identically() {
    let runner = BenchmarkRunner::new(BenchConfig::with_array_size(200));

    let a = runner.run(&mut StdRng::seed_from_u64(5)).unwrap();
    let b = runner.run(&mut StdRng::seed_from_u64(5)).unwrap();

    for (x, y) in a.phases().iter().zip(b.phases()) {
        assert_eq!(x.total_comparisons, y.total_comparisons);
    }
}

#[test]
fn wider_range_allows_misses() {
    let config = BenchConfig {
        array_size: 100,
        value_range: 10_000,
    };
    let report = BenchmarkRunner::new(config)
        .run(&mut StdRng::seed_from_u64(3))
        .unwrap();

    // Almost every target misses, so linear scans nearly the whole array.
    let linear = report.phase(SearchKind::Linear).unwrap();
    assert!(linear.avg_comparisons() > 90.0);
}

#[test]
fn invalid_range_surfaces_immediately() {
    let config = BenchConfig {
        array_size: 1000,
        value_range: 999,
    };
    let err = BenchmarkRunner::new(config)
        .run(&mut StdRng::seed_from_u64(0))
        .unwrap_err();

    assert_eq!(err, BenchError::InvalidRange { size: 1000, range: 999 });
    assert_eq!(
        err.to_string(),
        "cannot draw 1000 distinct values from the range [1, 999]"
    );
}

#[test]
fn entropy_run_helper() {
    let report = run(64).unwrap();
    assert_eq!(report.phases().len(), 2);
}
