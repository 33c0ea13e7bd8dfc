//! Tests for input generation and the benchmark harness.
//!
//! ## Test Organization
//!
//! 1. **Inputs** - Reproducibility, ranges and shuffles
//! 2. **Builder Validation** - Rejected settings
//! 3. **Runs** - Report shape, averages and panicking contenders

use approx::assert_relative_eq;
use sortscope_lab::prelude::*;

fn panicking_sort(_: &[i64]) -> Sorted<i64> {
    panic!("contender failure");
}

fn panics_on_large(input: &[i64]) -> Sorted<i64> {
    if input.len() > 10 {
        panic!("too large");
    }
    insertion_sort(input)
}

// ============================================================================
// Input Tests
// ============================================================================

/// Test that the same seed reproduces the same inputs.
#[test]
fn test_random_inputs_are_reproducible() {
    let first = random_inputs(&[5, 20], 3, (-100, 100), 42);
    let second = random_inputs(&[5, 20], 3, (-100, 100), 42);
    let other = random_inputs(&[5, 20], 3, (-100, 100), 43);

    assert_eq!(first, second);
    assert_ne!(first, other);
}

/// Test sizes, trial counts and value bounds.
#[test]
fn test_random_inputs_shape() {
    let inputs = random_inputs(&[1, 7, 30], 4, (-5, 5), 1);

    assert_eq!(inputs.iter().map(|sized| sized.n).collect::<Vec<_>>(), vec![1, 7, 30]);
    for sized in &inputs {
        assert_eq!(sized.trials.len(), 4);
        for trial in &sized.trials {
            assert_eq!(trial.len(), sized.n);
            assert!(trial.iter().all(|value| (-5..=5).contains(value)));
        }
    }
}

/// Test that a degenerate range yields constant inputs.
#[test]
fn test_random_inputs_single_value_range() {
    let inputs = random_inputs(&[8], 2, (3, 3), 9);
    assert!(inputs[0].trials.iter().flatten().all(|&value| value == 3));
}

/// Test that the shuffled range is a permutation of `1..=n`.
#[test]
fn test_shuffled_range() {
    let shuffled = shuffled_range(30, 42);
    let mut sorted = shuffled.clone();
    sorted.sort();

    assert_eq!(sorted, (1..=30).collect::<Vec<i64>>());
    assert_eq!(shuffled, shuffled_range(30, 42));
    assert_ne!(shuffled, sorted);
    assert!(shuffled_range(0, 1).is_empty());
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test each rejected setting.
#[test]
fn test_builder_rejects_invalid_settings() {
    let base = || Benchmark::builder().algorithm(Algorithm::Merge);

    assert!(matches!(
        base().sizes(Vec::new()).build(),
        Err(LabError::InvalidConfig(_))
    ));
    assert!(matches!(base().sizes([0, 10]).build(), Err(LabError::InvalidConfig(_))));
    assert!(matches!(base().trials(0).build(), Err(LabError::InvalidConfig(_))));
    assert!(matches!(
        base().value_range(10, -10).build(),
        Err(LabError::InvalidConfig(_))
    ));
    assert!(matches!(
        Benchmark::builder().build(),
        Err(LabError::InvalidConfig(_))
    ));
}

/// Test that contender names must be unique.
#[test]
fn test_builder_rejects_duplicate_names() {
    let result = Benchmark::builder()
        .algorithm(Algorithm::Heap)
        .contender("heap", heap_sort)
        .build();

    let err = result.unwrap_err();
    assert!(err.to_string().contains("`heap`"));
}

/// Test that a config file's settings reach the benchmark.
#[test]
fn test_builder_from_config() {
    let config = LabConfig {
        sizes: vec![4, 8],
        trials: 2,
        algorithms: vec![Algorithm::Quick, Algorithm::Bubble],
        ..LabConfig::default()
    };

    let benchmark = Benchmark::builder().from_config(&config).build().unwrap();
    let names: Vec<&str> = benchmark.contenders().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["quick", "bubble"]);

    let report = benchmark.run();
    assert_eq!(report.sizes, vec![4, 8]);
    assert!(report.rows.iter().all(|row| row.points.iter().all(|p| p.trials == 2)));
}

// ============================================================================
// Run Tests
// ============================================================================

/// Test the report layout and the deterministic averages.
#[test]
fn test_run_report_shape() {
    let report = Benchmark::builder()
        .sizes([10, 50, 100])
        .trials(3)
        .seed(42)
        .algorithms(Algorithm::ALL)
        .build()
        .unwrap()
        .run();

    assert_eq!(report.sizes, vec![10, 50, 100]);
    assert_eq!(report.rows.len(), 6);
    assert_eq!(report.largest_size(), Some(100));

    for (row, algorithm) in report.rows.iter().zip(Algorithm::ALL) {
        assert_eq!(row.algorithm, algorithm.name());
        assert_eq!(row.points.len(), 3);
        for point in &row.points {
            assert_eq!(point.trials, 3);
            assert!(point.time_seconds.unwrap() >= 0.0);
            assert!(point.comparisons.unwrap() > 0.0);
            assert!(point.swaps.is_some());
        }
    }
    assert!(report.fastest_time_at(100).is_some());
    assert!(report.fastest_time_at(7).is_none());
}

/// Test that averages match the counts of the shared inputs.
#[test]
fn test_run_averages_match_inputs() {
    let inputs = random_inputs(&[25], 4, (-10_000, 10_000), 5);
    let expected: f64 = inputs[0]
        .trials
        .iter()
        .map(|trial| selection_sort(trial).metrics.comparisons as f64)
        .sum::<f64>()
        / 4.0;

    let report = Benchmark::builder()
        .sizes([25])
        .trials(4)
        .seed(5)
        .algorithm(Algorithm::Selection)
        .build()
        .unwrap()
        .run();

    let point = report.row("selection").unwrap().point(25).unwrap();
    // Selection sort always does n(n-1)/2 comparisons.
    assert_relative_eq!(point.comparisons.unwrap(), expected);
    assert_relative_eq!(point.comparisons.unwrap(), 300.0);
}

/// Test that every algorithm sees the same inputs.
#[test]
fn test_contenders_share_inputs() {
    let report = Benchmark::builder()
        .sizes([40])
        .trials(2)
        .contender("bubble", bubble_sort)
        .contender("insertion", insertion_sort)
        .build()
        .unwrap()
        .run();

    // Both only swap adjacent inversions, so equal inputs mean equal exchanges.
    let bubble = report.row("bubble").unwrap().point(40).unwrap().swaps;
    let insertion = report.row("insertion").unwrap().point(40).unwrap().swaps;
    assert_eq!(bubble, insertion);
}

/// Test that a panicking contender is skipped without aborting the run.
#[test]
fn test_panicking_contender_is_skipped() {
    let report = Benchmark::builder()
        .sizes([5, 20])
        .trials(2)
        .contender("broken", panicking_sort)
        .contender("partial", panics_on_large)
        .algorithm(Algorithm::Merge)
        .build()
        .unwrap()
        .run();

    let broken = report.row("broken").unwrap();
    assert!(broken.points.iter().all(|p| p.trials == 0));
    assert!(broken.points.iter().all(|p| p.time_seconds.is_none()));
    assert!(broken.points.iter().all(|p| p.comparisons.is_none() && p.swaps.is_none()));

    let partial = report.row("partial").unwrap();
    assert_eq!(partial.point(5).unwrap().trials, 2);
    assert!(partial.point(20).unwrap().time_seconds.is_none());

    let merge = report.row("merge").unwrap();
    assert!(merge.points.iter().all(|p| p.trials == 2));
}

/// Test the mapping from algorithm to measured sort.
#[test]
fn test_sort_fn_matches_algorithm() {
    let input = [5, 3, 8, 3, 1];
    for algorithm in Algorithm::ALL {
        let mapped = sort_fn(algorithm)(&input);
        let direct = algorithm.sort(&input);
        assert_eq!(mapped.sequence, direct.sequence);
        assert_eq!(mapped.metrics.comparisons, direct.metrics.comparisons);
        assert_eq!(mapped.metrics.exchanges, direct.metrics.exchanges);
    }
}
