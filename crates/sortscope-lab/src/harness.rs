//! Benchmark harness.
//!
//! ## Purpose
//!
//! Runs every registered contender on the same pre-generated inputs and
//! averages time, comparisons and exchanges per input size.
//!
//! ```text
//! for contender in contenders:
//!     for (n, inputs) in sizes:
//!         for input in inputs:          // fresh copy per trial
//!             result = contender(input) // panics caught, trial skipped
//!         average the surviving trials
//! ```
//!
//! ## Design notes
//!
//! * **Builder**: [`Benchmark::builder`] collects settings and `build()`
//!   validates them once, before any input is generated.
//! * **Shared inputs**: inputs are generated once per run, so contenders are
//!   compared on identical data.
//! * **Isolated trials**: each trial runs under `catch_unwind`; a panicking
//!   trial is logged and excluded from the averages.
//!
//! ## Invariants
//!
//! * Averages are `None` when no trial of that size succeeded. They are never
//!   zero-filled.
//! * Rows follow contender registration order, points follow size order.

// External dependencies
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, info, warn};

// Export dependencies from sortscope crate
use sortscope::prelude::*;

// Internal dependencies
use crate::config::{LabConfig, Validator, DEFAULT_SEED, DEFAULT_SIZES, DEFAULT_TRIALS, DEFAULT_VALUE_RANGE};
use crate::errors::LabError;
use crate::input::random_inputs;

/// Signature of a benchmarkable sort.
pub type SortFn = fn(&[i64]) -> Sorted<i64>;

/// Measured sort for `algorithm` on `i64` inputs.
pub fn sort_fn(algorithm: Algorithm) -> SortFn {
    match algorithm {
        Algorithm::Bubble => bubble_sort,
        Algorithm::Insertion => insertion_sort,
        Algorithm::Selection => selection_sort,
        Algorithm::Merge => merge_sort,
        Algorithm::Quick => quick_sort,
        Algorithm::Heap => heap_sort,
    }
}

// ============================================================================
// Report
// ============================================================================

/// Averages for one contender at one input size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizePoint {
    /// Input size.
    pub n: usize,

    /// Number of trials that completed.
    pub trials: usize,

    /// Mean elapsed seconds.
    pub time_seconds: Option<f64>,

    /// Mean comparison count.
    pub comparisons: Option<f64>,

    /// Mean exchange count.
    pub swaps: Option<f64>,
}

impl SizePoint {
    fn from_samples(n: usize, samples: &[MetricsRecord]) -> Self {
        let mean = |field: fn(&MetricsRecord) -> f64| -> Option<f64> {
            if samples.is_empty() {
                None
            } else {
                Some(samples.iter().map(field).sum::<f64>() / samples.len() as f64)
            }
        };

        Self {
            n,
            trials: samples.len(),
            time_seconds: mean(|m| m.elapsed_seconds),
            comparisons: mean(|m| m.comparisons as f64),
            swaps: mean(|m| m.exchanges as f64),
        }
    }
}

/// All points for one contender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmResults {
    /// Contender name.
    pub algorithm: String,

    /// One point per benchmark size, in size order.
    pub points: Vec<SizePoint>,
}

impl AlgorithmResults {
    /// Point for input size `n`.
    pub fn point(&self, n: usize) -> Option<&SizePoint> {
        self.points.iter().find(|point| point.n == n)
    }
}

/// Result of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Benchmarked sizes, in run order.
    pub sizes: Vec<usize>,

    /// One row per contender, in registration order.
    pub rows: Vec<AlgorithmResults>,
}

impl BenchmarkReport {
    /// Row for the contender called `name`.
    pub fn row(&self, name: &str) -> Option<&AlgorithmResults> {
        self.rows.iter().find(|row| row.algorithm == name)
    }

    /// Largest benchmarked size.
    pub fn largest_size(&self) -> Option<usize> {
        self.sizes.iter().copied().max()
    }

    /// Fastest average time observed at size `n`.
    pub fn fastest_time_at(&self, n: usize) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|row| row.point(n).and_then(|point| point.time_seconds))
            .min_by(f64::total_cmp)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Named sort registered with a benchmark.
#[derive(Debug, Clone)]
pub struct Contender {
    /// Name used in reports.
    pub name: String,

    /// Function under test.
    pub sort: SortFn,
}

/// Builder for [`Benchmark`].
#[derive(Debug, Clone)]
pub struct BenchmarkBuilder {
    sizes: Vec<usize>,
    trials: usize,
    seed: u64,
    value_range: (i64, i64),
    contenders: Vec<Contender>,
}

impl Default for BenchmarkBuilder {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            value_range: DEFAULT_VALUE_RANGE,
            contenders: Vec::new(),
        }
    }
}

impl BenchmarkBuilder {
    /// Input sizes to benchmark.
    pub fn sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.sizes = sizes.into_iter().collect();
        self
    }

    /// Trials averaged per size.
    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Seed for the shared inputs.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Inclusive range of the random values.
    pub fn value_range(mut self, min: i64, max: i64) -> Self {
        self.value_range = (min, max);
        self
    }

    /// Register one of the built-in algorithms.
    pub fn algorithm(self, algorithm: Algorithm) -> Self {
        self.contender(algorithm.name(), sort_fn(algorithm))
    }

    /// Register several built-in algorithms.
    pub fn algorithms(self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        algorithms.into_iter().fold(self, Self::algorithm)
    }

    /// Register an arbitrary sort under `name`.
    pub fn contender(mut self, name: impl Into<String>, sort: SortFn) -> Self {
        self.contenders.push(Contender {
            name: name.into(),
            sort,
        });
        self
    }

    /// Take sizes, trials, seed, range and algorithms from `config`.
    pub fn from_config(self, config: &LabConfig) -> Self {
        self.sizes(config.sizes.iter().copied())
            .trials(config.trials)
            .seed(config.seed)
            .value_range(config.min_value, config.max_value)
            .algorithms(config.algorithms.iter().copied())
    }

    /// Validate the settings.
    pub fn build(self) -> Result<Benchmark, LabError> {
        Validator::validate_sizes(&self.sizes)?;
        Validator::validate_trials(self.trials)?;
        Validator::validate_range(self.value_range.0, self.value_range.1)?;

        if self.contenders.is_empty() {
            return Err(LabError::InvalidConfig("at least one contender is required".into()));
        }
        for (i, contender) in self.contenders.iter().enumerate() {
            if self.contenders[..i].iter().any(|c| c.name == contender.name) {
                return Err(LabError::InvalidConfig(format!(
                    "contender `{}` is registered twice",
                    contender.name
                )));
            }
        }

        Ok(Benchmark {
            sizes: self.sizes,
            trials: self.trials,
            seed: self.seed,
            value_range: self.value_range,
            contenders: self.contenders,
        })
    }
}

// ============================================================================
// Benchmark
// ============================================================================

/// Validated benchmark ready to run.
#[derive(Debug, Clone)]
pub struct Benchmark {
    sizes: Vec<usize>,
    trials: usize,
    seed: u64,
    value_range: (i64, i64),
    contenders: Vec<Contender>,
}

impl Benchmark {
    /// Start configuring a benchmark with default sizes, trials and range.
    pub fn builder() -> BenchmarkBuilder {
        BenchmarkBuilder::default()
    }

    /// Registered contenders, in order.
    pub fn contenders(&self) -> &[Contender] {
        &self.contenders
    }

    /// Generate the shared inputs and run every contender on them.
    pub fn run(&self) -> BenchmarkReport {
        let inputs = random_inputs(&self.sizes, self.trials, self.value_range, self.seed);

        let rows = self
            .contenders
            .iter()
            .map(|contender| {
                info!(algorithm = %contender.name, "benchmarking");

                let points = inputs
                    .iter()
                    .map(|sized| {
                        let samples: Vec<MetricsRecord> = sized
                            .trials
                            .iter()
                            .enumerate()
                            .filter_map(|(trial, input)| run_trial(contender, trial, input))
                            .collect();

                        let point = SizePoint::from_samples(sized.n, &samples);
                        debug!(
                            algorithm = %contender.name,
                            n = sized.n,
                            trials = point.trials,
                            time_seconds = ?point.time_seconds,
                            "size done"
                        );
                        point
                    })
                    .collect();

                AlgorithmResults {
                    algorithm: contender.name.clone(),
                    points,
                }
            })
            .collect();

        BenchmarkReport {
            sizes: self.sizes.clone(),
            rows,
        }
    }
}

/// Run one trial on a fresh copy of `input`, or `None` if it panicked.
fn run_trial(contender: &Contender, trial: usize, input: &[i64]) -> Option<MetricsRecord> {
    let working = input.to_vec();
    match panic::catch_unwind(AssertUnwindSafe(|| (contender.sort)(&working))) {
        Ok(sorted) => Some(sorted.metrics),
        Err(_) => {
            warn!(
                algorithm = %contender.name,
                n = input.len(),
                trial,
                "trial panicked and was skipped"
            );
            None
        }
    }
}
