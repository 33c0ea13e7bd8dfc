//! Reproducible input generation.
//!
//! ## Purpose
//!
//! Benchmarks compare algorithms on the same data, so inputs are generated
//! once, up front, from a single seeded stream and then shared by every
//! contender.
//!
//! ## Key concepts
//!
//! * **Draw order**: sizes in the order given, trials in order within a size,
//!   elements in order within a trial. Changing any of them changes the data.
//!
//! ## Invariants
//!
//! * The same arguments always produce the same inputs.

// External dependencies
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Inputs for one benchmark size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedInputs {
    /// Length of every input in `trials`.
    pub n: usize,

    /// One input per trial.
    pub trials: Vec<Vec<i64>>,
}

/// Generate `trials` random inputs for every entry of `sizes`.
///
/// Values are drawn uniformly from the inclusive range `min..=max`.
pub fn random_inputs(sizes: &[usize], trials: usize, range: (i64, i64), seed: u64) -> Vec<SizedInputs> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (min, max) = range;

    sizes
        .iter()
        .map(|&n| SizedInputs {
            n,
            trials: (0..trials)
                .map(|_| (0..n).map(|_| rng.random_range(min..=max)).collect())
                .collect(),
        })
        .collect()
}

/// The values `1..=n` in a seeded random order.
pub fn shuffled_range(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i64> = (1..=n as i64).collect();
    values.shuffle(&mut rng);
    values
}
