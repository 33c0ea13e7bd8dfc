//! Operation counting and the metrics record.
//!
//! ## Purpose
//!
//! This module defines [`MetricsRecord`], the aggregate telemetry returned by
//! every measured sort, and [`Counter`], the probe that accumulates it.
//!
//! ## Design notes
//!
//! * **Fresh per call**: a new `Counter` is created for every sort call.
//! * **Frozen output**: `Counter::finish` consumes the counter, so a returned
//!   record can no longer be incremented.
//! * **Serde**: `MetricsRecord` derives `Serialize`/`Deserialize` behind the
//!   `serde` feature.
//!
//! ## Invariants
//!
//! * All fields are non-negative.
//! * An all-zero record means no comparison or exchange was performed.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::probe::Probe;

// ============================================================================
// Metrics Record
// ============================================================================

/// Aggregate telemetry for one sort call.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricsRecord {
    /// Number of ordering tests performed.
    pub comparisons: u64,

    /// Number of swaps, shifts or moves that wrote the working array.
    pub exchanges: u64,

    /// Wall-clock duration of the algorithmic work, input copy excluded.
    pub elapsed_seconds: f64,
}

impl MetricsRecord {
    /// Total number of counted operations.
    pub fn operations(&self) -> u64 {
        self.comparisons + self.exchanges
    }

    /// Check whether nothing was counted or timed.
    pub fn is_zero(&self) -> bool {
        self.comparisons == 0 && self.exchanges == 0 && self.elapsed_seconds == 0.0
    }
}

impl Display for MetricsRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "comparisons={} exchanges={} elapsed={:.6}s",
            self.comparisons, self.exchanges, self.elapsed_seconds
        )
    }
}

// ============================================================================
// Counter
// ============================================================================

/// Probe that counts comparison and exchange events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    comparisons: u64,
    exchanges: u64,
}

impl Counter {
    /// Create a counter with both tallies at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Comparisons counted so far.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Exchanges counted so far.
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }

    /// Freeze the tallies into a record carrying the measured duration.
    pub fn finish(self, elapsed_seconds: f64) -> MetricsRecord {
        MetricsRecord {
            comparisons: self.comparisons,
            exchanges: self.exchanges,
            elapsed_seconds: elapsed_seconds.max(0.0),
        }
    }
}

impl<T> Probe<T> for Counter {
    #[inline]
    fn comparison(&mut self, _data: &[T], _lhs: usize, _rhs: usize) {
        self.comparisons += 1;
    }

    #[inline]
    fn exchange(&mut self, _data: &[T], _touched: &[usize]) {
        self.exchanges += 1;
    }
}
