//! Output types for sort calls.
//!
//! ## Purpose
//!
//! Every measured sort returns a [`Sorted`] and every traced sort returns a
//! [`Traced`]. Both have the same shape for all six algorithms, so callers
//! never inspect what they got back.
//!
//! ## Design notes
//!
//! * **Owned**: results own their sequence and telemetry and hold no reference
//!   to the input.
//! * **Ergonomics**: both implement `Display` for a short human-readable report.
//!
//! ## Non-goals
//!
//! * This module does not compute anything; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};

// Internal dependencies
use crate::primitives::metrics::MetricsRecord;
use crate::primitives::trace::Trace;

// ============================================================================
// Measured Output
// ============================================================================

/// Sorted sequence together with the metrics of the run that produced it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sorted<T> {
    /// The input's elements in non-decreasing order.
    pub sequence: Vec<T>,

    /// Counted operations and elapsed time.
    pub metrics: MetricsRecord,
}

impl<T> Sorted<T> {
    pub(crate) fn new(sequence: Vec<T>, metrics: MetricsRecord) -> Self {
        Self { sequence, metrics }
    }

    /// Split into the sequence and its metrics.
    pub fn into_parts(self) -> (Vec<T>, MetricsRecord) {
        (self.sequence, self.metrics)
    }
}

impl<T: Debug> Display for Sorted<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:    {}", self.sequence.len())?;
        writeln!(f, "  Comparisons: {}", self.metrics.comparisons)?;
        writeln!(f, "  Exchanges:   {}", self.metrics.exchanges)?;
        writeln!(f, "  Elapsed:     {:.6}s", self.metrics.elapsed_seconds)?;
        writeln!(f)?;
        write!(f, "Sorted: {:?}", self.sequence)
    }
}

// ============================================================================
// Traced Output
// ============================================================================

/// Sorted sequence together with the step trace of the run that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Traced<T> {
    /// The input's elements in non-decreasing order.
    pub sequence: Vec<T>,

    /// Every recorded step, boundaries included.
    pub trace: Trace<T>,
}

impl<T> Traced<T> {
    pub(crate) fn new(sequence: Vec<T>, trace: Trace<T>) -> Self {
        Self { sequence, trace }
    }

    /// Split into the sequence and its trace.
    pub fn into_parts(self) -> (Vec<T>, Trace<T>) {
        (self.sequence, self.trace)
    }
}

impl<T: Debug> Display for Traced<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:    {}", self.sequence.len())?;
        writeln!(f, "  Steps:       {}", self.trace.len())?;
        writeln!(f, "  Comparisons: {}", self.trace.comparisons())?;
        writeln!(f, "  Exchanges:   {}", self.trace.exchanges())?;
        writeln!(f)?;
        writeln!(f, "Trace:")?;
        for (index, step) in self.trace.iter().enumerate() {
            writeln!(
                f,
                "  {:>5}  {:<8}  {:?}  {:?}",
                index,
                step.kind,
                step.highlights,
                step.snapshot
            )?;
        }
        write!(f, "Sorted: {:?}", self.sequence)
    }
}
