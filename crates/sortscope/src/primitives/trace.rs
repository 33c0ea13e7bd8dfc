//! Step traces for replaying a sort frame by frame.
//!
//! ## Purpose
//!
//! This module defines the [`Trace`] returned by every traced sort, the
//! [`Step`]s it is made of, and the [`Recorder`] probe that builds it.
//!
//! ## Design notes
//!
//! * **Deep copies**: every step owns a full snapshot of the working array, so
//!   later mutation can never alter a recorded step.
//! * **Append-only**: steps are only added by the recorder, in emission order.
//! * **Frozen**: a finished `Trace` exposes read access only.
//! * **Classified**: each step carries a [`StepKind`], which is what trace and
//!   metrics parity is counted on.
//!
//! ## Key concepts
//!
//! * **Boundary step**: first and last step, full array, no highlights.
//! * **Comparison step**: recorded before an ordering test, highlights the two
//!   compared positions.
//! * **Exchange step**: recorded after a write, highlights the positions that
//!   changed.
//!
//! ## Invariants
//!
//! * Highlights are sorted ascending and contain no duplicates.
//! * A trace produced by the engine starts and ends with a boundary step.
//! * Every snapshot in a trace has the length of the input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::slice::Iter;

// Internal dependencies
use crate::primitives::probe::Probe;

// ============================================================================
// Step
// ============================================================================

/// Classification of a recorded step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// Leading or trailing marker with no highlights.
    Boundary,

    /// Ordering test between two positions.
    Comparison,

    /// Write to the working array.
    Exchange,
}

impl StepKind {
    /// Short lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boundary => "boundary",
            Self::Comparison => "compare",
            Self::Exchange => "exchange",
        }
    }
}

impl Display for StepKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad(self.as_str())
    }
}

/// One frame of a trace: the array state plus the positions that were active.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step<T> {
    /// Full copy of the working array at this instant.
    pub snapshot: Vec<T>,

    /// Positions just compared or written, ascending and unique.
    pub highlights: Vec<usize>,

    /// What kind of event produced this step.
    pub kind: StepKind,
}

impl<T: Clone> Step<T> {
    fn capture(data: &[T], touched: &[usize], kind: StepKind) -> Self {
        let mut highlights = touched.to_vec();
        highlights.sort_unstable();
        highlights.dedup();

        Self {
            snapshot: data.to_vec(),
            highlights,
            kind,
        }
    }
}

impl<T> Step<T> {
    /// Check whether this is a boundary marker.
    pub fn is_boundary(&self) -> bool {
        self.kind == StepKind::Boundary
    }

    /// Check whether position `index` is highlighted.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.binary_search(&index).is_ok()
    }
}

// ============================================================================
// Trace
// ============================================================================

/// Ordered, replayable list of steps describing one sort call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    /// All steps in emission order.
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Iterate over the steps; may be called any number of times.
    pub fn iter(&self) -> Iter<'_, Step<T>> {
        self.steps.iter()
    }

    /// Number of steps, boundaries included.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether the trace has no steps at all.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Leading step.
    pub fn first(&self) -> Option<&Step<T>> {
        self.steps.first()
    }

    /// Trailing step.
    pub fn last(&self) -> Option<&Step<T>> {
        self.steps.last()
    }

    /// Number of comparison-class steps.
    pub fn comparisons(&self) -> u64 {
        self.count(StepKind::Comparison)
    }

    /// Number of exchange-class steps.
    pub fn exchanges(&self) -> u64 {
        self.count(StepKind::Exchange)
    }

    /// Take ownership of the steps.
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    fn count(&self, kind: StepKind) -> u64 {
        self.steps.iter().filter(|step| step.kind == kind).count() as u64
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

// ============================================================================
// Recorder
// ============================================================================

/// Probe that records a deep-copied step for every event.
#[derive(Debug, Clone)]
pub struct Recorder<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T: Clone> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a boundary step for the current array state.
    pub fn boundary(&mut self, data: &[T]) {
        self.steps.push(Step::capture(data, &[], StepKind::Boundary));
    }

    /// Number of steps recorded so far.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check whether nothing was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Freeze the recorded steps into a trace.
    pub fn finish(self) -> Trace<T> {
        Trace { steps: self.steps }
    }
}

impl<T: Clone> Probe<T> for Recorder<T> {
    fn comparison(&mut self, data: &[T], lhs: usize, rhs: usize) {
        self.steps
            .push(Step::capture(data, &[lhs, rhs], StepKind::Comparison));
    }

    fn exchange(&mut self, data: &[T], touched: &[usize]) {
        self.steps
            .push(Step::capture(data, touched, StepKind::Exchange));
    }
}
