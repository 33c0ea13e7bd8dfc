//! High-level API for instrumented sorting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: two functions per
//! algorithm (`*_sort` for metrics, `*_sort_traced` for a step trace) and the
//! [`Algorithm`] enum for choosing an algorithm at runtime.
//!
//! ## Design notes
//!
//! * **Uniform**: every entry point returns the same [`Sorted`] or [`Traced`]
//!   shape.
//! * **Non-mutating**: inputs are borrowed immutably; results are new vectors.
//! * **Total**: no entry point can fail.
//!
//! ## Key concepts
//!
//! * **Stable algorithms**: bubble, insertion and merge keep equal elements in
//!   input order. Selection, quick and heap make no such promise.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use core::fmt::{Display, Formatter};
use core::str::FromStr;

// Internal dependencies
use crate::algorithms::{bubble, heap, insertion, merge, quick, selection};
use crate::engine::executor::Executor;

// Publicly re-exported types
pub use crate::engine::output::{Sorted, Traced};
pub use crate::primitives::errors::SortError;

// ============================================================================
// Metrics Entry Points
// ============================================================================

/// Bubble sort a copy of `input`, counting operations.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Sorted<T> {
    Executor::measure(input, bubble::sort_in_place)
}

/// Insertion sort a copy of `input`, counting operations.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Sorted<T> {
    Executor::measure(input, insertion::sort_in_place)
}

/// Selection sort a copy of `input`, counting operations.
pub fn selection_sort<T: Ord + Clone>(input: &[T]) -> Sorted<T> {
    Executor::measure(input, selection::sort_in_place)
}

/// Merge sort a copy of `input`, counting operations.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Sorted<T> {
    Executor::measure(input, merge::sort_in_place)
}

/// Quick sort a copy of `input`, counting operations.
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Sorted<T> {
    Executor::measure(input, quick::sort_in_place)
}

/// Heap sort a copy of `input`, counting operations.
pub fn heap_sort<T: Ord + Clone>(input: &[T]) -> Sorted<T> {
    Executor::measure(input, heap::sort_in_place)
}

// ============================================================================
// Trace Entry Points
// ============================================================================

/// Bubble sort a copy of `input`, recording every step.
pub fn bubble_sort_traced<T: Ord + Clone>(input: &[T]) -> Traced<T> {
    Executor::record(input, bubble::sort_in_place)
}

/// Insertion sort a copy of `input`, recording every step.
pub fn insertion_sort_traced<T: Ord + Clone>(input: &[T]) -> Traced<T> {
    Executor::record(input, insertion::sort_in_place)
}

/// Selection sort a copy of `input`, recording every step.
pub fn selection_sort_traced<T: Ord + Clone>(input: &[T]) -> Traced<T> {
    Executor::record(input, selection::sort_in_place)
}

/// Merge sort a copy of `input`, recording every step.
pub fn merge_sort_traced<T: Ord + Clone>(input: &[T]) -> Traced<T> {
    Executor::record(input, merge::sort_in_place)
}

/// Quick sort a copy of `input`, recording every step.
pub fn quick_sort_traced<T: Ord + Clone>(input: &[T]) -> Traced<T> {
    Executor::record(input, quick::sort_in_place)
}

/// Heap sort a copy of `input`, recording every step.
pub fn heap_sort_traced<T: Ord + Clone>(input: &[T]) -> Traced<T> {
    Executor::record(input, heap::sort_in_place)
}

// ============================================================================
// Algorithm Selection
// ============================================================================

/// The six instrumented sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Adjacent swaps with early exit.
    Bubble,

    /// Growing sorted prefix.
    Insertion,

    /// Minimum of the unsorted suffix.
    Selection,

    /// Top-down merging.
    Merge,

    /// Lomuto partitioning around the last element.
    Quick,

    /// Zero-based max-heap.
    Heap,
}

impl Algorithm {
    /// Every algorithm, in the canonical reporting order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// Short lowercase name, e.g. `"bubble"`.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Display title, e.g. `"Bubble Sort"`.
    pub fn title(&self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// Whether equal elements are guaranteed to keep their input order.
    pub fn is_stable(&self) -> bool {
        matches!(
            self,
            Algorithm::Bubble | Algorithm::Insertion | Algorithm::Merge
        )
    }

    /// Sort a copy of `input`, counting operations.
    pub fn sort<T: Ord + Clone>(&self, input: &[T]) -> Sorted<T> {
        match self {
            Algorithm::Bubble => bubble_sort(input),
            Algorithm::Insertion => insertion_sort(input),
            Algorithm::Selection => selection_sort(input),
            Algorithm::Merge => merge_sort(input),
            Algorithm::Quick => quick_sort(input),
            Algorithm::Heap => heap_sort(input),
        }
    }

    /// Sort a copy of `input`, recording every step.
    pub fn sort_traced<T: Ord + Clone>(&self, input: &[T]) -> Traced<T> {
        match self {
            Algorithm::Bubble => bubble_sort_traced(input),
            Algorithm::Insertion => insertion_sort_traced(input),
            Algorithm::Selection => selection_sort_traced(input),
            Algorithm::Merge => merge_sort_traced(input),
            Algorithm::Quick => quick_sort_traced(input),
            Algorithm::Heap => heap_sort_traced(input),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts `"bubble"` as well as `"bubble_sort"`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let name = lowered.strip_suffix("_sort").unwrap_or(&lowered);

        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}
