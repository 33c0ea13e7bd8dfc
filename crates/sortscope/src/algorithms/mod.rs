//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! The six comparison sorts. Each one sorts a mutable working slice in place
//! and reports every counted comparison and exchange to a
//! [`Probe`](crate::primitives::probe::Probe). None of them depends on another.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Player
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bubble sort with early exit.
pub mod bubble;

/// Insertion sort.
pub mod insertion;

/// Selection sort.
pub mod selection;

/// Top-down merge sort.
pub mod merge;

/// Quick sort with Lomuto partitioning.
pub mod quick;

/// Heap sort over a zero-based max-heap.
pub mod heap;
