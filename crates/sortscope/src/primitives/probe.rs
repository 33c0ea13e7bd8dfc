//! Instrumentation seam between the sorting algorithms and their observers.
//!
//! ## Purpose
//!
//! Every algorithm is written once against the [`Probe`] trait. The same
//! event stream then feeds either a [`Counter`](crate::primitives::metrics::Counter)
//! (aggregate metrics) or a [`Recorder`](crate::primitives::trace::Recorder)
//! (frame-by-frame trace), so both views of a run always agree.
//!
//! ## Key concepts
//!
//! * **Comparison event**: reported immediately *before* an ordering test
//!   between `data[lhs]` and `data[rhs]`. A pivot is addressed by its index.
//! * **Exchange event**: reported immediately *after* the working array
//!   changed, with the indices that were written.
//!
//! ## Invariants
//!
//! * Algorithms report exactly one event per counted operation.
//! * The slice handed to a probe is the full working array, never a sub-slice,
//!   so indices are absolute.
//!
//! ## Non-goals
//!
//! * Probes cannot influence the algorithm; they only observe.

/// Observer of the comparisons and exchanges performed by a sort.
pub trait Probe<T> {
    /// Called right before `data[lhs]` and `data[rhs]` are compared.
    fn comparison(&mut self, data: &[T], lhs: usize, rhs: usize);

    /// Called right after the positions in `touched` were written.
    fn exchange(&mut self, data: &[T], touched: &[usize]);
}
