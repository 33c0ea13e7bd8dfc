//! Execution of an in-place algorithm on a private copy of the input.
//!
//! ## Purpose
//!
//! [`Executor`] runs any algorithm of the form
//! `fn(&mut [T], &mut impl Probe<T>)` either measured (counter + stopwatch) or
//! traced (recorder with boundary steps).
//!
//! ## Design notes
//!
//! * **Copy first**: the input is copied before the stopwatch starts, so
//!   `elapsed_seconds` never includes the copy. Scratch memory an algorithm
//!   allocates for itself is part of the measured work.
//! * **Short-circuit**: inputs shorter than two elements skip the algorithm
//!   entirely and report all-zero metrics.
//! * **Stateless**: nothing survives between calls.
//!
//! ## Invariants
//!
//! * The caller's slice is only ever read.
//! * A trace always begins and ends with a boundary step, also for empty input.

// Internal dependencies
use crate::engine::output::{Sorted, Traced};
use crate::primitives::clock::Stopwatch;
use crate::primitives::metrics::{Counter, MetricsRecord};
use crate::primitives::trace::Recorder;

/// Signature shared by every algorithm in the crate when driven by a counter.
pub type MeasuredPass<T> = fn(&mut [T], &mut Counter);

/// Signature shared by every algorithm in the crate when driven by a recorder.
pub type TracedPass<T> = fn(&mut [T], &mut Recorder<T>);

/// Runs algorithms on private working copies.
#[derive(Debug, Clone, Copy, Default)]
pub struct Executor;

impl Executor {
    /// Sort a copy of `input` with `pass`, counting and timing the work.
    pub fn measure<T: Ord + Clone>(input: &[T], pass: MeasuredPass<T>) -> Sorted<T> {
        let mut working = input.to_vec();
        if working.len() < 2 {
            return Sorted::new(working, MetricsRecord::default());
        }

        let mut counter = Counter::new();
        let stopwatch = Stopwatch::start();
        pass(&mut working, &mut counter);
        let elapsed = stopwatch.elapsed_seconds();

        Sorted::new(working, counter.finish(elapsed))
    }

    /// Sort a copy of `input` with `pass`, recording every event as a step.
    pub fn record<T: Ord + Clone>(input: &[T], pass: TracedPass<T>) -> Traced<T> {
        let mut working = input.to_vec();
        let mut recorder = Recorder::new();

        recorder.boundary(&working);
        if working.len() > 1 {
            pass(&mut working, &mut recorder);
        }
        recorder.boundary(&working);

        Traced::new(working, recorder.finish())
    }
}
