//! # sortscope - Instrumented comparison sorts for Rust
//!
//! Six classic comparison sorts (bubble, insertion, selection, merge, quick and
//! heap) that never touch their input and report what they did: either a
//! [`MetricsRecord`](prelude::MetricsRecord) with comparison and exchange
//! counts plus elapsed time, or a replayable [`Trace`](prelude::Trace) of every
//! intermediate array state.
//!
//! ## Quick Start
//!
//! ### Counting operations
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let input = vec![5, 3, 8, 3, 1];
//! let result = bubble_sort(&input);
//!
//! assert_eq!(result.sequence, vec![1, 3, 3, 5, 8]);
//! assert_eq!(result.metrics.comparisons, 10);
//! assert_eq!(result.metrics.exchanges, 7);
//!
//! // The input is left untouched.
//! assert_eq!(input, vec![5, 3, 8, 3, 1]);
//! println!("{}", result);
//! ```
//!
//! ```text
//! Summary:
//!   Elements:    5
//!   Comparisons: 10
//!   Exchanges:   7
//!   Elapsed:     0.000001s
//!
//! Sorted: [1, 3, 3, 5, 8]
//! ```
//!
//! ### Recording a trace
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let traced = bubble_sort_traced(&[2, 1]);
//!
//! let kinds: Vec<StepKind> = traced.trace.iter().map(|step| step.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         StepKind::Boundary,
//!         StepKind::Comparison,
//!         StepKind::Exchange,
//!         StepKind::Boundary,
//!     ]
//! );
//! assert_eq!(traced.trace.last().unwrap().snapshot, vec![1, 2]);
//! ```
//!
//! ### Choosing an algorithm at runtime
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! let algorithm: Algorithm = "merge_sort".parse()?;
//! let result = algorithm.sort(&["pear", "apple", "fig"]);
//!
//! assert_eq!(result.sequence, vec!["apple", "fig", "pear"]);
//! assert!(algorithm.is_stable());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Replaying a trace
//!
//! A [`TracePlayer`](prelude::TracePlayer) walks a trace and hands each step to
//! a [`RenderSink`](prelude::RenderSink):
//!
//! ```rust
//! use sortscope::prelude::*;
//!
//! struct Captions(Vec<String>);
//!
//! impl<T> RenderSink<T> for Captions {
//!     type Error = core::convert::Infallible;
//!
//!     fn render(&mut self, frame: &Frame<'_, T>) -> Result<(), Self::Error> {
//!         self.0.push(frame.label());
//!         Ok(())
//!     }
//! }
//!
//! let traced = insertion_sort_traced(&[3, 1, 2]);
//! let mut sink = Captions(Vec::new());
//! let playback = TracePlayer::new("Insertion Sort").play(&traced.trace, &mut sink).unwrap();
//!
//! assert_eq!(playback.frames, traced.trace.len());
//! assert_eq!(sink.0[0], format!("Insertion Sort - Step 1/{}", traced.trace.len()));
//! ```
//!
//! ## Counting conventions
//!
//! | Event      | Counted when                                                   |
//! |------------|----------------------------------------------------------------|
//! | Comparison | once per ordering test between two elements                    |
//! | Exchange   | once per swap, or once per element written back during a merge |
//!
//! Every traced sort records exactly one step per counted event plus a leading
//! and a trailing boundary step, so a trace always agrees with the metrics of
//! the same algorithm on the same input.
//!
//! ## Stability
//!
//! | Algorithm | Stable | Notes                                  |
//! |-----------|--------|----------------------------------------|
//! | bubble    | yes    | early exit after a pass with no swaps  |
//! | insertion | yes    | each shift is one adjacent exchange    |
//! | selection | no     | swaps only when a smaller element won  |
//! | merge     | yes    | ties take the left run                 |
//! | quick     | no     | Lomuto partition, last element pivot   |
//! | heap      | no     | zero-based max-heap                    |
//!
//! ## Features
//!
//! * `std` (default): wall-clock timing. Without it the crate is `no_std` +
//!   `alloc` and every elapsed time is reported as zero.
//! * `serde`: `Serialize`/`Deserialize` for results, metrics and traces.
//! * `dev`: exposes the internal layers under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - probes, metrics, traces and errors.
mod primitives;

// Layer 2: Algorithms - the six instrumented sorts.
mod algorithms;

// Layer 3: Engine - copy, run, time and package.
mod engine;

// Layer 4: Player - frame-by-frame trace replay.
mod player;

// High-level API for instrumented sorting.
mod api;

// Standard sortscope prelude.
pub mod prelude {
    pub use crate::api::{
        bubble_sort, bubble_sort_traced, heap_sort, heap_sort_traced, insertion_sort,
        insertion_sort_traced, merge_sort, merge_sort_traced, quick_sort, quick_sort_traced,
        selection_sort, selection_sort_traced, Algorithm, SortError, Sorted, Traced,
    };
    pub use crate::player::frame::{Frame, RenderSink};
    pub use crate::player::replay::{Playback, TracePlayer, DEFAULT_FPS};
    pub use crate::primitives::metrics::{Counter, MetricsRecord};
    pub use crate::primitives::probe::Probe;
    pub use crate::primitives::trace::{Recorder, Step, StepKind, Trace};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod player {
        pub use crate::player::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
