//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data model shared by every sort: the metrics
//! record, the step trace, the probe seam that algorithms report events to,
//! and the stopwatch. It has zero internal dependencies within the crate.
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
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Instrumentation seam for comparison and exchange events.
pub mod probe;

/// Operation counters and the metrics record.
pub mod metrics;

/// Step traces and the recording probe.
pub mod trace;

/// Wall-clock timing.
pub mod clock;

/// Shared error types.
pub mod errors;
