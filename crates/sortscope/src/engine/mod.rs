//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer turns an in-place algorithm into a call that leaves the caller's
//! input untouched. It copies the input, attaches the right probe, times the
//! run and packages the strongly-typed outputs.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Player
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Measured and traced execution of an algorithm.
pub mod executor;

/// Output types for sort calls.
pub mod output;
