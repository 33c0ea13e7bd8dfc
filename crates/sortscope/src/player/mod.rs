//! Layer 4: Player
//!
//! # Purpose
//!
//! This layer replays a [`Trace`](crate::primitives::trace::Trace) as a
//! sequence of frames into a rendering sink. It carries no algorithmic
//! content: frames come out strictly in trace order.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Player ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Frames and the rendering sink seam.
pub mod frame;

/// Trace replay at a nominal frame rate.
pub mod replay;
