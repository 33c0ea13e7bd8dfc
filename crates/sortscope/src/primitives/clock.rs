//! Wall-clock timing for measured sorts.
//!
//! With the `std` feature the stopwatch wraps [`std::time::Instant`]. Without
//! it there is no clock available and every measurement reads `0.0`.

#[cfg(feature = "std")]
use std::time::Instant;

/// Monotonic stopwatch started at construction.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    #[cfg(feature = "std")]
    started: Instant,
}

impl Stopwatch {
    /// Start timing now.
    #[cfg(feature = "std")]
    #[inline]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Start timing now.
    #[cfg(not(feature = "std"))]
    #[inline]
    pub fn start() -> Self {
        Self {}
    }

    /// Seconds elapsed since [`Stopwatch::start`].
    #[cfg(feature = "std")]
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }

    /// Seconds elapsed since [`Stopwatch::start`]; always zero without `std`.
    #[cfg(not(feature = "std"))]
    #[inline]
    pub fn elapsed_seconds(&self) -> f64 {
        0.0
    }
}
