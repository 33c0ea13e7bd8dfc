//! Frames handed to a rendering sink.
//!
//! ## Purpose
//!
//! A [`Frame`] is a borrowed view of one trace step plus the metadata a
//! renderer needs to draw it: position in the replay, title and nominal
//! display interval. [`RenderSink`] is the seam implemented by concrete
//! backends (terminal, text file, test collectors).
//!
//! ## Design notes
//!
//! * **Borrowed**: frames point into the trace and are never stored by the
//!   player, so replaying costs no copies.
//! * **Pacing belongs to the sink**: the frame carries its interval, and a
//!   live backend sleeps on it. Headless backends ignore it.
//!
//! ## Invariants
//!
//! * `index < total`.
//! * `highlights` is ascending and unique, as in the underlying step.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::time::Duration;

// Internal dependencies
use crate::primitives::trace::StepKind;

/// One rendered frame of a trace replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a, T> {
    /// Zero-based position in the replay.
    pub index: usize,

    /// Number of frames in the replay.
    pub total: usize,

    /// Title the replay was started with.
    pub title: &'a str,

    /// Array state to draw.
    pub snapshot: &'a [T],

    /// Positions to draw as active.
    pub highlights: &'a [usize],

    /// Event that produced the underlying step.
    pub kind: StepKind,

    /// Nominal time the frame stays on screen.
    pub interval: Duration,
}

impl<T> Frame<'_, T> {
    /// Caption of the form `"<title> - Step <n>/<total>"`, `n` one-based.
    pub fn label(&self) -> String {
        format!("{} - Step {}/{}", self.title, self.index + 1, self.total)
    }

    /// Check whether position `index` is drawn as active.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlights.binary_search(&index).is_ok()
    }

    /// Check whether this is the final frame of the replay.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

/// Backend that draws frames and can optionally persist what it drew.
pub trait RenderSink<T> {
    /// Failure raised by the backend.
    type Error;

    /// Draw one frame. Frames arrive strictly in trace order.
    fn render(&mut self, frame: &Frame<'_, T>) -> Result<(), Self::Error>;

    /// Write everything rendered so far to durable media.
    ///
    /// Called at most once, after the last frame. The default does nothing.
    fn persist(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
