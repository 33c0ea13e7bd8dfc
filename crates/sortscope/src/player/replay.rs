//! Trace replay at a nominal frame rate.
//!
//! ## Purpose
//!
//! [`TracePlayer`] walks a trace in order and renders one frame per step:
//!
//! ```text
//! for each step in trace, in order:
//!     sink.render(step.snapshot, step.highlights)
//! ```
//!
//! ## Design notes
//!
//! * **Restartable**: the player borrows the trace, so the same trace can be
//!   replayed any number of times with identical frames.
//! * **Persist is terminal**: `play_and_persist` renders every frame first and
//!   only then asks the sink to persist, so persisting never changes what was
//!   rendered.
//! * **Fail-fast**: the first sink error stops the replay and is returned.
//!
//! ## Invariants
//!
//! * The frame rate is always at least one frame per second.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::time::Duration;

// Internal dependencies
use crate::player::frame::{Frame, RenderSink};
use crate::primitives::trace::Trace;

/// Default nominal frame rate.
pub const DEFAULT_FPS: u32 = 20;

/// Summary of a finished replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    /// Number of frames rendered.
    pub frames: usize,

    /// Nominal interval between frames.
    pub interval: Duration,

    /// Whether the sink was asked to persist.
    pub persisted: bool,
}

/// Replays traces into rendering sinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePlayer {
    title: String,
    fps: u32,
}

impl Default for TracePlayer {
    fn default() -> Self {
        Self::new("")
    }
}

impl TracePlayer {
    /// Create a player with the given frame title at [`DEFAULT_FPS`].
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fps: DEFAULT_FPS,
        }
    }

    /// Set the nominal frame rate; zero is raised to one.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Title shown on every frame.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Nominal frame rate.
    pub fn frame_rate(&self) -> u32 {
        self.fps
    }

    /// Nominal time between two frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// Frames of `trace` in replay order.
    pub fn frames<'a, T>(&'a self, trace: &'a Trace<T>) -> impl Iterator<Item = Frame<'a, T>> + 'a {
        let total = trace.len();
        let interval = self.frame_interval();

        trace.iter().enumerate().map(move |(index, step)| Frame {
            index,
            total,
            title: &self.title,
            snapshot: &step.snapshot,
            highlights: &step.highlights,
            kind: step.kind,
            interval,
        })
    }

    /// Render every step of `trace` into `sink`, in order.
    pub fn play<T, S>(&self, trace: &Trace<T>, sink: &mut S) -> Result<Playback, S::Error>
    where
        S: RenderSink<T> + ?Sized,
    {
        let mut frames = 0;
        for frame in self.frames(trace) {
            sink.render(&frame)?;
            frames += 1;
        }

        Ok(Playback {
            frames,
            interval: self.frame_interval(),
            persisted: false,
        })
    }

    /// Render every step of `trace` into `sink`, then persist once.
    pub fn play_and_persist<T, S>(&self, trace: &Trace<T>, sink: &mut S) -> Result<Playback, S::Error>
    where
        S: RenderSink<T> + ?Sized,
    {
        let mut playback = self.play(trace, sink)?;
        sink.persist()?;
        playback.persisted = true;
        Ok(playback)
    }
}
