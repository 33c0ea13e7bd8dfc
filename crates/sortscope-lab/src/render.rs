//! Rendering sinks for trace animation.
//!
//! ## Purpose
//!
//! Two [`RenderSink`] backends for replaying `i64` traces:
//!
//! * [`TerminalSink`] draws each frame live with crossterm and paces itself on
//!   the frame interval.
//! * [`TextSink`] renders frames to text in memory and writes them all to a
//!   file when persisted.
//!
//! ## Key concepts
//!
//! * **Bars**: every element is one horizontal bar whose length is its value
//!   scaled between the smallest and largest value of the frame.
//! * **Highlights**: positions just compared or written are drawn in red in
//!   the terminal and marked with `*` in text.

// External dependencies
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use std::thread;

// Export dependencies from sortscope crate
use sortscope::prelude::{Frame, RenderSink};

// Internal dependencies
use crate::errors::LabError;

/// Default bar width in cells.
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Bar length for every value, scaled into `1..=width`.
pub fn bar_lengths(values: &[i64], width: usize) -> Vec<usize> {
    let width = width.max(1);
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };

    let span = (max as f64) - (min as f64);
    values
        .iter()
        .map(|&value| {
            if span <= 0.0 {
                width
            } else {
                let ratio = ((value as f64) - (min as f64)) / span;
                1 + (ratio * (width - 1) as f64).round() as usize
            }
        })
        .collect()
}

// ============================================================================
// Terminal Sink
// ============================================================================

/// Live terminal animation.
pub struct TerminalSink<W: Write> {
    out: W,
    bar_width: usize,
    pace: bool,
}

impl TerminalSink<Stdout> {
    /// Draw on standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSink<W> {
    /// Draw on `out`, sleeping one frame interval after every frame.
    pub fn new(out: W) -> Self {
        Self {
            out,
            bar_width: DEFAULT_BAR_WIDTH,
            pace: true,
        }
    }

    /// Maximum bar length in cells.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Enable or disable sleeping between frames.
    pub fn pace(mut self, pace: bool) -> Self {
        self.pace = pace;
        self
    }

    fn draw(&mut self, frame: &Frame<'_, i64>) -> io::Result<()> {
        if frame.index == 0 {
            queue!(self.out, Hide)?;
        }
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(frame.label()),
            Print("\r\n\r\n")
        )?;

        let label_width = frame
            .snapshot
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);

        for (index, (value, len)) in frame
            .snapshot
            .iter()
            .zip(bar_lengths(frame.snapshot, self.bar_width))
            .enumerate()
        {
            let color = if frame.is_highlighted(index) {
                Color::Red
            } else {
                Color::Blue
            };
            queue!(
                self.out,
                Print(format!("{value:>label_width$} ")),
                SetForegroundColor(color),
                Print("█".repeat(len)),
                ResetColor,
                Print("\r\n")
            )?;
        }

        if frame.is_last() {
            queue!(self.out, Show)?;
        }
        self.out.flush()
    }
}

impl<W: Write> RenderSink<i64> for TerminalSink<W> {
    type Error = LabError;

    fn render(&mut self, frame: &Frame<'_, i64>) -> Result<(), Self::Error> {
        self.draw(frame)
            .map_err(|err| LabError::Render(err.to_string()))?;
        if self.pace {
            thread::sleep(frame.interval);
        }
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show);
    }
}

// ============================================================================
// Text Sink
// ============================================================================

/// Renders frames as text and saves them on persist.
#[derive(Debug, Clone)]
pub struct TextSink {
    path: PathBuf,
    bar_width: usize,
    frames: Vec<String>,
}

impl TextSink {
    /// Collect frames to be written to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bar_width: DEFAULT_BAR_WIDTH,
            frames: Vec::new(),
        }
    }

    /// Maximum bar length in characters.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width.max(1);
        self
    }

    /// Destination of [`RenderSink::persist`].
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// All frames joined by blank lines.
    pub fn to_text(&self) -> String {
        self.frames.join("\n")
    }

    fn draw(&self, frame: &Frame<'_, i64>) -> String {
        let label_width = frame
            .snapshot
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);

        let mut text = String::new();
        let _ = writeln!(text, "{} [{}]", frame.label(), frame.kind);
        for (index, (value, len)) in frame
            .snapshot
            .iter()
            .zip(bar_lengths(frame.snapshot, self.bar_width))
            .enumerate()
        {
            let marker = if frame.is_highlighted(index) { '*' } else { ' ' };
            let _ = writeln!(text, "{marker} {value:>label_width$} {}", "#".repeat(len));
        }
        text
    }
}

impl RenderSink<i64> for TextSink {
    type Error = LabError;

    fn render(&mut self, frame: &Frame<'_, i64>) -> Result<(), Self::Error> {
        let text = self.draw(frame);
        self.frames.push(text);
        Ok(())
    }

    fn persist(&mut self) -> Result<(), Self::Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| LabError::io(parent, err))?;
        }
        fs::write(&self.path, self.to_text()).map_err(|err| LabError::io(&self.path, err))
    }
}
