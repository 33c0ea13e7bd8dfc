//! Tests for trace replay.
//!
//! These tests drive [`TracePlayer`] with in-memory sinks and verify:
//! - One frame per step, in trace order
//! - Frame metadata (labels, interval, last-frame flag)
//! - Persist happens once, after all frames
//! - Sink errors stop the replay
//!
//! ## Test Organization
//!
//! 1. **Frame Delivery** - Order, content and restartability
//! 2. **Timing** - Frame rate and interval
//! 3. **Persist** - Ordering and error propagation

use sortscope::prelude::*;
use std::time::Duration;

/// Sink that records every frame it receives.
#[derive(Default)]
struct Collector {
    frames: Vec<(Vec<i64>, Vec<usize>, String)>,
    intervals: Vec<Duration>,
    events: Vec<&'static str>,
}

impl RenderSink<i64> for Collector {
    type Error = String;

    fn render(&mut self, frame: &Frame<'_, i64>) -> Result<(), Self::Error> {
        self.frames
            .push((frame.snapshot.to_vec(), frame.highlights.to_vec(), frame.label()));
        self.intervals.push(frame.interval);
        self.events.push(if frame.is_last() { "last" } else { "render" });
        Ok(())
    }

    fn persist(&mut self) -> Result<(), Self::Error> {
        self.events.push("persist");
        Ok(())
    }
}

/// Sink that fails on a given frame.
struct Failing {
    fail_at: usize,
    rendered: usize,
}

impl<T> RenderSink<T> for Failing {
    type Error = String;

    fn render(&mut self, frame: &Frame<'_, T>) -> Result<(), Self::Error> {
        if frame.index == self.fail_at {
            return Err(format!("frame {} rejected", frame.index));
        }
        self.rendered += 1;
        Ok(())
    }
}

// ============================================================================
// Frame Delivery Tests
// ============================================================================

/// Test that every step is rendered once, in order, with its own data.
#[test]
fn test_play_renders_every_step_in_order() {
    let traced = bubble_sort_traced(&[2_i64, 1]);
    let mut sink = Collector::default();

    let playback = TracePlayer::new("Bubble Sort")
        .play(&traced.trace, &mut sink)
        .unwrap();

    assert_eq!(playback.frames, 4);
    assert!(!playback.persisted);
    assert_eq!(
        sink.frames,
        vec![
            (vec![2, 1], vec![], "Bubble Sort - Step 1/4".to_string()),
            (vec![2, 1], vec![0, 1], "Bubble Sort - Step 2/4".to_string()),
            (vec![1, 2], vec![0, 1], "Bubble Sort - Step 3/4".to_string()),
            (vec![1, 2], vec![], "Bubble Sort - Step 4/4".to_string()),
        ]
    );
    assert_eq!(sink.events, vec!["render", "render", "render", "last"]);
}

/// Test that replaying the same trace twice yields identical frames.
#[test]
fn test_replay_is_restartable() {
    let traced = heap_sort_traced(&[9_i64, 4, 7, 1, 3]);
    let player = TracePlayer::new("Heap Sort");

    let mut first = Collector::default();
    let mut second = Collector::default();
    player.play(&traced.trace, &mut first).unwrap();
    player.play(&traced.trace, &mut second).unwrap();

    assert_eq!(first.frames, second.frames);
    assert_eq!(first.frames.len(), traced.trace.len());
}

/// Test the frame iterator without a sink.
#[test]
fn test_frames_iterator() {
    let traced = quick_sort_traced(&[3_i64, 1, 2]);
    let player = TracePlayer::new("Quick Sort");

    let frames: Vec<Frame<'_, i64>> = player.frames(&traced.trace).collect();
    assert_eq!(frames.len(), traced.trace.len());

    for (index, (frame, step)) in frames.iter().zip(traced.trace.iter()).enumerate() {
        assert_eq!(frame.index, index);
        assert_eq!(frame.total, traced.trace.len());
        assert_eq!(frame.title, "Quick Sort");
        assert_eq!(frame.snapshot, step.snapshot.as_slice());
        assert_eq!(frame.kind, step.kind);
        for &position in frame.highlights {
            assert!(frame.is_highlighted(position));
        }
    }
    assert!(frames.last().unwrap().is_last());
}

/// Test that an empty input still replays its two boundary frames.
#[test]
fn test_play_degenerate_trace() {
    let traced = merge_sort_traced::<i64>(&[]);
    let mut sink = Collector::default();

    let playback = TracePlayer::default().play(&traced.trace, &mut sink).unwrap();

    assert_eq!(playback.frames, 2);
    assert_eq!(sink.frames[0].2, " - Step 1/2");
}

// ============================================================================
// Timing Tests
// ============================================================================

/// Test the default frame rate and its interval.
#[test]
fn test_default_frame_rate() {
    let player = TracePlayer::new("Insertion Sort");

    assert_eq!(player.frame_rate(), DEFAULT_FPS);
    assert_eq!(player.frame_rate(), 20);
    assert_eq!(player.frame_interval(), Duration::from_millis(50));
    assert_eq!(player.title(), "Insertion Sort");
}

/// Test that frames carry the configured interval.
#[test]
fn test_frames_carry_interval() {
    let traced = selection_sort_traced(&[2_i64, 3, 1]);
    let mut sink = Collector::default();

    let playback = TracePlayer::new("Selection Sort")
        .fps(4)
        .play(&traced.trace, &mut sink)
        .unwrap();

    assert_eq!(playback.interval, Duration::from_millis(250));
    assert!(sink.intervals.iter().all(|&interval| interval == Duration::from_millis(250)));
}

/// Test that a zero frame rate is raised to one frame per second.
#[test]
fn test_zero_fps_is_clamped() {
    let player = TracePlayer::new("Bubble Sort").fps(0);

    assert_eq!(player.frame_rate(), 1);
    assert_eq!(player.frame_interval(), Duration::from_secs(1));
}

// ============================================================================
// Persist Tests
// ============================================================================

/// Test that persist happens exactly once, after the last frame.
#[test]
fn test_persist_follows_last_frame() {
    let traced = insertion_sort_traced(&[3_i64, 1, 2]);
    let mut sink = Collector::default();

    let playback = TracePlayer::new("Insertion Sort")
        .play_and_persist(&traced.trace, &mut sink)
        .unwrap();

    assert!(playback.persisted);
    assert_eq!(sink.events.last(), Some(&"persist"));
    assert_eq!(sink.events.iter().filter(|&&event| event == "persist").count(), 1);
    assert_eq!(sink.events[sink.events.len() - 2], "last");
}

/// Test that the first sink error aborts the replay.
#[test]
fn test_sink_error_stops_replay() {
    let traced = bubble_sort_traced(&[4, 3, 2, 1]);
    let mut sink = Failing {
        fail_at: 2,
        rendered: 0,
    };

    let err = TracePlayer::new("Bubble Sort")
        .play_and_persist(&traced.trace, &mut sink)
        .unwrap_err();

    assert_eq!(err, "frame 2 rejected");
    assert_eq!(sink.rendered, 2);
}

/// Test that the default persist is a no-op.
#[test]
fn test_default_persist_is_noop() {
    let traced = merge_sort_traced(&[2, 1]);
    let mut sink = Failing {
        fail_at: usize::MAX,
        rendered: 0,
    };

    let playback = TracePlayer::new("Merge Sort")
        .play_and_persist(&traced.trace, &mut sink)
        .unwrap();

    assert!(playback.persisted);
    assert_eq!(sink.rendered, traced.trace.len());
}
