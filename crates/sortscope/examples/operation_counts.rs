//! Operation Counts and Trace Walkthrough
//!
//! This example demonstrates the two halves of the crate:
//! - Measured sorts with comparison and exchange counts
//! - Traced sorts replayed step by step into a plain-text sink
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use sortscope::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), SortError> {
    println!("{}", "=".repeat(60));
    println!("sortscope - Operation Counts");
    println!("{}", "=".repeat(60));
    println!();

    example_1_counts();
    example_2_runtime_choice()?;
    example_3_trace_walkthrough();

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Counts for every algorithm on one input
fn example_1_counts() {
    println!("Example 1: Counts on [5, 3, 8, 3, 1]");
    println!("{}", "-".repeat(60));

    let input = [5, 3, 8, 3, 1];
    println!("{:<10} {:>12} {:>10}", "algorithm", "comparisons", "exchanges");
    for algorithm in Algorithm::ALL {
        let metrics = algorithm.sort(&input).metrics;
        println!(
            "{:<10} {:>12} {:>10}",
            algorithm, metrics.comparisons, metrics.exchanges
        );
    }
    println!();

    // algorithm   comparisons  exchanges
    // bubble               10          7
    // insertion             9          7
    // selection            10          3
    // merge                 8         12
    // quick                 8          5
    // heap                  9          7
}

#[cfg(feature = "std")]
/// Example 2: Choosing the algorithm from a string
fn example_2_runtime_choice() -> Result<(), SortError> {
    println!("Example 2: Runtime selection");
    println!("{}", "-".repeat(60));

    let algorithm: Algorithm = "Heap_Sort".parse()?;
    let result = algorithm.sort(&[9, -2, 4, 4, 0]);
    println!("{}", result);
    println!();

    // Summary:
    //   Elements:    5
    //   ...
    // Sorted: [-2, 0, 4, 4, 9]
    Ok(())
}

#[cfg(feature = "std")]
/// Sink that prints one line per frame.
struct Printer;

#[cfg(feature = "std")]
impl RenderSink<i32> for Printer {
    type Error = core::convert::Infallible;

    fn render(&mut self, frame: &Frame<'_, i32>) -> Result<(), Self::Error> {
        let cells: Vec<String> = frame
            .snapshot
            .iter()
            .enumerate()
            .map(|(i, value)| {
                if frame.is_highlighted(i) {
                    format!("[{value}]")
                } else {
                    format!(" {value} ")
                }
            })
            .collect();
        println!("{:<28} {:<8} {}", frame.label(), frame.kind, cells.join(""));
        Ok(())
    }
}

#[cfg(feature = "std")]
/// Example 3: Replaying an insertion sort trace
fn example_3_trace_walkthrough() {
    println!("Example 3: Insertion sort trace of [3, 1, 2]");
    println!("{}", "-".repeat(60));

    let traced = insertion_sort_traced(&[3, 1, 2]);
    let player = TracePlayer::new("Insertion Sort");
    let playback = player
        .play(&traced.trace, &mut Printer)
        .unwrap_or_else(|never| match never {});
    println!("{} frames at {:?} each", playback.frames, playback.interval);

    // Insertion Sort - Step 1/7    boundary  3  1  2
    // Insertion Sort - Step 2/7    compare  [3][1] 2
    // Insertion Sort - Step 3/7    exchange [1][3] 2
    // ...
    // 7 frames at 50ms each
}
