//! Heap sort over a zero-based max-heap.
//!
//! ## Purpose
//!
//! Builds a max-heap in the working array, then repeatedly swaps the root to
//! the end of the shrinking heap and restores the heap property.
//!
//! ## Design notes
//!
//! * **Not stable**: root extraction moves elements across their equals.
//! * **Indexing**: children of `i` are `2i + 1` and `2i + 2`.
//!
//! ## Counting
//!
//! * One comparison per parent-vs-child test in sift-down, up to two per level.
//! * One exchange per root extraction and per sift-down swap.

// Internal dependencies
use crate::primitives::probe::Probe;

/// Sort `data` in place, reporting events to `probe`.
pub fn sort_in_place<T: Ord, P: Probe<T>>(data: &mut [T], probe: &mut P) {
    let n = data.len();
    if n < 2 {
        return;
    }

    for start in (0..=(n - 2) / 2).rev() {
        sift_down(data, start, n - 1, probe);
    }

    for end in (1..n).rev() {
        data.swap(0, end);
        probe.exchange(data, &[0, end]);
        sift_down(data, 0, end - 1, probe);
    }
}

/// Restore the max-heap property below `start`, considering indices up to `end`.
fn sift_down<T: Ord, P: Probe<T>>(data: &mut [T], start: usize, end: usize, probe: &mut P) {
    let mut root = start;

    loop {
        let child = 2 * root + 1;
        if child > end {
            return;
        }

        let mut largest = root;
        probe.comparison(data, largest, child);
        if data[largest] < data[child] {
            largest = child;
        }
        if child < end {
            probe.comparison(data, largest, child + 1);
            if data[largest] < data[child + 1] {
                largest = child + 1;
            }
        }

        if largest == root {
            return;
        }

        data.swap(root, largest);
        probe.exchange(data, &[root, largest]);
        root = largest;
    }
}
