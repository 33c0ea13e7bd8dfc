//! Quick sort with the Lomuto partition scheme.
//!
//! ## Purpose
//!
//! Partitions each range around its last element, then recurses on both sides
//! of the pivot's final position.
//!
//! ## Design notes
//!
//! * **Not stable**: partition swaps reorder equal elements.
//! * **Pivot**: always the last element of the range; sorted input therefore
//!   hits the quadratic worst case.
//!
//! ## Counting
//!
//! * One comparison per element-vs-pivot test.
//! * One exchange per partition swap, self-swaps included, plus exactly one
//!   terminal pivot swap per partition call.
//!
//! ## Invariants
//!
//! * Ranges of length `<= 1` return without any event.

// Internal dependencies
use crate::primitives::probe::Probe;

/// Sort `data` in place, reporting events to `probe`.
pub fn sort_in_place<T: Ord, P: Probe<T>>(data: &mut [T], probe: &mut P) {
    if data.len() > 1 {
        sort_range(data, 0, data.len() - 1, probe);
    }
}

/// Sort the inclusive range `lo..=hi`.
fn sort_range<T: Ord, P: Probe<T>>(data: &mut [T], lo: usize, hi: usize, probe: &mut P) {
    if lo >= hi {
        return;
    }

    let pivot = partition(data, lo, hi, probe);
    if pivot > lo {
        sort_range(data, lo, pivot - 1, probe);
    }
    sort_range(data, pivot + 1, hi, probe);
}

/// Partition `lo..=hi` around `data[hi]` and return the pivot's final index.
fn partition<T: Ord, P: Probe<T>>(data: &mut [T], lo: usize, hi: usize, probe: &mut P) -> usize {
    // The pivot stays at `hi` until the terminal swap since `i <= j < hi`.
    let mut i = lo;
    for j in lo..hi {
        probe.comparison(data, j, hi);
        if data[j] < data[hi] {
            data.swap(i, j);
            probe.exchange(data, &[i, j]);
            i += 1;
        }
    }

    data.swap(i, hi);
    probe.exchange(data, &[i, hi]);
    i
}
