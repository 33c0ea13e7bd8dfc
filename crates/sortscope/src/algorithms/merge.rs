//! Top-down merge sort.
//!
//! ## Purpose
//!
//! Splits the range in half, sorts both halves recursively and merges them
//! through a scratch buffer that is written back into the working array.
//!
//! ## Design notes
//!
//! * **Stable**: ties take the element from the left run.
//! * **Single buffer**: one scratch vector is allocated per call and reused by
//!   every merge.
//! * **Explicit threading**: the probe and the buffer are passed down the
//!   recursion by `&mut`.
//!
//! ## Counting
//!
//! * One comparison per element-vs-element test during a merge.
//! * One exchange per element written back, contested or not.
//!
//! ## Invariants
//!
//! * Ranges of length `<= 1` return without any event.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::probe::Probe;

/// Sort `data` in place, reporting events to `probe`.
pub fn sort_in_place<T: Ord + Clone, P: Probe<T>>(data: &mut [T], probe: &mut P) {
    let mut buffer = Vec::with_capacity(data.len());
    sort_range(data, 0, data.len(), &mut buffer, probe);
}

/// Sort the half-open range `lo..hi`.
fn sort_range<T: Ord + Clone, P: Probe<T>>(
    data: &mut [T],
    lo: usize,
    hi: usize,
    buffer: &mut Vec<T>,
    probe: &mut P,
) {
    if hi - lo <= 1 {
        return;
    }

    let mid = lo + (hi - lo) / 2;
    sort_range(data, lo, mid, buffer, probe);
    sort_range(data, mid, hi, buffer, probe);
    merge_runs(data, lo, mid, hi, buffer, probe);
}

/// Merge the sorted runs `lo..mid` and `mid..hi`.
fn merge_runs<T: Ord + Clone, P: Probe<T>>(
    data: &mut [T],
    lo: usize,
    mid: usize,
    hi: usize,
    buffer: &mut Vec<T>,
    probe: &mut P,
) {
    buffer.clear();

    let (mut i, mut j) = (lo, mid);
    while i < mid && j < hi {
        probe.comparison(data, i, j);
        if data[i] <= data[j] {
            buffer.push(data[i].clone());
            i += 1;
        } else {
            buffer.push(data[j].clone());
            j += 1;
        }
    }
    buffer.extend_from_slice(&data[i..mid]);
    buffer.extend_from_slice(&data[j..hi]);

    for (offset, value) in buffer.drain(..).enumerate() {
        let k = lo + offset;
        data[k] = value;
        probe.exchange(data, &[k]);
    }
}
