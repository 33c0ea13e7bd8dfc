//! Bubble sort.
//!
//! ## Purpose
//!
//! Repeatedly walks the unsorted prefix, swapping adjacent out-of-order pairs,
//! so the largest remaining element bubbles to the end of each pass.
//!
//! ## Design notes
//!
//! * **Stable**: only strictly greater neighbours are swapped.
//! * **Early exit**: stops after the first pass that performs no swap.
//!
//! ## Counting
//!
//! * One comparison per adjacent pair test.
//! * One exchange per adjacent swap.

// Internal dependencies
use crate::primitives::probe::Probe;

/// Sort `data` in place, reporting events to `probe`.
pub fn sort_in_place<T: Ord, P: Probe<T>>(data: &mut [T], probe: &mut P) {
    let n = data.len();

    for pass in 0..n {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            probe.comparison(data, j, j + 1);
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                probe.exchange(data, &[j, j + 1]);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
