//! Selection sort.
//!
//! ## Purpose
//!
//! For each position, scans the unsorted suffix for its minimum and swaps it
//! into place.
//!
//! ## Design notes
//!
//! * **Not stable**: the long-distance swap can jump an element over its equals.
//! * **Few writes**: at most one swap per outer iteration.
//!
//! ## Counting
//!
//! * One comparison per candidate-vs-current-minimum test.
//! * One exchange per outer iteration, only when a smaller minimum was found.

// Internal dependencies
use crate::primitives::probe::Probe;

/// Sort `data` in place, reporting events to `probe`.
pub fn sort_in_place<T: Ord, P: Probe<T>>(data: &mut [T], probe: &mut P) {
    let n = data.len();

    for i in 0..n {
        let mut min = i;
        for j in i + 1..n {
            probe.comparison(data, min, j);
            if data[j] < data[min] {
                min = j;
            }
        }

        if min != i {
            data.swap(i, min);
            probe.exchange(data, &[i, min]);
        }
    }
}
