//! Insertion sort.
//!
//! ## Purpose
//!
//! Grows a sorted prefix one element at a time, moving each new key left until
//! its predecessor is not greater than it.
//!
//! ## Design notes
//!
//! * **Stable**: the scan stops at the first predecessor that is `<=` the key.
//! * **Shift as swap**: each one-slot shift of the key is carried out as an
//!   adjacent swap, so every intermediate state is a permutation of the input.
//!   The event counts are the same as for hole-based shifting.
//!
//! ## Counting
//!
//! * One comparison per shift-candidate test, including the failing test that
//!   ends the scan.
//! * One exchange per single-slot shift; the final placement is not counted.

// Internal dependencies
use crate::primitives::probe::Probe;

/// Sort `data` in place, reporting events to `probe`.
pub fn sort_in_place<T: Ord, P: Probe<T>>(data: &mut [T], probe: &mut P) {
    for i in 1..data.len() {
        // The key travels with `j`.
        let mut j = i;
        while j > 0 {
            probe.comparison(data, j - 1, j);
            if data[j - 1] <= data[j] {
                break;
            }
            data.swap(j - 1, j);
            probe.exchange(data, &[j - 1, j]);
            j -= 1;
        }
    }
}
