//! Square and subtree sizing for a single blob.

use crate::math::{ceil_sqrt, checked_round_up_power_of_two, round_up_power_of_two};
use std::num::NonZeroUsize;

/// Returns the side of the smallest square (a power of two) that can hold `share_count` shares.
///
/// An empty blob still needs a square of side `1`.
///
/// The square root is computed exactly over integers. Implementations that take `ceil(sqrt(n))`
/// in `f64` agree for every `n <= 2^52` but can round down above it (e.g. `2^54 + 1` yields `2^27`
/// in `f64` and `2^28` here), so nodes must not mix the two for such inputs.
pub fn blob_min_square_size(share_count: usize) -> usize {
    // The square root of any `usize` is at most `2^(BITS/2)`, so rounding up cannot overflow.
    round_up_power_of_two(ceil_sqrt(share_count))
}

/// Returns the maximum number of leaves per subtree in the commitment over a blob of
/// `share_count` shares.
///
/// The blob is split into at most `subtree_root_threshold` subtrees, each as wide as the smallest
/// power of two that achieves that bound. The width never exceeds [blob_min_square_size] for the
/// same blob, so the commitment never assumes a square larger than the blob could need.
pub fn subtree_width(share_count: usize, subtree_root_threshold: NonZeroUsize) -> usize {
    let s = share_count.div_ceil(subtree_root_threshold.get());
    let min_square_size = blob_min_square_size(share_count);

    // If `s` rounds past the integer width, it is certainly wider than the square.
    match checked_round_up_power_of_two(s) {
        Some(width) => width.min(min_square_size),
        None => min_square_size,
    }
}
