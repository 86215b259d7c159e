//! Integer rounding primitives shared by the square and layout rules.
//!
//! The power-of-two helpers are generic over every primitive integer so that callers working in
//! `u32` share indices, `usize` cursors, or signed protocol parameters observe identical rounding.

use crate::Error;
use core::fmt::Display;
use num_traits::PrimInt;

/// Returns the smallest power of two greater than or equal to `input`, or `None` if that power of
/// two is not representable by `I`.
///
/// Any `input <= 1` (including negative values) rounds up to `1`.
pub fn checked_round_up_power_of_two<I: PrimInt>(input: I) -> Option<I> {
    let two = I::one() + I::one();
    let mut result = I::one();
    while result < input {
        result = result.checked_mul(&two)?;
    }
    Some(result)
}

/// Returns the smallest power of two greater than or equal to `input`.
///
/// Any `input <= 1` (including negative values) rounds up to `1`.
///
/// # Panics
///
/// Panics if the result does not fit in `I` (e.g. `u8` inputs above `128`). Use
/// [checked_round_up_power_of_two] when the input is not bounded.
pub fn round_up_power_of_two<I: PrimInt>(input: I) -> I {
    checked_round_up_power_of_two(input).expect("power of two exceeds integer width")
}

/// Returns the largest power of two less than or equal to `input`.
///
/// Fails with [Error::InvalidInput] if `input` is not positive.
pub fn round_down_power_of_two<I: PrimInt + Display>(input: I) -> Result<I, Error> {
    if input <= I::zero() {
        return Err(Error::InvalidInput(input.to_string()));
    }
    match checked_round_up_power_of_two(input) {
        Some(rounded_up) if rounded_up == input => Ok(rounded_up),
        Some(rounded_up) => Ok(rounded_up >> 1),
        None => {
            // The next power of two overflows, so the answer is the highest set bit of `input`.
            let bits = I::zero().count_zeros();
            let shift = bits - input.leading_zeros() - 1;
            Ok(I::one() << shift as usize)
        }
    }
}

/// Rounds `cursor` up to the next multiple of `width`.
///
/// If `cursor` is already a multiple of `width`, it is returned unchanged (so `0` stays `0`).
pub fn round_up_by_multiple_of(cursor: usize, width: usize) -> Result<usize, Error> {
    if width == 0 {
        return Err(Error::InvalidDivisor);
    }
    if cursor % width == 0 {
        return Ok(cursor);
    }
    (cursor / width + 1)
        .checked_mul(width)
        .ok_or(Error::Overflow)
}

/// Returns the smallest `r` such that `r * r >= n`.
///
/// Computed exactly over integers, so results do not depend on floating point precision.
pub fn ceil_sqrt(n: usize) -> usize {
    let target = n as u128;

    // `hi * hi` always covers the largest `usize`.
    let mut lo = 0u128;
    let mut hi = 1u128 << usize::BITS.div_ceil(2);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if mid * mid >= target {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo as usize
}
