//! Power of two helpers used when sizing mip chains.

/// Returns whether `num` is a power of two. Zero is not.
///
/// # Examples
///
/// ```
/// use texprep_common::pow2::is_pow2;
///
/// assert!(is_pow2(8));
/// assert!(!is_pow2(5));
/// ```
#[inline]
pub const fn is_pow2(num: u32) -> bool {
    num.is_power_of_two()
}

/// Returns the smallest power of two that is `>= num`, or `num` itself if it already is one.
///
/// Zero maps to 1. Values above `2^31` saturate to `2^31`.
///
/// # Examples
///
/// ```
/// use texprep_common::pow2::next_pow2;
///
/// assert_eq!(next_pow2(5), 8);
/// assert_eq!(next_pow2(8), 8);
/// ```
#[inline]
pub const fn next_pow2(num: u32) -> u32 {
    match checked_next_pow2(num) {
        Some(value) => value,
        None => 1 << 31,
    }
}

/// Returns the smallest power of two that is `>= num`, or [`None`] if it does not fit in a
/// [`u32`] (any `num` above `2^31`).
///
/// ```
/// use texprep_common::pow2::checked_next_pow2;
///
/// assert_eq!(checked_next_pow2(5), Some(8));
/// assert_eq!(checked_next_pow2((1 << 31) + 1), None);
/// ```
#[inline]
pub const fn checked_next_pow2(num: u32) -> Option<u32> {
    num.checked_next_power_of_two()
}
