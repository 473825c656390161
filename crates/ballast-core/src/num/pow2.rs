// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Power-of-Two Utilities
//!
//! Predicate, per-type maximum, and round-up queries over unsigned integer
//! types. All functions are generic over `PrimInt + Unsigned`; signed types
//! are rejected at compile time.

use num_traits::{PrimInt, Unsigned};

/// Returns `true` iff `v` is a power of two.
///
/// Zero is not a power of two.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::pow2::is_power_of_two;
/// assert!(is_power_of_two(8u32));
/// assert!(!is_power_of_two(0u32));
/// assert!(!is_power_of_two(6u32));
/// ```
#[inline(always)]
pub fn is_power_of_two<T>(v: T) -> bool
where
    T: PrimInt + Unsigned,
{
    v != T::zero() && v & (v - T::one()) == T::zero()
}

/// Returns the largest power of two representable in `T`, i.e. the value
/// with only the highest bit set.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::pow2::max_power_of_two;
/// assert_eq!(max_power_of_two::<u8>(), 128);
/// assert_eq!(max_power_of_two::<u32>(), 1u32 << 31);
/// ```
#[inline(always)]
pub fn max_power_of_two<T>() -> T
where
    T: PrimInt + Unsigned,
{
    T::one() << (core::mem::size_of::<T>() * 8 - 1)
}

// Smears the highest set bit of v - 1 downward with doubling shift widths,
// then increments. Caller guarantees the result fits in T.
#[inline(always)]
fn round_up_to_power_of_two<T>(v: T) -> T
where
    T: PrimInt + Unsigned,
{
    if v == T::zero() {
        return T::one();
    }
    let mut v = v - T::one();
    let mut shift: usize = 1;
    while v & (v + T::one()) != T::zero() {
        v = v | (v >> shift);
        shift <<= 1;
    }
    v + T::one()
}

/// Returns the smallest power of two greater than or equal to `v`.
///
/// `next_power_of_two(0)` is 1. Values that are already a power of two are
/// returned unchanged.
///
/// # Panics
///
/// Panics if `v` exceeds [`max_power_of_two`] for `T`, since the true
/// result would not fit in the type.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::pow2::next_power_of_two;
/// assert_eq!(next_power_of_two(0u32), 1);
/// assert_eq!(next_power_of_two(5u32), 8);
/// assert_eq!(next_power_of_two(8u32), 8);
/// ```
#[inline]
pub fn next_power_of_two<T>(v: T) -> T
where
    T: PrimInt + Unsigned,
{
    assert!(
        v <= max_power_of_two::<T>(),
        "Invalid next_power_of_two argument: value exceeds the largest power of two representable in the type"
    );
    round_up_to_power_of_two(v)
}

/// Returns the smallest power of two greater than or equal to `v`, or
/// `None` if the result would not fit in `T`.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::pow2::try_next_power_of_two;
/// assert_eq!(try_next_power_of_two(5u8), Some(8));
/// assert_eq!(try_next_power_of_two(129u8), None);
/// ```
#[inline]
pub fn try_next_power_of_two<T>(v: T) -> Option<T>
where
    T: PrimInt + Unsigned,
{
    if v <= max_power_of_two::<T>() {
        Some(round_up_to_power_of_two(v))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_is_power_of_two() {
        assert!(is_power_of_two(1u32));
        assert!(is_power_of_two(2u32));
        assert!(is_power_of_two(4u32));
        assert!(is_power_of_two(8u32));
        assert!(!is_power_of_two(0u32));
        assert!(!is_power_of_two(3u32));
        assert!(!is_power_of_two(6u32));
        assert!(!is_power_of_two(10u32));
        assert!(is_power_of_two(max_power_of_two::<u64>()));
    }

    #[test]
    fn test_max_power_of_two() {
        assert_eq!(max_power_of_two::<u8>(), 1u8 << 7);
        assert_eq!(max_power_of_two::<u16>(), 1u16 << 15);
        assert_eq!(max_power_of_two::<u32>(), 1u32 << 31);
        assert_eq!(max_power_of_two::<u64>(), 1u64 << 63);
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(next_power_of_two(0u8), 1u8);
        assert_eq!(next_power_of_two(1u8), 1u8);
        assert_eq!(next_power_of_two(2u8), 2u8);
        assert_eq!(next_power_of_two(3u16), 4u16);
        assert_eq!(next_power_of_two(4u16), 4u16);
        assert_eq!(next_power_of_two(5u32), 8u32);
        assert_eq!(next_power_of_two(6u32), 8u32);
        assert_eq!(next_power_of_two(8u32), 8u32);
        assert_eq!(next_power_of_two(9u32), 16u32);
        assert_eq!(next_power_of_two(max_power_of_two::<u32>()), max_power_of_two::<u32>());
    }

    #[test]
    #[should_panic(expected = "exceeds the largest power of two")]
    fn test_next_power_of_two_panics_above_max() {
        let _ = next_power_of_two(129u8);
    }

    #[test]
    fn test_try_next_power_of_two() {
        assert_eq!(try_next_power_of_two(5u8), Some(8u8));
        assert_eq!(try_next_power_of_two(128u8), Some(128u8));
        assert_eq!(try_next_power_of_two(129u8), None);
        assert_eq!(try_next_power_of_two(u64::MAX), None);
    }

    proptest! {
        #[test]
        fn test_next_power_of_two_matches_primitive(v in 0u32..=1u32 << 31) {
            prop_assert_eq!(
                next_power_of_two(v),
                v.checked_next_power_of_two().unwrap()
            );
        }

        #[test]
        fn test_next_power_of_two_is_idempotent(v in 0u32..=1u32 << 31) {
            let p = next_power_of_two(v);
            prop_assert!(is_power_of_two(p));
            prop_assert_eq!(next_power_of_two(p), p);
        }

        #[test]
        fn test_next_power_of_two_is_a_tight_bound(v in 2u64..=1u64 << 63) {
            let p = next_power_of_two(v);
            prop_assert!(p >= v);
            prop_assert!(p / 2 < v);
        }
    }
}
