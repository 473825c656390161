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

//! # Comparison Precision
//!
//! Default comparison precision per scalar type and the near-zero and
//! approximate-equality helpers built on it. Integer types compare exactly
//! (precision 0); floating types carry a small fixed epsilon. The epsilon
//! constants are part of the observable contract and must not change:
//! `1e-5` for `f32`, `1e-7` for `f64`.

use crate::num::ops::abs::AbsVal;
use core::ops::Sub;

/// The default comparison precision for the implementing type.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::precision::DefaultPrecision;
/// assert_eq!(i32::DEFAULT_PRECISION, 0);
/// assert_eq!(f32::DEFAULT_PRECISION, 0.00001);
/// ```
pub trait DefaultPrecision {
    /// The precision used when no explicit precision is supplied.
    const DEFAULT_PRECISION: Self;
}

macro_rules! impl_default_precision_for {
    ($t:ty, $value:expr) => {
        impl DefaultPrecision for $t {
            const DEFAULT_PRECISION: Self = $value;
        }
    };
}

impl_default_precision_for!(i8, 0);
impl_default_precision_for!(i16, 0);
impl_default_precision_for!(i32, 0);
impl_default_precision_for!(i64, 0);
impl_default_precision_for!(i128, 0);
impl_default_precision_for!(isize, 0);

impl_default_precision_for!(u8, 0);
impl_default_precision_for!(u16, 0);
impl_default_precision_for!(u32, 0);
impl_default_precision_for!(u64, 0);
impl_default_precision_for!(u128, 0);
impl_default_precision_for!(usize, 0);

impl_default_precision_for!(f32, 0.00001);
impl_default_precision_for!(f64, 0.0000001);

/// Returns `true` iff `v` is within the type's default precision of zero.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::precision::is_near_zero;
/// assert!(is_near_zero(0));
/// assert!(!is_near_zero(1));
/// assert!(is_near_zero(0.000001f32));
/// assert!(!is_near_zero(0.0001f32));
/// ```
#[inline(always)]
pub fn is_near_zero<T>(v: T) -> bool
where
    T: AbsVal + DefaultPrecision + PartialOrd,
{
    is_near_zero_within(v, T::DEFAULT_PRECISION)
}

/// Returns `true` iff `abs(v) <= precision`.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::precision::is_near_zero_within;
/// assert!(is_near_zero_within(1, 1));
/// assert!(is_near_zero_within(-1, 1));
/// assert!(!is_near_zero_within(2, 1));
/// ```
#[inline(always)]
pub fn is_near_zero_within<T>(v: T, precision: T) -> bool
where
    T: AbsVal + PartialOrd,
{
    v.abs_val() <= precision
}

/// Returns `true` iff `l` and `r` differ by at most the type's default
/// precision.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::precision::approximately;
/// assert!(approximately(1, 1));
/// assert!(!approximately(1, 2));
/// assert!(approximately(0.1f32 + 0.2, 0.3));
/// ```
#[inline(always)]
pub fn approximately<T>(l: T, r: T) -> bool
where
    T: DefaultPrecision + PartialOrd + Sub<Output = T>,
{
    approximately_within(l, r, T::DEFAULT_PRECISION)
}

/// Returns `true` iff `l` and `r` differ by at most `precision`.
///
/// The larger operand is chosen before subtracting, so the difference never
/// underflows even for unsigned types.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::precision::approximately_within;
/// assert!(approximately_within(1, 3, 2));
/// assert!(!approximately_within(1, 3, 1));
/// assert!(approximately_within(1u32, 3u32, 2u32));
/// ```
#[inline(always)]
pub fn approximately_within<T>(l: T, r: T, precision: T) -> bool
where
    T: PartialOrd + Sub<Output = T>,
{
    if l < r {
        r - l <= precision
    } else {
        l - r <= precision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_precision_constants() {
        assert_eq!(i32::DEFAULT_PRECISION, 0);
        assert_eq!(u64::DEFAULT_PRECISION, 0);
        assert_eq!(f32::DEFAULT_PRECISION, 0.00001f32);
        assert_eq!(f64::DEFAULT_PRECISION, 0.0000001f64);
    }

    #[test]
    fn test_is_near_zero_integers() {
        assert!(is_near_zero(0));
        assert!(!is_near_zero(1));
        assert!(!is_near_zero(1u32));
        assert!(is_near_zero_within(1, 1));
        assert!(is_near_zero_within(-1, 1));
        assert!(is_near_zero_within(1u32, 1u32));
    }

    #[test]
    fn test_is_near_zero_floats() {
        assert!(is_near_zero(0.000001f32));
        assert!(is_near_zero(-0.000001f32));
        assert!(!is_near_zero(0.0001f32));
        assert!(!is_near_zero(-0.0001f32));
        assert!(is_near_zero_within(0.0001f32, 0.001f32));
        assert!(is_near_zero_within(-0.0001f32, 0.001f32));
    }

    #[test]
    fn test_approximately_default_precision() {
        assert!(approximately(1, 1));
        assert!(!approximately(1, 2));
        assert!(!approximately(2, 1));
        assert!(approximately(1.0f64, 1.0f64));
    }

    #[test]
    fn test_approximately_within() {
        assert!(approximately_within(1, 2, 1));
        assert!(approximately_within(1, 3, 2));
        assert!(approximately_within(1, 3, 3));
        assert!(approximately_within(2, 1, 1));
        assert!(approximately_within(3, 1, 2));
        assert!(approximately_within(3, 1, 3));
        assert!(!approximately_within(1, 2, 0));
        assert!(!approximately_within(1, 3, 1));
        assert!(!approximately_within(2, 1, 0));
        assert!(!approximately_within(3, 1, 1));
    }

    #[test]
    fn test_approximately_within_unsigned_does_not_wrap() {
        assert!(approximately_within(1u8, 3u8, 2u8));
        assert!(!approximately_within(3u8, 1u8, 1u8));
        assert!(approximately_within(0u8, 255u8, 255u8));
    }

    proptest! {
        #[test]
        fn test_approximately_within_is_symmetric(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
            p in 0i64..2_000_000,
        ) {
            prop_assert_eq!(
                approximately_within(a, b, p),
                approximately_within(b, a, p)
            );
        }

        #[test]
        fn test_approximately_within_agrees_with_abs_difference(
            a in -1_000_000i64..1_000_000,
            b in -1_000_000i64..1_000_000,
            p in 0i64..2_000_000,
        ) {
            prop_assert_eq!(approximately_within(a, b, p), (a - b).abs() <= p);
        }
    }
}
