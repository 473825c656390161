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

//! # Rounding Traits
//!
//! `CeilVal`, `FloorVal`, and `RoundVal` give integers and floats one
//! rounding vocabulary: an identity for every integer type, the inherent
//! float semantics for `f32`/`f64` (`round_val` rounds half away from
//! zero).

/// Rounding up by value (no references).
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::round::CeilVal;
/// assert_eq!(3i32.ceil_val(), 3);
/// assert_eq!(0.4f32.ceil_val(), 1.0);
/// assert_eq!((-0.4f32).ceil_val(), 0.0);
/// ```
pub trait CeilVal: Sized {
    /// Returns the smallest integral value greater than or equal to `self`.
    fn ceil_val(self) -> Self;
}

/// Rounding down by value (no references).
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::round::FloorVal;
/// assert_eq!(3i32.floor_val(), 3);
/// assert_eq!(0.6f32.floor_val(), 0.0);
/// assert_eq!((-0.6f32).floor_val(), -1.0);
/// ```
pub trait FloorVal: Sized {
    /// Returns the largest integral value less than or equal to `self`.
    fn floor_val(self) -> Self;
}

/// Rounding to nearest by value (no references), half away from zero.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::round::RoundVal;
/// assert_eq!(3i32.round_val(), 3);
/// assert_eq!(0.6f32.round_val(), 1.0);
/// assert_eq!((-0.5f32).round_val(), -1.0);
/// ```
pub trait RoundVal: Sized {
    /// Returns the integral value nearest to `self`, with halfway cases
    /// rounded away from zero.
    fn round_val(self) -> Self;
}

macro_rules! rounding_identity_impl {
    ($trait_name:ident, $method:ident, $t:ty) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> Self {
                self
            }
        }
    };
}

macro_rules! rounding_float_impl {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> Self {
                <$t>::$src_method(self)
            }
        }
    };
}

rounding_identity_impl!(CeilVal, ceil_val, u8);
rounding_identity_impl!(CeilVal, ceil_val, u16);
rounding_identity_impl!(CeilVal, ceil_val, u32);
rounding_identity_impl!(CeilVal, ceil_val, u64);
rounding_identity_impl!(CeilVal, ceil_val, usize);
rounding_identity_impl!(CeilVal, ceil_val, u128);
rounding_identity_impl!(CeilVal, ceil_val, i8);
rounding_identity_impl!(CeilVal, ceil_val, i16);
rounding_identity_impl!(CeilVal, ceil_val, i32);
rounding_identity_impl!(CeilVal, ceil_val, i64);
rounding_identity_impl!(CeilVal, ceil_val, isize);
rounding_identity_impl!(CeilVal, ceil_val, i128);

rounding_identity_impl!(FloorVal, floor_val, u8);
rounding_identity_impl!(FloorVal, floor_val, u16);
rounding_identity_impl!(FloorVal, floor_val, u32);
rounding_identity_impl!(FloorVal, floor_val, u64);
rounding_identity_impl!(FloorVal, floor_val, usize);
rounding_identity_impl!(FloorVal, floor_val, u128);
rounding_identity_impl!(FloorVal, floor_val, i8);
rounding_identity_impl!(FloorVal, floor_val, i16);
rounding_identity_impl!(FloorVal, floor_val, i32);
rounding_identity_impl!(FloorVal, floor_val, i64);
rounding_identity_impl!(FloorVal, floor_val, isize);
rounding_identity_impl!(FloorVal, floor_val, i128);

rounding_identity_impl!(RoundVal, round_val, u8);
rounding_identity_impl!(RoundVal, round_val, u16);
rounding_identity_impl!(RoundVal, round_val, u32);
rounding_identity_impl!(RoundVal, round_val, u64);
rounding_identity_impl!(RoundVal, round_val, usize);
rounding_identity_impl!(RoundVal, round_val, u128);
rounding_identity_impl!(RoundVal, round_val, i8);
rounding_identity_impl!(RoundVal, round_val, i16);
rounding_identity_impl!(RoundVal, round_val, i32);
rounding_identity_impl!(RoundVal, round_val, i64);
rounding_identity_impl!(RoundVal, round_val, isize);
rounding_identity_impl!(RoundVal, round_val, i128);

rounding_float_impl!(CeilVal, ceil_val, f32, ceil);
rounding_float_impl!(CeilVal, ceil_val, f64, ceil);
rounding_float_impl!(FloorVal, floor_val, f32, floor);
rounding_float_impl!(FloorVal, floor_val, f64, floor);
rounding_float_impl!(RoundVal, round_val, f32, round);
rounding_float_impl!(RoundVal, round_val, f64, round);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::precision::approximately;

    #[test]
    fn test_rounding_is_identity_for_integers() {
        assert_eq!(1i32.ceil_val(), 1);
        assert_eq!(1i32.floor_val(), 1);
        assert_eq!(1i32.round_val(), 1);
        assert_eq!((-1i32).ceil_val(), -1);
        assert_eq!((-1i32).floor_val(), -1);
        assert_eq!((-1i32).round_val(), -1);
        assert_eq!(7u64.ceil_val(), 7);
        assert_eq!(7u64.floor_val(), 7);
        assert_eq!(7u64.round_val(), 7);
    }

    #[test]
    fn test_ceil_floor_floats() {
        assert!(approximately(0.4f32.ceil_val(), 1.0f32));
        assert!(approximately(0.4f32.floor_val(), 0.0f32));
        assert!(approximately((-0.4f32).ceil_val(), 0.0f32));
        assert!(approximately((-0.4f32).floor_val(), -1.0f32));

        assert!(approximately(0.6f32.ceil_val(), 1.0f32));
        assert!(approximately(0.6f32.floor_val(), 0.0f32));
        assert!(approximately((-0.6f32).ceil_val(), 0.0f32));
        assert!(approximately((-0.6f32).floor_val(), -1.0f32));
    }

    #[test]
    fn test_round_floats() {
        assert!(approximately(0.4f32.round_val(), 0.0f32));
        assert!(approximately(0.6f32.round_val(), 1.0f32));
        assert!(approximately((-0.4f32).round_val(), 0.0f32));
        assert!(approximately((-0.6f32).round_val(), -1.0f32));
        assert!(approximately(0.5f64.round_val(), 1.0f64));
        assert!(approximately((-0.5f64).round_val(), -1.0f64));
    }
}
