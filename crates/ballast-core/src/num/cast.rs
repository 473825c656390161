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

//! # Checked Numeric Casts
//!
//! Representability classification and checked conversion between the
//! supported scalar types: `i8`/`i16`/`i32`/`i64`, `u8`/`u16`/`u32`/`u64`,
//! `f32`/`f64`. The [`NumericCastFrom`] trait is implemented on the
//! destination type once per concrete source/destination pair, so every one
//! of the 100 pairs resolves to exactly one comparison policy and nothing
//! can fall through to a wrong default.
//!
//! ## Dispatch cases
//!
//! The pairs are generated by six macro batteries, one per policy:
//!
//! - float → float: the value must lie within the destination's finite
//!   bounds. NaN fails both comparisons; infinities exceed them.
//! - integer → float: always representable (see the note below).
//! - float → integer: the destination's bounds are cast up to the source
//!   float type and compared inclusively. NaN and infinities always fail.
//! - integer → integer, same signedness: inclusive bound comparison in a
//!   128-bit integer of the same signedness.
//! - signed → unsigned: non-negative and within the destination's maximum.
//! - unsigned → signed: within the destination's maximum; the lower bound
//!   is trivially satisfied.
//!
//! ## Known approximation
//!
//! The integer → float case classifies every integer as representable. A
//! 64-bit integer converted to `f32` can lose precision, but it can never
//! leave the float's finite range, so the conversion stays well-defined.
//! Callers that cannot tolerate rounding of large 64-bit values into `f32`
//! must not rely on this classifier to detect it.
//!
//! ## Motivation
//!
//! A bare `as` cast wraps integers, truncates floats, and collapses
//! non-finite values without any signal. The entry points here make the
//! narrowing contract explicit: [`numeric_cast`] asserts representability,
//! [`try_numeric_cast`] reports it, and [`numeric_cast_unchecked`] documents
//! the places that opt out of the check.

/// Representability classification and raw conversion from `From` into the
/// implementing type.
///
/// Implemented once per concrete pair of supported scalar types. The trait
/// is the dispatch seam of this module; external code normally calls the
/// free functions [`can_represent`], [`numeric_cast`], [`try_numeric_cast`]
/// and [`numeric_cast_unchecked`] instead of naming the trait directly.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::cast::NumericCastFrom;
/// assert!(<i8 as NumericCastFrom<i32>>::can_represent(127));
/// assert!(!<i8 as NumericCastFrom<i32>>::can_represent(128));
/// ```
pub trait NumericCastFrom<From>: Sized {
    /// Returns `true` iff `v` converts into `Self` without overflow and
    /// without collapsing a finite value into a non-finite one (or the
    /// reverse).
    fn can_represent(v: From) -> bool;

    /// Converts `v` into `Self` with primitive `as` semantics (integer
    /// truncation toward zero for float sources), without checking
    /// representability. The checked entry points are built on this.
    fn cast_from(v: From) -> Self;
}

// f -> f: compare against the destination's finite bounds, widened to f64.
// NaN fails both comparisons; infinities exceed the bounds.
macro_rules! numeric_cast_float_to_float {
    ($from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl NumericCastFrom<$from> for $to {
                #[inline(always)]
                fn can_represent(v: $from) -> bool {
                    (v as f64) >= <$to>::MIN as f64 && (v as f64) <= <$to>::MAX as f64
                }

                #[inline(always)]
                fn cast_from(v: $from) -> Self {
                    v as $to
                }
            }
        )+
    };
}

// i/u -> f: always representable. 64-bit integers can lose precision in
// f32 but never leave its finite range.
macro_rules! numeric_cast_int_to_float {
    ($from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl NumericCastFrom<$from> for $to {
                #[inline(always)]
                fn can_represent(_v: $from) -> bool {
                    true
                }

                #[inline(always)]
                fn cast_from(v: $from) -> Self {
                    v as $to
                }
            }
        )+
    };
}

// f -> i/u: the destination's bounds cast up to the source float type,
// compared inclusively. NaN and infinities fail.
macro_rules! numeric_cast_float_to_int {
    ($from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl NumericCastFrom<$from> for $to {
                #[inline(always)]
                fn can_represent(v: $from) -> bool {
                    v >= <$to>::MIN as $from && v <= <$to>::MAX as $from
                }

                #[inline(always)]
                fn cast_from(v: $from) -> Self {
                    v as $to
                }
            }
        )+
    };
}

// i -> i, u -> u: inclusive bound comparison in a 128-bit integer of the
// same signedness, wide enough for every supported pair.
macro_rules! numeric_cast_int_same_sign {
    ($wide:ty, $from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl NumericCastFrom<$from> for $to {
                #[inline(always)]
                fn can_represent(v: $from) -> bool {
                    let w = v as $wide;
                    w >= <$to>::MIN as $wide && w <= <$to>::MAX as $wide
                }

                #[inline(always)]
                fn cast_from(v: $from) -> Self {
                    v as $to
                }
            }
        )+
    };
}

// i -> u: non-negative and within the destination's maximum.
macro_rules! numeric_cast_signed_to_unsigned {
    ($from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl NumericCastFrom<$from> for $to {
                #[inline(always)]
                fn can_represent(v: $from) -> bool {
                    v >= 0 && (v as u128) <= <$to>::MAX as u128
                }

                #[inline(always)]
                fn cast_from(v: $from) -> Self {
                    v as $to
                }
            }
        )+
    };
}

// u -> i: within the destination's maximum; the lower bound is trivially
// satisfied.
macro_rules! numeric_cast_unsigned_to_signed {
    ($from:ty => $($to:ty),+ $(,)?) => {
        $(
            impl NumericCastFrom<$from> for $to {
                #[inline(always)]
                fn can_represent(v: $from) -> bool {
                    (v as u128) <= <$to>::MAX as u128
                }

                #[inline(always)]
                fn cast_from(v: $from) -> Self {
                    v as $to
                }
            }
        )+
    };
}

numeric_cast_float_to_float!(f32 => f32, f64);
numeric_cast_float_to_float!(f64 => f32, f64);

numeric_cast_int_to_float!(i8 => f32, f64);
numeric_cast_int_to_float!(i16 => f32, f64);
numeric_cast_int_to_float!(i32 => f32, f64);
numeric_cast_int_to_float!(i64 => f32, f64);
numeric_cast_int_to_float!(u8 => f32, f64);
numeric_cast_int_to_float!(u16 => f32, f64);
numeric_cast_int_to_float!(u32 => f32, f64);
numeric_cast_int_to_float!(u64 => f32, f64);

numeric_cast_float_to_int!(f32 => i8, i16, i32, i64, u8, u16, u32, u64);
numeric_cast_float_to_int!(f64 => i8, i16, i32, i64, u8, u16, u32, u64);

numeric_cast_int_same_sign!(i128, i8 => i8, i16, i32, i64);
numeric_cast_int_same_sign!(i128, i16 => i8, i16, i32, i64);
numeric_cast_int_same_sign!(i128, i32 => i8, i16, i32, i64);
numeric_cast_int_same_sign!(i128, i64 => i8, i16, i32, i64);
numeric_cast_int_same_sign!(u128, u8 => u8, u16, u32, u64);
numeric_cast_int_same_sign!(u128, u16 => u8, u16, u32, u64);
numeric_cast_int_same_sign!(u128, u32 => u8, u16, u32, u64);
numeric_cast_int_same_sign!(u128, u64 => u8, u16, u32, u64);

numeric_cast_signed_to_unsigned!(i8 => u8, u16, u32, u64);
numeric_cast_signed_to_unsigned!(i16 => u8, u16, u32, u64);
numeric_cast_signed_to_unsigned!(i32 => u8, u16, u32, u64);
numeric_cast_signed_to_unsigned!(i64 => u8, u16, u32, u64);

numeric_cast_unsigned_to_signed!(u8 => i8, i16, i32, i64);
numeric_cast_unsigned_to_signed!(u16 => i8, i16, i32, i64);
numeric_cast_unsigned_to_signed!(u32 => i8, i16, i32, i64);
numeric_cast_unsigned_to_signed!(u64 => i8, i16, i32, i64);

/// Returns `true` iff `v` is representable in `To` without overflow and
/// without losing its finite/defined nature.
///
/// Boundary values (exactly the destination's minimum or maximum) are
/// representable. NaN and infinities never satisfy a finite bound
/// comparison, so they classify as not representable for every destination,
/// including the identity float conversion.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::cast::can_represent;
/// assert!(can_represent::<i8, _>(127i32));
/// assert!(!can_represent::<i8, _>(128i32));
/// assert!(!can_represent::<u8, _>(-1i32));
/// assert!(!can_represent::<i32, _>(f32::NAN));
/// ```
#[inline(always)]
pub fn can_represent<To, From>(v: From) -> bool
where
    To: NumericCastFrom<From>,
{
    To::can_represent(v)
}

/// Converts `v` into `To`, asserting that the value is representable.
///
/// This is the single sanctioned way to narrow or re-sign a scalar value.
/// The conversion itself has primitive `as` semantics, so a float source is
/// truncated toward zero on its way into an integer destination.
///
/// # Panics
///
/// Panics if `v` is not representable in `To`.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::cast::numeric_cast;
/// let v: i8 = numeric_cast(127i32);
/// assert_eq!(v, 127);
/// assert_eq!(numeric_cast::<i32, _>(-1.8f32), -1);
/// ```
#[inline]
pub fn numeric_cast<To, From>(v: From) -> To
where
    To: NumericCastFrom<From>,
    From: Copy,
{
    assert!(
        To::can_represent(v),
        "Invalid numeric cast: value is not representable in the destination type"
    );
    To::cast_from(v)
}

/// Converts `v` into `To` if the value is representable.
///
/// Returns `None` instead of panicking, for callers that treat an
/// out-of-range value as data rather than as a programming error.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::cast::try_numeric_cast;
/// assert_eq!(try_numeric_cast::<i8, _>(127i32), Some(127));
/// assert_eq!(try_numeric_cast::<i8, _>(128i32), None);
/// ```
#[inline]
pub fn try_numeric_cast<To, From>(v: From) -> Option<To>
where
    To: NumericCastFrom<From>,
    From: Copy,
{
    if To::can_represent(v) {
        Some(To::cast_from(v))
    } else {
        None
    }
}

/// Converts `v` into `To` without checking representability in release
/// builds.
///
/// # Safety contract
///
/// The caller must ensure `v` is representable in `To`. This function
/// contains a `debug_assert!` to catch violations during development; in
/// release builds a non-representable value yields the primitive `as`
/// result (wrapped, truncated, or saturated), which is unspecified from
/// this crate's point of view but never memory-unsafe.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::cast::numeric_cast_unchecked;
/// let v: u32 = numeric_cast_unchecked(42i64);
/// assert_eq!(v, 42);
/// ```
#[inline]
pub fn numeric_cast_unchecked<To, From>(v: From) -> To
where
    To: NumericCastFrom<From>,
    From: Copy,
{
    debug_assert!(
        To::can_represent(v),
        "Invalid numeric cast: value is not representable in the destination type"
    );
    To::cast_from(v)
}
