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

//! # Min, Max & Clamp
//!
//! Binary by-value `min_val`/`max_val`, the n-ary left-folding
//! [`min_of!`](crate::min_of) and [`max_of!`](crate::max_of) macros, and
//! range clamping. All arguments of one call must share a single type;
//! Rust performs no implicit arithmetic promotion, so mixed-width call
//! sites promote explicitly (for example through
//! [`numeric_cast`](crate::num::cast::numeric_cast)) first.

use num_traits::{One, Zero};

/// Returns the smaller of two values by value.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::clamp::min_val;
/// assert_eq!(min_val(1, 2), 1);
/// assert_eq!(min_val(2, 1), 1);
/// ```
#[inline(always)]
pub fn min_val<T>(v1: T, v2: T) -> T
where
    T: PartialOrd,
{
    if v1 < v2 { v1 } else { v2 }
}

/// Returns the larger of two values by value.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::clamp::max_val;
/// assert_eq!(max_val(1, 2), 2);
/// assert_eq!(max_val(2, 1), 2);
/// ```
#[inline(always)]
pub fn max_val<T>(v1: T, v2: T) -> T
where
    T: PartialOrd,
{
    if v1 < v2 { v2 } else { v1 }
}

/// N-ary minimum, left-folded over [`min_val`](crate::num::ops::clamp::min_val).
///
/// # Examples
///
/// ```rust
/// assert_eq!(ballast_core::min_of!(3), 3);
/// assert_eq!(ballast_core::min_of!(3, 2, 1), 1);
/// ```
#[macro_export]
macro_rules! min_of {
    ($v:expr $(,)?) => { $v };
    ($v1:expr, $v2:expr $(, $rest:expr)* $(,)?) => {
        $crate::min_of!($crate::num::ops::clamp::min_val($v1, $v2) $(, $rest)*)
    };
}

/// N-ary maximum, left-folded over [`max_val`](crate::num::ops::clamp::max_val).
///
/// # Examples
///
/// ```rust
/// assert_eq!(ballast_core::max_of!(3), 3);
/// assert_eq!(ballast_core::max_of!(1, 2, 3), 3);
/// ```
#[macro_export]
macro_rules! max_of {
    ($v:expr $(,)?) => { $v };
    ($v1:expr, $v2:expr $(, $rest:expr)* $(,)?) => {
        $crate::max_of!($crate::num::ops::clamp::max_val($v1, $v2) $(, $rest)*)
    };
}

/// Clamps `v` into the inclusive range `[lo, hi]`.
///
/// # Panics
///
/// Panics if `lo > hi`.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::clamp::clamp;
/// assert_eq!(clamp(2, 1, 3), 2);
/// assert_eq!(clamp(0, 1, 3), 1);
/// assert_eq!(clamp(4, 1, 3), 3);
/// ```
#[inline]
pub fn clamp<T>(v: T, lo: T, hi: T) -> T
where
    T: PartialOrd,
{
    assert!(
        lo <= hi,
        "Invalid clamp bounds: lo must be less than or equal to hi"
    );
    min_val(max_val(v, lo), hi)
}

/// Clamps `v` into `[lo, hi]`, or returns `None` if the bounds are invalid.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::clamp::try_clamp;
/// assert_eq!(try_clamp(2, 1, 3), Some(2));
/// assert_eq!(try_clamp(2, 3, 1), None);
/// ```
#[inline]
pub fn try_clamp<T>(v: T, lo: T, hi: T) -> Option<T>
where
    T: PartialOrd,
{
    if lo <= hi {
        Some(min_val(max_val(v, lo), hi))
    } else {
        None
    }
}

/// Clamps `v` into the unit range `[0, 1]`.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::clamp::clamp01;
/// assert_eq!(clamp01(-1), 0);
/// assert_eq!(clamp01(2), 1);
/// assert_eq!(clamp01(0.25f32), 0.25);
/// ```
#[inline(always)]
pub fn clamp01<T>(v: T) -> T
where
    T: PartialOrd + Zero + One,
{
    clamp(v, T::zero(), T::one())
}
