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

/// Absolute value by value (no references).
///
/// An identity for unsigned types; negation-if-negative for signed integers
/// and floats. Negating the minimum representable signed integer overflows
/// (panics in debug builds, wraps in release builds, per primitive negation
/// semantics); this edge case is accepted, not specially handled.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::abs::AbsVal;
/// assert_eq!((-4i32).abs_val(), 4);
/// assert_eq!(3u32.abs_val(), 3);
/// assert_eq!((-1.5f64).abs_val(), 1.5);
/// ```
pub trait AbsVal: Sized {
    /// Returns the absolute value of `self`.
    fn abs_val(self) -> Self;
}

macro_rules! abs_impl_unsigned {
    ($t:ty) => {
        impl AbsVal for $t {
            #[inline(always)]
            fn abs_val(self) -> Self {
                self
            }
        }
    };
}

macro_rules! abs_impl_signed {
    ($t:ty) => {
        impl AbsVal for $t {
            #[inline(always)]
            fn abs_val(self) -> Self {
                if self < 0 { -self } else { self }
            }
        }
    };
}

macro_rules! abs_impl_float {
    ($t:ty) => {
        impl AbsVal for $t {
            #[inline(always)]
            fn abs_val(self) -> Self {
                if self < 0.0 { -self } else { self }
            }
        }
    };
}

abs_impl_unsigned!(u8);
abs_impl_unsigned!(u16);
abs_impl_unsigned!(u32);
abs_impl_unsigned!(u64);
abs_impl_unsigned!(usize);
abs_impl_unsigned!(u128);

abs_impl_signed!(i8);
abs_impl_signed!(i16);
abs_impl_signed!(i32);
abs_impl_signed!(i64);
abs_impl_signed!(isize);
abs_impl_signed!(i128);

abs_impl_float!(f32);
abs_impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::precision::approximately;

    #[test]
    fn test_abs_val_integers() {
        assert_eq!(2.abs_val(), 2);
        assert_eq!(3u32.abs_val(), 3u32);
        assert_eq!((-4).abs_val(), 4);
        assert_eq!((i64::MIN + 1).abs_val(), i64::MAX);
    }

    #[test]
    fn test_abs_val_floats() {
        assert!(approximately(1.2f32.abs_val(), 1.2f32));
        assert!(approximately((-1.2f32).abs_val(), 1.2f32));
        assert!(approximately(2.3f64.abs_val(), 2.3f64));
        assert!(approximately((-2.3f64).abs_val(), 2.3f64));
    }
}
