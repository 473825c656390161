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

/// Square root by value (no references). Floating types only.
///
/// Follows IEEE 754 semantics: the square root of a negative number is NaN.
///
/// # Examples
///
/// ```rust
/// # use ballast_core::num::ops::sqrt::SqrtVal;
/// assert_eq!(4.0f32.sqrt_val(), 2.0);
/// assert!((-1.0f64).sqrt_val().is_nan());
/// ```
pub trait SqrtVal: Sized {
    /// Returns the square root of `self`.
    fn sqrt_val(self) -> Self;
}

macro_rules! sqrt_impl_float {
    ($t:ty) => {
        impl SqrtVal for $t {
            #[inline(always)]
            fn sqrt_val(self) -> Self {
                <$t>::sqrt(self)
            }
        }
    };
}

sqrt_impl_float!(f32);
sqrt_impl_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::precision::approximately;

    #[test]
    fn test_sqrt_val() {
        assert!(approximately(4.0f32.sqrt_val(), 2.0f32));
        assert!(approximately(2.0f64.sqrt_val(), core::f64::consts::SQRT_2));
        assert_eq!(0.0f64.sqrt_val(), 0.0);
        assert!((-1.0f32).sqrt_val().is_nan());
    }
}
