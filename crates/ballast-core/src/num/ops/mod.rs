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

//! # Scalar Operation Traits & Utilities
//!
//! By-value operation traits for scalar primitives, plus min/max/clamp
//! helpers. The traits expose uniform APIs over behavior that differs by
//! type category: rounding is an identity for integers but a real operation
//! for floats, `abs` is an identity for unsigned types, and so on.
//!
//! ## Submodules
//!
//! - `abs`: `AbsVal` — absolute value by value.
//! - `round`: `CeilVal`, `FloorVal`, `RoundVal` — identity for integers,
//!   inherent float semantics for floats.
//! - `sqrt`: `SqrtVal` — square root for floating types.
//! - `clamp`: binary `min_val`/`max_val`, the n-ary `min_of!`/`max_of!`
//!   macros, and `clamp`/`try_clamp`/`clamp01`.
//!
//! Refer to each submodule for examples and trait lists.

pub mod abs;
pub mod clamp;
pub mod round;
pub mod sqrt;
