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

//! # Numeric Safety
//!
//! Pure, by-value functions over scalar values. Everything in this module is
//! referentially transparent: no allocation, no shared state, no I/O, safe to
//! call concurrently from any number of threads.
//!
//! ## Submodules
//!
//! - `cast`: Per-type-pair representability classification (`can_represent`)
//!   and the checked conversion entry points (`numeric_cast`,
//!   `try_numeric_cast`, `numeric_cast_unchecked`).
//! - `precision`: Default comparison precision per scalar type and the
//!   `is_near_zero`/`approximately` comparison helpers built on it.
//! - `pow2`: Power-of-two predicate, the maximum representable power of two
//!   per unsigned type, and rounding up to the next power of two.
//! - `ops`: By-value operation traits (`AbsVal`, `CeilVal`, `FloorVal`,
//!   `RoundVal`, `SqrtVal`) and min/max/clamp utilities.
//!
//! ## Motivation
//!
//! Unchecked `as` casts wrap and truncate silently; float comparisons against
//! exact constants are brittle; hand-rolled bit tricks drift subtly between
//! call sites. Collecting the safe versions of these operations in one place
//! gives the rest of the ecosystem a single vocabulary for scalar safety.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod cast;
pub mod ops;
pub mod pow2;
pub mod precision;
