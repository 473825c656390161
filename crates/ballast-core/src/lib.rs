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

//! # Ballast Core
//!
//! Scalar numeric-safety primitives for the Ballast ecosystem. This crate
//! consolidates range-checked conversions between arithmetic types and a
//! small set of arithmetic utilities, focused on eliminating the silent
//! overflow/truncation bugs that unchecked `as` casts invite.
//!
//! ## Modules
//!
//! - `num`: Checked numeric casts (`numeric_cast`, `try_numeric_cast`,
//!   `can_represent`) resolved per concrete source/destination type pair,
//!   default comparison precision and approximate equality, power-of-two
//!   queries, and by-value rounding/abs/clamp/min/max utilities.
//!
//! ## Purpose
//!
//! Narrowing or re-signing a scalar through a bare `as` cast silently wraps,
//! truncates, or collapses non-finite values. The entry points in this crate
//! make representability an explicit, checked contract while keeping runtime
//! overhead minimal, so higher-level crates can stay generic over scalar
//! types without ad hoc per-type guards.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
