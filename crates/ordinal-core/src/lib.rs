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

//! # Ordinal Core
//!
//! Integer helpers for the Ordinal toolkit. Everything in this crate is a
//! small, pure operation on one or two signed machine integers, written
//! generically over `num_traits::PrimInt + num_traits::Signed` so the same
//! code serves `i8` through `i128`.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`MinusOne`, `Zero`, `PlusOne`, `Two`)
//!   and by-value checked arithmetic traits returning `Option<T>`.
//! - `math`: Everyday integer helpers such as `clamp`, `clamp_sym`, `sign`,
//!   `wrap_circular` and `interpolate`.
//! - `range`: Lazily stepped, overflow-safe integer ranges `[start, stop)`
//!   with an explicit error for ranges that would never terminate.
//! - `random`: Uniform integer sampling over inclusive bounds from any
//!   `rand::Rng`.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
pub mod random;
pub mod range;
