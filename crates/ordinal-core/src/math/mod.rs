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

//! # Integer Helpers
//!
//! Small, total functions over signed integers: bounding (`clamp`,
//! `clamp_sym`, `wrap_circular`), comparison (`compare`, `min`, `max`),
//! classification (`sign`, `is_even`, `is_odd`), `abs` and linear
//! `interpolate`.
//!
//! All helpers are generic over `num_traits::PrimInt + num_traits::Signed`
//! and never allocate.
//!
//! ```rust
//! use ordinal_core::math::integer::{clamp, clamp_sym, wrap_circular};
//!
//! assert_eq!(clamp(10, 0, 5), 5);
//! assert_eq!(clamp_sym(-10, 5), Some(-5));
//! assert_eq!(wrap_circular(-1, 12), Some(11));
//! ```

pub mod integer;
