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

//! # Ordinal Radix
//!
//! Base-N integer parsing and formatting for radices 2 through 36.
//!
//! The codec keeps two failure channels apart: a radix outside `[2, 36]` is a
//! usage error reported as `Err(InvalidRadixError)`, while text that is not a
//! numeral is an expected outcome reported as `None`.
//!
//! ## Modules
//!
//! - `alphabet`: The shared digit table `0-9a-z` and its lookups.
//! - `radix`: The validated `Radix` newtype.
//! - `sign`: `SignMarkers`, the configurable positive/negative prefixes.
//! - `codec`: `RadixCodec`, which parses and formats with a set of markers.
//! - `error`: `InvalidRadixError`.
//!
//! The free functions below use the default `-` / `+` markers.
//!
//! ```rust
//! use ordinal_radix::{format, parse, parse_radix};
//!
//! assert_eq!(parse::<i32>("0x1A"), Some(26));
//! assert_eq!(parse_radix::<i32>("FF", 16), Ok(Some(255)));
//! assert_eq!(parse_radix::<i32>("0x1A", 10), Ok(None));
//! assert_eq!(format(-255_i32, 16).as_deref(), Ok("-ff"));
//! assert!(format(1_i32, 37).is_err());
//! ```

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod radix;
pub mod sign;

pub use codec::RadixCodec;
pub use error::InvalidRadixError;
pub use radix::Radix;
pub use sign::SignMarkers;

use num_traits::{PrimInt, Signed};
use ordinal_core::num::ops::checked_arithmetic::CheckedIntOps;
use std::fmt::Display;

/// Parses `text`, inferring radix 16 from a `0x` prefix and 10 otherwise.
///
/// Without an explicit radix there is no precondition to violate, so the
/// result is a plain `Option`.
#[inline]
pub fn parse<T>(text: &str) -> Option<T>
where
    T: PrimInt + Signed + CheckedIntOps + From<i8>,
{
    RadixCodec::DEFAULT.parse_with(text, None)
}

/// Parses `text` in an explicit `radix`.
///
/// # Errors
///
/// Returns `InvalidRadixError` if `radix` is outside `[2, 36]`.
#[inline]
pub fn parse_radix<T>(text: &str, radix: u32) -> Result<Option<T>, InvalidRadixError>
where
    T: PrimInt + Signed + CheckedIntOps + From<i8>,
{
    RadixCodec::DEFAULT.parse(text, Some(radix))
}

/// Returns whether `text` parses with an inferred radix.
#[inline]
pub fn can_parse<T>(text: &str) -> bool
where
    T: PrimInt + Signed + CheckedIntOps + From<i8>,
{
    parse::<T>(text).is_some()
}

/// Renders `value` in `radix` using `-` for negative values.
///
/// # Errors
///
/// Returns `InvalidRadixError` if `radix` is outside `[2, 36]`.
#[inline]
pub fn format<T>(value: T, radix: u32) -> Result<String, InvalidRadixError>
where
    T: PrimInt + Signed + Display + From<i8>,
{
    RadixCodec::DEFAULT.format(value, radix)
}
