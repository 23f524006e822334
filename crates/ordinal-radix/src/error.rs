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

//! Error types of the radix codec.
//!
//! The codec reports problems through two separate channels. A radix outside
//! `[2, 36]` is a caller bug and surfaces as `Err(InvalidRadixError)`. Text that
//! is not a numeral is an ordinary outcome and surfaces as `Ok(None)`; the
//! reason is only recorded at `trace` level through the `log` facade.

use crate::radix::Radix;

/// The error returned when a radix outside `[2, 36]` is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidRadixError {
    /// The rejected radix value.
    pub radix: u32,
}

impl std::fmt::Display for InvalidRadixError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid radix {}: must be between {} and {} inclusive",
            self.radix,
            Radix::MIN.get(),
            Radix::MAX.get()
        )
    }
}

impl std::error::Error for InvalidRadixError {}

/// Why a piece of text was not accepted as a numeral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    /// Nothing remained after removing the sign marker.
    Empty,
    /// A `0x` prefix was combined with an explicit, non-hexadecimal radix.
    RadixConflict { radix: Radix },
    /// A byte outside the alphabet, or a digit not valid in the radix.
    InvalidDigit { index: usize, byte: u8 },
    /// The value does not fit in the target integer type.
    Overflow,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no digits after sign"),
            Self::RadixConflict { radix } => {
                write!(f, "hexadecimal prefix conflicts with radix {radix}")
            }
            Self::InvalidDigit { index, byte } => write!(
                f,
                "invalid digit {:?} at position {index}",
                char::from(*byte)
            ),
            Self::Overflow => write!(f, "value out of range for target type"),
        }
    }
}
