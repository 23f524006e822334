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

use crate::{alphabet, error::InvalidRadixError};

/// A validated numeral base in `[2, 36]`.
///
/// Construction is the only place a radix is checked; every codec operation
/// that accepts a raw `u32` funnels it through [`Radix::new`].
///
/// # Examples
///
/// ```rust
/// # use ordinal_radix::radix::Radix;
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(hex, Radix::HEXADECIMAL);
/// assert!(Radix::new(1).is_err());
/// assert!(Radix::try_from(37).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Radix(u32);

impl Radix {
    /// The smallest supported radix.
    pub const MIN: Radix = Radix(2);
    /// The largest supported radix, one per symbol in the alphabet.
    pub const MAX: Radix = Radix(alphabet::DIGITS.len() as u32);

    pub const BINARY: Radix = Radix(2);
    pub const OCTAL: Radix = Radix(8);
    pub const DECIMAL: Radix = Radix(10);
    pub const HEXADECIMAL: Radix = Radix(16);

    /// Validates `value` as a radix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadixError` if `value` is outside `[2, 36]`.
    #[inline]
    pub const fn new(value: u32) -> Result<Self, InvalidRadixError> {
        if value < Self::MIN.0 || value > Self::MAX.0 {
            Err(InvalidRadixError { radix: value })
        } else {
            Ok(Self(value))
        }
    }

    /// Returns the numeric base.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the value of `byte` as a digit in this radix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordinal_radix::radix::Radix;
    /// assert_eq!(Radix::OCTAL.digit_value(b'7'), Some(7));
    /// assert_eq!(Radix::OCTAL.digit_value(b'8'), None);
    /// ```
    #[inline]
    pub const fn digit_value(self, byte: u8) -> Option<u32> {
        match alphabet::digit_value(byte) {
            Some(value) if value < self.0 => Some(value),
            _ => None,
        }
    }

    /// Returns the symbol for digit `value` in this radix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordinal_radix::radix::Radix;
    /// assert_eq!(Radix::HEXADECIMAL.digit_char(15), Some('f'));
    /// assert_eq!(Radix::HEXADECIMAL.digit_char(16), None);
    /// ```
    #[inline]
    pub fn digit_char(self, value: u32) -> Option<char> {
        if value < self.0 {
            alphabet::digit_char(value)
        } else {
            None
        }
    }

    /// Returns the base as an `i8`, from which every signed type converts
    /// losslessly.
    #[inline]
    pub(crate) const fn to_i8(self) -> i8 {
        // At most 36
        self.0 as i8
    }
}

impl TryFrom<u32> for Radix {
    type Error = InvalidRadixError;

    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radix> for u32 {
    #[inline]
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl std::fmt::Display for Radix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
