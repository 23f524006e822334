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

//! # Radix Codec
//!
//! Conversion between signed integers and their textual form in any radix
//! from 2 to 36, with configurable sign markers.
//!
//! ## Parsing
//!
//! 1. A leading positive marker is removed, otherwise a leading negative
//!    marker is removed and remembered.
//! 2. Nothing left means no value.
//! 3. Surrounding whitespace is trimmed and ASCII letters are lowercased.
//! 4. A `0x` prefix selects radix 16. Combined with an explicit radix other
//!    than 16 it means no value.
//! 5. Without an explicit radix or prefix, radix 10 is used.
//! 6. Digits are folded left to right. Any symbol outside the radix, or a
//!    value that does not fit the target type, means no value.
//!
//! The fold for a negative numeral accumulates towards negative values, so
//! `T::MIN` parses even though its magnitude does not fit in `T`.
//!
//! ## Formatting
//!
//! Radix 10 and the value zero use the natural decimal rendering. Other values
//! are rendered most-significant digit first, preceded by the negative marker
//! when the value is negative.

use crate::{
    alphabet::{DIGITS, HEX_PREFIX},
    error::{InvalidRadixError, Rejection},
    radix::Radix,
    sign::SignMarkers,
};
use num_traits::{PrimInt, Signed};
use ordinal_core::num::ops::checked_arithmetic::CheckedIntOps;
use std::{borrow::Cow, fmt::Display};

/// Parses and formats integers with a fixed pair of sign markers.
///
/// # Examples
///
/// ```rust
/// # use ordinal_radix::codec::RadixCodec;
/// let codec = RadixCodec::new().with_negative_sign("~");
///
/// assert_eq!(codec.parse::<i32>("~ff", Some(16)), Ok(Some(-255)));
/// assert_eq!(codec.format(-255_i32, 16).as_deref(), Ok("~ff"));
/// assert!(codec.parse::<i32>("12", Some(37)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RadixCodec {
    signs: SignMarkers,
}

impl RadixCodec {
    /// A codec with the `-` / `+` markers.
    pub const DEFAULT: RadixCodec = RadixCodec {
        signs: SignMarkers::DEFAULT,
    };

    /// Creates a codec with the default sign markers.
    #[inline]
    pub fn new() -> Self {
        Self::DEFAULT
    }

    /// Replaces both sign markers.
    #[inline]
    pub fn with_signs(mut self, signs: SignMarkers) -> Self {
        self.signs = signs;
        self
    }

    /// Replaces the negative marker.
    #[inline]
    pub fn with_negative_sign(mut self, negative: impl Into<Cow<'static, str>>) -> Self {
        self.signs.set_negative(negative);
        self
    }

    /// Replaces the positive marker.
    #[inline]
    pub fn with_positive_sign(mut self, positive: impl Into<Cow<'static, str>>) -> Self {
        self.signs.set_positive(positive);
        self
    }

    /// Returns the sign markers in use.
    #[inline]
    pub fn signs(&self) -> &SignMarkers {
        &self.signs
    }

    /// Parses `text` as a numeral.
    ///
    /// With `radix == None` the base is 16 for a `0x` prefix and 10 otherwise.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadixError` if `radix` is given and outside `[2, 36]`.
    /// Text that is not a valid numeral is not an error; it yields `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordinal_radix::codec::RadixCodec;
    /// let codec = RadixCodec::new();
    /// assert_eq!(codec.parse::<i32>("0x1A", None), Ok(Some(26)));
    /// assert_eq!(codec.parse::<i32>("0x1A", Some(10)), Ok(None));
    /// assert_eq!(codec.parse::<i32>("FF", Some(16)), Ok(Some(255)));
    /// assert_eq!(codec.parse::<i32>("-", None), Ok(None));
    /// ```
    pub fn parse<T>(&self, text: &str, radix: Option<u32>) -> Result<Option<T>, InvalidRadixError>
    where
        T: PrimInt + Signed + CheckedIntOps + From<i8>,
    {
        let radix = radix.map(Radix::new).transpose()?;
        Ok(self.parse_with(text, radix))
    }

    /// Parses `text` with an already validated (or inferred) radix.
    ///
    /// This is the infallible core of [`RadixCodec::parse`].
    pub fn parse_with<T>(&self, text: &str, radix: Option<Radix>) -> Option<T>
    where
        T: PrimInt + Signed + CheckedIntOps + From<i8>,
    {
        match self.read_numeral(text, radix) {
            Ok(value) => Some(value),
            Err(reason) => {
                log::trace!("rejected numeral {text:?}: {reason}");
                None
            }
        }
    }

    /// Returns whether [`RadixCodec::parse`] would produce a value for `text`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadixError` if `radix` is given and outside `[2, 36]`.
    pub fn can_parse<T>(&self, text: &str, radix: Option<u32>) -> Result<bool, InvalidRadixError>
    where
        T: PrimInt + Signed + CheckedIntOps + From<i8>,
    {
        self.parse::<T>(text, radix).map(|value| value.is_some())
    }

    /// Renders `value` in `radix`.
    ///
    /// Radix 10 and zero use the natural decimal rendering, which does not
    /// consult the configured negative marker.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadixError` if `radix` is outside `[2, 36]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use ordinal_radix::codec::RadixCodec;
    /// let codec = RadixCodec::new();
    /// assert_eq!(codec.format(255_i32, 16).as_deref(), Ok("ff"));
    /// assert_eq!(codec.format(-255_i32, 16).as_deref(), Ok("-ff"));
    /// assert_eq!(codec.format(0_i32, 2).as_deref(), Ok("0"));
    /// ```
    pub fn format<T>(&self, value: T, radix: u32) -> Result<String, InvalidRadixError>
    where
        T: PrimInt + Signed + Display + From<i8>,
    {
        let radix = Radix::new(radix)?;
        Ok(self.format_with(value, radix))
    }

    /// Renders `value` in an already validated radix.
    pub fn format_with<T>(&self, value: T, radix: Radix) -> String
    where
        T: PrimInt + Signed + Display + From<i8>,
    {
        if radix == Radix::DECIMAL || value.is_zero() {
            return value.to_string();
        }

        let base = <T as From<i8>>::from(radix.to_i8());

        // Remainders are taken on the signed value so `T::MIN` never needs to
        // be negated.
        let mut digits = Vec::with_capacity(T::zero().count_zeros() as usize);
        let mut rest = value;
        while !rest.is_zero() {
            let digit = (rest % base)
                .abs()
                .to_usize()
                .expect("remainder magnitude is below the radix");
            digits.push(DIGITS[digit]);
            rest = rest / base;
        }

        let mut out = String::with_capacity(self.signs.negative().len() + digits.len());
        if value.is_negative() {
            out.push_str(self.signs.negative());
        }
        out.extend(digits.iter().rev().map(|&b| char::from(b)));
        out
    }

    fn read_numeral<T>(&self, text: &str, explicit: Option<Radix>) -> Result<T, Rejection>
    where
        T: PrimInt + Signed + CheckedIntOps + From<i8>,
    {
        let (negative, body) = self.signs.strip(text);
        if body.is_empty() {
            return Err(Rejection::Empty);
        }

        let body = body.trim().to_ascii_lowercase();
        let (radix, digits) = match body.strip_prefix(HEX_PREFIX) {
            Some(rest) => match explicit {
                Some(radix) if radix != Radix::HEXADECIMAL => {
                    return Err(Rejection::RadixConflict { radix });
                }
                _ => (Radix::HEXADECIMAL, rest),
            },
            None => (explicit.unwrap_or(Radix::DECIMAL), body.as_str()),
        };

        fold_digits(digits, radix, negative)
    }
}

/// Accumulates `digits` in `radix`, building towards negative values when
/// `negative` is set.
fn fold_digits<T>(digits: &str, radix: Radix, negative: bool) -> Result<T, Rejection>
where
    T: PrimInt + Signed + CheckedIntOps + From<i8>,
{
    let base = <T as From<i8>>::from(radix.to_i8());

    digits
        .bytes()
        .enumerate()
        .try_fold(T::zero(), |acc, (index, byte)| {
            let digit = radix
                .digit_value(byte)
                .ok_or(Rejection::InvalidDigit { index, byte })?;
            // digit < radix <= 36
            let digit = <T as From<i8>>::from(digit as i8);
            let shifted = acc.checked_mul_val(base).ok_or(Rejection::Overflow)?;
            let next = if negative {
                shifted.checked_sub_val(digit)
            } else {
                shifted.checked_add_val(digit)
            };
            next.ok_or(Rejection::Overflow)
        })
}
