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

//! Configurable sign markers.
//!
//! A numeral may start with a marker for a positive or a negative value.
//! Markers are arbitrary strings matched as whole prefixes; a marker that only
//! partially matches is not stripped.

use std::borrow::Cow;

/// The markers recognized before a numeral and emitted before negative values.
///
/// # Examples
///
/// ```rust
/// # use ordinal_radix::sign::SignMarkers;
/// let signs = SignMarkers::new("neg ", "pos ");
/// assert_eq!(signs.negative(), "neg ");
/// assert_eq!(signs.positive(), "pos ");
///
/// let default = SignMarkers::default();
/// assert_eq!((default.negative(), default.positive()), ("-", "+"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignMarkers {
    negative: Cow<'static, str>,
    positive: Cow<'static, str>,
}

impl SignMarkers {
    /// The conventional `-` / `+` markers.
    pub const DEFAULT: SignMarkers = SignMarkers {
        negative: Cow::Borrowed("-"),
        positive: Cow::Borrowed("+"),
    };

    /// Creates a new set of sign markers.
    #[inline]
    pub fn new(
        negative: impl Into<Cow<'static, str>>,
        positive: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            negative: negative.into(),
            positive: positive.into(),
        }
    }

    /// Returns the marker for negative values.
    #[inline]
    pub fn negative(&self) -> &str {
        &self.negative
    }

    /// Returns the marker for positive values.
    #[inline]
    pub fn positive(&self) -> &str {
        &self.positive
    }

    /// Replaces the negative marker.
    #[inline]
    pub fn set_negative(&mut self, negative: impl Into<Cow<'static, str>>) {
        self.negative = negative.into();
    }

    /// Replaces the positive marker.
    #[inline]
    pub fn set_positive(&mut self, positive: impl Into<Cow<'static, str>>) {
        self.positive = positive.into();
    }

    /// Removes a leading sign marker from `text`.
    ///
    /// The positive marker is tried first. Returns whether the negative marker
    /// was removed together with the remaining text. An empty positive marker
    /// matches every input, which disables negative recognition.
    #[inline]
    pub(crate) fn strip<'a>(&self, text: &'a str) -> (bool, &'a str) {
        if let Some(rest) = text.strip_prefix(self.positive()) {
            (false, rest)
        } else if let Some(rest) = text.strip_prefix(self.negative()) {
            (true, rest)
        } else {
            (false, text)
        }
    }
}

impl Default for SignMarkers {
    fn default() -> Self {
        Self::DEFAULT
    }
}
