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

//! The digit alphabet shared by every radix.
//!
//! Position `i` of [`DIGITS`] is the symbol for digit value `i`. A radix `r`
//! uses the first `r` symbols.

/// The 36 digit symbols, lowest value first.
pub const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Prefix marking a hexadecimal numeral.
pub const HEX_PREFIX: &str = "0x";

/// Returns the position of `byte` in [`DIGITS`].
///
/// Only lowercase letters are part of the alphabet; callers normalize case
/// first.
///
/// # Examples
///
/// ```rust
/// # use ordinal_radix::alphabet::digit_value;
/// assert_eq!(digit_value(b'7'), Some(7));
/// assert_eq!(digit_value(b'z'), Some(35));
/// assert_eq!(digit_value(b'Z'), None);
/// ```
#[inline]
pub const fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'z' => Some((byte - b'a') as u32 + 10),
        _ => None,
    }
}

/// Returns the symbol for digit `value`, or `None` if `value >= 36`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_radix::alphabet::digit_char;
/// assert_eq!(digit_char(15), Some('f'));
/// assert_eq!(digit_char(36), None);
/// ```
#[inline]
pub fn digit_char(value: u32) -> Option<char> {
    DIGITS.get(value as usize).map(|&b| char::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_agrees_with_table() {
        for (position, &symbol) in DIGITS.iter().enumerate() {
            assert_eq!(digit_value(symbol), Some(position as u32));
            assert_eq!(digit_char(position as u32), Some(char::from(symbol)));
        }
    }

    #[test]
    fn test_non_alphabet_bytes() {
        for byte in [b' ', b'-', b'+', b'.', b'A', b'F', b'/', b':', b'`', b'{', 0xC3] {
            assert_eq!(digit_value(byte), None, "byte {byte:#x}");
        }
    }
}
