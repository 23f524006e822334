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

use core::ops::{Add, Mul, Neg, Sub};

/// Checked addition by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: i8 = 100;
/// assert_eq!(a.checked_add_val(27), Some(127));
/// assert_eq!(a.checked_add_val(28), None);
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::num::ops::checked_arithmetic::CheckedSubVal;
/// let a: i8 = -100;
/// assert_eq!(a.checked_sub_val(28), Some(-128));
/// assert_eq!(a.checked_sub_val(29), None);
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if overflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value, returning `None` on overflow.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::num::ops::checked_arithmetic::CheckedMulVal;
/// let a: i16 = 4096;
/// assert_eq!(a.checked_mul_val(7), Some(28672));
/// assert_eq!(a.checked_mul_val(8), None); // 32768 > i16::MAX
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked negation by value, returning `None` on overflow.
///
/// The only failing input for a signed type is its minimum value.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::num::ops::checked_arithmetic::CheckedNegVal;
/// assert_eq!(i8::MIN.checked_neg_val(), None);
/// assert_eq!(127_i8.checked_neg_val(), Some(-127));
/// ```
pub trait CheckedNegVal: Sized + Neg<Output = Self> {
    /// Performs checked negation by value, returning `None` if overflow occurs.
    fn checked_neg_val(self) -> Option<Self>;
}

/// Umbrella bound for all by-value checked operations.
///
/// Generic code can require `T: CheckedIntOps` instead of spelling out each
/// trait. It is implemented automatically for every type implementing the
/// individual traits.
pub trait CheckedIntOps: CheckedAddVal + CheckedSubVal + CheckedMulVal + CheckedNegVal {}

impl<T> CheckedIntOps for T where
    T: CheckedAddVal + CheckedSubVal + CheckedMulVal + CheckedNegVal
{
}

macro_rules! checked_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl CheckedNegVal for $t {
                #[inline(always)]
                fn checked_neg_val(self) -> Option<$t> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

checked_impl_val!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn accumulate<T>(digits: &[T], radix: T) -> Option<T>
    where
        T: CheckedIntOps + Copy,
    {
        digits.iter().try_fold(digits[0], |acc, &d| {
            acc.checked_mul_val(radix)?.checked_add_val(d)
        })
    }

    #[test]
    fn test_add_sub_bounds() {
        assert_eq!(i32::MAX.checked_add_val(1), None);
        assert_eq!(i32::MIN.checked_sub_val(1), None);
        assert_eq!(i32::MAX.checked_sub_val(1), Some(i32::MAX - 1));
        assert_eq!((-5_i64).checked_add_val(5), Some(0));
    }

    #[test]
    fn test_mul_bounds() {
        assert_eq!(i64::MAX.checked_mul_val(2), None);
        assert_eq!(i64::MIN.checked_mul_val(-1), None);
        assert_eq!(1_000_i64.checked_mul_val(-1_000), Some(-1_000_000));
    }

    #[test]
    fn test_neg_bounds() {
        assert_eq!(i16::MIN.checked_neg_val(), None);
        assert_eq!(i16::MAX.checked_neg_val(), Some(-i16::MAX));
        assert_eq!(0_i16.checked_neg_val(), Some(0));
    }

    #[test]
    fn test_umbrella_trait_in_generic_fold() {
        assert_eq!(accumulate::<i8>(&[0, 1, 2, 7], 10), Some(127));
        assert_eq!(accumulate::<i8>(&[0, 1, 2, 8], 10), None);
    }
}
