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

use crate::num::{
    constants::{MinusOne, PlusOne, SignedConstants},
    ops::checked_arithmetic::CheckedNegVal,
};
use num_traits::{NumCast, PrimInt, Signed};
use std::cmp::Ordering;

/// Returns the absolute value of `v`.
///
/// Returns `None` for `T::MIN`, whose magnitude is not representable.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::abs;
/// assert_eq!(abs(-7), Some(7));
/// assert_eq!(abs(7), Some(7));
/// assert_eq!(abs(i8::MIN), None);
/// ```
#[inline]
pub fn abs<T>(v: T) -> Option<T>
where
    T: PrimInt + Signed + CheckedNegVal,
{
    if v.is_negative() {
        v.checked_neg_val()
    } else {
        Some(v)
    }
}

/// Bounds `v` to the closed interval `[min, max]`.
///
/// Unlike `Ord::clamp` this never panics. If `min > max` the lower bound is
/// checked first, so every `v < min` yields `min`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::clamp;
/// assert_eq!(clamp(10, 0, 5), 5);
/// assert_eq!(clamp(-3, 0, 5), 0);
/// assert_eq!(clamp(3, 0, 5), 3);
/// ```
#[inline]
pub fn clamp<T>(v: T, min: T, max: T) -> T
where
    T: PrimInt + Signed,
{
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Bounds `v` to the symmetric interval `[-max, max]`.
///
/// Returns `None` if `max` is `T::MIN`, since `-max` is not representable.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::clamp_sym;
/// assert_eq!(clamp_sym(-10, 5), Some(-5));
/// assert_eq!(clamp_sym(10, 5), Some(5));
/// assert_eq!(clamp_sym(4, 5), Some(4));
/// assert_eq!(clamp_sym(0, i32::MIN), None);
/// ```
#[inline]
pub fn clamp_sym<T>(v: T, max: T) -> Option<T>
where
    T: PrimInt + Signed + CheckedNegVal,
{
    Some(clamp(v, max.checked_neg_val()?, max))
}

/// Three-way comparison of two integers.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::compare;
/// # use std::cmp::Ordering;
/// assert_eq!(compare(1, 2), Ordering::Less);
/// assert_eq!(compare(2, 2), Ordering::Equal);
/// ```
#[inline]
pub fn compare<T>(a: T, b: T) -> Ordering
where
    T: PrimInt + Signed,
{
    a.cmp(&b)
}

/// Linearly interpolates between `a` (at `f == 0.0`) and `b` (at `f == 1.0`).
///
/// The intermediate value is computed in `f64` and truncated toward zero.
/// Returns `None` if the result is NaN or does not fit in `T`. Values of
/// `i64`/`i128` beyond 2^53 lose precision in the intermediate step.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::interpolate;
/// assert_eq!(interpolate(0.5, 0, 10), Some(5));
/// assert_eq!(interpolate(0.25, 10, 0), Some(7)); // 7.5 truncated
/// assert_eq!(interpolate(4.0, 0, 100_i8), None);
/// ```
#[inline]
pub fn interpolate<T>(f: f64, a: T, b: T) -> Option<T>
where
    T: PrimInt + Signed,
{
    let a = a.to_f64()?;
    let b = b.to_f64()?;
    let value = a + (b - a) * f;
    if value.is_nan() {
        return None;
    }
    <T as NumCast>::from(value.trunc())
}

/// Returns `true` if `v` is divisible by two.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::is_even;
/// assert!(is_even(-4));
/// assert!(!is_even(3));
/// ```
#[inline]
pub fn is_even<T>(v: T) -> bool
where
    T: PrimInt + Signed + SignedConstants,
{
    v % T::TWO == T::ZERO
}

/// Returns `true` if `v` is not divisible by two.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::is_odd;
/// assert!(is_odd(-3));
/// assert!(!is_odd(0));
/// ```
#[inline]
pub fn is_odd<T>(v: T) -> bool
where
    T: PrimInt + Signed + SignedConstants,
{
    !is_even(v)
}

/// Returns the larger of `a` and `b`.
#[inline]
pub fn max<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    if a >= b { a } else { b }
}

/// Returns the smaller of `a` and `b`.
#[inline]
pub fn min<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    if a <= b { a } else { b }
}

/// Returns `-1`, `0` or `1` according to the sign of `v`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::sign;
/// assert_eq!(sign(-42), -1);
/// assert_eq!(sign(0), 0);
/// assert_eq!(sign(42), 1);
/// ```
#[inline]
pub fn sign<T>(v: T) -> T
where
    T: PrimInt + Signed + SignedConstants,
{
    match v.cmp(&T::ZERO) {
        Ordering::Less => <T as MinusOne>::MINUS_ONE,
        Ordering::Equal => T::ZERO,
        Ordering::Greater => <T as PlusOne>::PLUS_ONE,
    }
}

/// Wraps `v` into `[0, max)` as on a circular dial.
///
/// Returns `None` if `max <= 0`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::math::integer::wrap_circular;
/// assert_eq!(wrap_circular(13, 12), Some(1));
/// assert_eq!(wrap_circular(-1, 12), Some(11));
/// assert_eq!(wrap_circular(5, 0), None);
/// ```
#[inline]
pub fn wrap_circular<T>(v: T, max: T) -> Option<T>
where
    T: PrimInt + Signed,
{
    if max <= T::zero() {
        return None;
    }
    let r = v % max;
    // r is in (-max, max), so adding max cannot overflow
    Some(if r < T::zero() { r + max } else { r })
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i64;

    #[test]
    fn test_abs() {
        assert_eq!(abs::<IntegerType>(-1), Some(1));
        assert_eq!(abs::<IntegerType>(0), Some(0));
        assert_eq!(abs(i32::MAX), Some(i32::MAX));
        assert_eq!(abs(i32::MIN + 1), Some(i32::MAX));
    }

    #[test]
    fn test_abs_min_is_unrepresentable() {
        assert_eq!(abs(i8::MIN), None);
        assert_eq!(abs(i64::MIN), None);
        assert_eq!(abs(i128::MIN), None);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp::<IntegerType>(10, 0, 5), 5);
        assert_eq!(clamp::<IntegerType>(-1, 0, 5), 0);
        assert_eq!(clamp::<IntegerType>(0, 0, 5), 0); // Inclusive lower
        assert_eq!(clamp::<IntegerType>(5, 0, 5), 5); // Inclusive upper
        assert_eq!(clamp::<IntegerType>(7, 7, 7), 7);
    }

    #[test]
    fn test_clamp_inverted_bounds_does_not_panic() {
        // Lower bound is checked first
        assert_eq!(clamp::<IntegerType>(0, 5, 1), 5);
        assert_eq!(clamp::<IntegerType>(10, 5, 1), 1);
    }

    #[test]
    fn test_clamp_sym() {
        assert_eq!(clamp_sym::<IntegerType>(-10, 5), Some(-5));
        assert_eq!(clamp_sym::<IntegerType>(10, 5), Some(5));
        assert_eq!(clamp_sym::<IntegerType>(-5, 5), Some(-5));
        assert_eq!(clamp_sym::<IntegerType>(0, 0), Some(0));
        assert_eq!(clamp_sym(i8::MIN, i8::MAX), Some(-i8::MAX));
    }

    #[test]
    fn test_clamp_sym_min_bound_is_unrepresentable() {
        assert_eq!(clamp_sym(0, i8::MIN), None);
        assert_eq!(clamp_sym(i64::MAX, i64::MIN), None);
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare::<IntegerType>(-1, 1), Ordering::Less);
        assert_eq!(compare::<IntegerType>(1, -1), Ordering::Greater);
        assert_eq!(compare::<IntegerType>(3, 3), Ordering::Equal);
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate::<IntegerType>(0.0, 10, 20), Some(10));
        assert_eq!(interpolate::<IntegerType>(1.0, 10, 20), Some(20));
        assert_eq!(interpolate::<IntegerType>(0.55, 10, 20), Some(15));
        // Extrapolation is allowed while representable
        assert_eq!(interpolate::<IntegerType>(2.0, 0, 10), Some(20));
        assert_eq!(interpolate::<IntegerType>(-1.0, 0, 10), Some(-10));
        // Truncation toward zero on the negative side
        assert_eq!(interpolate::<IntegerType>(0.5, 0, -5), Some(-2));
    }

    #[test]
    fn test_interpolate_unrepresentable() {
        assert_eq!(interpolate::<i8>(2.0, 0, 100), None);
        assert_eq!(interpolate::<i32>(f64::NAN, 0, 1), None);
        assert_eq!(interpolate::<i32>(f64::INFINITY, 0, 1), None);
    }

    #[test]
    fn test_parity() {
        for v in -10..=10_i32 {
            assert_ne!(is_even(v), is_odd(v), "parity mismatch for {v}");
        }
        assert!(is_even(i64::MIN));
        assert!(is_odd(i64::MAX));
        assert!(is_odd(-1_i8));
    }

    #[test]
    fn test_min_max() {
        assert_eq!(max::<IntegerType>(3, 9), 9);
        assert_eq!(max::<IntegerType>(-3, -9), -3);
        assert_eq!(min::<IntegerType>(3, 9), 3);
        assert_eq!(min::<IntegerType>(-3, -9), -9);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(i32::MIN), -1);
        assert_eq!(sign(-1_i32), -1);
        assert_eq!(sign(0_i32), 0);
        assert_eq!(sign(i32::MAX), 1);
    }

    #[test]
    fn test_wrap_circular() {
        assert_eq!(wrap_circular::<IntegerType>(0, 5), Some(0));
        assert_eq!(wrap_circular::<IntegerType>(5, 5), Some(0));
        assert_eq!(wrap_circular::<IntegerType>(7, 5), Some(2));
        assert_eq!(wrap_circular::<IntegerType>(-7, 5), Some(3));
        assert_eq!(wrap_circular::<IntegerType>(-5, 5), Some(0));
        assert_eq!(wrap_circular(i8::MIN, i8::MAX), Some(126));
    }

    #[test]
    fn test_wrap_circular_rejects_non_positive_modulus() {
        assert_eq!(wrap_circular::<IntegerType>(3, 0), None);
        assert_eq!(wrap_circular::<IntegerType>(3, -4), None);
    }
}
