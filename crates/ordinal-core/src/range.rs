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

//! # Stepped Integer Ranges
//!
//! `StepRange<T>` yields the integers from `start` (inclusive) towards `stop`
//! (exclusive) in increments of `step`, which may be negative. The sequence is
//! produced lazily and stops cleanly at the numeric bounds of `T` instead of
//! overflowing.
//!
//! A zero step between distinct bounds would never terminate; `range`
//! rejects it with an `InfiniteRangeError`. A step that points away from
//! `stop` is not an error and simply yields nothing.
//!
//! ```rust
//! use ordinal_core::range::{range, range_to};
//!
//! assert_eq!(range_to(5).to_vec(), vec![0, 1, 2, 3, 4]);
//! assert_eq!(range(5, Some(0), -1).unwrap().to_vec(), vec![5, 4, 3, 2, 1]);
//! assert!(range(0, Some(5), 0).is_err());
//! ```

use crate::num::ops::checked_arithmetic::CheckedIntOps;
use num_traits::{PrimInt, Signed};
use std::{fmt::Display, iter::FusedIterator};

/// The error returned when a range with a zero step is requested between
/// distinct bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfiniteRangeError<T> {
    /// The requested inclusive start.
    pub start: T,
    /// The requested exclusive stop.
    pub stop: T,
}

impl<T> std::fmt::Display for InfiniteRangeError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Infinite range: stepping from {} to {} with a step of 0 never terminates",
            self.start, self.stop
        )
    }
}

impl<T> std::error::Error for InfiniteRangeError<T> where T: Display + std::fmt::Debug {}

/// A lazy, finite sequence of integers `start, start + step, ...` bounded by
/// an exclusive `stop`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::range::StepRange;
/// let evens: Vec<i32> = StepRange::new(0, 10, 2).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange<T> {
    current: T,
    stop: T,
    step: T,
    exhausted: bool,
}

impl<T> StepRange<T>
where
    T: PrimInt + Signed + CheckedIntOps,
{
    /// Creates a new `StepRange` without validating the step.
    ///
    /// A zero step yields an empty sequence rather than an error; use
    /// [`range`] to reject zero steps between distinct bounds.
    #[inline]
    pub fn new(start: T, stop: T, step: T) -> Self {
        Self {
            current: start,
            stop,
            step,
            exhausted: false,
        }
    }

    /// Returns the exclusive stop bound.
    #[inline]
    pub fn stop(&self) -> T {
        self.stop
    }

    /// Returns the step between consecutive values.
    #[inline]
    pub fn step(&self) -> T {
        self.step
    }

    /// Collects the remaining values into a `Vec`.
    #[inline]
    pub fn to_vec(self) -> Vec<T> {
        self.collect()
    }

    #[inline(always)]
    fn in_bounds(&self) -> bool {
        if self.step > T::zero() {
            self.current < self.stop
        } else if self.step < T::zero() {
            self.current > self.stop
        } else {
            false
        }
    }

    /// Number of values still to be produced, computed in 128-bit space so that
    /// full-width ranges such as `[i64::MIN, i64::MAX)` are measured exactly.
    fn remaining(&self) -> u128 {
        if self.exhausted || !self.in_bounds() {
            return 0;
        }
        let (Some(current), Some(stop), Some(step)) = (
            self.current.to_i128(),
            self.stop.to_i128(),
            self.step.to_i128(),
        ) else {
            return 0;
        };
        // Bounds are ordered by `in_bounds`, so the wrapped difference is the
        // exact unsigned distance.
        let distance = if step > 0 {
            stop.wrapping_sub(current) as u128
        } else {
            current.wrapping_sub(stop) as u128
        };
        distance.div_ceil(step.unsigned_abs())
    }
}

impl<T> Iterator for StepRange<T>
where
    T: PrimInt + Signed + CheckedIntOps,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted || !self.in_bounds() {
            self.exhausted = true;
            return None;
        }
        let value = self.current;
        match self.current.checked_add_val(self.step) {
            Some(next) => self.current = next,
            None => self.exhausted = true,
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// Only widths whose full span fits in a 32-bit `usize`; wider ranges can
// exceed `usize::MAX` and report `(usize::MAX, None)` from `size_hint`.
macro_rules! impl_exact_size_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl ExactSizeIterator for StepRange<$t> {}
        )*
    };
}

impl_exact_size_for!(i8, i16, i32);

impl<T> FusedIterator for StepRange<T> where T: PrimInt + Signed + CheckedIntOps {}

/// Builds the sequence `start, start + step, ...` up to (excluding) `stop`.
///
/// If `stop` is `None`, `start` becomes the exclusive bound and `0` the
/// inclusive start.
///
/// # Errors
///
/// Returns `InfiniteRangeError` if `step == 0` and the bounds differ.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::range::range;
/// assert_eq!(range(0, Some(5), 1).unwrap().to_vec(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(range(3, None, 1).unwrap().to_vec(), vec![0, 1, 2]);
/// assert_eq!(range(0, Some(5), -1).unwrap().to_vec(), Vec::<i32>::new());
/// assert!(range(0, Some(5), 0).is_err());
/// ```
pub fn range<T>(
    start: T,
    stop: Option<T>,
    step: T,
) -> Result<StepRange<T>, InfiniteRangeError<T>>
where
    T: PrimInt + Signed + CheckedIntOps + Display,
{
    let (start, stop) = match stop {
        Some(stop) => (start, stop),
        None => (T::zero(), start),
    };

    if step.is_zero() && start != stop {
        log::trace!("rejected infinite range from {start} to {stop} with step 0");
        return Err(InfiniteRangeError { start, stop });
    }

    Ok(StepRange::new(start, stop, step))
}

/// Builds the ascending sequence `0, 1, ..., stop - 1`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::range::range_to;
/// assert_eq!(range_to(4).to_vec(), vec![0, 1, 2, 3]);
/// assert!(range_to(-4).to_vec().is_empty());
/// ```
#[inline]
pub fn range_to<T>(stop: T) -> StepRange<T>
where
    T: PrimInt + Signed + CheckedIntOps,
{
    StepRange::new(T::zero(), stop, T::one())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type IntegerType = i64;

    #[test]
    fn test_ascending() {
        let r = range::<IntegerType>(0, Some(5), 1).unwrap();
        assert_eq!(r.to_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_descending() {
        let r = range::<IntegerType>(5, Some(0), -1).unwrap();
        assert_eq!(r.to_vec(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_stop_omitted() {
        let r = range::<IntegerType>(5, None, 1).unwrap();
        assert_eq!(r.to_vec(), vec![0, 1, 2, 3, 4]);

        let r = range::<IntegerType>(-3, None, -1).unwrap();
        assert_eq!(r.to_vec(), vec![0, -1, -2]);
    }

    #[test]
    fn test_step_not_dividing_span() {
        let r = range::<IntegerType>(0, Some(10), 3).unwrap();
        assert_eq!(r.to_vec(), vec![0, 3, 6, 9]);

        let r = range::<IntegerType>(10, Some(0), -4).unwrap();
        assert_eq!(r.to_vec(), vec![10, 6, 2]);
    }

    #[test]
    fn test_zero_step_is_infinite() {
        let err = range::<IntegerType>(0, Some(5), 0).unwrap_err();
        assert_eq!(err, InfiniteRangeError { start: 0, stop: 5 });
        assert!(err.to_string().contains("never terminates"));

        // Stop omitted: bounds become [0, 5)
        assert!(range::<IntegerType>(5, None, 0).is_err());
    }

    #[test]
    fn test_zero_step_equal_bounds_is_empty() {
        let r = range::<IntegerType>(3, Some(3), 0).unwrap();
        assert_eq!(r.size_hint(), (0, Some(0)));
        assert!(r.to_vec().is_empty());
    }

    #[test]
    fn test_wrong_direction_is_empty() {
        assert!(range::<IntegerType>(0, Some(5), -1).unwrap().to_vec().is_empty());
        assert!(range::<IntegerType>(5, Some(0), 1).unwrap().to_vec().is_empty());
        assert!(range::<IntegerType>(2, Some(2), 1).unwrap().to_vec().is_empty());
    }

    #[test]
    fn test_stops_at_type_bounds() {
        let up: Vec<i8> = StepRange::new(120, i8::MAX, 5).collect();
        assert_eq!(up, vec![120, 125]);

        let down: Vec<i8> = StepRange::new(-120, i8::MIN, -5).collect();
        assert_eq!(down, vec![-120, -125]);

        let last: Vec<i8> = StepRange::new(i8::MAX - 1, i8::MAX, 100).collect();
        assert_eq!(last, vec![i8::MAX - 1]);
    }

    #[test]
    fn test_exact_size() {
        let mut r = range::<i32>(0, Some(10), 3).unwrap();
        assert_eq!(r.len(), 4);
        r.next();
        assert_eq!(r.len(), 3);

        let full = StepRange::new(i32::MIN, i32::MAX, 1);
        assert_eq!(full.len(), u32::MAX as usize);
    }

    #[test]
    fn test_size_hint_wide_types() {
        let r = range::<IntegerType>(0, Some(10), 3).unwrap();
        assert_eq!(r.size_hint(), (4, Some(4)));

        // Remaining count exceeds usize::MAX
        let full = StepRange::new(i128::MIN, i128::MAX, 1);
        assert_eq!(full.size_hint(), (usize::MAX, None));

        let huge = StepRange::new(0, i128::MAX, 1);
        assert_eq!(huge.size_hint(), (usize::MAX, None));
        assert_eq!(huge.take(3).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn test_fused() {
        let mut r = range_to::<IntegerType>(1);
        assert_eq!(r.next(), Some(0));
        assert_eq!(r.next(), None);
        assert_eq!(r.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(r);
    }

    #[test]
    fn test_accessors() {
        let r = StepRange::<IntegerType>::new(1, 9, 2);
        assert_eq!(r.stop(), 9);
        assert_eq!(r.step(), 2);
    }

    proptest! {
        #[test]
        fn prop_matches_std_step_by(start in -500i64..500, stop in -500i64..500, step in 1i64..50) {
            let ours = range(start, Some(stop), step).unwrap().to_vec();
            let expected: Vec<i64> = (start..stop).step_by(step as usize).collect();
            prop_assert_eq!(ours, expected);
        }

        #[test]
        fn prop_descending_mirrors_ascending(
            start in -500i64..500,
            stop in -500i64..500,
            step in 1i64..50
        ) {
            let ours = range(start, Some(stop), -step).unwrap().to_vec();
            let expected: Vec<i64> = ((stop + 1)..=start).rev().step_by(step as usize).collect();
            prop_assert_eq!(ours, expected);
        }

        #[test]
        fn prop_len_matches_count(
            start in any::<i16>(),
            stop in any::<i16>(),
            step in prop_oneof![1i16..300, -300i16..-1]
        ) {
            let r = range(start, Some(stop), step).unwrap();
            let len = r.len();
            prop_assert_eq!(len, r.count());
        }
    }
}
