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

//! # Random Integers
//!
//! Uniform sampling of integers over inclusive bounds. Callers pass their own
//! `rand::Rng` so results are reproducible under a seeded generator;
//! `random_thread` is a shortcut over the thread-local generator.

use num_traits::{PrimInt, Signed};
use rand::{Rng, distr::uniform::SampleUniform};

/// Returns a uniformly chosen integer in `[min, max]` (both inclusive).
///
/// Bounds given in reverse order are swapped, so `random(rng, 5, 1)` samples
/// from `[1, 5]`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::random::random;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let v = random(&mut rng, -3, 3);
/// assert!((-3..=3).contains(&v));
/// ```
#[inline]
pub fn random<R, T>(rng: &mut R, min: T, max: T) -> T
where
    R: Rng + ?Sized,
    T: PrimInt + Signed + SampleUniform,
{
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.random_range(lo..=hi)
}

/// Returns a uniformly chosen integer in `[0, max]`.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::random::random_to;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert!((0..=9).contains(&random_to(&mut rng, 9)));
/// ```
#[inline]
pub fn random_to<R, T>(rng: &mut R, max: T) -> T
where
    R: Rng + ?Sized,
    T: PrimInt + Signed + SampleUniform,
{
    random(rng, T::zero(), max)
}

/// Like [`random`], drawing from the thread-local generator.
#[inline]
pub fn random_thread<T>(min: T, max: T) -> T
where
    T: PrimInt + Signed + SampleUniform,
{
    random(&mut rand::rng(), min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stays_within_inclusive_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1_000 {
            let v = random(&mut rng, -5_i32, 5);
            assert!((-5..=5).contains(&v), "{v} out of bounds");
        }
    }

    #[test]
    fn test_hits_both_endpoints() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let v = random(&mut rng, 0_i64, 3);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "not every value drawn: {seen:?}");
    }

    #[test]
    fn test_degenerate_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(random(&mut rng, 9_i16, 9), 9);
        assert_eq!(random_to(&mut rng, 0_i16), 0);
    }

    #[test]
    fn test_reversed_bounds_are_normalized() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let v = random(&mut rng, 10_i32, -10);
            assert!((-10..=10).contains(&v));
        }
        for _ in 0..200 {
            let v = random_to(&mut rng, -4_i32);
            assert!((-4..=0).contains(&v));
        }
    }

    #[test]
    fn test_full_width_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        // Must not overflow when computing the span
        let _ = random(&mut rng, i64::MIN, i64::MAX);
        let _ = random(&mut rng, i8::MIN, i8::MAX);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a: Vec<i32> = {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            (0..16).map(|_| random(&mut rng, 0, 1_000)).collect()
        };
        let b: Vec<i32> = {
            let mut rng = ChaCha8Rng::seed_from_u64(99);
            (0..16).map(|_| random(&mut rng, 0, 1_000)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng() {
        let v = random_thread(1_i32, 6);
        assert!((1..=6).contains(&v));
    }
}
