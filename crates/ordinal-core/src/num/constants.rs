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

/// A trait for integer types that have a constant representing -1.
pub trait MinusOne {
    /// The constant representing -1 for the implementing type.
    const MINUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for integer types that have a constant representing +1.
pub trait PlusOne {
    /// The constant representing +1 for the implementing type.
    const PLUS_ONE: Self;
}

/// A trait for integer types that have a constant representing 2.
///
/// Used for parity checks without going through a fallible cast.
pub trait Two {
    /// The constant representing 2 for the implementing type.
    const TWO: Self;
}

/// Convenience bound for the signed sentinel constants used across the crate.
///
/// # Examples
///
/// ```rust
/// # use ordinal_core::num::constants::SignedConstants;
/// fn flip<T: SignedConstants + core::ops::Mul<Output = T>>(v: T) -> T {
///     v * T::MINUS_ONE
/// }
///
/// assert_eq!(flip(7_i32), -7);
/// ```
pub trait SignedConstants: MinusOne + Zero + PlusOne + Two + Sized {}

impl<T> SignedConstants for T where T: MinusOne + Zero + PlusOne + Two {}

macro_rules! impl_signed_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl MinusOne for $t {
                const MINUS_ONE: Self = -1;
            }

            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl PlusOne for $t {
                const PLUS_ONE: Self = 1;
            }

            impl Two for $t {
                const TWO: Self = 2;
            }
        )*
    };
}

impl_signed_constants_for!(i8, i16, i32, i64, i128, isize);
