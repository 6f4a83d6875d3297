//! Numeric bounds and small helper functions for sequence pipelines.
//!
//! The aggregation combinators (`sum`, `product`) and the range constructors
//! are generic over [`Numeric`]; the parity predicates are generic over
//! [`Integer`]. Both traits are implemented for every primitive integer and
//! floating-point type.
//!
//! The helpers are plain functions so they can be passed straight to a
//! combinator:
//!
//! ```rust
//! use ranger::numeric::{is_even, square};
//! use ranger::range;
//!
//! let total = range(0, 10).map(square).filter(is_even).sum();
//! assert_eq!(total, 120);
//! ```

mod ops;
mod predicate;

pub use ops::{abs, add, div, modulo, mul, pow, square, sub};
pub use predicate::{
    equal_to, greater_than, is_even, is_negative, is_odd, is_positive, is_zero, less_than,
};

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// A primitive number with additive and multiplicative identities.
///
/// # Examples
///
/// ```rust
/// use ranger::numeric::Numeric;
///
/// fn double<N: Numeric>(value: N) -> N {
///     value + value
/// }
///
/// assert_eq!(double(21), 42);
/// assert_eq!(i64::ZERO + i64::ONE, 1);
/// assert_eq!(f64::ONE, 1.0);
/// ```
pub trait Numeric:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + fmt::Debug
    + 'static
{
    /// The additive identity.
    const ZERO: Self;
    /// The multiplicative identity.
    const ONE: Self;

    /// Returns `self + step`, wrapping around at the bounds of an integer type.
    fn step_up(self, step: Self) -> Self;

    /// Returns `self - step`, wrapping around at the bounds of an integer type.
    fn step_down(self, step: Self) -> Self;
}

/// A primitive integer: totally ordered, hashable, with a remainder.
pub trait Integer: Numeric + Ord + Hash + Rem<Output = Self> {}

macro_rules! impl_numeric {
    ($zero:literal, $one:literal, $up:ident, $down:ident; $($number:ty),+) => {
        $(
            impl Numeric for $number {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn step_up(self, step: Self) -> Self {
                    self.$up(step)
                }

                #[inline]
                fn step_down(self, step: Self) -> Self {
                    self.$down(step)
                }
            }
        )+
    };
}

macro_rules! impl_integer {
    ($($number:ty),+) => {
        impl_numeric!(0, 1, wrapping_add, wrapping_sub; $($number),+);
        $(impl Integer for $number {})+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0, 1.0, add, sub; f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn identities<N: Numeric>() -> (N, N) {
        (N::ZERO, N::ONE)
    }

    #[test]
    fn test_integer_identities() {
        assert_eq!(identities::<u8>(), (0, 1));
        assert_eq!(identities::<i128>(), (0, 1));
        assert_eq!(identities::<usize>(), (0, 1));
    }

    #[test]
    fn test_float_identities() {
        assert_eq!(identities::<f32>(), (0.0, 1.0));
        assert_eq!(identities::<f64>(), (0.0, 1.0));
    }

    #[test]
    fn test_integer_steps_wrap_at_bounds() {
        assert_eq!(u8::MAX.step_up(1), 0);
        assert_eq!(0_u8.step_down(1), u8::MAX);
        assert_eq!(i8::MIN.step_down(1), i8::MAX);
        assert_eq!(250_u8.step_up(3), 253);
    }

    #[test]
    fn test_float_steps_are_plain_arithmetic() {
        assert!((1.5_f64.step_up(0.25) - 1.75).abs() < f64::EPSILON);
        assert!((1.5_f32.step_down(0.5) - 1.0).abs() < f32::EPSILON);
    }
}
