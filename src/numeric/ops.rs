//! Arithmetic helpers.

use super::{Integer, Numeric};

/// Returns `left + right`.
#[inline]
pub fn add<N: Numeric>(left: N, right: N) -> N {
    left + right
}

/// Returns `left - right`.
#[inline]
pub fn sub<N: Numeric>(left: N, right: N) -> N {
    left - right
}

/// Returns `left * right`.
#[inline]
pub fn mul<N: Numeric>(left: N, right: N) -> N {
    left * right
}

/// Returns `left / right`.
///
/// # Panics
///
/// Panics on integer division by zero, like the `/` operator.
#[inline]
pub fn div<N: Numeric>(left: N, right: N) -> N {
    left / right
}

/// Returns `left % right`.
///
/// # Panics
///
/// Panics when `right` is zero, like the `%` operator.
#[inline]
pub fn modulo<N: Integer>(left: N, right: N) -> N {
    left % right
}

/// Returns `value * value`.
#[inline]
pub fn square<N: Numeric>(value: N) -> N {
    value * value
}

/// Returns the absolute value of `value`.
///
/// Unsigned values are returned unchanged. The minimum of a signed integer
/// type has no positive counterpart and is returned unchanged as well, like
/// [`i32::wrapping_abs`].
#[inline]
pub fn abs<N: Numeric>(value: N) -> N {
    if value < N::ZERO {
        N::ZERO.step_down(value)
    } else {
        value
    }
}

/// Raises `base` to a non-negative integer power by repeated multiplication.
///
/// # Examples
///
/// ```rust
/// use ranger::numeric::pow;
///
/// assert_eq!(pow(2, 10), 1024);
/// assert_eq!(pow(7, 0), 1);
/// assert_eq!(pow(1.5, 2), 2.25);
/// ```
pub fn pow<N: Numeric>(base: N, exponent: usize) -> N {
    crate::sequence::repeat_n(exponent, base).product()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-5, 5)]
    #[case(0, 0)]
    #[case(7, 7)]
    fn test_abs_signed(#[case] input: i32, #[case] expected: i32) {
        assert_eq!(abs(input), expected);
    }

    #[test]
    fn test_abs_of_signed_minimum_wraps() {
        assert_eq!(abs(i8::MIN), i8::MIN);
        assert_eq!(abs(i64::MIN + 1), i64::MAX);
    }

    #[test]
    fn test_abs_unsigned_and_float() {
        assert_eq!(abs(3_u8), 3);
        assert!((abs(-2.5_f64) - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_binary_operations() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(sub(2, 3), -1);
        assert_eq!(mul(4, 3), 12);
        assert_eq!(div(9, 2), 4);
        assert_eq!(modulo(9, 4), 1);
        assert_eq!(square(-4), 16);
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(3_u64, 4), 81);
        assert_eq!(pow(10, 0), 1);
    }
}
