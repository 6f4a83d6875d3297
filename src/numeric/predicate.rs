//! Predicates over numbers.
//!
//! Predicates take their argument by reference so they can be handed
//! directly to `filter`, `remove`, `take_while` and `drop_while`.

use super::{Integer, Numeric};

/// Returns `true` if `value` is divisible by two.
#[inline]
pub fn is_even<N: Integer>(value: &N) -> bool {
    *value % (N::ONE + N::ONE) == N::ZERO
}

/// Returns `true` if `value` is not divisible by two.
///
/// Negative odd numbers are odd too.
#[inline]
pub fn is_odd<N: Integer>(value: &N) -> bool {
    !is_even(value)
}

/// Returns `true` if `value` equals zero.
#[inline]
pub fn is_zero<N: Numeric>(value: &N) -> bool {
    *value == N::ZERO
}

/// Returns `true` if `value` is strictly greater than zero.
#[inline]
pub fn is_positive<N: Numeric>(value: &N) -> bool {
    *value > N::ZERO
}

/// Returns `true` if `value` is strictly less than zero.
#[inline]
pub fn is_negative<N: Numeric>(value: &N) -> bool {
    *value < N::ZERO
}

/// Returns `true` if `left > right`.
#[inline]
pub fn greater_than<T: PartialOrd>(left: &T, right: &T) -> bool {
    left > right
}

/// Returns `true` if `left < right`.
#[inline]
pub fn less_than<T: PartialOrd>(left: &T, right: &T) -> bool {
    left < right
}

/// Returns `true` if `left == right`.
#[inline]
pub fn equal_to<T: PartialEq>(left: &T, right: &T) -> bool {
    left == right
}
