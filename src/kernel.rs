//! Numeric helpers shared by [`Fraction`](crate::Fraction) and
//! [`Matrix`](crate::Matrix).

use core::ops::Mul;

use num_traits::{One, PrimInt, Signed};

/// Raise `value` to a non-negative integer power by repeated multiplication.
///
/// `exponent == 0` yields `T::one()`, which for matrices is the identity
/// matrix, so `power(zero_matrix, 0)` is the identity rather than zero.
///
/// ```
/// use fracmat::{kernel::power, Matrix};
///
/// assert_eq!(power(3_i64, 4), 81);
/// assert_eq!(power(Matrix::<i32, 2>::zeros(), 0), Matrix::identity());
/// ```
pub fn power<T: Copy + One + Mul<Output = T>>(value: T, exponent: u32) -> T {
    let mut result = T::one();
    for _ in 0..exponent {
        result = value * result;
    }
    result
}

/// Smallest integer `>= 2` dividing both `first` and `second`.
///
/// Candidates run from `2` up to the smaller magnitude of the two operands.
/// Zero is divisible by everything, so a zero operand leaves the other one as
/// the bound. Returns `None` when the operands are coprime or one of them is
/// `1` or `-1`.
///
/// ```
/// use fracmat::kernel::common_divisor;
///
/// assert_eq!(common_divisor(12, 18), Some(2));
/// assert_eq!(common_divisor(-9, 15), Some(3));
/// assert_eq!(common_divisor(8, 15), None);
/// assert_eq!(common_divisor(0, 9), Some(3));
/// ```
pub fn common_divisor<T: PrimInt + Signed>(first: T, second: T) -> Option<T> {
    let bound = match (first.is_zero(), second.is_zero()) {
        (true, _) => magnitude(second),
        (_, true) => magnitude(first),
        _ => magnitude(first).min(magnitude(second)),
    };
    let mut divisor = T::one() + T::one();
    while divisor <= bound {
        if (first % divisor).is_zero() && (second % divisor).is_zero() {
            return Some(divisor);
        }
        match divisor.checked_add(&T::one()) {
            Some(next) => divisor = next,
            None => break,
        }
    }
    None
}

// `MIN` has no positive counterpart; clamping it to `MAX` loses only the
// candidate `2^(bits-1)`, which can never be the smallest common divisor.
fn magnitude<T: PrimInt + Signed>(value: T) -> T {
    if value == T::min_value() {
        T::max_value()
    } else {
        value.abs()
    }
}
