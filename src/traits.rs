use core::fmt::Debug;
use core::ops::Sub;
use num_traits::{One, Zero};

use crate::kernel::common_divisor;

/// Trait for types that can be used as matrix and fraction elements.
///
/// Blanket-implemented for all types satisfying the bounds. Covers the
/// primitive integers and floats, and also [`Fraction`](crate::Fraction)
/// and [`Matrix`](crate::Matrix) themselves, which is what lets the two
/// types nest into each other.
///
/// `One` is the identity element of multiplication: `1` for numbers, the
/// identity matrix for matrices.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Sub<Output = Self> {}

impl<T: Copy + PartialEq + Debug + Zero + One + Sub<Output = T>> Scalar for T {}

/// Normalization rule applied by [`Fraction::new`](crate::Fraction::new).
///
/// - primitive signed integers divide out common divisors until none is left,
///   then move the sign to the numerator;
/// - fractions collapse one level: `(n, d)` becomes `(n / d, 1)`;
/// - floats, complex numbers and matrices are kept as given.
pub trait Reduce: Scalar {
    /// Bring a numerator/denominator pair into reduced form.
    fn reduce(numerator: Self, denominator: Self) -> (Self, Self);
}

macro_rules! impl_reduce_signed {
    ($($t:ty),*) => {
        $(
            impl Reduce for $t {
                fn reduce(mut numerator: $t, mut denominator: $t) -> ($t, $t) {
                    while let Some(divisor) = common_divisor(numerator, denominator) {
                        numerator /= divisor;
                        denominator /= divisor;
                    }
                    // `MIN` has no negation; such a pair keeps its signs
                    if denominator < 0 {
                        if let (Some(n), Some(d)) = (numerator.checked_neg(), denominator.checked_neg()) {
                            return (n, d);
                        }
                    }
                    (numerator, denominator)
                }
            }
        )*
    };
}

impl_reduce_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_reduce_identity {
    ($($t:ty),*) => {
        $(
            impl Reduce for $t {
                #[inline]
                fn reduce(numerator: $t, denominator: $t) -> ($t, $t) {
                    (numerator, denominator)
                }
            }
        )*
    };
}

impl_reduce_identity!(f32, f64);

#[cfg(feature = "complex")]
impl<T: Copy + Debug + num_traits::Num> Reduce for num_complex::Complex<T> {
    #[inline]
    fn reduce(numerator: Self, denominator: Self) -> (Self, Self) {
        (numerator, denominator)
    }
}
