mod ops;
mod util;

use core::ops::Div;

use num_traits::{AsPrimitive, One, Zero};

use crate::traits::{Reduce, Scalar};

/// Exact fraction `numerator / denominator` over any [`Reduce`] element type.
///
/// Every constructor and operator leaves the pair in reduced form: integer
/// fractions carry no common divisor and keep their sign in the numerator,
/// fractions of fractions are collapsed one level, fractions of matrices are
/// stored as given.
///
/// Equality is structural: two fractions are equal when their numerators and
/// denominators are equal pairwise. Comparing against a bare `T` compares the
/// evaluated [`result`](Fraction::result) instead.
///
/// # Examples
///
/// ```
/// use fracmat::Fraction;
///
/// let a = Fraction::new(4, 6);
/// assert_eq!(a.numerator(), 2);
/// assert_eq!(a.denominator(), 3);
///
/// let b = a + Fraction::new(1, 3);
/// assert_eq!(b, Fraction::from(1));
/// assert_eq!(b, 1);
///
/// // the sign lives in the numerator
/// assert_eq!(Fraction::new(1, -2), Fraction::new(-1, 2));
///
/// // floats are not reduced: same value, different stored pair
/// assert_ne!(Fraction::new(2.0, 4.0), Fraction::new(1.0, 2.0));
/// assert_eq!(Fraction::new(2.0, 4.0), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

impl<T: Reduce> Fraction<T> {
    /// Create a fraction and bring it into reduced form.
    ///
    /// ```
    /// use fracmat::Fraction;
    ///
    /// let nested = Fraction::new(Fraction::new(2, 3), Fraction::new(4, 9));
    /// assert_eq!(nested.numerator(), Fraction::new(3, 2));
    /// assert_eq!(nested.denominator(), Fraction::from(1));
    /// ```
    pub fn new(numerator: T, denominator: T) -> Self {
        let (numerator, denominator) = T::reduce(numerator, denominator);
        Self {
            numerator,
            denominator,
        }
    }
}

impl<T: Scalar> Fraction<T> {
    /// Fraction `value / 1`. Already reduced, so no reduction takes place.
    pub fn from_value(value: T) -> Self {
        Self {
            numerator: value,
            denominator: T::one(),
        }
    }
}

impl<T: Copy> Fraction<T> {
    #[inline]
    pub fn numerator(&self) -> T {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Swap numerator and denominator.
    ///
    /// The pair is already reduced, so the swapped pair is kept as is.
    pub fn inverse(&self) -> Self {
        Self {
            numerator: self.denominator,
            denominator: self.numerator,
        }
    }
}

impl<T: Copy + Div<Output = T>> Fraction<T> {
    /// Evaluate `numerator / denominator` with `T`'s own division.
    ///
    /// A zero denominator behaves as `T` does: integer types panic, floats
    /// give infinity or NaN.
    ///
    /// ```
    /// use fracmat::Fraction;
    ///
    /// assert_eq!(Fraction::new(7, 2).result(), 3);
    ///
    /// let tower = Fraction::new(Fraction::new(1, 2), Fraction::new(3, 4));
    /// assert_eq!(tower.result(), Fraction::new(2, 3));
    /// ```
    pub fn result(&self) -> T {
        self.numerator / self.denominator
    }
}

impl<T: Copy> Fraction<T> {
    /// Convert to another primitive type by casting both fields to `U` and
    /// dividing there.
    ///
    /// ```
    /// use fracmat::Fraction;
    ///
    /// let f = Fraction::new(3, 4);
    /// assert_eq!(f.convert::<f64>(), 0.75);
    /// assert_eq!(f.convert::<i64>(), 0);
    /// ```
    pub fn convert<U>(&self) -> U
    where
        T: AsPrimitive<U>,
        U: 'static + Copy + Div<Output = U>,
    {
        let numerator: U = self.numerator.as_();
        let denominator: U = self.denominator.as_();
        numerator / denominator
    }
}

impl<T, U> AsPrimitive<U> for Fraction<T>
where
    T: AsPrimitive<U>,
    U: 'static + Copy + Div<Output = U>,
{
    #[inline]
    fn as_(self) -> U {
        self.convert()
    }
}

impl<T: Scalar> From<T> for Fraction<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Scalar> Default for Fraction<T> {
    fn default() -> Self {
        Self::from_value(T::zero())
    }
}

impl<T: Reduce> Zero for Fraction<T> {
    fn zero() -> Self {
        Self::from_value(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl<T: Reduce> One for Fraction<T> {
    fn one() -> Self {
        Self::from_value(T::one())
    }
}

impl<T: Reduce> Reduce for Fraction<T> {
    fn reduce(numerator: Self, denominator: Self) -> (Self, Self) {
        (numerator / denominator, Self::one())
    }
}

// Comparison against a bare value goes through `result()`.
impl<T: Copy + PartialEq + Div<Output = T>> PartialEq<T> for Fraction<T> {
    fn eq(&self, other: &T) -> bool {
        self.result() == *other
    }
}

macro_rules! impl_value_eq {
    ($($t:ty),*) => {
        $(
            impl PartialEq<Fraction<$t>> for $t {
                fn eq(&self, other: &Fraction<$t>) -> bool {
                    *self == other.result()
                }
            }
        )*
    };
}

impl_value_eq!(i8, i16, i32, i64, i128, isize);
