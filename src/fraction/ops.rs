use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Pow;

use crate::fraction::Fraction;
use crate::kernel::power;
use crate::traits::Reduce;

// ── Addition ────────────────────────────────────────────────────────

impl<T: Reduce> Add for Fraction<T> {
    type Output = Self;

    /// Denominators are combined as `d1 * d2`, not the least common multiple;
    /// the result is reduced by `Fraction::new`.
    fn add(self, rhs: Self) -> Self {
        if self.denominator == rhs.denominator {
            return Self::new(self.numerator + rhs.numerator, self.denominator);
        }
        Self::new(
            self.numerator * rhs.denominator + rhs.numerator * self.denominator,
            self.denominator * rhs.denominator,
        )
    }
}

impl<T: Reduce> Add<T> for Fraction<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self + Self::from_value(rhs)
    }
}

// ── Negation / subtraction ──────────────────────────────────────────

impl<T: Reduce> Neg for Fraction<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(T::zero() - self.numerator, self.denominator)
    }
}

impl<T: Reduce> Sub for Fraction<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl<T: Reduce> Sub<T> for Fraction<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self - Self::from_value(rhs)
    }
}

// ── Multiplication / division ───────────────────────────────────────

impl<T: Reduce> Mul for Fraction<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.numerator * rhs.numerator,
            self.denominator * rhs.denominator,
        )
    }
}

impl<T: Reduce> Mul<T> for Fraction<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.numerator * rhs, self.denominator)
    }
}

impl<T: Reduce> Div for Fraction<T> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl<T: Reduce> Div<T> for Fraction<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.numerator, self.denominator * rhs)
    }
}

// ── Exponentiation ──────────────────────────────────────────────────

impl<T: Reduce> Fraction<T> {
    /// Raise numerator and denominator to `exponent` independently.
    ///
    /// ```
    /// use fracmat::Fraction;
    ///
    /// assert_eq!(Fraction::new(2, 3).pow(3), Fraction::new(8, 27));
    /// assert_eq!(Fraction::new(5, 7).pow(0), Fraction::from(1));
    /// ```
    pub fn pow(&self, exponent: u32) -> Self {
        Self::new(
            power(self.numerator, exponent),
            power(self.denominator, exponent),
        )
    }

    pub fn pow_assign(&mut self, exponent: u32) {
        *self = self.pow(exponent);
    }

    /// Add one in place.
    pub fn increment(&mut self) {
        *self += T::one();
    }

    /// Subtract one in place.
    pub fn decrement(&mut self) {
        *self -= T::one();
    }
}

impl<T: Reduce> Pow<u32> for Fraction<T> {
    type Output = Self;

    fn pow(self, rhs: u32) -> Self {
        Fraction::pow(&self, rhs)
    }
}

// ── Compound assignment ─────────────────────────────────────────────

macro_rules! impl_assign_op {
    ($Op:ident, $method:ident, $op:tt) => {
        impl<T: Reduce> $Op for Fraction<T> {
            fn $method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T: Reduce> $Op<T> for Fraction<T> {
            fn $method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

// ── Reference variants ──────────────────────────────────────────────
// Fraction is Copy whenever T is, so &Fraction ops deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Reduce> $Op<Fraction<T>> for &Fraction<T> {
            type Output = Fraction<T>;
            fn $method(self, rhs: Fraction<T>) -> Fraction<T> {
                (*self).$method(rhs)
            }
        }

        impl<T: Reduce> $Op<&Fraction<T>> for Fraction<T> {
            type Output = Fraction<T>;
            fn $method(self, rhs: &Fraction<T>) -> Fraction<T> {
                self.$method(*rhs)
            }
        }

        impl<T: Reduce> $Op<&Fraction<T>> for &Fraction<T> {
            type Output = Fraction<T>;
            fn $method(self, rhs: &Fraction<T>) -> Fraction<T> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);
forward_ref_binop!(Div, div);

impl<T: Reduce> Neg for &Fraction<T> {
    type Output = Fraction<T>;

    fn neg(self) -> Fraction<T> {
        (*self).neg()
    }
}

// ── value op fraction (concrete impls to avoid orphan rules) ────────

macro_rules! impl_value_lhs {
    ($($t:ty),*) => {
        $(
            impl Add<Fraction<$t>> for $t {
                type Output = Fraction<$t>;

                fn add(self, rhs: Fraction<$t>) -> Fraction<$t> {
                    rhs + self
                }
            }

            impl Sub<Fraction<$t>> for $t {
                type Output = Fraction<$t>;

                fn sub(self, rhs: Fraction<$t>) -> Fraction<$t> {
                    Fraction::from_value(self) - rhs
                }
            }

            impl Mul<Fraction<$t>> for $t {
                type Output = Fraction<$t>;

                fn mul(self, rhs: Fraction<$t>) -> Fraction<$t> {
                    rhs * self
                }
            }

            impl Div<Fraction<$t>> for $t {
                type Output = Fraction<$t>;

                fn div(self, rhs: Fraction<$t>) -> Fraction<$t> {
                    Fraction::from_value(self) / rhs
                }
            }
        )*
    };
}

impl_value_lhs!(i8, i16, i32, i64, i128, isize);
