use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Pow;

use crate::fraction::Fraction;
use crate::traits::{Reduce, Scalar};
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const N: usize> AddAssign for Matrix<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..N {
            for j in 0..N {
                self[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const N: usize> SubAssign for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..N {
            for j in 0..N {
                self[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Neg for Matrix<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for coef in out.iter_mut() {
            *coef = T::zero() - *coef;
        }
        out
    }
}

impl<T: Scalar, const N: usize> Neg for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn neg(self) -> Matrix<T, N> {
        (*self).neg()
    }
}

impl<T: Scalar, const N: usize> AddAssign<&Matrix<T, N>> for Matrix<T, N> {
    fn add_assign(&mut self, rhs: &Matrix<T, N>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const N: usize> SubAssign<&Matrix<T, N>> for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: &Matrix<T, N>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: line of the left by column of the right ──

impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar, const N: usize> MulAssign<T> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        for coef in self.iter_mut() {
            *coef = *coef * rhs;
        }
    }
}

// ── Exponentiation ──────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Pow<u32> for Matrix<T, N> {
    type Output = Self;

    fn pow(self, rhs: u32) -> Self {
        Matrix::pow(&self, rhs)
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const N: usize> $Op<Matrix<T, N>> for &Matrix<T, N> {
            type Output = Matrix<T, N>;
            fn $method(self, rhs: Matrix<T, N>) -> Matrix<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Matrix<T, N>> for Matrix<T, N> {
            type Output = Matrix<T, N>;
            fn $method(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&Matrix<T, N>> for &Matrix<T, N> {
            type Output = Matrix<T, N>;
            fn $method(self, rhs: &Matrix<T, N>) -> Matrix<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);

// ── Reference variant for scalar multiplication ─────────────────────

impl<T: Scalar, const N: usize> Mul<T> for &Matrix<T, N> {
    type Output = Matrix<T, N>;
    fn mul(self, rhs: T) -> Matrix<T, N> {
        (*self).mul(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<Matrix<$t, N>> for $t {
                type Output = Matrix<$t, N>;

                fn mul(self, rhs: Matrix<$t, N>) -> Matrix<$t, N> {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<&Matrix<$t, N>> for $t {
                type Output = Matrix<$t, N>;

                fn mul(self, rhs: &Matrix<$t, N>) -> Matrix<$t, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Fraction is local, so fraction * matrix-of-fractions needs no macro.
impl<T: Reduce, const N: usize> Mul<Matrix<Fraction<T>, N>> for Fraction<T> {
    type Output = Matrix<Fraction<T>, N>;

    fn mul(self, rhs: Matrix<Fraction<T>, N>) -> Matrix<Fraction<T>, N> {
        rhs.map(|coef| self * coef)
    }
}
