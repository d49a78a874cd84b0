//! Pre-defined type aliases for common matrix sizes and element towers.

use crate::Fraction;
use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4>;
/// 5×5 matrix.
pub type Matrix5<T> = Matrix<T, 5>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6>;

// ── Exact rational matrices ────────────────────────────────────────

/// `N×N` matrix of `i64` fractions.
pub type RationalMatrix<const N: usize> = Matrix<Fraction<i64>, N>;
