//! # fracmat
//!
//! Exact generic fractions and fixed-size square matrices, no-std compatible.
//! Both types are generic over their element type, and each is a valid
//! element type for the other: a matrix of fractions, a fraction of
//! fractions or a fraction of matrices all use the same operators as plain
//! numbers.
//!
//! ## Quick start
//!
//! ```
//! use fracmat::{Fraction, Matrix};
//!
//! // exact arithmetic, always in reduced form
//! let third = Fraction::new(2, 6);
//! assert_eq!(third + Fraction::new(1, 6), Fraction::new(1, 2));
//!
//! // exact determinant of a matrix of fractions
//! let m = Matrix::new([
//!     [Fraction::new(1, 2), Fraction::new(1, 3)],
//!     [Fraction::new(1, 3), Fraction::new(1, 4)],
//! ]);
//! assert_eq!(m.det(), Fraction::new(1, 72));
//!
//! // the inverse is evaluated in f64
//! let inv = m.inverse();
//! assert!((inv[(0, 0)] - 18.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`fraction`]: [`Fraction<T>`], numerator/denominator pair reduced on
//!   construction. Integer fractions divide out common divisors; fractions of
//!   fractions collapse one level. Equality is structural; comparison against
//!   a bare `T` evaluates the fraction first.
//!
//! - [`matrix`]: fixed-size `Matrix<T, N>` with const-generic dimension and
//!   row-major storage. Element-wise operations, checked and compile-time
//!   checked access, resizing, cofactor determinant, adjugate, `f64` inverse,
//!   powers and a nilpotency test.
//!
//! - [`kernel`]: [`power`](kernel::power) by repeated multiplication and the
//!   [`common_divisor`](kernel::common_divisor) search used for reduction.
//!
//! - [`traits`]: [`Scalar`], the element contract (`Copy + PartialEq + Debug +
//!   Zero + One + Sub`), and [`Reduce`], the normalization rule picked per
//!   element type.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Links `std`, forwards `num-traits/std` |
//! | `libm`    | no       | Pure-Rust float fallback for `num-traits` without `std` |
//! | `complex` | no       | `Complex<f32>` / `Complex<f64>` elements via `num-complex` |
//! | `all`     | no       | `std` + `complex` |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod fraction;
pub mod kernel;
pub mod matrix;
pub mod traits;

pub use fraction::Fraction;
pub use matrix::aliases::{Matrix1, Matrix2, Matrix3, Matrix4, Matrix5, Matrix6, RationalMatrix};
pub use matrix::{Matrix, MatrixError};
pub use traits::{Reduce, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;
