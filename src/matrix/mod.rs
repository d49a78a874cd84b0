pub mod aliases;
mod ops;
mod square;
mod util;

use core::fmt;
use core::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::traits::{Reduce, Scalar};

/// Fixed-size `N×N` matrix.
///
/// Storage is row-major: `data[line][column]`, flat index `line * N + column`.
/// Stack-allocated, no-std compatible. `N == 0` is rejected at compile time.
///
/// The element type only has to satisfy [`Scalar`], so matrices of
/// [`Fraction`](crate::Fraction)s and matrices of matrices work with the same
/// operations as matrices of numbers.
///
/// # Examples
///
/// ```
/// use fracmat::Matrix;
///
/// let a = Matrix::new([[1, 2], [3, 4]]);
/// assert_eq!(a[(0, 1)], 2);
/// assert_eq!(a.at(1, 0), Ok(3));
/// assert!(a.at(2, 0).is_err());
///
/// let b: Matrix<f64, 3> = Matrix::identity();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix<T, const N: usize> {
    pub(crate) data: [[T; N]; N],
}

impl<T, const N: usize> Matrix<T, N> {
    const NON_EMPTY: () = assert!(N > 0, "matrix size must be at least 1x1");

    /// Number of coefficients, `N * N`.
    pub const LEN: usize = N * N;

    /// Create a matrix from a row-major 2D array.
    #[inline]
    pub fn new(rows: [[T; N]; N]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data: rows }
    }

    /// Create a matrix by calling `f(line, column)` for each coefficient.
    ///
    /// ```
    /// use fracmat::Matrix;
    /// let m: Matrix<i32, 3> = Matrix::from_fn(|i, j| (i * 3 + j) as i32);
    /// assert_eq!(m[(2, 1)], 7);
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: core::array::from_fn(|line| core::array::from_fn(|column| f(line, column))),
        }
    }

    /// Matrix dimension.
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    fn check(line: usize, column: usize) -> Result<(), MatrixError> {
        if line >= N {
            Err(MatrixError::LineOutOfRange { line, size: N })
        } else if column >= N {
            Err(MatrixError::ColumnOutOfRange { column, size: N })
        } else {
            Ok(())
        }
    }

    fn check_index(index: usize) -> Result<(usize, usize), MatrixError> {
        if index >= Self::LEN {
            Err(MatrixError::IndexOutOfRange {
                index,
                len: Self::LEN,
            })
        } else {
            Ok((index / N, index % N))
        }
    }

    /// Mutable access to `(line, column)`, bounds-checked.
    pub fn at_mut(&mut self, line: usize, column: usize) -> Result<&mut T, MatrixError> {
        Self::check(line, column)?;
        Ok(&mut self.data[line][column])
    }

    /// Mutable access by flat row-major index, bounds-checked.
    pub fn at_index_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
        let (line, column) = Self::check_index(index)?;
        Ok(&mut self.data[line][column])
    }

    /// Iterate over the coefficients in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter().flat_map(|line| line.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut().flat_map(|line| line.iter_mut())
    }
}

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Create a matrix with every coefficient set to `value`.
    pub fn from_value(value: T) -> Self {
        Self::new([[value; N]; N])
    }

    /// Coefficient at `(line, column)`, bounds-checked.
    ///
    /// ```
    /// use fracmat::{Matrix, MatrixError};
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.at(1, 1), Ok(4));
    /// assert_eq!(m.at(0, 2), Err(MatrixError::ColumnOutOfRange { column: 2, size: 2 }));
    /// ```
    pub fn at(&self, line: usize, column: usize) -> Result<T, MatrixError> {
        Self::check(line, column)?;
        Ok(self.data[line][column])
    }

    /// Coefficient at flat row-major `index`, bounds-checked.
    ///
    /// ```
    /// use fracmat::{Matrix, MatrixError};
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.at_index(2), Ok(3));
    /// assert_eq!(m.at_index(4), Err(MatrixError::IndexOutOfRange { index: 4, len: 4 }));
    /// ```
    pub fn at_index(&self, index: usize) -> Result<T, MatrixError> {
        let (line, column) = Self::check_index(index)?;
        Ok(self.data[line][column])
    }

    /// Coefficient at a position known at compile time.
    ///
    /// Out-of-range positions fail to compile, so no runtime check is done.
    ///
    /// ```
    /// use fracmat::Matrix;
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.coef::<1, 0>(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// use fracmat::Matrix;
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// let _ = m.coef::<2, 0>();
    /// ```
    pub fn coef<const L: usize, const C: usize>(&self) -> T {
        const { assert!(L < N && C < N, "coefficient position out of range") };
        self.data[L][C]
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self::from_value(T::zero())
    }

    /// Identity matrix: `T::one()` on the diagonal, zeros elsewhere.
    ///
    /// A pure function of `(T, N)`; also available as [`One::one`].
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const N: usize> Zero for Matrix<T, N> {
    fn zero() -> Self {
        Self::zeros()
    }

    fn is_zero(&self) -> bool {
        self.iter().all(Zero::is_zero)
    }
}

impl<T: Scalar, const N: usize> One for Matrix<T, N> {
    fn one() -> Self {
        Self::identity()
    }
}

// Matrices have no notion of a common divisor; a fraction of matrices keeps
// its pair as given.
impl<T: Scalar, const N: usize> Reduce for Matrix<T, N> {
    fn reduce(numerator: Self, denominator: Self) -> (Self, Self) {
        (numerator, denominator)
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for Matrix<T, N> {
    type Error = MatrixError;

    /// Build from a flat row-major slice of exactly `N * N` values.
    fn try_from(coefs: &[T]) -> Result<Self, MatrixError> {
        if coefs.len() != Self::LEN {
            return Err(MatrixError::LengthMismatch {
                expected: Self::LEN,
                found: coefs.len(),
            });
        }
        Ok(Self::from_fn(|line, column| coefs[line * N + column]))
    }
}

// Index by (line, column) tuple
impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (line, column): (usize, usize)) -> &T {
        &self.data[line][column]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (line, column): (usize, usize)) -> &mut T {
        &mut self.data[line][column]
    }
}

// Index by flat row-major position
impl<T, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        assert!(index < Self::LEN, "index {} out of range for {}x{} matrix", index, N, N);
        &self.data[index / N][index % N]
    }
}

impl<T, const N: usize> IndexMut<usize> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < Self::LEN, "index {} out of range for {}x{} matrix", index, N, N);
        &mut self.data[index / N][index % N]
    }
}

/// Errors from checked matrix access and construction.
///
/// ```
/// use fracmat::{Matrix, MatrixError};
///
/// let m: Matrix<i32, 3> = Matrix::identity();
/// assert_eq!(m.at(3, 0).unwrap_err(), MatrixError::LineOutOfRange { line: 3, size: 3 });
/// assert_eq!(m.line_sum(5).unwrap_err(), MatrixError::LineOutOfRange { line: 5, size: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Line index is not below the matrix size.
    LineOutOfRange { line: usize, size: usize },
    /// Column index is not below the matrix size.
    ColumnOutOfRange { column: usize, size: usize },
    /// Flat index is not below `N * N`.
    IndexOutOfRange { index: usize, len: usize },
    /// Flat coefficient slice does not hold exactly `N * N` values.
    LengthMismatch { expected: usize, found: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::LineOutOfRange { line, size } => {
                write!(f, "line {line} out of range for {size}x{size} matrix")
            }
            MatrixError::ColumnOutOfRange { column, size } => {
                write!(f, "column {column} out of range for {size}x{size} matrix")
            }
            MatrixError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for {len} coefficients")
            }
            MatrixError::LengthMismatch { expected, found } => {
                write!(f, "expected {expected} coefficients, found {found}")
            }
        }
    }
}

impl core::error::Error for MatrixError {}

pub use aliases::*;
