use core::fmt;

use num_traits::AsPrimitive;

use crate::matrix::MatrixError;
use crate::traits::Scalar;
use crate::Matrix;

// ── In-place element-wise updates ───────────────────────────────────

impl<T: Copy, const N: usize> Matrix<T, N> {
    /// Set every coefficient to `value`.
    pub fn fill_with(&mut self, value: T) {
        for coef in self.iter_mut() {
            *coef = value;
        }
    }

    /// Apply a function to every coefficient, producing a new matrix.
    ///
    /// ```
    /// use fracmat::Matrix;
    /// let m = Matrix::new([[1, 4], [9, 16]]);
    /// let r = m.map(|x| x * 2);
    /// assert_eq!(r, Matrix::new([[2, 8], [18, 32]]));
    /// ```
    pub fn map<U>(&self, mut f: impl FnMut(T) -> U) -> Matrix<U, N> {
        Matrix::from_fn(|line, column| f(self.data[line][column]))
    }

    /// Element-wise conversion through `From`.
    ///
    /// ```
    /// use fracmat::{Fraction, Matrix};
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// let f: Matrix<f64, 2> = m.convert();
    /// assert_eq!(f[(1, 0)], 3.0);
    ///
    /// let q: Matrix<Fraction<i32>, 2> = m.convert();
    /// assert_eq!(q[(0, 1)], Fraction::from(2));
    /// ```
    pub fn convert<U: From<T>>(&self) -> Matrix<U, N> {
        self.map(U::from)
    }

    /// Element-wise `as` conversion, narrowing allowed.
    ///
    /// ```
    /// use fracmat::{Fraction, Matrix};
    ///
    /// let m = Matrix::new([[1.9_f64, -2.5], [3.0, 0.1]]);
    /// assert_eq!(m.cast::<i32>(), Matrix::new([[1, -2], [3, 0]]));
    ///
    /// let q = Matrix::new([[Fraction::new(1, 2), Fraction::new(3, 4)], [Fraction::from(1), Fraction::from(0)]]);
    /// assert_eq!(q.cast::<f64>(), Matrix::new([[0.5, 0.75], [1.0, 0.0]]));
    /// ```
    pub fn cast<U: 'static + Copy>(&self) -> Matrix<U, N>
    where
        T: AsPrimitive<U>,
    {
        self.map(|coef| AsPrimitive::<U>::as_(coef))
    }

    /// Copy into a matrix of size `M`.
    ///
    /// The top-left `min(N, M)` block is copied; when growing, the remaining
    /// coefficients are zero.
    ///
    /// ```
    /// use fracmat::Matrix;
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// let big: Matrix<i32, 3> = m.resized();
    /// assert_eq!(big, Matrix::new([[1, 2, 0], [3, 4, 0], [0, 0, 0]]));
    /// assert_eq!(big.resized::<1>(), Matrix::new([[1]]));
    /// ```
    pub fn resized<const M: usize>(&self) -> Matrix<T, M>
    where
        T: Scalar,
    {
        Matrix::from_fn(|line, column| {
            if line < N && column < N {
                self.data[line][column]
            } else {
                T::zero()
            }
        })
    }

    /// Transpose: coefficient `(line, column)` moves to `(column, line)`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(|line, column| self.data[column][line])
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Add `value` to every coefficient.
    pub fn increase_all(&mut self, value: T) {
        for coef in self.iter_mut() {
            *coef = *coef + value;
        }
    }

    /// Subtract `value` from every coefficient.
    pub fn decrease_all(&mut self, value: T) {
        for coef in self.iter_mut() {
            *coef = *coef - value;
        }
    }
}

// ── Aggregation ─────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Sum of all coefficients.
    ///
    /// ```
    /// use fracmat::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        self.iter().fold(T::zero(), |acc, &coef| acc + coef)
    }

    /// Sum of the coefficients of `line`, bounds-checked.
    ///
    /// ```
    /// use fracmat::Matrix;
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.line_sum(1), Ok(7));
    /// assert!(m.line_sum(2).is_err());
    /// ```
    pub fn line_sum(&self, line: usize) -> Result<T, MatrixError> {
        Self::check(line, 0)?;
        Ok(self.line_total(line))
    }

    /// Sum of the coefficients of `column`, bounds-checked.
    pub fn column_sum(&self, column: usize) -> Result<T, MatrixError> {
        Self::check(0, column)?;
        Ok(self.column_total(column))
    }

    /// Sum of line `L`; out-of-range lines fail to compile.
    pub fn static_line_sum<const L: usize>(&self) -> T {
        const { assert!(L < N, "line out of range") };
        self.line_total(L)
    }

    /// Sum of column `C`; out-of-range columns fail to compile.
    pub fn static_column_sum<const C: usize>(&self) -> T {
        const { assert!(C < N, "column out of range") };
        self.column_total(C)
    }

    fn line_total(&self, line: usize) -> T {
        self.data[line].iter().fold(T::zero(), |acc, &coef| acc + coef)
    }

    fn column_total(&self, column: usize) -> T {
        self.data.iter().fold(T::zero(), |acc, line| acc + line[column])
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// One line of text per matrix line. Every coefficient is followed by a
/// space, coefficients on the same line are separated by one more space.
///
/// ```
/// use fracmat::{Fraction, Matrix};
///
/// let m = Matrix::new([[1, 2], [3, 4]]);
/// assert_eq!(m.to_string(), "1  2 \n3  4 \n");
///
/// let q = Matrix::new([[Fraction::new(1, 2), Fraction::from(3)], [Fraction::from(0), Fraction::new(-2, 6)]]);
/// assert_eq!(q.to_string(), "1/2  3 \n0  -1/3 \n");
/// ```
impl<T: fmt::Display, const N: usize> fmt::Display for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.data {
            for (column, coef) in line.iter().enumerate() {
                write!(f, "{} ", coef)?;
                if column + 1 == N {
                    writeln!(f)?;
                } else {
                    write!(f, " ")?;
                }
            }
        }
        Ok(())
    }
}
