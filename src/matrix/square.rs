use num_traits::{AsPrimitive, Zero};

use crate::kernel::power;
use crate::matrix::MatrixError;
use crate::traits::Scalar;
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Integer matrix power by repeated multiplication.
    ///
    /// `pow(0)` returns the identity matrix, also for the zero matrix.
    pub fn pow(&self, exponent: u32) -> Self {
        power(*self, exponent)
    }

    /// Determinant by cofactor expansion along the first line.
    ///
    /// Exact in `T`: no division is performed, so integer, fraction and
    /// matrix elements give exact results. The cost grows as `N!`, which is
    /// fine for the small sizes this type is meant for.
    ///
    /// ```
    /// use fracmat::{Fraction, Matrix};
    ///
    /// assert_eq!(Matrix::new([[2, 0], [0, 3]]).det(), 6);
    ///
    /// let m = Matrix::new([
    ///     [Fraction::new(1, 2), Fraction::new(1, 3)],
    ///     [Fraction::new(1, 4), Fraction::new(1, 5)],
    /// ]);
    /// assert_eq!(m.det(), Fraction::new(1, 60));
    /// ```
    pub fn det(&self) -> T {
        let all: [usize; N] = core::array::from_fn(|i| i);
        self.expand(&all, &all)
    }

    // Determinant of the sub-matrix made of `lines` × `columns`.
    fn expand(&self, lines: &[usize], columns: &[usize]) -> T {
        match columns.len() {
            // the empty minor of a 1x1 matrix
            0 => T::one(),
            1 => self.data[lines[0]][columns[0]],
            2 => {
                let (top, bottom) = (lines[0], lines[1]);
                let (left, right) = (columns[0], columns[1]);
                self.data[top][left] * self.data[bottom][right]
                    - self.data[top][right] * self.data[bottom][left]
            }
            size => {
                let mut det = T::zero();
                let mut rest = [0usize; N];
                for (i, &column) in columns.iter().enumerate() {
                    skip_into(columns, i, &mut rest);
                    let term = self.data[lines[0]][column] * self.expand(&lines[1..], &rest[..size - 1]);
                    det = if i % 2 == 0 { det + term } else { det - term };
                }
                det
            }
        }
    }

    fn minor_unchecked(&self, line: usize, column: usize) -> T {
        let all: [usize; N] = core::array::from_fn(|i| i);
        let mut lines = [0usize; N];
        let mut columns = [0usize; N];
        skip_into(&all, line, &mut lines);
        skip_into(&all, column, &mut columns);
        self.expand(&lines[..N - 1], &columns[..N - 1])
    }

    fn cofactor_unchecked(&self, line: usize, column: usize) -> T {
        let minor = self.minor_unchecked(line, column);
        if (line + column) % 2 == 0 {
            minor
        } else {
            T::zero() - minor
        }
    }

    /// Determinant of the matrix with `line` and `column` removed.
    ///
    /// ```
    /// use fracmat::Matrix;
    ///
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 10]]);
    /// assert_eq!(m.minor(0, 0), Ok(2));  // 5*10 - 6*8
    /// assert_eq!(m.minor(1, 2), Ok(-6)); // 1*8 - 2*7
    /// assert!(m.minor(3, 0).is_err());
    /// ```
    pub fn minor(&self, line: usize, column: usize) -> Result<T, MatrixError> {
        Self::check(line, column)?;
        Ok(self.minor_unchecked(line, column))
    }

    /// Signed minor: `(-1)^(line + column) * minor(line, column)`.
    pub fn cofactor(&self, line: usize, column: usize) -> Result<T, MatrixError> {
        Self::check(line, column)?;
        Ok(self.cofactor_unchecked(line, column))
    }

    /// Transpose of the cofactor matrix, computed exactly in `T`.
    ///
    /// `self * self.adjugate() == det * identity`.
    pub fn adjugate(&self) -> Self {
        Self::from_fn(|line, column| self.cofactor_unchecked(column, line))
    }

    /// Sub-matrix of size `M = N - 1` with `line` and `column` removed.
    ///
    /// ```
    /// use fracmat::Matrix;
    ///
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let s: Matrix<i32, 2> = m.sub_matrix(1, 1).unwrap();
    /// assert_eq!(s, Matrix::new([[1, 3], [7, 9]]));
    /// ```
    pub fn sub_matrix<const M: usize>(
        &self,
        line: usize,
        column: usize,
    ) -> Result<Matrix<T, M>, MatrixError> {
        const { assert!(M + 1 == N, "sub-matrix must be one size smaller") };
        Self::check(line, column)?;
        let skip = |i: usize, removed: usize| if i < removed { i } else { i + 1 };
        Ok(Matrix::from_fn(|l, c| self.data[skip(l, line)][skip(c, column)]))
    }

    /// `true` when the determinant is not zero. No tolerance is applied.
    pub fn is_invertible(&self) -> bool {
        !self.det().is_zero()
    }

    /// [`is_nilpotent_within`](Self::is_nilpotent_within) with a depth of `N`.
    pub fn is_nilpotent(&self) -> bool {
        self.is_nilpotent_within(N)
    }

    /// Square the matrix up to `depth` times and report whether it reaches
    /// the zero matrix.
    ///
    /// `depth` counts squarings, so the highest power inspected is
    /// `self^(2^depth)`.
    ///
    /// ```
    /// use fracmat::Matrix;
    ///
    /// let shift = Matrix::new([[0, 1, 0], [0, 0, 1], [0, 0, 0]]);
    /// assert!(shift.is_nilpotent());
    /// assert!(!shift.is_nilpotent_within(1));
    /// assert!(!Matrix::<i32, 3>::identity().is_nilpotent());
    /// ```
    pub fn is_nilpotent_within(&self, depth: usize) -> bool {
        let mut current = *self;
        for _ in 0..depth {
            if current.is_zero() {
                return true;
            }
            current = current * current;
        }
        current.is_zero()
    }
}

impl<T: Scalar + AsPrimitive<f64>, const N: usize> Matrix<T, N> {
    /// Inverse as `adjugate / det`, evaluated in `f64`.
    ///
    /// The result is always a `Matrix<f64, N>` since division is not closed
    /// over `T`. A singular matrix divides by zero and yields infinities or
    /// NaN; check [`is_invertible`](Self::is_invertible) first.
    ///
    /// ```
    /// use fracmat::Matrix;
    ///
    /// let m = Matrix::new([[4, 7], [2, 6]]);
    /// let inv = m.inverse();
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
    /// assert!((inv[(1, 0)] + 0.2).abs() < 1e-12);
    /// assert!((inv[(1, 1)] - 0.4).abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Matrix<f64, N> {
        let det: f64 = self.det().as_();
        self.adjugate().cast::<f64>() * (1.0 / det)
    }
}

// Copy `items` into the front of `out`, leaving out position `skip`.
fn skip_into(items: &[usize], skip: usize, out: &mut [usize]) {
    let mut k = 0;
    for (i, &item) in items.iter().enumerate() {
        if i != skip {
            out[k] = item;
            k += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Fraction;

    const TOL: f64 = 1e-10;

    fn assert_near<const N: usize>(a: &Matrix<f64, N>, b: &Matrix<f64, N>) {
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < TOL, "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn pow() {
        let m = Matrix::new([[1.0, 1.0], [0.0, 1.0]]);

        assert_eq!(m.pow(0), Matrix::identity());
        assert_eq!(m.pow(1), m);

        let m3 = m.pow(3);
        assert_eq!(m3, Matrix::new([[1.0, 3.0], [0.0, 1.0]]));
    }

    #[test]
    fn pow_zero_of_zero_is_identity() {
        let z: Matrix<i32, 3> = Matrix::zeros();
        assert_eq!(z.pow(0), Matrix::identity());
        assert_eq!(z.pow(2), z);
    }

    #[test]
    fn det_small() {
        assert_eq!(Matrix::new([[5]]).det(), 5);
        assert_eq!(Matrix::new([[2, 0], [0, 3]]).det(), 6);
        assert_eq!(Matrix::new([[3, 8], [4, 6]]).det(), -14);
    }

    #[test]
    fn det_3x3() {
        let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(m.det(), -306);
    }

    #[test]
    fn det_4x4() {
        let m = Matrix::new([
            [1, 0, 2, -1],
            [3, 0, 0, 5],
            [2, 1, 4, -3],
            [1, 0, 5, 0],
        ]);
        assert_eq!(m.det(), 30);
    }

    #[test]
    fn det_identity_and_singular() {
        let id: Matrix<i64, 5> = Matrix::identity();
        assert_eq!(id.det(), 1);

        let m = Matrix::new([[1, 2, 3], [2, 4, 6], [0, 1, 1]]);
        assert_eq!(m.det(), 0);
        assert!(!m.is_invertible());
        assert!(Matrix::new([[1, 2], [3, 4]]).is_invertible());
    }

    #[test]
    fn det_of_fractions_is_exact() {
        let m = Matrix::new([
            [Fraction::new(1, 2), Fraction::new(1, 3), Fraction::from(0)],
            [Fraction::new(1, 3), Fraction::new(1, 4), Fraction::new(1, 5)],
            [Fraction::from(0), Fraction::new(1, 5), Fraction::new(1, 6)],
        ]);
        // 1/2 * (1/24 - 1/25) - 1/3 * (1/18 - 0)
        assert_eq!(m.det(), Fraction::new(-191, 10800));
    }

    #[test]
    fn minor_and_cofactor() {
        let m = Matrix::new([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        assert_eq!(m.minor(0, 1), Ok(-5));
        assert_eq!(m.cofactor(0, 1), Ok(5));
        assert_eq!(m.cofactor(1, 1), Ok(3));
        assert!(m.cofactor(0, 3).is_err());
    }

    #[test]
    fn adjugate_times_matrix() {
        let m = Matrix::new([[1, 2, 3], [0, 4, 5], [1, 0, 6]]);
        let adj = m.adjugate();
        assert_eq!(adj, Matrix::new([[24, -12, -2], [5, 3, -5], [-4, 2, 4]]));
        assert_eq!(m * adj, Matrix::<i32, 3>::identity() * m.det());
    }

    #[test]
    fn inverse_round_trip() {
        let m = Matrix::new([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]);
        assert_near(&(m * m.inverse()), &Matrix::identity());

        let n = Matrix::new([[4, 7], [2, 6]]);
        assert_near(&(n.cast::<f64>() * n.inverse()), &Matrix::identity());
    }

    #[test]
    fn inverse_1x1() {
        let m = Matrix::new([[4]]);
        assert_eq!(m.inverse(), Matrix::new([[0.25]]));
    }

    #[test]
    fn inverse_of_fractions() {
        let m = Matrix::new([
            [Fraction::new(1, 2), Fraction::from(0)],
            [Fraction::from(0), Fraction::new(1, 4)],
        ]);
        assert_near(&m.inverse(), &Matrix::new([[2.0, 0.0], [0.0, 4.0]]));
    }

    #[test]
    fn inverse_of_singular_is_not_finite() {
        let m = Matrix::new([[1, 2], [2, 4]]);
        assert!(m.inverse().iter().any(|c| !c.is_finite()));
    }

    #[test]
    fn sub_matrix_edges() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let s: Matrix<i32, 2> = m.sub_matrix(0, 2).unwrap();
        assert_eq!(s, Matrix::new([[4, 5], [7, 8]]));
        assert_eq!(
            m.sub_matrix::<2>(0, 3),
            Err(MatrixError::ColumnOutOfRange { column: 3, size: 3 })
        );
        assert_eq!(s.det(), m.minor(0, 2).unwrap());
    }

    #[test]
    fn nilpotent_strictly_upper() {
        let m = Matrix::new([
            [0, 1, 2, 3],
            [0, 0, 4, 5],
            [0, 0, 0, 6],
            [0, 0, 0, 0],
        ]);
        assert!(m.is_nilpotent());
        assert!(m.is_nilpotent_within(2));
        assert!(!m.is_nilpotent_within(1));
    }

    #[test]
    fn nilpotent_depth_zero_checks_self() {
        assert!(Matrix::<i32, 2>::zeros().is_nilpotent_within(0));
        assert!(!Matrix::new([[0, 1], [0, 0]]).is_nilpotent_within(0));
        assert!(Matrix::new([[0, 1], [0, 0]]).is_nilpotent_within(1));
    }

    #[test]
    fn identity_is_not_nilpotent() {
        assert!(!Matrix::<f64, 4>::identity().is_nilpotent());
        assert!(!Matrix::new([[1, 1], [0, 0]]).is_nilpotent());
    }
}
