use fracmat::{Fraction, Matrix, MatrixError, Matrix2, Matrix3};
use num_traits::{One, Pow, Zero};

const TOL: f64 = 1e-10;

fn assert_near<const N: usize>(a: &Matrix<f64, N>, b: &Matrix<f64, N>, msg: &str) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < TOL, "{}: {:?} vs {:?}", msg, a, b);
    }
}

// ── Fraction properties ──────────────────────────────────────────────

#[test]
fn addition_matches_cross_multiplication() {
    for a in -6_i64..=6 {
        for b in [-5_i64, -3, -1, 1, 2, 4, 7] {
            for (c, d) in [(1_i64, 3_i64), (-2, 5), (0, 9), (7, -4)] {
                let sum = Fraction::new(a, b) + Fraction::new(c, d);
                assert_eq!(
                    sum.result(),
                    (a * d + c * b) / (b * d),
                    "{}/{} + {}/{}",
                    a,
                    b,
                    c,
                    d
                );
            }
        }
    }
}

#[test]
fn reduction_is_idempotent() {
    for n in -20_i32..=20 {
        for d in 1_i32..=20 {
            let once = Fraction::new(n, d);
            let twice = Fraction::new(once.numerator(), once.denominator());
            assert_eq!(once, twice);
        }
    }
}

#[test]
fn equality_is_structural() {
    // equal value, different stored pair
    let a = Fraction::new(2.0, 4.0);
    let b = Fraction::new(1.0, 2.0);
    assert_ne!(a, b);
    assert_eq!(a.result(), b.result());

    // integer pairs are canonical: sign in the numerator, zero as 0/1
    assert_eq!(Fraction::new(1, -2), Fraction::new(-1, 2));
    let zero = Fraction::new(0, -5);
    assert_eq!(zero, Fraction::zero());
    assert_eq!(zero, 0);
    assert!(zero.is_zero());

    // construction reduces, so these two meet in (1, 2)
    assert_eq!(Fraction::new(2, 4), Fraction::new(1, 2));
    assert_eq!(Fraction::new(2, 4).result(), Fraction::new(1, 2).result());
}

#[test]
fn three_level_tower() {
    let inner = |n, d| Fraction::new(n, d);
    let middle = Fraction::new(inner(1, 2), inner(3, 4));
    let outer = Fraction::new(middle, Fraction::new(inner(1, 3), inner(1, 1)));

    // (1/2 / 3/4) / (1/3) = 2
    assert_eq!(outer.result().result(), inner(2, 1));
    assert_eq!(outer.to_string(), "2");
}

#[test]
fn equal_fraction_tower_prints_one() {
    let tower = Fraction::new(Fraction::new(2, 3), Fraction::new(2, 3));
    assert_eq!(tower.to_string(), "1");
}

#[test]
fn fraction_of_matrices() {
    let a: Matrix2<i32> = Matrix::new([[1, 2], [3, 4]]);
    let b: Matrix2<i32> = Matrix::new([[2, 0], [0, 2]]);

    // matrices are not reduced, so the stored pair stays as given
    let f = Fraction::new(a, b);
    assert_eq!(f.numerator(), a);
    assert_eq!(f.denominator(), b);

    let g = f * Fraction::from(Matrix2::<i32>::identity());
    assert_eq!(g, f);

    let sum = f + Fraction::new(a, b);
    assert_eq!(sum.numerator(), a + a);
    assert_eq!(sum.denominator(), b);

    assert_eq!(f.pow(2).numerator(), a * a);
}

// ── Matrix properties ───────────────────────────────────────────────

#[test]
fn identity_law() {
    let m = Matrix::new([[2, -1, 0], [4, 3, 7], [-5, 1, 1]]);
    assert_eq!(m * Matrix3::identity(), m);
    assert_eq!(Matrix3::<i32>::identity() * m, m);
    assert_eq!(m.pow(0), Matrix3::<i32>::identity());
    assert_eq!(Pow::pow(m, 0), Matrix::one());
}

#[test]
fn identity_law_with_negative_fractions() {
    let m: Matrix2<Fraction<i32>> = Matrix::new([
        [Fraction::new(1, 2), Fraction::new(1, -3)],
        [Fraction::zero(), Fraction::one()],
    ]);
    let id = Matrix2::<Fraction<i32>>::identity();
    assert_eq!(m * id, m);
    assert_eq!(id * m, m);
    assert_eq!(m.pow(1), m);
    assert!((m - m).is_zero());
    assert_eq!(m - m, Matrix::zeros());
}

#[test]
fn determinant_2x2() {
    let (a, b, c, d) = (7, -3, 2, 5);
    assert_eq!(Matrix::new([[a, b], [c, d]]).det(), a * d - b * c);
    assert_eq!(Matrix::new([[2, 0], [0, 3]]).det(), 6);
}

#[test]
fn determinant_is_multiplicative() {
    let a = Matrix::new([[1, 2, 0], [0, 1, 3], [4, 0, 1]]);
    let b = Matrix::new([[2, 1, 1], [1, 0, 2], [0, 3, 1]]);
    assert_eq!((a * b).det(), a.det() * b.det());
}

#[test]
fn inverse_round_trip() {
    let m = Matrix::new([
        [3.0, 0.0, 2.0, 1.0],
        [2.0, 0.0, -2.0, 0.0],
        [0.0, 1.0, 1.0, 4.0],
        [1.0, 2.0, 0.0, 1.0],
    ]);
    assert!(m.is_invertible());
    assert_near(&(m * m.inverse()), &Matrix::identity(), "M * M^-1");
    assert_near(&(m.inverse() * m), &Matrix::identity(), "M^-1 * M");
}

#[test]
fn inverse_of_rational_matrix() {
    let m = Matrix::new([
        [Fraction::new(1_i64, 2), Fraction::new(1, 3)],
        [Fraction::new(1, 3), Fraction::new(1, 4)],
    ]);
    let expected = Matrix::new([[18.0, -24.0], [-24.0, 36.0]]);
    assert_near(&m.inverse(), &expected, "rational inverse");

    // exact check through the adjugate
    assert_eq!(m * m.adjugate(), Matrix2::<Fraction<i64>>::identity() * m.det());
}

#[test]
fn transpose_involution() {
    let m: Matrix<i32, 4> = Matrix::from_fn(|i, j| (i * 7 + j * 3) as i32 - 10);
    assert_eq!(m.transpose().transpose(), m);
    assert_eq!(m.transpose().det(), m.det());
}

#[test]
fn nilpotency() {
    let strict: Matrix<i32, 5> = Matrix::from_fn(|i, j| if j > i { (i + j) as i32 } else { 0 });
    assert!(strict.is_nilpotent());
    assert!(strict.pow(5).is_zero());

    assert!(!Matrix::<i32, 5>::identity().is_nilpotent());
    assert!(!Matrix::<i32, 5>::identity().is_nilpotent_within(20));
}

#[test]
fn resizing() {
    let m = Matrix::new([[1, 2], [3, 4]]);
    assert_eq!(m.resized::<2>(), m);

    let grown: Matrix<i32, 4> = m.resized();
    assert_eq!(grown.sum(), m.sum());
    assert_eq!(grown.resized::<2>(), m);
}

#[test]
fn bounds_checks() {
    fn check<const N: usize>() {
        let m: Matrix<i32, N> = Matrix::zeros();
        assert_eq!(m.at(N, 0), Err(MatrixError::LineOutOfRange { line: N, size: N }));
        assert_eq!(m.at(0, N), Err(MatrixError::ColumnOutOfRange { column: N, size: N }));
        assert!(matches!(m.at_index(N * N), Err(MatrixError::IndexOutOfRange { .. })));
        assert!(m.at(N - 1, N - 1).is_ok());
        assert!(m.line_sum(N).is_err());
        assert!(m.column_sum(N).is_err());
    }
    check::<1>();
    check::<2>();
    check::<4>();
    check::<6>();
}

// ── Nested matrices ─────────────────────────────────────────────────

#[test]
fn matrix_of_matrices() {
    let a: Matrix2<i32> = Matrix::new([[1, 1], [0, 1]]);
    let z: Matrix2<i32> = Matrix::zeros();
    let block: Matrix<Matrix2<i32>, 2> = Matrix::new([[a, z], [z, a]]);

    let squared = block * block;
    assert_eq!(squared[(0, 0)], a * a);
    assert_eq!(squared[(0, 1)], z);

    assert_eq!(block.pow(0), Matrix::identity());
    assert_eq!(block.det(), a * a);
}

#[test]
fn matrix_of_fractions_elementwise() {
    let mut m: Matrix<Fraction<i32>, 2> = Matrix::from_value(Fraction::new(1, 2));
    m.increase_all(Fraction::new(1, 3));
    assert_eq!(m[(1, 1)], Fraction::new(5, 6));
    m.decrease_all(Fraction::new(5, 6));
    assert!(m.is_zero());
    assert_eq!(m.to_string(), "0  0 \n0  0 \n");
}
