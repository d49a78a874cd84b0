//! Nested fractions and matrices side by side.
//!
//! Run with `cargo run --example tower`.

use fracmat::{Fraction, Matrix, Matrix5, RationalMatrix};

fn main() {
    // a fraction of fractions collapses one level on construction
    let tower = Fraction::new(Fraction::new(2, 3), Fraction::new(2, 3));
    println!("(2/3) / (2/3) = {}", tower);

    let deep = Fraction::new(tower, Fraction::from(Fraction::new(3, 4)));
    println!("1 / (3/4) = {}", deep);

    let m: Matrix5<f64> = Matrix::new([
        [0.0, 0.0, 1.0, 1.0, 1.0],
        [1.0, 0.0, 0.0, 1.0, 1.0],
        [0.0, 1.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 1.0],
        [1.0, 1.0, 0.0, 1.0, 0.0],
    ]);
    println!("M =\n{}", m);
    println!("det(M) = {}", m.det());
    if m.is_invertible() {
        println!("M^-1 =\n{}", m.inverse());
    }
    println!("M^2 =\n{}", m.pow(2));

    let h: RationalMatrix<3> = Matrix::from_fn(|i, j| Fraction::new(1, (i + j + 1) as i64));
    println!("H =\n{}", h);
    println!("det(H) = {}", h.det());
    println!("adj(H) =\n{}", h.adjugate());

    let strict: Matrix5<i32> = Matrix::from_fn(|i, j| if j > i { 1 } else { 0 });
    println!("strictly upper triangular is nilpotent: {}", strict.is_nilpotent());
}
