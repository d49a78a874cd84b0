use core::fmt;

use num_traits::{One, Zero};

use crate::fraction::Fraction;

// ── Display ─────────────────────────────────────────────────────────

/// Renders `numerator`, followed by `/denominator` unless the denominator is
/// one or the numerator is zero.
///
/// ```
/// use fracmat::Fraction;
///
/// assert_eq!(Fraction::new(6, 4).to_string(), "3/2");
/// assert_eq!(Fraction::new(5, 1).to_string(), "5");
/// assert_eq!(Fraction::new(0, 7).to_string(), "0");
/// ```
impl<T: fmt::Display + Zero + One + PartialEq> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.numerator)?;
        if !self.denominator.is_one() && !self.numerator.is_zero() {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}
