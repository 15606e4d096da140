//! Exact rational numbers for frame rates and second values.
//!
//! Seconds derived from fractional frame rates (29.97, 30000/1001, ...) are
//! kept as fractions so that repeated additions never drift.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Div;

/// A rational number, always stored in lowest terms with a positive denominator.
///
/// Intermediate products are computed in 128 bits. A result whose reduced
/// terms do not fit in 64 bits is reported by the `checked_*` methods as
/// `None` and never truncated.
#[derive(Clone, Copy, Serialize)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    /// Create a new rational number, reduced to lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if denominator is zero, or for `i64::MIN / -1`, whose
    /// value does not fit.
    pub fn new(num: i64, den: i64) -> Self {
        assert!(den != 0, "Denominator cannot be zero");
        match Self::from_wide(num as i128, den as i128) {
            Some(r) => r,
            None => panic!("Rational {}/{} is out of range", num, den),
        }
    }

    /// Create a rational from an integer.
    pub const fn from_int(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Create a zero rational.
    pub const fn zero() -> Self {
        Self { num: 0, den: 1 }
    }

    /// Numerator (sign carrier).
    pub const fn numer(&self) -> i64 {
        self.num
    }

    /// Denominator (always positive).
    pub const fn denom(&self) -> i64 {
        self.den
    }

    /// Convert to f64. Lossy; use for display only.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Checked addition. `None` if the reduced sum does not fit.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let num = self.num as i128 * rhs.den as i128 + rhs.num as i128 * self.den as i128;
        let den = self.den as i128 * rhs.den as i128;
        Self::from_wide(num, den)
    }

    /// Checked subtraction. `None` if the reduced difference does not fit.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let num = self.num as i128 * rhs.den as i128 - rhs.num as i128 * self.den as i128;
        let den = self.den as i128 * rhs.den as i128;
        Self::from_wide(num, den)
    }

    /// Checked division. `None` if `rhs` is zero or the quotient does not fit.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.num == 0 {
            return None;
        }
        Self::from_wide(
            self.num as i128 * rhs.den as i128,
            self.den as i128 * rhs.num as i128,
        )
    }

    fn from_wide(num: i128, den: i128) -> Option<Self> {
        let (num, den) = if den < 0 { (-num, -den) } else { (num, den) };
        if num == 0 {
            return Some(Self::zero());
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()) as i128;
        Some(Self {
            num: i64::try_from(num / g).ok()?,
            den: i64::try_from(den / g).ok()?,
        })
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// Values are always reduced, so field equality is value equality.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        self.num == other.num && self.den == other.den
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num.hash(state);
        self.den.hash(state);
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.num as i128 * other.den as i128;
        let rhs = other.num as i128 * self.den as i128;
        lhs.cmp(&rhs)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is zero or the quotient does not fit; see
    /// [`Rational::checked_div`].
    fn div(self, rhs: Self) -> Self::Output {
        assert!(rhs.num != 0, "Cannot divide by zero");
        match self.checked_div(rhs) {
            Some(q) => q,
            None => panic!("Rational overflow in {} / {}", self, rhs),
        }
    }
}

/// Greatest common divisor, Euclid.
pub(crate) fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}
