//! Three-valued sign used by intervals and real algebraic numbers.

use num_traits::Signed;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Mul, Neg};

/// Sign of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Strictly less than zero.
    Negative,
    /// Exactly zero.
    Zero,
    /// Strictly greater than zero.
    Positive,
}

impl Sign {
    /// Sign of a signed number; both zeros of a float map to [`Sign::Zero`].
    pub fn of<T: Signed>(value: &T) -> Self {
        if value.is_zero() {
            Sign::Zero
        } else if value.is_positive() {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }

    /// Sign matching an ordering against zero.
    #[inline]
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }

    /// Sign of `-1`, `0` or `1`; any other value maps by its own sign.
    #[inline]
    pub fn from_i32(value: i32) -> Self {
        Self::from_ordering(value.cmp(&0))
    }

    /// Whether this is [`Sign::Zero`].
    #[inline]
    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }

    /// Whether this is [`Sign::Positive`].
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Sign::Positive
    }

    /// Whether this is [`Sign::Negative`].
    #[inline]
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }

    /// `-1`, `0` or `1`.
    #[inline]
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        Sign::from_i32(i32::from(self.to_i8()) * i32::from(rhs.to_i8()))
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sign::Negative => write!(f, "-"),
            Sign::Zero => write!(f, "0"),
            Sign::Positive => write!(f, "+"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_rational::BigRational;

    #[test]
    fn test_sign_of() {
        assert_eq!(Sign::of(&-3i64), Sign::Negative);
        assert_eq!(Sign::of(&0.0f64), Sign::Zero);
        assert_eq!(Sign::of(&-0.0f64), Sign::Zero);
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        assert_eq!(Sign::of(&half), Sign::Positive);
    }

    #[test]
    fn test_sign_algebra() {
        assert_eq!(-Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Zero * Sign::Positive, Sign::Zero);
        assert_eq!(Sign::from_ordering(Ordering::Less), Sign::Negative);
    }
}
