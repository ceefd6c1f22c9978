use super::RealAlgebraicNumberIR;
use crate::interval::RationalInterval;
use crate::polynomial::UnivariatePolynomial;
use crate::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;

/// A real algebraic number that is either an exact rational or an interval
/// representation.
#[derive(Debug, Clone)]
pub enum RealAlgebraicNumber {
    /// Exactly known rational value.
    Numeric(BigRational),
    /// Root of a polynomial inside an isolating interval.
    Interval(RealAlgebraicNumberIR),
}

impl RealAlgebraicNumber {
    /// The exact value, if known.
    pub fn value(&self) -> Option<&BigRational> {
        match self {
            Self::Numeric(v) => Some(v),
            Self::Interval(ir) => ir.value(),
        }
    }

    /// Whether the exact value is known.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.value().is_some()
    }

    /// Whether the number is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Numeric(v) => v.is_zero(),
            Self::Interval(ir) => ir.is_zero(),
        }
    }

    /// Whether the number is an integer.
    pub fn is_integral(&self) -> bool {
        match self {
            Self::Numeric(v) => v.is_integer(),
            Self::Interval(ir) => {
                let mut ir = ir.clone();
                ir.refine_to(&BigRational::one());
                if let Some(v) = ir.value() {
                    return v.is_integer();
                }
                // An open interval of width at most one holds at most one integer.
                let integers = ir.interval().integral_part();
                if integers.is_empty() {
                    return false;
                }
                let candidate = integers.lower().clone();
                ir.compare_rational(&candidate) == Ordering::Equal
            }
        }
    }

    /// Sign of the number.
    pub fn sgn(&self) -> Sign {
        match self {
            Self::Numeric(v) => Sign::of(v),
            Self::Interval(ir) => ir.sgn(),
        }
    }

    /// Sign of `q` at the number.
    pub fn sgn_of(&self, q: &UnivariatePolynomial) -> Sign {
        match self {
            Self::Numeric(v) => q.sign_at(v),
            Self::Interval(ir) => ir.sgn_of(q),
        }
    }

    /// An interval containing the number; a point interval when numeric.
    pub fn interval(&self) -> RationalInterval {
        match self {
            Self::Numeric(v) => RationalInterval::point(v.clone()),
            Self::Interval(ir) => ir.interval().clone(),
        }
    }

    /// One refinement step. Collapses to `Numeric` once the value is found.
    pub fn refine(&mut self) {
        if let Self::Interval(ir) = self {
            ir.refine();
            if let Some(v) = ir.value() {
                *self = Self::Numeric(v.clone());
            }
        }
    }

    /// The number `-self`.
    pub fn negate(&self) -> Self {
        match self {
            Self::Numeric(v) => Self::Numeric(-v),
            Self::Interval(ir) => Self::Interval(ir.negate()),
        }
    }

    /// A rational inside the isolating interval, the value when numeric.
    pub fn sample(&self) -> BigRational {
        match self {
            Self::Numeric(v) => v.clone(),
            Self::Interval(ir) => ir.sample(),
        }
    }

    /// Total order, refining interval representations as needed.
    pub fn compare(&mut self, other: &mut Self) -> Ordering {
        let ordering = match (&mut *self, &mut *other) {
            (Self::Numeric(a), Self::Numeric(b)) => Ord::cmp(&*a, &*b),
            (Self::Numeric(a), Self::Interval(b)) => b.compare_rational(a).reverse(),
            (Self::Interval(a), Self::Numeric(b)) => a.compare_rational(b),
            (Self::Interval(a), Self::Interval(b)) => a.compare(b),
        };
        self.collapse();
        other.collapse();
        ordering
    }

    fn collapse(&mut self) {
        if let Self::Interval(ir) = self {
            if let Some(v) = ir.value() {
                *self = Self::Numeric(v.clone());
            }
        }
    }
}

impl From<BigRational> for RealAlgebraicNumber {
    fn from(value: BigRational) -> Self {
        Self::Numeric(value)
    }
}

impl From<i64> for RealAlgebraicNumber {
    fn from(value: i64) -> Self {
        Self::Numeric(BigRational::from_integer(BigInt::from(value)))
    }
}

impl From<RealAlgebraicNumberIR> for RealAlgebraicNumber {
    fn from(ir: RealAlgebraicNumberIR) -> Self {
        match ir.value() {
            Some(v) => Self::Numeric(v.clone()),
            None => Self::Interval(ir),
        }
    }
}

impl fmt::Display for RealAlgebraicNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Interval(ir) => write!(f, "{ir}"),
        }
    }
}
