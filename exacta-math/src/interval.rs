//! Intervals with strict, weak and infinite bounds.
//!
//! An [`Interval`] is generic over its bound type through [`IntervalNumber`]:
//! [`RationalInterval`] computes exactly, [`DoubleInterval`] rounds every
//! bound outward so that a result always contains the true real result.
//!
//! Every interval is kept in canonical form:
//! - an infinite side stores the finite side's value (both infinite store 0),
//! - an inconsistent request (`lower > upper`, or a point with a strict side)
//!   becomes the empty interval `]0, 0[`.
//!
//! Derived equality therefore coincides with equality of the described sets.
//!
//! # Examples
//!
//! ```
//! use exacta_math::interval::{BoundType, DoubleInterval};
//!
//! let a = DoubleInterval::closed(1.0, 3.0);
//! let b = DoubleInterval::new(2.0, BoundType::Strict, 5.0, BoundType::Weak);
//! assert_eq!(a.intersect(&b).to_string(), "]2, 3]");
//! ```

mod arith;
mod number;
mod set_ops;
mod transcendental;

pub use number::{
    IntervalNumber, next_down, next_up, rational_sqrt_bounds, rational_to_f64_bounds,
};

use crate::sign::Sign;
use num_rational::BigRational;
use std::cmp::Ordering;
use std::fmt;

/// Interval over exact rationals.
pub type RationalInterval = Interval<BigRational>;

/// Interval over `f64` with outward rounding.
pub type DoubleInterval = Interval<f64>;

/// Kind of an interval bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
    /// The bound value is excluded.
    Strict,
    /// The bound value is included.
    Weak,
    /// No bound on this side.
    Infinite,
}

impl BoundType {
    /// The weaker of two kinds: `Infinite` over `Strict` over `Weak`.
    #[inline]
    pub fn weakest(a: BoundType, b: BoundType) -> BoundType {
        match (a, b) {
            (BoundType::Infinite, _) | (_, BoundType::Infinite) => BoundType::Infinite,
            (BoundType::Strict, _) | (_, BoundType::Strict) => BoundType::Strict,
            _ => BoundType::Weak,
        }
    }

    /// Kind of the matching bound of the complement: weak and strict swap.
    #[inline]
    pub fn flip(self) -> BoundType {
        match self {
            BoundType::Strict => BoundType::Weak,
            BoundType::Weak => BoundType::Strict,
            BoundType::Infinite => BoundType::Infinite,
        }
    }
}

/// A possibly unbounded, possibly open interval.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Interval<N> {
    lower: N,
    lower_type: BoundType,
    upper: N,
    upper_type: BoundType,
}

impl<N: IntervalNumber> Interval<N> {
    /// Create an interval, canonicalizing infinite sides and inconsistent
    /// bounds. For `f64`, an infinite bound value makes its side infinite.
    pub fn new(lower: N, lower_type: BoundType, upper: N, upper_type: BoundType) -> Self {
        let lower_type = if lower.is_neg_infinity() {
            BoundType::Infinite
        } else {
            lower_type
        };
        let upper_type = if upper.is_pos_infinity() {
            BoundType::Infinite
        } else {
            upper_type
        };
        if (lower_type != BoundType::Infinite && lower.is_pos_infinity())
            || (upper_type != BoundType::Infinite && upper.is_neg_infinity())
        {
            return Self::empty();
        }

        match (lower_type, upper_type) {
            (BoundType::Infinite, BoundType::Infinite) => Self::unbounded(),
            (BoundType::Infinite, _) => Self {
                lower: upper.clone(),
                lower_type,
                upper,
                upper_type,
            },
            (_, BoundType::Infinite) => Self {
                lower: lower.clone(),
                lower_type,
                upper: lower,
                upper_type,
            },
            _ => {
                let inconsistent = match lower.partial_cmp(&upper) {
                    Some(Ordering::Less) => false,
                    Some(Ordering::Equal) => {
                        lower_type == BoundType::Strict || upper_type == BoundType::Strict
                    }
                    _ => true,
                };
                if inconsistent {
                    Self::empty()
                } else {
                    Self {
                        lower,
                        lower_type,
                        upper,
                        upper_type,
                    }
                }
            }
        }
    }

    /// `[lower, upper]`.
    #[must_use]
    pub fn closed(lower: N, upper: N) -> Self {
        Self::new(lower, BoundType::Weak, upper, BoundType::Weak)
    }

    /// `]lower, upper[`.
    #[must_use]
    pub fn open(lower: N, upper: N) -> Self {
        Self::new(lower, BoundType::Strict, upper, BoundType::Strict)
    }

    /// `[value, value]`.
    #[must_use]
    pub fn point(value: N) -> Self {
        Self::new(value.clone(), BoundType::Weak, value, BoundType::Weak)
    }

    /// `]-infinity, infinity[`.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            lower: N::zero(),
            lower_type: BoundType::Infinite,
            upper: N::zero(),
            upper_type: BoundType::Infinite,
        }
    }

    /// The canonical empty interval `]0, 0[`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            lower: N::zero(),
            lower_type: BoundType::Strict,
            upper: N::zero(),
            upper_type: BoundType::Strict,
        }
    }

    /// Interval bounded below only.
    #[must_use]
    pub fn from_lower(lower: N, lower_type: BoundType) -> Self {
        Self::new(lower.clone(), lower_type, lower, BoundType::Infinite)
    }

    /// Interval bounded above only.
    #[must_use]
    pub fn from_upper(upper: N, upper_type: BoundType) -> Self {
        Self::new(upper.clone(), BoundType::Infinite, upper, upper_type)
    }

    /// Stored lower value. Meaningless when the lower side is infinite.
    #[inline]
    pub fn lower(&self) -> &N {
        &self.lower
    }

    /// Stored upper value. Meaningless when the upper side is infinite.
    #[inline]
    pub fn upper(&self) -> &N {
        &self.upper
    }

    /// Kind of the lower bound.
    #[inline]
    pub fn lower_type(&self) -> BoundType {
        self.lower_type
    }

    /// Kind of the upper bound.
    #[inline]
    pub fn upper_type(&self) -> BoundType {
        self.upper_type
    }

    /// Replace the lower bound value, keeping its kind (an infinite lower
    /// side becomes weak).
    pub fn set_lower(&mut self, value: N) {
        let kind = match self.lower_type {
            BoundType::Infinite => BoundType::Weak,
            kind => kind,
        };
        self.set_lower_bound(value, kind);
    }

    /// Replace the upper bound value, keeping its kind (an infinite upper
    /// side becomes weak).
    pub fn set_upper(&mut self, value: N) {
        let kind = match self.upper_type {
            BoundType::Infinite => BoundType::Weak,
            kind => kind,
        };
        self.set_upper_bound(value, kind);
    }

    /// Replace the lower bound and its kind.
    pub fn set_lower_bound(&mut self, value: N, kind: BoundType) {
        *self = Self::new(value, kind, self.upper.clone(), self.upper_type);
    }

    /// Replace the upper bound and its kind.
    pub fn set_upper_bound(&mut self, value: N, kind: BoundType) {
        *self = Self::new(self.lower.clone(), self.lower_type, value, kind);
    }

    /// Whether the interval contains no number.
    pub fn is_empty(&self) -> bool {
        if self.lower_type == BoundType::Infinite || self.upper_type == BoundType::Infinite {
            return false;
        }
        self.lower > self.upper
            || (self.lower == self.upper
                && (self.lower_type == BoundType::Strict || self.upper_type == BoundType::Strict))
    }

    /// Both sides infinite.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.lower_type == BoundType::Infinite && self.upper_type == BoundType::Infinite
    }

    /// At least one side infinite.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.lower_type == BoundType::Infinite || self.upper_type == BoundType::Infinite
    }

    /// Exactly one side infinite.
    #[inline]
    pub fn is_half_bounded(&self) -> bool {
        (self.lower_type == BoundType::Infinite) != (self.upper_type == BoundType::Infinite)
    }

    /// A single number `[v, v]`.
    pub fn is_point_interval(&self) -> bool {
        self.lower_type == BoundType::Weak
            && self.upper_type == BoundType::Weak
            && self.lower == self.upper
    }

    /// Both bounds strict.
    #[inline]
    pub fn is_open_interval(&self) -> bool {
        self.lower_type == BoundType::Strict && self.upper_type == BoundType::Strict
    }

    /// Both bounds weak.
    #[inline]
    pub fn is_closed_interval(&self) -> bool {
        self.lower_type == BoundType::Weak && self.upper_type == BoundType::Weak
    }

    /// The point interval `[0, 0]`.
    pub fn is_zero(&self) -> bool {
        self.is_point_interval() && self.lower.is_zero()
    }

    /// The point interval `[1, 1]`.
    pub fn is_one(&self) -> bool {
        self.is_point_interval() && self.lower.is_one()
    }

    /// Every element is greater than zero.
    pub fn is_positive(&self) -> bool {
        if self.is_empty() || self.lower_type == BoundType::Infinite {
            return false;
        }
        let zero = N::zero();
        self.lower > zero || (self.lower == zero && self.lower_type == BoundType::Strict)
    }

    /// Every element is less than zero.
    pub fn is_negative(&self) -> bool {
        if self.is_empty() || self.upper_type == BoundType::Infinite {
            return false;
        }
        let zero = N::zero();
        self.upper < zero || (self.upper == zero && self.upper_type == BoundType::Strict)
    }

    /// Every element is at least zero.
    pub fn is_semi_positive(&self) -> bool {
        !self.is_empty() && self.lower_type != BoundType::Infinite && self.lower >= N::zero()
    }

    /// Every element is at most zero.
    pub fn is_semi_negative(&self) -> bool {
        !self.is_empty() && self.upper_type != BoundType::Infinite && self.upper <= N::zero()
    }

    /// `Positive` or `Negative` when every element has that sign, `Zero`
    /// otherwise (including intervals that merely contain zero).
    pub fn sgn(&self) -> Sign {
        if self.is_positive() {
            Sign::Positive
        } else if self.is_negative() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Width, rounded up. `None` for unbounded intervals.
    pub fn diameter(&self) -> Option<N> {
        if self.is_unbounded() {
            return None;
        }
        if self.is_empty() {
            return Some(N::zero());
        }
        Some(self.upper.sub_up(&self.lower))
    }

    /// Largest absolute value of a bound. `None` for unbounded intervals.
    pub fn magnitude(&self) -> Option<N> {
        if self.is_unbounded() {
            return None;
        }
        let lo = self.lower.abs();
        let hi = self.upper.abs();
        Some(if lo > hi { lo } else { hi })
    }

    /// Midpoint of a bounded interval. A half-bounded interval yields its
    /// finite bound and an unbounded (or empty) one yields zero.
    pub fn center(&self) -> N {
        if self.is_empty() {
            return N::zero();
        }
        match (self.lower_type, self.upper_type) {
            (BoundType::Infinite, BoundType::Infinite) => N::zero(),
            (BoundType::Infinite, _) => self.upper.clone(),
            (_, BoundType::Infinite) => self.lower.clone(),
            _ => N::halfway(&self.lower, &self.upper),
        }
    }

    /// A number inside the interval, preferring an integer near the center.
    /// Empty intervals give zero.
    pub fn sample(&self) -> N {
        if self.is_empty() {
            return N::zero();
        }
        match (self.lower_type, self.upper_type) {
            (BoundType::Infinite, BoundType::Infinite) => N::zero(),
            (BoundType::Infinite, _) => {
                let candidate = self.upper.floor_value();
                if self.contains(&candidate) {
                    candidate
                } else {
                    candidate - N::one()
                }
            }
            (_, BoundType::Infinite) => {
                let candidate = self.lower.ceil_value();
                if self.contains(&candidate) {
                    candidate
                } else {
                    candidate + N::one()
                }
            }
            _ => {
                let mid = self.center();
                let below = mid.floor_value();
                if self.contains(&below) {
                    return below;
                }
                let above = mid.ceil_value();
                if self.contains(&above) {
                    return above;
                }
                mid
            }
        }
    }

    /// The integers inside the interval, as a closed interval (possibly empty).
    pub fn integral_part(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let (lower, lower_type) = match self.lower_type {
            BoundType::Infinite => (self.lower.clone(), BoundType::Infinite),
            kind => {
                let mut c = self.lower.ceil_value();
                if kind == BoundType::Strict && c == self.lower {
                    c = c + N::one();
                }
                (c, BoundType::Weak)
            }
        };
        let (upper, upper_type) = match self.upper_type {
            BoundType::Infinite => (self.upper.clone(), BoundType::Infinite),
            kind => {
                let mut f = self.upper.floor_value();
                if kind == BoundType::Strict && f == self.upper {
                    f = f - N::one();
                }
                (f, BoundType::Weak)
            }
        };
        Self::new(lower, lower_type, upper, upper_type)
    }

    /// Every element of `self` is less than every element of `other`.
    pub fn is_less_than(&self, other: &Self) -> bool {
        if self.is_empty()
            || other.is_empty()
            || self.upper_type == BoundType::Infinite
            || other.lower_type == BoundType::Infinite
        {
            return false;
        }
        self.upper < other.lower
            || (self.upper == other.lower
                && (self.upper_type == BoundType::Strict || other.lower_type == BoundType::Strict))
    }

    /// Every element of `self` is at most every element of `other`.
    pub fn is_less_or_equal(&self, other: &Self) -> bool {
        if self.is_empty()
            || other.is_empty()
            || self.upper_type == BoundType::Infinite
            || other.lower_type == BoundType::Infinite
        {
            return false;
        }
        self.upper <= other.lower
    }

    /// Every element of `self` is at least every element of `other`.
    #[inline]
    pub fn is_greater_or_equal(&self, other: &Self) -> bool {
        other.is_less_or_equal(self)
    }
}

impl<N: IntervalNumber> Default for Interval<N> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<&RationalInterval> for DoubleInterval {
    /// Rounds each finite bound outward to the nearest `f64`.
    fn from(interval: &RationalInterval) -> Self {
        if interval.is_empty() {
            return DoubleInterval::empty();
        }
        let lower = match interval.lower_type() {
            BoundType::Infinite => 0.0,
            _ => rational_to_f64_bounds(interval.lower()).0,
        };
        let upper = match interval.upper_type() {
            BoundType::Infinite => 0.0,
            _ => rational_to_f64_bounds(interval.upper()).1,
        };
        DoubleInterval::new(lower, interval.lower_type(), upper, interval.upper_type())
    }
}

impl<N: IntervalNumber> fmt::Display for Interval<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.lower_type {
            BoundType::Infinite => write!(f, "]-infinity")?,
            BoundType::Strict => write!(f, "]{}", self.lower)?,
            BoundType::Weak => write!(f, "[{}", self.lower)?,
        }
        write!(f, ", ")?;
        match self.upper_type {
            BoundType::Infinite => write!(f, "infinity["),
            BoundType::Strict => write!(f, "{}[", self.upper),
            BoundType::Weak => write!(f, "{}]", self.upper),
        }
    }
}

impl<N: IntervalNumber> fmt::Debug for Interval<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
