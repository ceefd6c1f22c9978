//! Interval representation of real algebraic numbers.

use super::{RealAlgebraicNumberSettings, RefinementStrategy};
use crate::error::{AlgebraicError, AlgebraicResult};
use crate::interval::{BoundType, RationalInterval};
use crate::polynomial::sturm::{sign_at_root, strictly_between};
use crate::polynomial::{SturmSequence, UnivariatePolynomial};
use crate::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

/// Halvings tried per side when widening an interval towards a bound.
const COARSEN_ATTEMPTS: usize = 16;

/// A real root of a polynomial, isolated by an open interval.
///
/// Refinement only shrinks the interval, [`coarsen`](Self::coarsen) and the
/// bound setters may widen it again, and it always contains the same root. Once a
/// split point turns out to be the root itself the number becomes numeric:
/// its interval is the point `[v, v]` and [`value`](Self::value) is `Some`.
#[derive(Debug, Clone)]
pub struct RealAlgebraicNumberIR {
    polynomial: UnivariatePolynomial,
    interval: RationalInterval,
    sturm: SturmSequence,
    refinement_count: u32,
    value: Option<BigRational>,
    is_root: bool,
    strategy: RefinementStrategy,
}

impl RealAlgebraicNumberIR {
    /// The root of `polynomial` inside `interval`, with the interval moved
    /// off zero when possible.
    ///
    /// # Errors
    ///
    /// See [`create_with`](Self::create_with).
    pub fn create(
        polynomial: UnivariatePolynomial,
        interval: RationalInterval,
    ) -> AlgebraicResult<Self> {
        Self::create_with(polynomial, interval, None, true, true)
    }

    /// Like [`create`](Self::create), taking the refinement strategy and
    /// normalization from `settings`.
    ///
    /// # Errors
    ///
    /// See [`create_with`](Self::create_with).
    pub fn with_settings(
        polynomial: UnivariatePolynomial,
        interval: RationalInterval,
        settings: &RealAlgebraicNumberSettings,
    ) -> AlgebraicResult<Self> {
        let mut number =
            Self::create_with(polynomial, interval, None, !settings.skip_normalization, true)?;
        number.strategy = settings.strategy;
        Ok(number)
    }

    /// Full constructor.
    ///
    /// `sturm` may carry a precomputed Sturm sequence of `polynomial`. With
    /// `normalize`, an interval containing zero either collapses to zero
    /// (when zero is the root) or is cut to the side of zero holding the
    /// root. `is_root` records that the interval comes from root isolation.
    ///
    /// # Errors
    ///
    /// - [`AlgebraicError::ZeroPolynomial`] for the zero polynomial;
    /// - [`AlgebraicError::InvalidInterval`] unless the interval is a point
    ///   or open with finite bounds;
    /// - [`AlgebraicError::NotARoot`] for a point that is not a root;
    /// - [`AlgebraicError::RootOnBoundary`] when a bound is a root;
    /// - [`AlgebraicError::NotIsolating`] unless exactly one root lies inside.
    pub fn create_with(
        polynomial: UnivariatePolynomial,
        interval: RationalInterval,
        sturm: Option<SturmSequence>,
        normalize: bool,
        is_root: bool,
    ) -> AlgebraicResult<Self> {
        if polynomial.is_zero() {
            return Err(AlgebraicError::ZeroPolynomial);
        }
        let sturm = sturm.unwrap_or_else(|| SturmSequence::new(&polynomial));

        if interval.is_point_interval() {
            let value = interval.lower().clone();
            if !polynomial.eval(&value).is_zero() {
                return Err(AlgebraicError::NotARoot {
                    value: value.to_string(),
                    polynomial: polynomial.to_string(),
                });
            }
            trace!(%polynomial, %value, "creating numeric real algebraic number");
            return Ok(Self {
                polynomial,
                interval,
                sturm,
                refinement_count: 0,
                value: Some(value),
                is_root,
                strategy: RefinementStrategy::default(),
            });
        }

        if interval.is_empty()
            || interval.lower_type() != BoundType::Strict
            || interval.upper_type() != BoundType::Strict
        {
            return Err(AlgebraicError::InvalidInterval(interval.to_string()));
        }
        if polynomial.eval(interval.lower()).is_zero() || polynomial.eval(interval.upper()).is_zero()
        {
            return Err(AlgebraicError::RootOnBoundary {
                interval: interval.to_string(),
                polynomial: polynomial.to_string(),
            });
        }
        let roots = sturm.count_roots(interval.lower(), interval.upper());
        if roots != 1 {
            return Err(AlgebraicError::NotIsolating {
                interval: interval.to_string(),
                polynomial: polynomial.to_string(),
                roots,
            });
        }

        let mut number = Self {
            polynomial,
            interval,
            sturm,
            refinement_count: 0,
            value: None,
            is_root,
            strategy: RefinementStrategy::default(),
        };
        if normalize {
            number.normalize_interval();
        }
        trace!(number = %number, "creating real algebraic number");
        Ok(number)
    }

    /// The exact number `value`, as the root of `x - value`.
    pub fn from_rational(value: BigRational) -> Self {
        let polynomial = UnivariatePolynomial::new(vec![-value.clone(), BigRational::one()]);
        let sturm = SturmSequence::new(&polynomial);
        Self {
            polynomial,
            interval: RationalInterval::point(value.clone()),
            sturm,
            refinement_count: 0,
            value: Some(value),
            is_root: false,
            strategy: RefinementStrategy::default(),
        }
    }

    /// Move the interval off zero unless zero is the root.
    fn normalize_interval(&mut self) {
        let zero = BigRational::zero();
        if self.value.is_some() || !self.interval.contains(&zero) {
            return;
        }
        if self.polynomial.eval(&zero).is_zero() {
            self.set_numeric(zero);
        } else if self.sturm.count_roots(self.interval.lower(), &zero) == 1 {
            self.interval = RationalInterval::open(self.interval.lower().clone(), zero);
        } else {
            self.interval = RationalInterval::open(zero, self.interval.upper().clone());
        }
    }

    fn set_numeric(&mut self, value: BigRational) {
        self.interval = RationalInterval::point(value.clone());
        self.value = Some(value);
    }

    /// The defining polynomial.
    #[inline]
    pub fn polynomial(&self) -> &UnivariatePolynomial {
        &self.polynomial
    }

    /// The current isolating interval.
    #[inline]
    pub fn interval(&self) -> &RationalInterval {
        &self.interval
    }

    /// Lower bound of the isolating interval.
    #[inline]
    pub fn lower(&self) -> &BigRational {
        self.interval.lower()
    }

    /// Upper bound of the isolating interval.
    #[inline]
    pub fn upper(&self) -> &BigRational {
        self.interval.upper()
    }

    /// Sturm sequence of the defining polynomial.
    #[inline]
    pub fn sturm_sequence(&self) -> &SturmSequence {
        &self.sturm
    }

    /// How many refinement steps were applied.
    #[inline]
    pub fn refinement_count(&self) -> u32 {
        self.refinement_count
    }

    /// Whether the exact value is known.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.value.is_some()
    }

    /// The exact value, once known.
    #[inline]
    pub fn value(&self) -> Option<&BigRational> {
        self.value.as_ref()
    }

    /// Whether the number is zero.
    pub fn is_zero(&self) -> bool {
        match &self.value {
            Some(v) => v.is_zero(),
            None => self.interval.is_zero(),
        }
    }

    /// Whether the interval was produced by root isolation.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.is_root
    }

    /// Refinement strategy used by [`refine`](Self::refine).
    #[inline]
    pub fn strategy(&self) -> RefinementStrategy {
        self.strategy
    }

    /// Whether the isolating interval lies inside `interval`.
    pub fn contained_in(&self, interval: &RationalInterval) -> bool {
        interval.contains_interval(&self.interval)
    }

    /// One refinement step with the configured strategy.
    pub fn refine(&mut self) {
        self.refine_with(self.strategy);
    }

    /// One refinement step: split the interval and keep the half holding
    /// the root. Counts one step even when the number is already numeric.
    pub fn refine_with(&mut self, strategy: RefinementStrategy) {
        if self.value.is_some() {
            self.refinement_count += 1;
            return;
        }
        let split = match strategy {
            RefinementStrategy::Bisection => self.interval.center(),
            RefinementStrategy::Sample => self.interval.sample(),
        };
        self.split_at(split);
    }

    /// Refine until the interval is no wider than `eps`. An open interval
    /// never reaches a non-positive width, so such an `eps` is ignored.
    pub fn refine_to(&mut self, eps: &BigRational) {
        if !eps.is_positive() {
            return;
        }
        while self.value.is_none() && self.width() > *eps {
            self.refine();
        }
    }

    fn width(&self) -> BigRational {
        self.interval.upper() - self.interval.lower()
    }

    /// Split at a point strictly inside the interval.
    fn split_at(&mut self, m: BigRational) {
        self.refinement_count += 1;
        if self.polynomial.eval(&m).is_zero() {
            trace!(refinements = self.refinement_count, value = %m, "refined to exact root");
            self.set_numeric(m);
            return;
        }
        let lower = self.interval.lower().clone();
        let upper = self.interval.upper().clone();
        self.interval = if self.sturm.count_roots(&lower, &m) == 1 {
            RationalInterval::open(lower, m)
        } else {
            RationalInterval::open(m, upper)
        };
        trace!(refinements = self.refinement_count, interval = %self.interval, "refined");
    }

    /// Whether `]lower, upper[` isolates the root: both bounds are non-roots
    /// and exactly one root lies between them.
    fn isolates(&self, lower: &BigRational, upper: &BigRational) -> bool {
        lower < upper
            && !self.polynomial.eval(lower).is_zero()
            && !self.polynomial.eval(upper).is_zero()
            && self.sturm.count_roots(lower, upper) == 1
    }

    /// Widen the isolating interval towards `bound` while it still isolates
    /// the root. Returns whether the interval changed.
    ///
    /// Nothing happens for a numeric number or when `bound` does not contain
    /// the current interval. An unbounded side of `bound` stands for the
    /// Cauchy bound of the polynomial. Each side first tries the bound
    /// itself, then points halfway back towards its current value. An
    /// interval that excludes zero keeps excluding it.
    pub fn coarsen(&mut self, bound: &RationalInterval) -> bool {
        if self.value.is_some() || !bound.contains_interval(&self.interval) {
            return false;
        }
        let zero = BigRational::zero();
        let cauchy = self.polynomial.cauchy_bound();
        let excludes_zero = !self.interval.contains(&zero);

        let mut lower_target = match bound.lower_type() {
            BoundType::Infinite => -cauchy.clone(),
            _ => bound.lower().clone(),
        };
        if excludes_zero && *self.lower() >= zero && lower_target < zero {
            lower_target = zero.clone();
        }
        let mut upper_target = match bound.upper_type() {
            BoundType::Infinite => cauchy,
            _ => bound.upper().clone(),
        };
        if excludes_zero && *self.upper() <= zero && upper_target > zero {
            upper_target = zero;
        }

        let upper = self.upper().clone();
        let lower = if lower_target < *self.lower() {
            widest_accepted(lower_target, self.lower(), |l| self.isolates(l, &upper))
        } else {
            self.lower().clone()
        };
        let upper = if upper_target > upper {
            widest_accepted(upper_target, &upper, |u| self.isolates(&lower, u))
        } else {
            upper
        };

        if lower == *self.lower() && upper == *self.upper() {
            return false;
        }
        self.interval = RationalInterval::open(lower, upper);
        trace!(interval = %self.interval, "coarsened");
        true
    }

    /// Replace the lower bound if the interval still isolates the root.
    /// Returns whether the bound was replaced.
    pub fn set_lower(&mut self, lower: BigRational) -> bool {
        let upper = self.upper().clone();
        if self.value.is_some() || !self.isolates(&lower, &upper) {
            return false;
        }
        self.interval = RationalInterval::open(lower, upper);
        true
    }

    /// Replace the upper bound if the interval still isolates the root.
    /// Returns whether the bound was replaced.
    pub fn set_upper(&mut self, upper: BigRational) -> bool {
        let lower = self.lower().clone();
        if self.value.is_some() || !self.isolates(&lower, &upper) {
            return false;
        }
        self.interval = RationalInterval::open(lower, upper);
        true
    }

    /// Refine until the interval no longer contains `n`. Returns `true` iff
    /// the number is `n`, in which case it becomes numeric.
    pub fn refine_avoiding(&mut self, n: &BigRational) -> bool {
        if let Some(v) = &self.value {
            return v == n;
        }
        if !self.interval.contains(n) {
            return false;
        }
        // n becomes a bound of the open interval, or the value itself.
        self.split_at(n.clone());
        self.value.as_ref() == Some(n)
    }

    /// Sign of the number.
    pub fn sgn(&self) -> Sign {
        match &self.value {
            Some(v) => Sign::of(v),
            None if self.interval.is_positive() => Sign::Positive,
            None if self.interval.is_negative() => Sign::Negative,
            None => self.sgn_of(&UnivariatePolynomial::x()),
        }
    }

    /// Sign of `q` evaluated at the number, decided exactly with a
    /// Sturm–Tarski query.
    pub fn sgn_of(&self, q: &UnivariatePolynomial) -> Sign {
        match &self.value {
            Some(v) => q.sign_at(v),
            None => sign_at_root(
                &self.polynomial,
                q,
                self.interval.lower(),
                self.interval.upper(),
            ),
        }
    }

    /// Compare with a rational, refining as needed.
    pub fn compare_rational(&mut self, r: &BigRational) -> Ordering {
        if self.refine_avoiding(r) {
            return Ordering::Equal;
        }
        match &self.value {
            Some(v) => v.cmp(r),
            None if self.interval.upper() <= r => Ordering::Less,
            None => Ordering::Greater,
        }
    }

    /// Compare two numbers, refining both as needed. Equal numbers end up
    /// with the same isolating interval.
    pub fn compare(&mut self, other: &mut Self) -> Ordering {
        loop {
            match (&self.value, &other.value) {
                (Some(a), Some(b)) => return a.cmp(b),
                (Some(a), None) => {
                    let a = a.clone();
                    return other.compare_rational(&a).reverse();
                }
                (None, Some(b)) => {
                    let b = b.clone();
                    return self.compare_rational(&b);
                }
                (None, None) => {}
            }
            if self.interval.is_less_than(&other.interval) {
                return Ordering::Less;
            }
            if other.interval.is_less_than(&self.interval) {
                return Ordering::Greater;
            }

            let common = self.interval.intersect(&other.interval);
            let shared = self.polynomial.gcd(&other.polynomial);
            if !shared.is_constant() && shared.count_real_roots(&common) > 0 {
                trace!(interval = %common, "real algebraic numbers are equal");
                self.interval = common.clone();
                other.interval = common;
                return Ordering::Equal;
            }

            if self.width() >= other.width() {
                self.refine_with(RefinementStrategy::Bisection);
            } else {
                other.refine_with(RefinementStrategy::Bisection);
            }
        }
    }

    /// `self < other`, refining both until decided.
    pub fn less_while_unequal(&mut self, other: &mut Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    /// `self == other`, refining both until decided.
    pub fn equal(&mut self, other: &mut Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// The number `-self`, as a root of `p(-x)`.
    pub fn negate(&self) -> Self {
        let polynomial = self.polynomial.negate_var();
        let sturm = SturmSequence::new(&polynomial);
        Self {
            polynomial,
            interval: -&self.interval,
            sturm,
            refinement_count: self.refinement_count,
            value: self.value.as_ref().map(|v| -v),
            is_root: self.is_root,
            strategy: self.strategy,
        }
    }

    /// A rational strictly inside the interval (the value once numeric),
    /// preferring an integer.
    pub fn sample(&self) -> BigRational {
        match &self.value {
            Some(v) => v.clone(),
            None => {
                let s = self.interval.sample();
                if strictly_between(&s, self.interval.lower(), self.interval.upper()) {
                    s
                } else {
                    (self.interval.lower() + self.interval.upper())
                        / BigRational::from_integer(BigInt::from(2))
                }
            }
        }
    }
}

/// Step from `target` halfway back towards `current` until `accept` holds.
/// Falls back to `current`.
fn widest_accepted(
    target: BigRational,
    current: &BigRational,
    accept: impl Fn(&BigRational) -> bool,
) -> BigRational {
    let two = BigRational::from_integer(BigInt::from(2));
    let mut candidate = target;
    for _ in 0..COARSEN_ATTEMPTS {
        if accept(&candidate) {
            return candidate;
        }
        candidate = (&candidate + current) / &two;
    }
    current.clone()
}

impl fmt::Display for RealAlgebraicNumberIR {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "(IR {}, {} = {})", self.interval, self.polynomial, v),
            None => write!(f, "(IR {}, {})", self.interval, self.polynomial),
        }
    }
}
