//! Interval arithmetic.
//!
//! Every operation returns an interval that contains all results of the
//! real operation applied to members of the operands. For `f64` bounds the
//! directed rounding of [`IntervalNumber`] widens results outward.

use super::{BoundType, Interval, IntervalNumber};
use crate::error::{IntervalError, IntervalResult};
use std::ops::{Add, Mul, Neg, Sub};

type Corner<'a, N> = (&'a N, BoundType, &'a N, BoundType);

/// Extreme product over the four corners, with the kind of the bound. A
/// non-zero extreme is only reached at corners, so it is weak when a corner
/// with two attained bounds produces it; zero is reached whenever an operand
/// contains it.
fn corner_bound<N: IntervalNumber>(
    corners: &[Corner<'_, N>; 4],
    zero_attained: bool,
    round: impl Fn(&N, &N) -> N,
    better: impl Fn(&N, &N) -> bool,
) -> (N, BoundType) {
    let products: Vec<N> = corners.iter().map(|(x, _, y, _)| round(x, y)).collect();
    let mut best = products[0].clone();
    for p in &products[1..] {
        if better(p, &best) {
            best = p.clone();
        }
    }
    let attained = (zero_attained && best.is_zero())
        || corners.iter().zip(&products).any(|((_, kx, _, ky), p)| {
            *p == best && *kx == BoundType::Weak && *ky == BoundType::Weak
        });
    let kind = if attained {
        BoundType::Weak
    } else {
        BoundType::Strict
    };
    (best, kind)
}

/// Kind of a bound reached from two sides of equal magnitude.
fn either_attained(a: BoundType, b: BoundType) -> BoundType {
    if a == BoundType::Weak || b == BoundType::Weak {
        BoundType::Weak
    } else {
        BoundType::Strict
    }
}

/// `x^e` rounded down, for any sign of `x`.
fn pow_signed_down<N: IntervalNumber>(x: &N, e: u32) -> N {
    if *x >= N::zero() || e % 2 == 0 {
        x.abs().pow_down(e)
    } else {
        -x.abs().pow_up(e)
    }
}

/// `x^e` rounded up, for any sign of `x`.
fn pow_signed_up<N: IntervalNumber>(x: &N, e: u32) -> N {
    if *x >= N::zero() || e % 2 == 0 {
        x.abs().pow_up(e)
    } else {
        -x.abs().pow_down(e)
    }
}

impl<N: IntervalNumber> Interval<N> {
    /// Sum; each side takes the weaker of the two kinds.
    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::empty();
        }
        let lower_type = BoundType::weakest(self.lower_type, rhs.lower_type);
        let upper_type = BoundType::weakest(self.upper_type, rhs.upper_type);
        let lower = if lower_type == BoundType::Infinite {
            N::zero()
        } else {
            self.lower.add_down(&rhs.lower)
        };
        let upper = if upper_type == BoundType::Infinite {
            N::zero()
        } else {
            self.upper.add_up(&rhs.upper)
        };
        Self::new(lower, lower_type, upper, upper_type)
    }

    /// Additive inverse: bounds negate and swap together with their kinds.
    pub fn neg(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        Self::new(
            -self.upper.clone(),
            self.upper_type,
            -self.lower.clone(),
            self.lower_type,
        )
    }

    /// Difference, as `self + (-rhs)`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Interval::add(self, &Interval::neg(rhs))
    }

    /// Product.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_empty() || rhs.is_empty() {
            return Self::empty();
        }
        let zero = N::zero();
        let (al, ar, bl, br) = (&self.lower, &self.upper, &rhs.lower, &rhs.upper);
        let al_inf = self.lower_type == BoundType::Infinite;
        let ar_inf = self.upper_type == BoundType::Infinite;
        let bl_inf = rhs.lower_type == BoundType::Infinite;
        let br_inf = rhs.upper_type == BoundType::Infinite;

        let lower_infinite = (al_inf && (*br > zero || br_inf))
            || (ar_inf && (*bl < zero || bl_inf))
            || (bl_inf && (*ar > zero || ar_inf))
            || (br_inf && (*ar < zero || *al < zero || al_inf));
        let upper_infinite = (al_inf && (*br < zero || *bl < zero || bl_inf))
            || (ar_inf && (*bl > zero || *br > zero || br_inf))
            || (bl_inf && (*ar < zero || *al < zero || al_inf))
            || (br_inf && (*al > zero || *ar > zero || ar_inf));

        let zero_attained = self.contains(&zero) || rhs.contains(&zero);
        let corners: [Corner<'_, N>; 4] = [
            (al, self.lower_type, bl, rhs.lower_type),
            (al, self.lower_type, br, rhs.upper_type),
            (ar, self.upper_type, bl, rhs.lower_type),
            (ar, self.upper_type, br, rhs.upper_type),
        ];
        let (lower, lower_type) = if lower_infinite {
            (N::zero(), BoundType::Infinite)
        } else {
            corner_bound(&corners, zero_attained, |x, y| x.mul_down(y), |p, best| p < best)
        };
        let (upper, upper_type) = if upper_infinite {
            (N::zero(), BoundType::Infinite)
        } else {
            corner_bound(&corners, zero_attained, |x, y| x.mul_up(y), |p, best| p > best)
        };
        Self::new(lower, lower_type, upper, upper_type)
    }

    /// Quotient by an interval that does not contain zero.
    pub fn div(&self, rhs: &Self) -> IntervalResult<Self> {
        if rhs.contains(&N::zero()) {
            return Err(IntervalError::DivisionByZero {
                divisor: rhs.to_string(),
            });
        }
        Ok(Interval::mul(self, &rhs.reciprocal().0))
    }

    /// Extended division. A divisor containing zero yields the hull of the
    /// quotient set, or two parts when the quotient set is split around
    /// zero; the parts are returned in increasing order.
    pub fn div_ext(&self, rhs: &Self) -> (Self, Option<Self>) {
        if self.is_empty() || rhs.is_empty() {
            return (Self::empty(), None);
        }
        let zero = N::zero();
        if rhs.is_zero() {
            let result = if self.contains(&zero) {
                Self::unbounded()
            } else {
                Self::empty()
            };
            return (result, None);
        }
        if (self.contains(&zero) && rhs.contains(&zero)) || rhs.is_infinite() {
            return (Self::unbounded(), None);
        }
        let (first, second) = rhs.reciprocal();
        let first = Interval::mul(self, &first);
        match second {
            None => (first, None),
            Some(second) => {
                let second = Interval::mul(self, &second);
                if first == second {
                    (first, None)
                } else if first.lower_type != BoundType::Infinite
                    && (second.lower_type == BoundType::Infinite || second.lower < first.lower)
                {
                    (second, Some(first))
                } else {
                    (first, Some(second))
                }
            }
        }
    }

    /// The set `{1/x : x in self, x != 0}`: one interval, or a negative and
    /// a positive part when `self` contains zero strictly inside.
    ///
    /// `{0}` and the empty interval give the empty interval; the whole line
    /// gives itself.
    pub fn reciprocal(&self) -> (Self, Option<Self>) {
        if self.is_empty() {
            return (Self::empty(), None);
        }
        if self.is_infinite() {
            return (Self::unbounded(), None);
        }
        let zero = N::zero();
        let negative = self.intersect(&Self::from_upper(zero.clone(), BoundType::Strict));
        let positive = self.intersect(&Self::from_lower(zero, BoundType::Strict));
        match (negative.is_empty(), positive.is_empty()) {
            (true, true) => (Self::empty(), None),
            (false, true) => (negative.reciprocal_of_signed(), None),
            (true, false) => (positive.reciprocal_of_signed(), None),
            (false, false) => (
                negative.reciprocal_of_signed(),
                Some(positive.reciprocal_of_signed()),
            ),
        }
    }

    /// Reciprocal of a non-empty interval lying strictly on one side of zero.
    fn reciprocal_of_signed(&self) -> Self {
        let zero = N::zero();
        let one = N::one();
        let lower = match self.upper_type {
            BoundType::Infinite => (zero.clone(), BoundType::Strict),
            _ if self.upper.is_zero() => (zero.clone(), BoundType::Infinite),
            kind => (one.div_down(&self.upper), kind),
        };
        let upper = match self.lower_type {
            BoundType::Infinite => (zero, BoundType::Strict),
            _ if self.lower.is_zero() => (zero, BoundType::Infinite),
            kind => (one.div_up(&self.lower), kind),
        };
        Self::new(lower.0, lower.1, upper.0, upper.1)
    }

    /// `self^e`. Even powers fold the negative part onto the positive one.
    pub fn power(&self, e: u32) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        if e == 0 {
            return Self::point(N::one());
        }
        if e == 1 {
            return self.clone();
        }
        if e % 2 == 1 {
            let lower = match self.lower_type {
                BoundType::Infinite => N::zero(),
                _ => pow_signed_down(&self.lower, e),
            };
            let upper = match self.upper_type {
                BoundType::Infinite => N::zero(),
                _ => pow_signed_up(&self.upper, e),
            };
            return Self::new(lower, self.lower_type, upper, self.upper_type);
        }

        let zero = N::zero();
        match (self.lower_type, self.upper_type) {
            (BoundType::Infinite, BoundType::Infinite) => Self::unbounded(),
            (BoundType::Infinite, ut) => {
                if self.upper > zero || (self.upper.is_zero() && ut == BoundType::Weak) {
                    Self::from_lower(zero, BoundType::Weak)
                } else {
                    Self::from_lower(self.upper.abs().pow_down(e), ut)
                }
            }
            (lt, BoundType::Infinite) => {
                if self.lower < zero || (self.lower.is_zero() && lt == BoundType::Weak) {
                    Self::from_lower(zero, BoundType::Weak)
                } else {
                    Self::from_lower(self.lower.pow_down(e), lt)
                }
            }
            (lt, ut) => {
                let lo_abs = self.lower.abs();
                let hi_abs = self.upper.abs();
                if self.contains(&zero) {
                    let (top, kind) = if lo_abs > hi_abs {
                        (lo_abs, lt)
                    } else if hi_abs > lo_abs {
                        (hi_abs, ut)
                    } else {
                        (hi_abs, either_attained(lt, ut))
                    };
                    Self::new(zero, BoundType::Weak, top.pow_up(e), kind)
                } else if self.lower >= zero {
                    Self::new(lo_abs.pow_down(e), lt, hi_abs.pow_up(e), ut)
                } else {
                    Self::new(hi_abs.pow_down(e), ut, lo_abs.pow_up(e), lt)
                }
            }
        }
    }

    /// Square root of the non-negative part. Empty when every element is
    /// negative.
    pub fn sqrt(&self) -> Self {
        if self.is_empty() || self.is_negative() {
            return Self::empty();
        }
        let zero = N::zero();
        let (lower, lower_type) =
            if self.lower_type == BoundType::Infinite || self.lower < zero {
                (zero, BoundType::Weak)
            } else {
                (self.lower.sqrt_down(), self.lower_type)
            };
        let upper = match self.upper_type {
            BoundType::Infinite => N::zero(),
            _ => self.upper.sqrt_up(),
        };
        Self::new(lower, lower_type, upper, self.upper_type)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        if self.is_semi_positive() {
            return self.clone();
        }
        if self.is_semi_negative() {
            return Interval::neg(self);
        }
        let zero = N::zero();
        if self.is_unbounded() {
            return Self::from_lower(zero, BoundType::Weak);
        }
        let lo_abs = self.lower.abs();
        let hi_abs = self.upper.abs();
        let (top, kind) = if lo_abs > hi_abs {
            (lo_abs, self.lower_type)
        } else if hi_abs > lo_abs {
            (hi_abs, self.upper_type)
        } else {
            (hi_abs, either_attained(self.lower_type, self.upper_type))
        };
        Self::new(zero, BoundType::Weak, top, kind)
    }

    /// Bound-wise floor; the result is closed on its finite sides.
    pub fn floor(&self) -> Self {
        self.round_bounds(N::floor_value)
    }

    /// Bound-wise ceiling; the result is closed on its finite sides.
    pub fn ceil(&self) -> Self {
        self.round_bounds(N::ceil_value)
    }

    fn round_bounds(&self, round: impl Fn(&N) -> N) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let closed = |kind: BoundType| match kind {
            BoundType::Infinite => BoundType::Infinite,
            _ => BoundType::Weak,
        };
        Self::new(
            round(&self.lower),
            closed(self.lower_type),
            round(&self.upper),
            closed(self.upper_type),
        )
    }
}

impl<N: IntervalNumber> Add for Interval<N> {
    type Output = Interval<N>;

    fn add(self, rhs: Self) -> Self::Output {
        Interval::add(&self, &rhs)
    }
}

impl<N: IntervalNumber> Add<&Interval<N>> for &Interval<N> {
    type Output = Interval<N>;

    fn add(self, rhs: &Interval<N>) -> Self::Output {
        Interval::add(self, rhs)
    }
}

impl<N: IntervalNumber> Sub for Interval<N> {
    type Output = Interval<N>;

    fn sub(self, rhs: Self) -> Self::Output {
        Interval::sub(&self, &rhs)
    }
}

impl<N: IntervalNumber> Sub<&Interval<N>> for &Interval<N> {
    type Output = Interval<N>;

    fn sub(self, rhs: &Interval<N>) -> Self::Output {
        Interval::sub(self, rhs)
    }
}

impl<N: IntervalNumber> Mul for Interval<N> {
    type Output = Interval<N>;

    fn mul(self, rhs: Self) -> Self::Output {
        Interval::mul(&self, &rhs)
    }
}

impl<N: IntervalNumber> Mul<&Interval<N>> for &Interval<N> {
    type Output = Interval<N>;

    fn mul(self, rhs: &Interval<N>) -> Self::Output {
        Interval::mul(self, rhs)
    }
}

impl<N: IntervalNumber> Neg for Interval<N> {
    type Output = Interval<N>;

    fn neg(self) -> Self::Output {
        Interval::neg(&self)
    }
}

impl<N: IntervalNumber> Neg for &Interval<N> {
    type Output = Interval<N>;

    fn neg(self) -> Self::Output {
        Interval::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::{DoubleInterval, RationalInterval};
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn closed(l: i64, u: i64) -> RationalInterval {
        RationalInterval::closed(rat(l), rat(u))
    }

    #[test]
    fn test_add_takes_weakest_kind() {
        let a = RationalInterval::new(rat(1), BoundType::Strict, rat(2), BoundType::Weak);
        let b = closed(3, 4);
        let c = &a + &b;
        assert_eq!(
            c,
            RationalInterval::new(rat(4), BoundType::Strict, rat(6), BoundType::Weak)
        );
        let d = &a + &RationalInterval::from_upper(rat(0), BoundType::Weak);
        assert_eq!(d, RationalInterval::from_upper(rat(2), BoundType::Weak));
    }

    #[test]
    fn test_neg_and_sub() {
        let a = RationalInterval::new(rat(1), BoundType::Strict, rat(2), BoundType::Weak);
        assert_eq!(
            -&a,
            RationalInterval::new(rat(-2), BoundType::Weak, rat(-1), BoundType::Strict)
        );
        assert_eq!(&closed(1, 2) - &closed(0, 5), closed(-4, 2));
    }

    #[test]
    fn test_mul_bounded() {
        assert_eq!(&closed(-1, 2) * &closed(3, 4), closed(-4, 8));
        assert_eq!(&closed(-2, -1) * &closed(-3, 5), closed(-10, 6));
        let open = RationalInterval::open(rat(1), rat(2));
        assert_eq!(&open * &open, RationalInterval::open(rat(1), rat(4)));
        let zero_open = RationalInterval::open(rat(0), rat(1));
        assert_eq!(
            &closed(0, 1) * &zero_open,
            RationalInterval::new(rat(0), BoundType::Weak, rat(1), BoundType::Strict)
        );
    }

    #[test]
    fn test_mul_unbounded() {
        let pos_ray = RationalInterval::from_lower(rat(3), BoundType::Weak);
        assert_eq!(
            &closed(1, 2) * &pos_ray,
            RationalInterval::from_lower(rat(3), BoundType::Weak)
        );
        assert_eq!(
            &closed(-2, -1) * &pos_ray,
            RationalInterval::from_upper(rat(-3), BoundType::Weak)
        );
        assert!((&closed(-1, 2) * &pos_ray).is_infinite());
        assert_eq!(
            &closed(0, 2) * &pos_ray,
            RationalInterval::from_lower(rat(0), BoundType::Weak)
        );
        let neg_ray = RationalInterval::from_upper(rat(3), BoundType::Weak);
        assert_eq!(
            &closed(-2, -1) * &neg_ray,
            RationalInterval::from_lower(rat(-6), BoundType::Weak)
        );
        assert_eq!(&closed(0, 0) * &RationalInterval::unbounded(), closed(0, 0));
        assert!((&closed(1, 2) * &RationalInterval::empty()).is_empty());
    }

    #[test]
    fn test_div() {
        let q = closed(1, 2).div(&closed(2, 4)).unwrap();
        assert_eq!(q, RationalInterval::closed(ratio(1, 4), rat(1)));
        let err = closed(1, 2).div(&closed(-1, 1)).unwrap_err();
        assert!(matches!(err, IntervalError::DivisionByZero { .. }));
        let ray = closed(4, 6)
            .div(&RationalInterval::from_lower(rat(2), BoundType::Weak))
            .unwrap();
        assert_eq!(
            ray,
            RationalInterval::new(rat(0), BoundType::Strict, rat(3), BoundType::Weak)
        );
    }

    #[test]
    fn test_reciprocal_cases() {
        let (r, none) = closed(2, 4).reciprocal();
        assert_eq!(r, RationalInterval::closed(ratio(1, 4), ratio(1, 2)));
        assert!(none.is_none());

        let (neg, pos) = closed(-2, 3).reciprocal();
        assert_eq!(neg, RationalInterval::from_upper(ratio(-1, 2), BoundType::Weak));
        assert_eq!(
            pos,
            Some(RationalInterval::from_lower(ratio(1, 3), BoundType::Weak))
        );

        let (touch, none) = closed(0, 2).reciprocal();
        assert_eq!(touch, RationalInterval::from_lower(ratio(1, 2), BoundType::Weak));
        assert!(none.is_none());

        let (r, _) = RationalInterval::from_upper(rat(-2), BoundType::Strict).reciprocal();
        assert_eq!(
            r,
            RationalInterval::new(ratio(-1, 2), BoundType::Strict, rat(0), BoundType::Strict)
        );

        assert!(closed(0, 0).reciprocal().0.is_empty());
        assert!(RationalInterval::unbounded().reciprocal().0.is_infinite());
    }

    #[test]
    fn test_div_ext() {
        let (a, b) = closed(1, 2).div_ext(&closed(-1, 1));
        assert_eq!(a, RationalInterval::from_upper(rat(-1), BoundType::Weak));
        assert_eq!(b, Some(RationalInterval::from_lower(rat(1), BoundType::Weak)));

        let (a, b) = closed(-2, -1).div_ext(&closed(-1, 1));
        assert_eq!(a, RationalInterval::from_upper(rat(-1), BoundType::Weak));
        assert_eq!(b, Some(RationalInterval::from_lower(rat(1), BoundType::Weak)));

        assert!(closed(-1, 1).div_ext(&closed(-1, 1)).0.is_infinite());
        assert!(closed(1, 2).div_ext(&closed(0, 0)).0.is_empty());
        assert!(closed(-1, 2).div_ext(&closed(0, 0)).0.is_infinite());
        assert_eq!(
            closed(2, 4).div_ext(&closed(1, 2)),
            (closed(1, 4), None)
        );
    }

    #[test]
    fn test_power() {
        assert_eq!(closed(-3, 2).power(2), closed(0, 9));
        assert_eq!(closed(-3, -2).power(2), closed(4, 9));
        assert_eq!(closed(-3, 2).power(3), closed(-27, 8));
        assert_eq!(closed(5, 7).power(0), closed(1, 1));
        let half_open = RationalInterval::new(rat(-3), BoundType::Strict, rat(2), BoundType::Weak);
        assert_eq!(
            half_open.power(2),
            RationalInterval::new(rat(0), BoundType::Weak, rat(9), BoundType::Strict)
        );
        assert_eq!(
            RationalInterval::from_upper(rat(-2), BoundType::Weak).power(2),
            RationalInterval::from_lower(rat(4), BoundType::Weak)
        );
        assert_eq!(
            RationalInterval::from_upper(rat(1), BoundType::Weak).power(4),
            RationalInterval::from_lower(rat(0), BoundType::Weak)
        );
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(closed(-4, 9).sqrt(), closed(0, 3));
        assert!(closed(-4, -1).sqrt().is_empty());
        let r = closed(2, 4).sqrt();
        assert_eq!(*r.upper(), rat(2));
        assert!(r.lower() * r.lower() <= rat(2));
        assert_eq!(
            RationalInterval::from_lower(rat(4), BoundType::Strict).sqrt(),
            RationalInterval::from_lower(rat(2), BoundType::Strict)
        );
    }

    #[test]
    fn test_abs() {
        assert_eq!(closed(-3, 2).abs(), closed(0, 3));
        assert_eq!(closed(-3, -2).abs(), closed(2, 3));
        assert_eq!(
            RationalInterval::new(rat(-3), BoundType::Strict, rat(2), BoundType::Weak).abs(),
            RationalInterval::new(rat(0), BoundType::Weak, rat(3), BoundType::Strict)
        );
        assert_eq!(
            RationalInterval::from_upper(rat(-1), BoundType::Weak).abs(),
            RationalInterval::from_lower(rat(1), BoundType::Weak)
        );
        assert_eq!(
            RationalInterval::from_lower(rat(-1), BoundType::Weak).abs(),
            RationalInterval::from_lower(rat(0), BoundType::Weak)
        );
    }

    #[test]
    fn test_floor_ceil() {
        let a = RationalInterval::open(ratio(-3, 2), ratio(5, 2));
        assert_eq!(a.floor(), closed(-2, 2));
        assert_eq!(a.ceil(), closed(-1, 3));
    }

    #[test]
    fn test_double_mul_is_outward() {
        let a = DoubleInterval::closed(0.1, 0.3);
        let b = DoubleInterval::closed(3.0, 7.0);
        let c = &a * &b;
        assert!(*c.lower() <= 0.1 * 3.0);
        assert!(*c.upper() >= 0.3 * 7.0);
        let big = DoubleInterval::closed(f64::MAX, f64::MAX);
        let sum = &big + &big;
        assert_eq!(*sum.lower(), f64::MAX);
        assert_eq!(sum.upper_type(), BoundType::Infinite);
    }
}
