//! Bound arithmetic with directed rounding.
//!
//! [`IntervalNumber`] is the only thing [`Interval`](super::Interval) needs
//! from its bound type: arithmetic that rounds a lower bound down and an
//! upper bound up. Exact rationals never round. For `f64` the operation is
//! performed with round-to-nearest, its exact error is recovered with
//! `two_sum` or a fused multiply-add, and the result steps one ulp outward
//! only when it was inexact.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::fmt;

/// Binary digits kept when bracketing an irrational rational square root.
const SQRT_PRECISION_BITS: usize = 64;

/// Numbers usable as interval bounds.
pub trait IntervalNumber: Signed + Clone + PartialOrd + fmt::Debug + fmt::Display {
    /// `self + rhs`, rounded towards negative infinity.
    fn add_down(&self, rhs: &Self) -> Self;
    /// `self + rhs`, rounded towards positive infinity.
    fn add_up(&self, rhs: &Self) -> Self;

    /// `self - rhs`, rounded towards negative infinity.
    fn sub_down(&self, rhs: &Self) -> Self {
        self.add_down(&-rhs.clone())
    }

    /// `self - rhs`, rounded towards positive infinity.
    fn sub_up(&self, rhs: &Self) -> Self {
        self.add_up(&-rhs.clone())
    }

    /// `self * rhs`, rounded towards negative infinity.
    fn mul_down(&self, rhs: &Self) -> Self;
    /// `self * rhs`, rounded towards positive infinity.
    fn mul_up(&self, rhs: &Self) -> Self;
    /// `self / rhs` for non-zero `rhs`, rounded towards negative infinity.
    fn div_down(&self, rhs: &Self) -> Self;
    /// `self / rhs` for non-zero `rhs`, rounded towards positive infinity.
    fn div_up(&self, rhs: &Self) -> Self;
    /// Square root of a non-negative value, rounded down. Negative input gives zero.
    fn sqrt_down(&self) -> Self;
    /// Square root of a non-negative value, rounded up. Negative input gives zero.
    fn sqrt_up(&self) -> Self;

    /// `self^e` for non-negative `self`, rounded down.
    fn pow_down(&self, e: u32) -> Self {
        let mut acc = Self::one();
        for _ in 0..e {
            acc = acc.mul_down(self);
        }
        acc
    }

    /// `self^e` for non-negative `self`, rounded up.
    fn pow_up(&self, e: u32) -> Self {
        let mut acc = Self::one();
        for _ in 0..e {
            acc = acc.mul_up(self);
        }
        acc
    }

    /// A value between `lo` and `hi` (inclusive), as close to the middle as
    /// the representation allows.
    fn halfway(lo: &Self, hi: &Self) -> Self;

    /// Largest integer not above `self`.
    fn floor_value(&self) -> Self;
    /// Smallest integer not below `self`.
    fn ceil_value(&self) -> Self;

    /// Whether the value is an integer.
    fn is_integral(&self) -> bool {
        self.floor_value() == *self
    }

    /// Convert a small count.
    fn from_count(n: u32) -> Self;

    /// Whether the value is positive infinity.
    fn is_pos_infinity(&self) -> bool {
        false
    }

    /// Whether the value is negative infinity.
    fn is_neg_infinity(&self) -> bool {
        false
    }
}

impl IntervalNumber for BigRational {
    fn add_down(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn add_up(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn sub_down(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn sub_up(&self, rhs: &Self) -> Self {
        self - rhs
    }

    fn mul_down(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn mul_up(&self, rhs: &Self) -> Self {
        self * rhs
    }

    fn div_down(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn div_up(&self, rhs: &Self) -> Self {
        self / rhs
    }

    fn sqrt_down(&self) -> Self {
        rational_sqrt_bounds(self).0
    }

    fn sqrt_up(&self) -> Self {
        rational_sqrt_bounds(self).1
    }

    fn pow_down(&self, e: u32) -> Self {
        num_traits::pow(self.clone(), e as usize)
    }

    fn pow_up(&self, e: u32) -> Self {
        num_traits::pow(self.clone(), e as usize)
    }

    fn halfway(lo: &Self, hi: &Self) -> Self {
        (lo + hi) / BigRational::from_integer(BigInt::from(2))
    }

    fn floor_value(&self) -> Self {
        self.floor()
    }

    fn ceil_value(&self) -> Self {
        self.ceil()
    }

    fn is_integral(&self) -> bool {
        self.is_integer()
    }

    fn from_count(n: u32) -> Self {
        BigRational::from_integer(BigInt::from(n))
    }
}

/// Rational lower and upper bounds on `sqrt(value)`. Exact for perfect
/// squares, otherwise within a relative `2^-64` of each other.
pub fn rational_sqrt_bounds(value: &BigRational) -> (BigRational, BigRational) {
    if !value.is_positive() {
        return (BigRational::zero(), BigRational::zero());
    }
    // sqrt(n/d) = sqrt(n*d)/d
    let denom = value.denom();
    let nd = value.numer() * denom;
    let root = nd.sqrt();
    if &root * &root == nd {
        let exact = BigRational::new(root, denom.clone());
        return (exact.clone(), exact);
    }
    let scaled = (nd << (2 * SQRT_PRECISION_BITS)).sqrt();
    let scale = denom << SQRT_PRECISION_BITS;
    let lower = BigRational::new(scaled.clone(), scale.clone());
    let upper = BigRational::new(scaled + BigInt::one(), scale);
    (lower, upper)
}

/// Smallest `f64` greater than `x`.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Largest `f64` smaller than `x`.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

/// Below this magnitude the error terms of a product or quotient may
/// themselves underflow, so results are always widened.
fn error_free_limit() -> f64 {
    f64::MIN_POSITIVE * 9_007_199_254_740_992.0
}

/// Sum and exact rounding error: `a + b == s + err`.
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

impl IntervalNumber for f64 {
    fn add_down(&self, rhs: &Self) -> Self {
        let (s, err) = two_sum(*self, *rhs);
        if s.is_infinite() {
            return if s > 0.0 && self.is_finite() && rhs.is_finite() {
                f64::MAX
            } else {
                s
            };
        }
        if err < 0.0 { next_down(s) } else { s }
    }

    fn add_up(&self, rhs: &Self) -> Self {
        let (s, err) = two_sum(*self, *rhs);
        if s.is_infinite() {
            return if s < 0.0 && self.is_finite() && rhs.is_finite() {
                -f64::MAX
            } else {
                s
            };
        }
        if err > 0.0 { next_up(s) } else { s }
    }

    fn mul_down(&self, rhs: &Self) -> Self {
        let (a, b) = (*self, *rhs);
        if a == 0.0 || b == 0.0 {
            return 0.0;
        }
        let p = a * b;
        if p.is_infinite() {
            return if p > 0.0 { f64::MAX } else { p };
        }
        if p.abs() < error_free_limit() {
            return next_down(p);
        }
        if a.mul_add(b, -p) < 0.0 {
            next_down(p)
        } else {
            p
        }
    }

    fn mul_up(&self, rhs: &Self) -> Self {
        let (a, b) = (*self, *rhs);
        if a == 0.0 || b == 0.0 {
            return 0.0;
        }
        let p = a * b;
        if p.is_infinite() {
            return if p < 0.0 { -f64::MAX } else { p };
        }
        if p.abs() < error_free_limit() {
            return next_up(p);
        }
        if a.mul_add(b, -p) > 0.0 {
            next_up(p)
        } else {
            p
        }
    }

    fn div_down(&self, rhs: &Self) -> Self {
        let (a, b) = (*self, *rhs);
        if a == 0.0 {
            return 0.0;
        }
        let q = a / b;
        if q.is_infinite() {
            return if q > 0.0 { f64::MAX } else { q };
        }
        if q.abs() < error_free_limit() || a.abs() < error_free_limit() {
            return next_down(q);
        }
        // a = q*b + r exactly; the true quotient is q + r/b.
        let r = (-q).mul_add(b, a);
        if r != 0.0 && (r > 0.0) != (b > 0.0) {
            next_down(q)
        } else {
            q
        }
    }

    fn div_up(&self, rhs: &Self) -> Self {
        let (a, b) = (*self, *rhs);
        if a == 0.0 {
            return 0.0;
        }
        let q = a / b;
        if q.is_infinite() {
            return if q < 0.0 { -f64::MAX } else { q };
        }
        if q.abs() < error_free_limit() || a.abs() < error_free_limit() {
            return next_up(q);
        }
        let r = (-q).mul_add(b, a);
        if r != 0.0 && (r > 0.0) == (b > 0.0) {
            next_up(q)
        } else {
            q
        }
    }

    fn sqrt_down(&self) -> Self {
        if *self <= 0.0 {
            return 0.0;
        }
        let s = self.sqrt();
        if *self < error_free_limit() {
            return next_down(s).max(0.0);
        }
        if (-s).mul_add(s, *self) < 0.0 {
            next_down(s)
        } else {
            s
        }
    }

    fn sqrt_up(&self) -> Self {
        if *self <= 0.0 {
            return 0.0;
        }
        let s = self.sqrt();
        if *self < error_free_limit() {
            return next_up(s);
        }
        if (-s).mul_add(s, *self) > 0.0 {
            next_up(s)
        } else {
            s
        }
    }

    fn halfway(lo: &Self, hi: &Self) -> Self {
        let sum = lo + hi;
        let mid = if sum.is_finite() {
            sum / 2.0
        } else {
            lo / 2.0 + hi / 2.0
        };
        mid.max(*lo).min(*hi)
    }

    fn floor_value(&self) -> Self {
        self.floor()
    }

    fn ceil_value(&self) -> Self {
        self.ceil()
    }

    fn from_count(n: u32) -> Self {
        f64::from(n)
    }

    fn is_pos_infinity(&self) -> bool {
        *self == f64::INFINITY
    }

    fn is_neg_infinity(&self) -> bool {
        *self == f64::NEG_INFINITY
    }
}

/// Nearest `f64` values below and above a rational. Equal when the
/// rational is exactly representable.
pub fn rational_to_f64_bounds(value: &BigRational) -> (f64, f64) {
    let approx = value.to_f64().unwrap_or(if value.is_negative() {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    });
    if approx.is_infinite() {
        return if approx > 0.0 {
            (f64::MAX, f64::INFINITY)
        } else {
            (f64::NEG_INFINITY, -f64::MAX)
        };
    }
    match BigRational::from_float(approx) {
        Some(exact) if exact == *value => (approx, approx),
        Some(exact) if exact < *value => (approx, next_up(approx)),
        _ => (next_down(approx), approx),
    }
}
