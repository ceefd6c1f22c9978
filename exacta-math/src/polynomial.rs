//! Dense univariate polynomials over the rationals.
//!
//! [`UnivariatePolynomial`] stores its coefficients in increasing degree
//! order with trailing zeros trimmed, so the zero polynomial has no
//! coefficients at all. It provides what real root handling needs: Horner
//! evaluation, Euclidean division, GCD, square-free part and root counting
//! over intervals through [`SturmSequence`].

pub mod sturm;

pub use sturm::{SturmSequence, isolate_real_roots};

use crate::interval::{BoundType, RationalInterval};
use crate::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A univariate polynomial with rational coefficients.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct UnivariatePolynomial {
    /// Coefficients in increasing degree order: a_0 + a_1*x + a_2*x^2 + ...
    coeffs: Vec<BigRational>,
}

impl UnivariatePolynomial {
    /// Create a polynomial from coefficients in increasing degree order.
    pub fn new(coeffs: Vec<BigRational>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create a polynomial from integer coefficients in increasing degree order.
    pub fn from_i64(coeffs: &[i64]) -> Self {
        Self::new(
            coeffs
                .iter()
                .map(|&c| BigRational::from_integer(BigInt::from(c)))
                .collect(),
        )
    }

    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial 1.
    #[inline]
    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    /// A constant polynomial.
    pub fn constant(c: BigRational) -> Self {
        Self::new(vec![c])
    }

    /// The polynomial `x`.
    pub fn x() -> Self {
        Self::new(vec![BigRational::zero(), BigRational::one()])
    }

    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(Zero::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Coefficients in increasing degree order.
    #[inline]
    pub fn coeffs(&self) -> &[BigRational] {
        &self.coeffs
    }

    /// Whether this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Whether this is a constant (including zero).
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coeffs.len() <= 1
    }

    /// Degree; zero for constants and for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Leading coefficient; zero for the zero polynomial.
    pub fn leading_coeff(&self) -> BigRational {
        self.coeffs.last().cloned().unwrap_or_else(BigRational::zero)
    }

    /// Evaluate at a point (Horner's method).
    pub fn eval(&self, x: &BigRational) -> BigRational {
        let mut result = BigRational::zero();
        for coeff in self.coeffs.iter().rev() {
            result = result * x + coeff;
        }
        result
    }

    /// Sign of the value at a point.
    pub fn sign_at(&self, x: &BigRational) -> Sign {
        Sign::of(&self.eval(x))
    }

    /// Formal derivative.
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| c * BigRational::from_integer(BigInt::from(i)))
                .collect(),
        )
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
        }
    }

    /// Sum.
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| match (self.coeffs.get(i), other.coeffs.get(i)) {
                (Some(a), Some(b)) => a + b,
                (Some(a), None) => a.clone(),
                (None, Some(b)) => b.clone(),
                (None, None) => BigRational::zero(),
            })
            .collect();
        Self::new(coeffs)
    }

    /// Difference.
    pub fn sub(&self, other: &Self) -> Self {
        UnivariatePolynomial::add(self, &UnivariatePolynomial::neg(other))
    }

    /// Product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![BigRational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self::new(coeffs)
    }

    /// Multiply every coefficient by `c`.
    pub fn scale(&self, c: &BigRational) -> Self {
        Self::new(self.coeffs.iter().map(|a| a * c).collect())
    }

    /// Divide by the leading coefficient. The zero polynomial stays zero.
    pub fn monic(&self) -> Self {
        match self.coeffs.last() {
            Some(lead) if !lead.is_one() => self.scale(&lead.recip()),
            _ => self.clone(),
        }
    }

    /// Euclidean division: `(q, r)` with `self = q * divisor + r` and
    /// `deg r < deg divisor`. Dividing by zero gives `(0, self)`.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        if divisor.is_zero() || self.coeffs.len() < divisor.coeffs.len() {
            return (Self::zero(), self.clone());
        }
        let divisor_deg = divisor.degree();
        let divisor_lead = divisor.leading_coeff();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![BigRational::zero(); self.coeffs.len() - divisor_deg];

        for k in (0..quot.len()).rev() {
            let factor = &rem[k + divisor_deg] / &divisor_lead;
            if factor.is_zero() {
                continue;
            }
            for (i, d) in divisor.coeffs.iter().enumerate() {
                rem[k + i] -= &factor * d;
            }
            quot[k] = factor;
        }
        rem.truncate(divisor_deg);
        (Self::new(quot), Self::new(rem))
    }

    /// Remainder of Euclidean division.
    pub fn rem(&self, divisor: &Self) -> Self {
        self.div_rem(divisor).1
    }

    /// Monic greatest common divisor; `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }
        a.monic()
    }

    /// Square-free part `p / gcd(p, p')`, made monic.
    pub fn square_free(&self) -> Self {
        if self.is_constant() {
            return self.monic();
        }
        let g = self.gcd(&self.derivative());
        self.div_rem(&g).0.monic()
    }

    /// The polynomial `p(-x)`.
    pub fn negate_var(&self) -> Self {
        Self::new(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, c)| if i % 2 == 1 { -c } else { c.clone() })
                .collect(),
        )
    }

    /// Cauchy bound `1 + max |a_i / a_n|`: every root has a strictly smaller
    /// absolute value.
    pub fn cauchy_bound(&self) -> BigRational {
        let lead = self.leading_coeff().abs();
        let mut bound = BigRational::zero();
        if !lead.is_zero() {
            for c in &self.coeffs[..self.degree()] {
                let ratio = c.abs() / &lead;
                if ratio > bound {
                    bound = ratio;
                }
            }
        }
        bound + BigRational::one()
    }

    /// Number of distinct real roots inside an interval, honouring its
    /// bound kinds. The zero polynomial is reported as having none.
    pub fn count_real_roots(&self, interval: &RationalInterval) -> usize {
        if self.is_zero() || interval.is_empty() {
            return 0;
        }
        if interval.is_point_interval() {
            return usize::from(self.eval(interval.lower()).is_zero());
        }
        let square_free = self.square_free();
        let sturm = SturmSequence::new(&square_free);

        let at_lower = match interval.lower_type() {
            BoundType::Infinite => sturm.variations_at_infinity(false),
            _ => sturm.sign_variations(interval.lower()),
        };
        let at_upper = match interval.upper_type() {
            BoundType::Infinite => sturm.variations_at_infinity(true),
            _ => sturm.sign_variations(interval.upper()),
        };
        // Variations count the roots in ]lower, upper].
        let mut count = at_lower.saturating_sub(at_upper);
        if interval.lower_type() == BoundType::Weak && square_free.eval(interval.lower()).is_zero()
        {
            count += 1;
        }
        if interval.upper_type() == BoundType::Strict
            && square_free.eval(interval.upper()).is_zero()
        {
            count = count.saturating_sub(1);
        }
        count
    }
}

impl fmt::Debug for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for UnivariatePolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (deg, c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let magnitude = c.abs();
            if deg == 0 {
                write!(f, "{magnitude}")?;
                continue;
            }
            if !magnitude.is_one() {
                write!(f, "{magnitude}*")?;
            }
            if deg == 1 {
                write!(f, "x")?;
            } else {
                write!(f, "x^{deg}")?;
            }
        }
        Ok(())
    }
}

impl Neg for UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn neg(self) -> Self::Output {
        UnivariatePolynomial::neg(&self)
    }
}

impl Neg for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn neg(self) -> Self::Output {
        UnivariatePolynomial::neg(self)
    }
}

impl Add for UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn add(self, rhs: Self) -> Self::Output {
        UnivariatePolynomial::add(&self, &rhs)
    }
}

impl Add<&UnivariatePolynomial> for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn add(self, rhs: &UnivariatePolynomial) -> Self::Output {
        UnivariatePolynomial::add(self, rhs)
    }
}

impl Sub for UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        UnivariatePolynomial::sub(&self, &rhs)
    }
}

impl Sub<&UnivariatePolynomial> for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn sub(self, rhs: &UnivariatePolynomial) -> Self::Output {
        UnivariatePolynomial::sub(self, rhs)
    }
}

impl Mul for UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        UnivariatePolynomial::mul(&self, &rhs)
    }
}

impl Mul<&UnivariatePolynomial> for &UnivariatePolynomial {
    type Output = UnivariatePolynomial;

    fn mul(self, rhs: &UnivariatePolynomial) -> Self::Output {
        UnivariatePolynomial::mul(self, rhs)
    }
}
