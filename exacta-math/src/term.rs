//! Terms: a rational coefficient times a monomial.

use crate::monomial::Monomial;
use crate::variable::Variable;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Mul, Neg};

/// A term is a coefficient multiplied by a monomial.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Term {
    coeff: BigRational,
    monomial: Monomial,
}

impl Term {
    /// Create a new term.
    #[inline]
    pub fn new(coeff: BigRational, monomial: Monomial) -> Self {
        Self { coeff, monomial }
    }

    /// Create a constant term.
    #[inline]
    pub fn constant(coeff: BigRational) -> Self {
        Self::new(coeff, Monomial::one())
    }

    /// Create a term `1 * var`.
    #[inline]
    pub fn from_var(var: Variable) -> Self {
        Self::new(BigRational::one(), Monomial::from_var(var))
    }

    /// The coefficient.
    #[inline]
    pub fn coeff(&self) -> &BigRational {
        &self.coeff
    }

    /// The monomial.
    #[inline]
    pub fn monomial(&self) -> &Monomial {
        &self.monomial
    }

    /// Total degree of the monomial; zero for constants.
    #[inline]
    pub fn total_degree(&self) -> u32 {
        self.monomial.total_degree()
    }

    /// Check if the coefficient is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    /// Check if this is a constant term.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.monomial.is_constant()
    }

    /// Check if this is `c * v` for a single variable `v`.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.monomial.is_linear()
    }

    /// Whether the term is a square: non-negative coefficient with a
    /// rational square root, times a square monomial.
    pub fn is_square(&self) -> bool {
        if self.coeff.is_negative() || !self.monomial.is_square() {
            return false;
        }
        let numer = self.coeff.numer();
        let denom = self.coeff.denom();
        let sn = numer.sqrt();
        let sd = denom.sqrt();
        &sn * &sn == *numer && &sd * &sd == *denom
    }

    /// The single variable of the term.
    ///
    /// Requesting it on a term with several variables is a caller bug and
    /// trips a debug assertion; release builds return `None`.
    pub fn single_variable(&self) -> Option<Variable> {
        debug_assert!(
            self.monomial.num_variables() <= 1,
            "single_variable on multivariate term {self}"
        );
        self.monomial.single_variable()
    }

    /// Divide by a monomial; `None` unless it divides exactly.
    pub fn divide_by_monomial(&self, m: &Monomial) -> Option<Term> {
        self.monomial
            .divide(m)
            .map(|monomial| Term::new(self.coeff.clone(), monomial))
    }

    /// Divide by a variable; `None` if it does not occur.
    pub fn divide_by_var(&self, var: Variable) -> Option<Term> {
        self.monomial
            .divide_var(var)
            .map(|monomial| Term::new(self.coeff.clone(), monomial))
    }

    /// Divide by another term. `None` for a zero divisor or when the
    /// monomials do not divide.
    pub fn divide(&self, other: &Term) -> Option<Term> {
        if other.is_zero() {
            return None;
        }
        let monomial = self.monomial.divide(&other.monomial)?;
        Some(Term::new(&self.coeff / &other.coeff, monomial))
    }

    /// `lcm(self, m) / m` on the monomial, keeping the coefficient.
    pub fn calc_lcm_and_divide_by(&self, m: &Monomial) -> Term {
        Term::new(self.coeff.clone(), self.monomial.calc_lcm_and_divide_by(m))
    }

    /// Raise to a power.
    pub fn pow(&self, k: u32) -> Term {
        let coeff = num_traits::pow(self.coeff.clone(), k as usize);
        Term::new(coeff, self.monomial.pow(k))
    }

    /// Evaluate with every variable mapped to a rational.
    pub fn evaluate(&self, assignment: impl Fn(Variable) -> BigRational) -> BigRational {
        let mut value = self.coeff.clone();
        for vp in self.monomial.exponents() {
            value *= num_traits::pow(assignment(vp.var), vp.exp as usize);
        }
        value
    }
}

impl Mul for &Term {
    type Output = Term;

    fn mul(self, rhs: &Term) -> Term {
        Term::new(&self.coeff * &rhs.coeff, &self.monomial * &rhs.monomial)
    }
}

impl Mul<&Monomial> for &Term {
    type Output = Term;

    fn mul(self, rhs: &Monomial) -> Term {
        Term::new(self.coeff.clone(), &self.monomial * rhs)
    }
}

impl Neg for &Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(-&self.coeff, self.monomial.clone())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.monomial.is_constant() {
            write!(f, "{}", self.coeff)
        } else if self.coeff.is_one() {
            write!(f, "{}", self.monomial)
        } else if self.coeff == -BigRational::one() {
            write!(f, "-{}", self.monomial)
        } else {
            write!(f, "{}*{}", self.coeff, self.monomial)
        }
    }
}
