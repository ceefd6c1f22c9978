//! Sturm sequences and real root isolation.
//!
//! For a polynomial `p` the Sturm sequence is `p, p', -rem(p, p'), ...`.
//! The number of sign variations at `a` minus the number at `b` is the
//! number of distinct roots of `p` in `]a, b]`. The Sturm–Tarski variant
//! `p, p'q, ...` instead yields the number of roots where `q > 0` minus the
//! number where `q < 0`.
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu, Pollack, Roy, 2006)

use super::UnivariatePolynomial;
use crate::interval::RationalInterval;
use crate::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::ops::Deref;
use tracing::debug;

/// A (generalized) Sturm sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SturmSequence {
    seq: Vec<UnivariatePolynomial>,
}

impl SturmSequence {
    /// Sturm sequence of `p`. Empty for the zero polynomial.
    pub fn new(p: &UnivariatePolynomial) -> Self {
        Self::chain(p.clone(), p.derivative())
    }

    /// Sturm–Tarski sequence `p, p'·q, ...` used to find the sign of `q` at
    /// the roots of `p`.
    pub fn tarski(p: &UnivariatePolynomial, q: &UnivariatePolynomial) -> Self {
        Self::chain(p.clone(), &p.derivative() * q)
    }

    /// Negated remainder sequence starting from `first, second`.
    fn chain(first: UnivariatePolynomial, second: UnivariatePolynomial) -> Self {
        if first.is_zero() {
            return Self { seq: Vec::new() };
        }
        let mut seq = vec![first];
        let mut next = second;
        while !next.is_zero() {
            let rem = seq
                .last()
                .map(|prev| -prev.rem(&next))
                .unwrap_or_else(UnivariatePolynomial::zero);
            seq.push(next);
            next = rem;
        }
        Self { seq }
    }

    /// Sign changes of the sequence evaluated at `x`; zeros are skipped.
    pub fn sign_variations(&self, x: &BigRational) -> usize {
        count_variations(self.seq.iter().map(|p| p.sign_at(x)))
    }

    /// Sign changes at positive (`true`) or negative infinity.
    pub fn variations_at_infinity(&self, positive: bool) -> usize {
        count_variations(self.seq.iter().map(|p| {
            let lead = Sign::of(&p.leading_coeff());
            if positive || p.degree() % 2 == 0 {
                lead
            } else {
                -lead
            }
        }))
    }

    /// `V(a) - V(b)`: for `a < b` the number of distinct roots of the first
    /// polynomial in `]a, b]`. For the Sturm–Tarski sequence and bounds that
    /// are not roots, the Tarski query over `]a, b[`.
    pub fn count_roots(&self, a: &BigRational, b: &BigRational) -> usize {
        self.sign_variations(a).saturating_sub(self.sign_variations(b))
    }

    /// Signed difference `V(a) - V(b)`.
    pub fn variation_difference(&self, a: &BigRational, b: &BigRational) -> i64 {
        let va = i64::try_from(self.sign_variations(a)).unwrap_or(i64::MAX);
        let vb = i64::try_from(self.sign_variations(b)).unwrap_or(i64::MAX);
        va - vb
    }
}

impl Deref for SturmSequence {
    type Target = [UnivariatePolynomial];

    fn deref(&self) -> &Self::Target {
        &self.seq
    }
}

fn count_variations(signs: impl Iterator<Item = Sign>) -> usize {
    let mut last = Sign::Zero;
    let mut changes = 0;
    for sign in signs.filter(|s| !s.is_zero()) {
        if !last.is_zero() && sign != last {
            changes += 1;
        }
        last = sign;
    }
    changes
}

/// Isolate the distinct real roots of `p`, in increasing order.
///
/// Each root gets an open interval with rational bounds that are not roots
/// and that contains no other root, or a point interval when the midpoint of
/// its isolating interval is the root itself. Constant polynomials have no
/// isolated roots.
pub fn isolate_real_roots(p: &UnivariatePolynomial) -> Vec<RationalInterval> {
    if p.is_constant() {
        return Vec::new();
    }
    let q = p.square_free();
    let sturm = SturmSequence::new(&q);
    let bound = q.cauchy_bound();

    let mut roots = Vec::new();
    let mut pending = vec![(-bound.clone(), bound)];
    while let Some((a, b)) = pending.pop() {
        match sturm.count_roots(&a, &b) {
            0 => {}
            1 => {
                let mid = (&a + &b) / BigRational::from_integer(BigInt::from(2));
                if q.eval(&mid).is_zero() {
                    roots.push(RationalInterval::point(mid));
                } else {
                    roots.push(RationalInterval::open(a, b));
                }
            }
            _ => {
                let m = split_point(&q, &a, &b);
                pending.push((m.clone(), b));
                pending.push((a, m));
            }
        }
    }
    debug!(degree = p.degree(), roots = roots.len(), "isolated real roots");
    roots
}

/// First point `a + (b - a)/j`, `j = 2, 3, ...`, that is not a root of `q`.
/// Terminates since `q` has finitely many roots.
fn split_point(q: &UnivariatePolynomial, a: &BigRational, b: &BigRational) -> BigRational {
    let width = b - a;
    let mut j = BigRational::from_integer(BigInt::from(2));
    loop {
        let m = a + &width / &j;
        if !q.eval(&m).is_zero() {
            return m;
        }
        j += BigRational::one();
    }
}

/// Sign of `q` at the single root of `p` inside `]a, b[`, where neither
/// bound is a root of `p`.
pub(crate) fn sign_at_root(
    p: &UnivariatePolynomial,
    q: &UnivariatePolynomial,
    a: &BigRational,
    b: &BigRational,
) -> Sign {
    let taq = SturmSequence::tarski(p, q).variation_difference(a, b);
    Sign::from_ordering(taq.cmp(&0))
}

/// Whether `x` lies strictly between two rationals in either order.
pub(crate) fn strictly_between(x: &BigRational, a: &BigRational, b: &BigRational) -> bool {
    (a < x && x < b) || (b < x && x < a)
}
