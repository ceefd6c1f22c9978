//! Property-based tests for real algebraic numbers
//!
//! This module tests:
//! - Root isolation against polynomials with known roots
//! - Refinement preserving the represented root
//! - Comparison against exact rationals and between roots

use exacta_math::algebraic::{RealAlgebraicNumber, RealAlgebraicNumberIR, real_roots};
use exacta_math::interval::RationalInterval;
use exacta_math::polynomial::UnivariatePolynomial;
use exacta_math::sign::Sign;
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;
use std::cmp::Ordering;

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// `(x - r1)(x - r2)...`
fn with_roots(roots: &[i64]) -> UnivariatePolynomial {
    roots.iter().fold(UnivariatePolynomial::one(), |acc, &r| {
        &acc * &UnivariatePolynomial::from_i64(&[-r, 1])
    })
}

/// Strategy for non-square positive integers
fn non_square_strategy() -> impl Strategy<Value = i64> {
    (2i64..200).prop_filter("not a perfect square", |n| {
        let r = (1..=15).find(|k| k * k >= *n).unwrap_or(15);
        r * r != *n
    })
}

#[cfg(test)]
mod isolation_properties {
    use super::*;

    proptest! {
        /// Integer roots are found, each once, in increasing order
        #[test]
        fn integer_roots_found(roots in prop::collection::vec(-6i64..6, 1..5)) {
            let p = with_roots(&roots);
            let mut expected = roots.clone();
            expected.sort_unstable();
            expected.dedup();

            let mut found = real_roots(&p).unwrap();
            prop_assert_eq!(found.len(), expected.len());
            for (root, k) in found.iter_mut().zip(&expected) {
                prop_assert_eq!(root.sgn_of(&p), Sign::Zero);
                let mut exact = RealAlgebraicNumber::from(rat(*k));
                prop_assert_eq!(root.compare(&mut exact), Ordering::Equal);
            }
        }

        /// Square roots are isolated with the right signs and order
        #[test]
        fn square_roots_isolated(n in non_square_strategy()) {
            let p = UnivariatePolynomial::from_i64(&[-n, 0, 1]);
            let mut roots = real_roots(&p).unwrap();
            prop_assert_eq!(roots.len(), 2);
            prop_assert_eq!(roots[0].sgn(), Sign::Negative);
            prop_assert_eq!(roots[1].sgn(), Sign::Positive);
            let (neg, pos) = roots.split_at_mut(1);
            prop_assert_eq!(neg[0].compare(&mut pos[0]), Ordering::Less);
            prop_assert!(!pos[0].is_integral());
        }
    }
}

#[cfg(test)]
mod refinement_properties {
    use super::*;

    proptest! {
        /// Refinement keeps the root inside and strictly shrinks the interval
        #[test]
        fn refinement_keeps_root(n in non_square_strategy(), steps in 1u32..40) {
            let p = UnivariatePolynomial::from_i64(&[-n, 0, 1]);
            let mut ir = RealAlgebraicNumberIR::create(
                p.clone(),
                RationalInterval::open(rat(0), rat(n)),
            )
            .unwrap();
            let start = ir.upper() - ir.lower();
            for _ in 0..steps {
                ir.refine();
            }
            prop_assert_eq!(ir.refinement_count(), steps);
            prop_assert!(ir.upper() - ir.lower() < start);
            prop_assert!(ir.lower() * ir.lower() < rat(n));
            prop_assert!(ir.upper() * ir.upper() > rat(n));
            prop_assert_eq!(p.count_real_roots(ir.interval()), 1);
        }

        /// Comparison with rationals agrees with squaring
        #[test]
        fn compare_with_rationals(n in non_square_strategy(), num in 1i64..300, den in 1i64..20) {
            let p = UnivariatePolynomial::from_i64(&[-n, 0, 1]);
            let mut root = RealAlgebraicNumberIR::create(p, RationalInterval::open(rat(0), rat(n)))
                .unwrap();
            let q = BigRational::new(BigInt::from(num), BigInt::from(den));
            let expected = (&q * &q).cmp(&rat(n)).reverse();
            prop_assert_eq!(root.compare_rational(&q), expected);
            prop_assert!(!root.interval().contains(&q));
        }

        /// Roots of (x - a)(x^2 - n) are strictly ordered by position,
        /// whichever way a pair is compared
        #[test]
        fn ordering_matches_root_order(a in -5i64..6, n in non_square_strategy()) {
            let p = &UnivariatePolynomial::from_i64(&[-a, 1])
                * &UnivariatePolynomial::from_i64(&[-n, 0, 1]);
            let roots: Vec<RealAlgebraicNumberIR> = real_roots(&p)
                .unwrap()
                .into_iter()
                .map(|r| match r {
                    RealAlgebraicNumber::Numeric(v) => RealAlgebraicNumberIR::from_rational(v),
                    RealAlgebraicNumber::Interval(ir) => ir,
                })
                .collect();
            prop_assert_eq!(roots.len(), 3);
            for i in 0..roots.len() {
                for j in 0..roots.len() {
                    let (mut x, mut y) = (roots[i].clone(), roots[j].clone());
                    prop_assert_eq!(x.less_while_unequal(&mut y), i < j);
                    prop_assert_eq!(x.equal(&mut y), i == j);
                    prop_assert_eq!(x.compare(&mut y), i.cmp(&j));
                }
            }
        }

        /// Comparisons between square roots agree with the radicands and
        /// are transitive
        #[test]
        fn compare_is_transitive(
            a in non_square_strategy(),
            b in non_square_strategy(),
            c in non_square_strategy(),
        ) {
            let positive_root = |n: i64| {
                real_roots(&UnivariatePolynomial::from_i64(&[-n, 0, 1]))
                    .unwrap()
                    .pop()
                    .unwrap()
            };
            let (mut ra, mut rb, mut rc) = (positive_root(a), positive_root(b), positive_root(c));
            let ab = ra.compare(&mut rb);
            let bc = rb.compare(&mut rc);
            let ac = ra.compare(&mut rc);
            prop_assert_eq!(ab, a.cmp(&b));
            prop_assert_eq!(bc, b.cmp(&c));
            prop_assert_eq!(ac, a.cmp(&c));
            if ab != Ordering::Greater && bc != Ordering::Greater {
                prop_assert_ne!(ac, Ordering::Greater);
            }
        }
    }
}
