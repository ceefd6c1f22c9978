//! Property-based tests for monomials
//!
//! Tests hash-consing and the merge-based exponent operations.

use exacta_math::monomial::Monomial;
use exacta_math::variable::Variable;
use proptest::prelude::*;

/// Strategy for generating small monomials over five variables
fn monomial_strategy() -> impl Strategy<Value = Monomial> {
    prop::collection::vec((0u32..5, 0u32..4), 0..5).prop_map(|powers| {
        Monomial::from_powers(powers.into_iter().map(|(v, e)| (Variable::new(v), e)))
    })
}

proptest! {
    /// Equal exponents give the same canonical instance
    #[test]
    fn monomial_hash_consing(powers in prop::collection::vec((0u32..5, 1u32..4), 0..5)) {
        let pairs: Vec<_> = powers.iter().map(|&(v, e)| (Variable::new(v), e)).collect();
        let a = Monomial::from_powers(pairs.iter().copied());
        let b = Monomial::from_powers(pairs.iter().rev().copied());
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.id(), b.id());
        prop_assert!(a.is_consistent());
    }

    /// Multiplication is commutative and adds total degrees
    #[test]
    fn monomial_mul_commutative(a in monomial_strategy(), b in monomial_strategy()) {
        let ab = &a * &b;
        prop_assert_eq!(&ab, &(&b * &a));
        prop_assert_eq!(ab.total_degree(), a.total_degree() + b.total_degree());
        prop_assert!(ab.is_consistent());
    }

    /// Division undoes multiplication
    #[test]
    fn monomial_divide_product(a in monomial_strategy(), b in monomial_strategy()) {
        let ab = &a * &b;
        prop_assert_eq!(ab.divide(&b), Some(a.clone()));
        prop_assert_eq!(ab.divide(&a), Some(b));
    }

    /// gcd divides both, both divide lcm, and gcd * lcm = a * b
    #[test]
    fn monomial_gcd_lcm(a in monomial_strategy(), b in monomial_strategy()) {
        let g = Monomial::gcd(&a, &b);
        let l = Monomial::lcm(&a, &b);
        prop_assert!(a.divide(&g).is_some());
        prop_assert!(b.divide(&g).is_some());
        prop_assert!(l.divide(&a).is_some());
        prop_assert!(l.divide(&b).is_some());
        prop_assert_eq!(&g * &l, &a * &b);
    }

    /// Multiplication is associative up to the canonical instance
    #[test]
    fn monomial_mul_associative(
        a in monomial_strategy(),
        b in monomial_strategy(),
        c in monomial_strategy(),
    ) {
        let left = &(&a * &b) * &c;
        let right = &a * &(&b * &c);
        prop_assert_eq!(left.id(), right.id());
        prop_assert_eq!(&left, &right);
    }

    /// gcd and lcm of a monomial with itself give it back
    #[test]
    fn monomial_gcd_lcm_idempotent(a in monomial_strategy()) {
        prop_assert_eq!(&Monomial::gcd(&a, &a), &a);
        prop_assert_eq!(&Monomial::lcm(&a, &a), &a);
    }

    /// lcm(a, b) / a and b / gcd(a, b) are the same monomial
    #[test]
    fn monomial_lcm_quotient(a in monomial_strategy(), b in monomial_strategy()) {
        let l = Monomial::lcm(&a, &b);
        let g = Monomial::gcd(&a, &b);
        let by_lcm = l.divide(&a);
        prop_assert!(by_lcm.is_some());
        prop_assert_eq!(by_lcm, b.divide(&g));
        prop_assert_eq!(a.calc_lcm_and_divide_by(&b), a.divide(&g).unwrap());
    }

    /// Exponent lookup agrees with the powers of a product
    #[test]
    fn monomial_exponent_additive(a in monomial_strategy(), b in monomial_strategy(), v in 0u32..5) {
        let var = Variable::new(v);
        prop_assert_eq!((&a * &b).exponent(var), a.exponent(var) + b.exponent(var));
        prop_assert_eq!(a.pow(3).exponent(var), 3 * a.exponent(var));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Concurrent creation of the same exponents yields one instance
    #[test]
    fn monomial_identity_across_threads(powers in prop::collection::vec((0u32..6, 1u32..4), 1..5)) {
        let pairs: Vec<_> = powers.iter().map(|&(v, e)| (Variable::new(v), e)).collect();
        let handles: Vec<Monomial> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| Monomial::from_powers(pairs.iter().copied())))
                .collect();
            workers.into_iter().filter_map(|w| w.join().ok()).collect()
        });
        prop_assert_eq!(handles.len(), 4);
        for h in &handles[1..] {
            prop_assert_eq!(h.id(), handles[0].id());
            prop_assert_eq!(h, &handles[0]);
        }
    }
}
