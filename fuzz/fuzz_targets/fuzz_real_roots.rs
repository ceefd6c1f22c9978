//! Fuzz target for root isolation
//!
//! Builds small integer polynomials and checks that the isolated roots are
//! sorted, pairwise distinct and actual roots.

#![no_main]

use exacta_math::algebraic::real_roots;
use exacta_math::polynomial::UnivariatePolynomial;
use exacta_math::sign::Sign;
use libfuzzer_sys::fuzz_target;
use std::cmp::Ordering;

fuzz_target!(|coeffs: Vec<i8>| {
    let coeffs: Vec<i64> = coeffs.iter().take(7).map(|&c| i64::from(c)).collect();
    let p = UnivariatePolynomial::from_i64(&coeffs);
    let Ok(mut roots) = real_roots(&p) else {
        assert!(p.is_zero());
        return;
    };
    assert!(roots.len() <= p.degree());
    for root in &roots {
        assert_eq!(root.sgn_of(&p), Sign::Zero);
    }
    for i in 1..roots.len() {
        let (before, after) = roots.split_at_mut(i);
        assert_eq!(before[i - 1].compare(&mut after[0]), Ordering::Less);
    }
});
