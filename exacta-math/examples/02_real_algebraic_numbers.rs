//! # Real Algebraic Numbers Example
//!
//! This example demonstrates exact real roots of rational polynomials.
//! It covers:
//! - Root isolation with Sturm sequences
//! - Refinement of isolating intervals
//! - Exact sign determination and comparison
//!
//! ## See Also
//! - [`RealAlgebraicNumberIR`](exacta_math::algebraic::RealAlgebraicNumberIR)

use exacta_math::algebraic::{RealAlgebraicNumber, RealAlgebraicNumberIR, real_roots};
use exacta_math::interval::RationalInterval;
use exacta_math::polynomial::UnivariatePolynomial;
use num_bigint::BigInt;
use num_rational::BigRational;

fn main() {
    println!("=== Exacta Math: Real Algebraic Numbers ===\n");

    // x^3 - 2x
    let p = UnivariatePolynomial::from_i64(&[0, -2, 0, 1]);
    println!("p = {p}");
    match real_roots(&p) {
        Ok(roots) => {
            for root in &roots {
                println!("  root {root} (sign {})", root.sgn());
            }
        }
        Err(e) => println!("  error: {e}"),
    }

    println!("\n--- Refining sqrt(2) ---");
    let q = UnivariatePolynomial::from_i64(&[-2, 0, 1]);
    let one = BigRational::from_integer(BigInt::from(1));
    let two = BigRational::from_integer(BigInt::from(2));
    let mut sqrt2 = match RealAlgebraicNumberIR::create(q, RationalInterval::open(one, two)) {
        Ok(n) => n,
        Err(e) => {
            println!("  error: {e}");
            return;
        }
    };
    for _ in 0..10 {
        sqrt2.refine();
    }
    println!("after {} steps: {}", sqrt2.refinement_count(), sqrt2.interval());

    println!("\n--- Comparison ---");
    let mut a = RealAlgebraicNumber::from(sqrt2);
    let mut b = RealAlgebraicNumber::from(BigRational::new(BigInt::from(99), BigInt::from(70)));
    println!("sqrt(2) vs 99/70: {:?}", a.compare(&mut b));
    println!("sqrt(2) is integral: {}", a.is_integral());
}
