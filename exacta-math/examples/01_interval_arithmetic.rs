//! # Interval Arithmetic Example
//!
//! This example demonstrates sound interval arithmetic.
//! It covers:
//! - Strict, weak and infinite bounds
//! - Arithmetic over exact rationals
//! - Outward-rounded `f64` intervals and elementary functions
//! - Extended division by intervals containing zero
//!
//! ## Applications
//! - Bound propagation in nonlinear arithmetic
//! - Sign determination of polynomials over boxes
//!
//! ## See Also
//! - [`Interval`](exacta_math::interval::Interval)

use exacta_math::interval::{BoundType, DoubleInterval, RationalInterval};
use num_bigint::BigInt;
use num_rational::BigRational;

fn ratio(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn main() {
    println!("=== Exacta Math: Interval Arithmetic ===\n");

    let a = RationalInterval::new(ratio(2, 1), BoundType::Strict, ratio(3, 1), BoundType::Weak);
    let b = RationalInterval::closed(ratio(-1, 2), ratio(1, 3));
    println!("a = {a}");
    println!("b = {b}");
    println!("a + b = {}", &a + &b);
    println!("a * b = {}", &a * &b);
    println!("a^2 = {}", a.power(2));
    println!("a ∩ [5/2, 4] = {}", a.intersect(&RationalInterval::closed(ratio(5, 2), ratio(4, 1))));

    match a.div(&b) {
        Ok(q) => println!("a / b = {q}"),
        Err(e) => println!("a / b: {e}"),
    }
    let (left, right) = a.div_ext(&b);
    match right {
        Some(right) => println!("a / b (extended) = {left} ∪ {right}"),
        None => println!("a / b (extended) = {left}"),
    }

    println!("\n--- f64 intervals ---");
    let third = DoubleInterval::from(&RationalInterval::point(ratio(1, 3)));
    println!("1/3 enclosed in {third}");
    let x = DoubleInterval::closed(0.5, 2.0);
    println!("x = {x}");
    println!("exp(x) = {}", x.exp());
    println!("log(x) = {}", x.log());
    println!("sin(x) = {}", x.sin());
    println!("cos(x) = {}", x.cos());
    println!("sqrt(x) = {}", x.sqrt());
}
