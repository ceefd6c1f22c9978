//! Property-based tests for interval arithmetic
//!
//! Every operation must enclose the pointwise results of its operands:
//! for `x ∈ A` and `y ∈ B`, `x ∘ y ∈ A ∘ B`.

use exacta_math::interval::{BoundType, DoubleInterval, RationalInterval};
use num_bigint::BigInt;
use num_rational::BigRational;
use proptest::prelude::*;

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Strategy for finite bound kinds
fn bound_type_strategy() -> impl Strategy<Value = BoundType> {
    prop_oneof![Just(BoundType::Strict), Just(BoundType::Weak)]
}

/// Strategy for non-empty bounded rational intervals with small bounds
fn rational_interval_strategy() -> impl Strategy<Value = RationalInterval> {
    (-20i64..20, 1i64..10, bound_type_strategy(), bound_type_strategy()).prop_map(
        |(lower, width, lower_type, upper_type)| {
            RationalInterval::new(rat(lower), lower_type, rat(lower + width), upper_type)
        },
    )
}

/// Strategy for intervals of every shape over a few bound values, so that
/// equal bounds of different kinds come up often
fn any_rational_interval_strategy() -> impl Strategy<Value = RationalInterval> {
    let kind = || {
        prop_oneof![
            Just(BoundType::Strict),
            Just(BoundType::Weak),
            Just(BoundType::Infinite)
        ]
    };
    (-2i64..3, kind(), -2i64..3, kind()).prop_map(|(lower, lower_type, upper, upper_type)| {
        RationalInterval::new(rat(lower), lower_type, rat(upper), upper_type)
    })
}

/// A point inside `i`, `t` selecting the position between the bounds
fn rational_point(i: &RationalInterval, t: (i64, i64)) -> BigRational {
    let (num, den) = t;
    let frac = BigRational::new(BigInt::from(num), BigInt::from(den));
    i.lower() + (i.upper() - i.lower()) * frac
}

/// Strategy for interior positions `num/den` in `]0, 1[`
fn position_strategy() -> impl Strategy<Value = (i64, i64)> {
    (2i64..17).prop_flat_map(|den| (1..den, Just(den)))
}

/// Strategy for bounded double intervals
fn double_interval_strategy() -> impl Strategy<Value = DoubleInterval> {
    (-1.0e6f64..1.0e6, 0.0f64..1.0e3).prop_map(|(lower, width)| {
        DoubleInterval::closed(lower, lower + width)
    })
}

/// Point `k` of `n + 1` evenly spread points of a closed double interval,
/// clamped to its bounds
fn double_point(i: &DoubleInterval, k: u32, n: u32) -> f64 {
    let (l, u) = (*i.lower(), *i.upper());
    let t = f64::from(k) / f64::from(n);
    (l + (u - l) * t).clamp(l, u)
}

/// Number of sampled point pairs per interval pair
const SAMPLES: u32 = 1_000;

/// Point pairs `(x_k, y_k)`; the second index is scrambled so that the
/// pairs do not all lie on the diagonal
fn sample_pairs(a: &DoubleInterval, b: &DoubleInterval) -> impl Iterator<Item = (f64, f64)> {
    let (a, b) = (a.clone(), b.clone());
    (0..SAMPLES).map(move |k| {
        let j = (k * 617) % SAMPLES;
        (double_point(&a, k, SAMPLES - 1), double_point(&b, j, SAMPLES - 1))
    })
}

#[cfg(test)]
mod rational_interval_properties {
    use super::*;

    proptest! {
        /// Sum, difference and product enclose pointwise results
        #[test]
        fn rational_arith_sound(
            a in rational_interval_strategy(),
            b in rational_interval_strategy(),
            s in position_strategy(),
            t in position_strategy()
        ) {
            let x = rational_point(&a, s);
            let y = rational_point(&b, t);
            prop_assert!(a.contains(&x));
            prop_assert!(b.contains(&y));
            prop_assert!((&a + &b).contains(&(&x + &y)));
            prop_assert!((&a - &b).contains(&(&x - &y)));
            prop_assert!((&a * &b).contains(&(&x * &y)));
            prop_assert!((-&a).contains(&-x.clone()));
            prop_assert!(a.power(3).contains(&(&x * &x * &x)));
            prop_assert!(a.abs().contains(&num_traits::Signed::abs(&x)));
        }

        /// Division by an interval without zero encloses quotients
        #[test]
        fn rational_div_sound(
            a in rational_interval_strategy(),
            lower in 1i64..10,
            width in 1i64..10,
            negative in any::<bool>(),
            s in position_strategy(),
            t in position_strategy()
        ) {
            let b = if negative {
                RationalInterval::closed(rat(-lower - width), rat(-lower))
            } else {
                RationalInterval::closed(rat(lower), rat(lower + width))
            };
            let x = rational_point(&a, s);
            let y = rational_point(&b, t);
            let q = a.div(&b).unwrap();
            prop_assert!(q.contains(&(&x / &y)));
        }

        /// Intersection membership is the conjunction of memberships
        #[test]
        fn rational_intersection_membership(
            a in rational_interval_strategy(),
            b in rational_interval_strategy(),
            num in -60i64..60
        ) {
            let x = BigRational::new(BigInt::from(num), BigInt::from(2));
            let both = a.contains(&x) && b.contains(&x);
            prop_assert_eq!(a.intersect(&b).contains(&x), both);
            if both {
                prop_assert!(a.intersects_with(&b));
            }
            if a.contains(&x) || b.contains(&x) {
                prop_assert!(a.hull(&b).contains(&x));
            }
        }

        /// Mutual containment only holds between equal intervals
        #[test]
        fn rational_containment_antisymmetric(
            a in any_rational_interval_strategy(),
            b in any_rational_interval_strategy(),
        ) {
            prop_assert!(a.contains_interval(&a));
            if a.contains_interval(&b) && b.contains_interval(&a) {
                prop_assert_eq!(&a, &b);
            }
            if a.contains_interval(&b) {
                prop_assert_eq!(&a.intersect(&b), &b);
            }
        }

        /// Splitting covers the interval with disjoint halves
        #[test]
        fn rational_split_covers(a in rational_interval_strategy(), s in position_strategy()) {
            let x = rational_point(&a, s);
            let (left, right) = a.split();
            prop_assert!(left.contains(&x) != right.contains(&x));
            prop_assert!(left.is_subset(&a));
            prop_assert!(right.is_subset(&a));
        }

        /// The integral part holds exactly the integers of the interval
        #[test]
        fn rational_integral_part(a in rational_interval_strategy(), k in -25i64..35) {
            prop_assert_eq!(a.integral_part().contains(&rat(k)), a.contains(&rat(k)));
        }
    }
}

#[cfg(test)]
mod double_interval_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10_000))]

        /// f64 arithmetic encloses every pointwise result
        #[test]
        fn double_arith_sound(a in double_interval_strategy(), b in double_interval_strategy()) {
            let sum = &a + &b;
            let diff = &a - &b;
            let product = &a * &b;
            for (x, y) in sample_pairs(&a, &b) {
                prop_assert!(sum.contains(&(x + y)), "{} + {} not in {}", x, y, sum);
                prop_assert!(diff.contains(&(x - y)), "{} - {} not in {}", x, y, diff);
                prop_assert!(product.contains(&(x * y)), "{} * {} not in {}", x, y, product);
            }
        }

        /// f64 division by an interval without zero encloses quotients
        #[test]
        fn double_div_sound(
            a in double_interval_strategy(),
            lower in 0.5f64..100.0,
            width in 0.0f64..100.0,
            negative in any::<bool>()
        ) {
            let b = if negative {
                DoubleInterval::closed(-lower - width, -lower)
            } else {
                DoubleInterval::closed(lower, lower + width)
            };
            let q = a.div(&b).unwrap();
            for (x, y) in sample_pairs(&a, &b) {
                prop_assert!(q.contains(&(x / y)), "{} / {} not in {}", x, y, q);
            }
        }

        /// Enclosing a rational interval in doubles loses no point
        #[test]
        fn rational_to_double_encloses(a in rational_interval_strategy(), s in position_strategy()) {
            let x = rational_point(&a, s);
            let d = DoubleInterval::from(&a);
            let (lo, hi) = exacta_math::interval::rational_to_f64_bounds(&x);
            prop_assert!(d.contains(&lo) || d.contains(&hi));
            prop_assert!(*d.lower() <= lo && hi <= *d.upper());
        }
    }
}
