//! Exacta Math - exact and enclosing arithmetic for nonlinear reasoning
//!
//! This crate provides three building blocks for nonlinear real arithmetic:
//! - [`Monomial`]: canonical, hash-consed products of variable powers
//! - [`Interval`]: sound interval arithmetic over rationals and `f64`, with
//!   strict, weak and infinite bounds and outward rounding
//! - [`RealAlgebraicNumber`]: real roots of rational polynomials, isolated
//!   by Sturm sequences and refined on demand
//!
//! # Examples
//!
//! ## Monomials
//!
//! ```
//! use exacta_math::monomial::Monomial;
//! use exacta_math::variable::Variable;
//!
//! let x = Variable::new(0);
//! let m = Monomial::from_powers([(x, 2)]);
//! assert_eq!(m.total_degree(), 2);
//! assert_eq!(m.id(), Monomial::from_powers([(x, 2)]).id());
//! ```
//!
//! ## Interval arithmetic
//!
//! ```
//! use exacta_math::interval::{BoundType, DoubleInterval};
//!
//! let a = DoubleInterval::closed(1.0, 2.0);
//! let b = DoubleInterval::new(-1.0, BoundType::Strict, 3.0, BoundType::Weak);
//! let sum = &a + &b;
//! assert!(sum.contains(&0.5));
//! assert!(!sum.contains(&0.0));
//! ```
//!
//! ## Real algebraic numbers
//!
//! ```
//! use exacta_math::algebraic::real_roots;
//! use exacta_math::polynomial::UnivariatePolynomial;
//! use exacta_math::sign::Sign;
//!
//! // x^2 - 2
//! let p = UnivariatePolynomial::from_i64(&[-2, 0, 1]);
//! let roots = real_roots(&p).unwrap();
//! assert_eq!(roots.len(), 2);
//! assert_eq!(roots[1].sgn(), Sign::Positive);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod algebraic;
pub mod error;
pub mod interval;
pub mod monomial;
pub mod polynomial;
pub mod sign;
pub mod term;
pub mod variable;

pub use algebraic::{RealAlgebraicNumber, RealAlgebraicNumberIR, real_roots};
pub use error::{AlgebraicError, AlgebraicResult, IntervalError, IntervalResult};
pub use interval::{BoundType, DoubleInterval, Interval, RationalInterval};
pub use monomial::{Monomial, MonomialPool};
pub use polynomial::UnivariatePolynomial;
pub use sign::Sign;
pub use term::Term;
pub use variable::Variable;
