//! Real algebraic numbers.
//!
//! A real algebraic number is a root of a univariate polynomial with
//! rational coefficients. [`RealAlgebraicNumberIR`] represents it by the
//! polynomial and an open isolating interval that contains no other root;
//! comparisons and sign queries refine that interval on demand but never
//! change which root is represented. [`RealAlgebraicNumber`] adds the exact
//! rational case behind one interface.
//!
//! ## Representation
//!
//! ```text
//! α = (p(x), ]a, b[) where p(α) = 0 and p has no other root in ]a, b[
//! ```
//!
//! ## References
//!
//! - "Algorithms in Real Algebraic Geometry" (Basu et al., 2006)

mod ir;
mod number;

pub use ir::RealAlgebraicNumberIR;
pub use number::RealAlgebraicNumber;

use crate::error::{AlgebraicError, AlgebraicResult};
use crate::polynomial::{SturmSequence, UnivariatePolynomial, isolate_real_roots};

/// How `refine` picks the point that splits the isolating interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefinementStrategy {
    /// Split at the midpoint; the width at least halves.
    #[default]
    Bisection,
    /// Split at an integer inside the interval when there is one, otherwise
    /// at the midpoint. Keeps the bounds small at the cost of slower
    /// shrinking.
    Sample,
}

/// Settings for real algebraic numbers.
#[derive(Debug, Clone, Default)]
pub struct RealAlgebraicNumberSettings {
    /// Strategy used by `refine`.
    pub strategy: RefinementStrategy,
    /// Skip moving the isolating interval off zero at construction.
    pub skip_normalization: bool,
}

/// All distinct real roots of `p`, in increasing order.
///
/// Roots found exactly during isolation are returned as numeric values,
/// the others as interval representations of the square-free part of `p`.
pub fn real_roots(p: &UnivariatePolynomial) -> AlgebraicResult<Vec<RealAlgebraicNumber>> {
    if p.is_zero() {
        return Err(AlgebraicError::ZeroPolynomial);
    }
    let square_free = p.square_free();
    let sturm = SturmSequence::new(&square_free);
    isolate_real_roots(&square_free)
        .into_iter()
        .map(|interval| {
            if interval.is_point_interval() {
                Ok(RealAlgebraicNumber::Numeric(interval.lower().clone()))
            } else {
                RealAlgebraicNumberIR::create_with(
                    square_free.clone(),
                    interval,
                    Some(sturm.clone()),
                    true,
                    true,
                )
                .map(RealAlgebraicNumber::from)
            }
        })
        .collect()
}
