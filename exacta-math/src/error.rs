//! Error types for interval arithmetic and real algebraic numbers.

use thiserror::Error;

/// Errors raised by interval operations with a restricted domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The divisor interval contains zero.
    #[error("division by interval {divisor} containing zero")]
    DivisionByZero {
        /// Printed divisor.
        divisor: String,
    },
}

/// Errors raised while constructing real algebraic numbers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraicError {
    /// The defining polynomial is identically zero.
    #[error("defining polynomial is zero")]
    ZeroPolynomial,

    /// The interval is neither open with finite bounds nor a point.
    #[error("isolating interval {0} must be open and bounded, or a point")]
    InvalidInterval(String),

    /// A point interval that is not a root of the polynomial.
    #[error("{value} is not a root of {polynomial}")]
    NotARoot {
        /// Point value.
        value: String,
        /// Defining polynomial.
        polynomial: String,
    },

    /// One of the interval bounds is itself a root.
    #[error("bound of {interval} is a root of {polynomial}")]
    RootOnBoundary {
        /// Offending interval.
        interval: String,
        /// Defining polynomial.
        polynomial: String,
    },

    /// The interval does not contain exactly one root.
    #[error("interval {interval} contains {roots} roots of {polynomial}, expected exactly one")]
    NotIsolating {
        /// Offending interval.
        interval: String,
        /// Defining polynomial.
        polynomial: String,
        /// Number of distinct real roots inside.
        roots: usize,
    },
}

/// Result alias for interval operations.
pub type IntervalResult<T> = Result<T, IntervalError>;

/// Result alias for real algebraic number construction.
pub type AlgebraicResult<T> = Result<T, AlgebraicError>;
