//! Property-based tests for exacta-math
//!
//! This module contains property tests for:
//! - Monomial canonicity and exponent arithmetic
//! - Soundness of interval arithmetic over rationals and doubles
//! - Root isolation and refinement of real algebraic numbers

mod interval_properties;
mod monomial_properties;
mod ran_properties;
