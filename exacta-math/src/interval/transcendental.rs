//! Elementary functions on `f64` intervals.
//!
//! The library functions of `f64` are accurate to within one ulp, so every
//! bound computed from them is widened by two ulps outward. `sin` and `cos`
//! locate the extrema inside the interval from the quadrants of its bounds,
//! using `PI` and the next float above it as lower and upper bounds on π.

use super::{BoundType, DoubleInterval, next_down, next_up};
use std::f64::consts::PI;

/// Beyond this magnitude the quadrant of a bound is not computed and
/// `sin`/`cos` return `[-1, 1]`.
const MAX_REDUCIBLE: f64 = 1e15;

fn widen_down(x: f64) -> f64 {
    next_down(next_down(x))
}

fn widen_up(x: f64) -> f64 {
    next_up(next_up(x))
}

/// Quadrant indices `floor(2x/π)` bracketing the true ones: the first is at
/// most the quadrant of `lower`, the second at least the quadrant of `upper`.
#[allow(clippy::cast_possible_truncation)]
fn quadrant_range(lower: f64, upper: f64) -> (i64, i64) {
    let pi_up = next_up(PI);
    let lo = (2.0 * lower / PI).min(2.0 * lower / pi_up);
    let hi = (2.0 * upper / PI).max(2.0 * upper / pi_up);
    (next_down(lo).floor() as i64, next_up(hi).floor() as i64)
}

/// Whether some quadrant boundary `m * π/2` with `m ≡ residue (mod 4)` may
/// lie inside the interval.
fn crosses(first: i64, last: i64, residue: i64) -> bool {
    let m = first + 1 + (residue - (first + 1)).rem_euclid(4);
    m <= last
}

impl DoubleInterval {
    /// `e^x`.
    pub fn exp(&self) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let (lower, lower_type) = match self.lower_type() {
            BoundType::Infinite => (0.0, BoundType::Strict),
            kind => (widen_down(self.lower().exp()).max(0.0), kind),
        };
        let upper = match self.upper_type() {
            BoundType::Infinite => 0.0,
            _ => widen_up(self.upper().exp()),
        };
        Self::new(lower, lower_type, upper, self.upper_type())
    }

    /// Natural logarithm of the positive part. The non-positive part makes
    /// the result unbounded below; with no positive part it is empty.
    pub fn log(&self) -> Self {
        if self.is_empty()
            || (self.upper_type() != BoundType::Infinite && *self.upper() <= 0.0)
        {
            return Self::empty();
        }
        let (lower, lower_type) =
            if self.lower_type() == BoundType::Infinite || *self.lower() <= 0.0 {
                (0.0, BoundType::Infinite)
            } else {
                (widen_down(self.lower().ln()), self.lower_type())
            };
        let upper = match self.upper_type() {
            BoundType::Infinite => 0.0,
            _ => widen_up(self.upper().ln()),
        };
        Self::new(lower, lower_type, upper, self.upper_type())
    }

    /// Sine.
    pub fn sin(&self) -> Self {
        self.periodic(f64::sin, 1, 3)
    }

    /// Cosine.
    pub fn cos(&self) -> Self {
        self.periodic(f64::cos, 0, 2)
    }

    /// Range of a unit-amplitude periodic function whose maxima sit on the
    /// quadrant boundaries `≡ max_residue (mod 4)` and minima on those
    /// `≡ min_residue (mod 4)`.
    fn periodic(&self, f: fn(f64) -> f64, max_residue: i64, min_residue: i64) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let full = Self::closed(-1.0, 1.0);
        if self.is_unbounded()
            || self.lower().abs() > MAX_REDUCIBLE
            || self.upper().abs() > MAX_REDUCIBLE
        {
            return full;
        }
        let (l, u) = (*self.lower(), *self.upper());
        let (first, last) = quadrant_range(l, u);
        if last - first >= 4 {
            return full;
        }
        let (fl, fu) = (f(l), f(u));
        let lower = if crosses(first, last, min_residue) {
            -1.0
        } else {
            widen_down(fl.min(fu)).max(-1.0)
        };
        let upper = if crosses(first, last, max_residue) {
            1.0
        } else {
            widen_up(fl.max(fu)).min(1.0)
        };
        Self::closed(lower, upper)
    }
}
