//! Canonical, hash-consed monomials.
//!
//! A monomial is a product of variable powers without coefficient. Every
//! monomial is obtained from a [`MonomialPool`], so two monomials with the
//! same exponents are the same allocation and equality is a pointer check.
//!
//! Exponents are stored sorted by strictly decreasing variable, which turns
//! every binary operation (multiplication, division, gcd, lcm) into a single
//! linear merge of the two exponent sequences.
//!
//! # Examples
//!
//! ```
//! use exacta_math::monomial::Monomial;
//! use exacta_math::variable::Variable;
//!
//! let x = Variable::new(2);
//! let y = Variable::new(1);
//! let m1 = Monomial::from_powers([(x, 2), (y, 1)]);
//! let m2 = Monomial::from_powers([(x, 1), (y, 3)]);
//!
//! assert_eq!(&m1 * &m2, Monomial::from_powers([(x, 3), (y, 4)]));
//! assert!(m1.divide(&m2).is_none());
//! assert_eq!(Monomial::gcd(&m1, &m2), Monomial::from_powers([(x, 1), (y, 1)]));
//! ```

pub mod pool;

pub use pool::{MonomialPool, PoolConfig, PoolStats};

use crate::variable::Variable;
use rustc_hash::FxHasher;
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Mul;
use std::sync::{Arc, LazyLock};

/// Power of a variable (variable, exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarPower {
    /// The variable.
    pub var: Variable,
    /// The exponent, always positive inside a monomial.
    pub exp: u32,
}

impl VarPower {
    /// Create a new variable power.
    #[inline]
    pub fn new(var: Variable, exp: u32) -> Self {
        Self { var, exp }
    }
}

/// Exponent storage of a monomial.
pub type Exponents = SmallVec<[VarPower; 4]>;

/// Pooled payload behind a [`Monomial`] handle.
pub(crate) struct MonomialData {
    exponents: Exponents,
    total_degree: u32,
    hash: u64,
    id: u64,
}

impl MonomialData {
    pub(crate) fn new(exponents: Exponents, total_degree: u32, hash: u64, id: u64) -> Self {
        Self {
            exponents,
            total_degree,
            hash,
            id,
        }
    }
}

/// Shared handle to a canonical monomial.
#[derive(Clone)]
pub struct Monomial(Arc<MonomialData>);

static ONE: LazyLock<Monomial> =
    LazyLock::new(|| MonomialPool::global().create(Exponents::new(), 0));

impl Monomial {
    /// Canonical monomial for `exponents` from the global pool.
    ///
    /// `exponents` must be sorted by strictly decreasing variable with
    /// positive exponents summing to `total_degree`.
    pub fn create(exponents: Exponents, total_degree: u32) -> Self {
        MonomialPool::global().create(exponents, total_degree)
    }

    pub(crate) fn from_data(data: Arc<MonomialData>) -> Self {
        Monomial(data)
    }

    pub(crate) fn data(&self) -> &Arc<MonomialData> {
        &self.0
    }

    /// The constant monomial `1`.
    #[inline]
    pub fn one() -> Self {
        ONE.clone()
    }

    /// Monomial consisting of one variable.
    #[inline]
    pub fn from_var(var: Variable) -> Self {
        Self::from_var_power(var, 1)
    }

    /// Monomial `var^exp`; `exp = 0` gives `1`.
    pub fn from_var_power(var: Variable, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        let mut exponents = Exponents::new();
        exponents.push(VarPower::new(var, exp));
        Self::create(exponents, exp)
    }

    /// Create a monomial from `(variable, exponent)` pairs in any order.
    /// Repeated variables are multiplied together and zero exponents dropped.
    pub fn from_powers(powers: impl IntoIterator<Item = (Variable, u32)>) -> Self {
        let mut exponents: Exponents = powers
            .into_iter()
            .filter(|&(_, exp)| exp > 0)
            .map(|(var, exp)| VarPower::new(var, exp))
            .collect();
        exponents.sort_unstable_by(|a, b| b.var.cmp(&a.var));
        exponents.dedup_by(|next, kept| {
            if next.var == kept.var {
                kept.exp += next.exp;
                true
            } else {
                false
            }
        });
        let total_degree = exponents.iter().map(|vp| vp.exp).sum();
        Self::create(exponents, total_degree)
    }

    /// Exponents, sorted by strictly decreasing variable.
    #[inline]
    pub fn exponents(&self) -> &[VarPower] {
        &self.0.exponents
    }

    /// Sum of all exponents.
    #[inline]
    pub fn total_degree(&self) -> u32 {
        self.0.total_degree
    }

    /// Number of distinct variables.
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.0.exponents.len()
    }

    /// Pool id, unique among live monomials of the same pool.
    #[inline]
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// Precomputed hash of the exponent sequence.
    #[inline]
    pub fn hash_value(&self) -> u64 {
        self.0.hash
    }

    /// Whether this is the constant monomial `1`.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.0.exponents.is_empty()
    }

    /// Total degree exactly one.
    #[inline]
    pub fn is_linear(&self) -> bool {
        self.0.total_degree == 1
    }

    /// Total degree at most one.
    #[inline]
    pub fn is_at_most_linear(&self) -> bool {
        self.0.total_degree <= 1
    }

    /// Exponent of `var`, zero if absent.
    pub fn exponent(&self, var: Variable) -> u32 {
        self.position(var)
            .map_or(0, |idx| self.0.exponents[idx].exp)
    }

    /// Whether `var` occurs.
    #[inline]
    pub fn has(&self, var: Variable) -> bool {
        self.position(var).is_some()
    }

    /// Whether no variable other than `var` occurs.
    pub fn has_no_other_variable(&self, var: Variable) -> bool {
        match self.exponents() {
            [] => true,
            [vp] => vp.var == var,
            _ => false,
        }
    }

    /// The only variable, if exactly one occurs.
    pub fn single_variable(&self) -> Option<Variable> {
        match self.exponents() {
            [vp] => Some(vp.var),
            _ => None,
        }
    }

    /// Whether every exponent is even.
    pub fn is_square(&self) -> bool {
        self.exponents().iter().all(|vp| vp.exp % 2 == 0)
    }

    /// Square root, if the monomial is a square.
    pub fn sqrt(&self) -> Option<Monomial> {
        if !self.is_square() {
            return None;
        }
        let exponents: Exponents = self
            .exponents()
            .iter()
            .map(|vp| VarPower::new(vp.var, vp.exp / 2))
            .collect();
        Some(Self::create(exponents, self.total_degree() / 2))
    }

    fn position(&self, var: Variable) -> Option<usize> {
        // Sorted by decreasing variable.
        self.0
            .exponents
            .binary_search_by(|vp| var.cmp(&vp.var))
            .ok()
    }

    /// Checks the structural invariant: positive exponents, strictly
    /// decreasing variables and a total degree equal to the exponent sum.
    pub fn is_consistent(&self) -> bool {
        exponents_consistent(&self.0.exponents, self.0.total_degree)
    }

    /// Remove `var` entirely. Returns this handle unchanged if `var` does
    /// not occur, and `1` if `var` was the only variable.
    pub fn drop_variable(&self, var: Variable) -> Monomial {
        debug_assert!(self.is_consistent());
        let Some(idx) = self.position(var) else {
            return self.clone();
        };
        let mut exponents = self.0.exponents.clone();
        let removed = exponents.remove(idx);
        Self::create(exponents, self.total_degree() - removed.exp)
    }

    /// Divide by a single variable; `None` if `var` does not occur.
    pub fn divide_var(&self, var: Variable) -> Option<Monomial> {
        debug_assert!(self.is_consistent());
        let idx = self.position(var)?;
        let mut exponents = self.0.exponents.clone();
        if exponents[idx].exp == 1 {
            exponents.remove(idx);
        } else {
            exponents[idx].exp -= 1;
        }
        Some(Self::create(exponents, self.total_degree() - 1))
    }

    /// Exact division; `None` unless `other` divides `self`.
    pub fn divide(&self, other: &Monomial) -> Option<Monomial> {
        debug_assert!(self.is_consistent());
        debug_assert!(other.is_consistent());
        if other.is_constant() {
            return Some(self.clone());
        }
        if other.total_degree() > self.total_degree()
            || other.num_variables() > self.num_variables()
        {
            return None;
        }

        let lhs = self.exponents();
        let rhs = other.exponents();
        let mut exponents = Exponents::new();
        let mut i = 0;
        for d in rhs {
            loop {
                let vp = lhs.get(i)?;
                match vp.var.cmp(&d.var) {
                    Ordering::Greater => {
                        exponents.push(*vp);
                        i += 1;
                    }
                    Ordering::Less => return None,
                    Ordering::Equal => {
                        match vp.exp.cmp(&d.exp) {
                            Ordering::Less => return None,
                            Ordering::Greater => {
                                exponents.push(VarPower::new(vp.var, vp.exp - d.exp))
                            }
                            Ordering::Equal => {}
                        }
                        i += 1;
                        break;
                    }
                }
            }
        }
        exponents.extend_from_slice(&lhs[i..]);
        Some(Self::create(
            exponents,
            self.total_degree() - other.total_degree(),
        ))
    }

    /// `lcm(self, other) / other`, computed by one merge.
    pub fn calc_lcm_and_divide_by(&self, other: &Monomial) -> Monomial {
        debug_assert!(self.is_consistent());
        debug_assert!(other.is_consistent());
        let lhs = self.exponents();
        let rhs = other.exponents();
        let mut exponents = Exponents::new();
        let mut degree = 0;
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() {
            if j == rhs.len() {
                for vp in &lhs[i..] {
                    degree += vp.exp;
                    exponents.push(*vp);
                }
                break;
            }
            match lhs[i].var.cmp(&rhs[j].var) {
                Ordering::Greater => {
                    degree += lhs[i].exp;
                    exponents.push(lhs[i]);
                    i += 1;
                }
                Ordering::Less => j += 1,
                Ordering::Equal => {
                    if lhs[i].exp > rhs[j].exp {
                        let exp = lhs[i].exp - rhs[j].exp;
                        degree += exp;
                        exponents.push(VarPower::new(lhs[i].var, exp));
                    }
                    i += 1;
                    j += 1;
                }
            }
        }
        Self::create(exponents, degree)
    }

    /// Greatest common divisor: minimum exponent over shared variables.
    pub fn gcd(lhs: &Monomial, rhs: &Monomial) -> Monomial {
        debug_assert!(lhs.is_consistent());
        debug_assert!(rhs.is_consistent());
        if lhs.is_constant() || rhs.is_constant() {
            return Self::one();
        }
        let a = lhs.exponents();
        let b = rhs.exponents();
        let mut exponents = Exponents::new();
        let mut degree = 0;
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].var.cmp(&b[j].var) {
                Ordering::Greater => i += 1,
                Ordering::Less => j += 1,
                Ordering::Equal => {
                    let exp = a[i].exp.min(b[j].exp);
                    degree += exp;
                    exponents.push(VarPower::new(a[i].var, exp));
                    i += 1;
                    j += 1;
                }
            }
        }
        Self::create(exponents, degree)
    }

    /// [`Monomial::gcd`] with `None` acting as identity.
    pub fn gcd_opt(lhs: Option<&Monomial>, rhs: Option<&Monomial>) -> Option<Monomial> {
        match (lhs, rhs) {
            (None, None) => None,
            (Some(m), None) | (None, Some(m)) => Some(m.clone()),
            (Some(a), Some(b)) => Some(Self::gcd(a, b)),
        }
    }

    /// Least common multiple: maximum exponent, unshared variables kept.
    pub fn lcm(lhs: &Monomial, rhs: &Monomial) -> Monomial {
        debug_assert!(lhs.is_consistent());
        debug_assert!(rhs.is_consistent());
        if lhs.is_constant() {
            return rhs.clone();
        }
        if rhs.is_constant() {
            return lhs.clone();
        }
        let a = lhs.exponents();
        let b = rhs.exponents();
        let mut exponents = Exponents::new();
        let mut shared_min = 0;
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].var.cmp(&b[j].var) {
                Ordering::Greater => {
                    exponents.push(a[i]);
                    i += 1;
                }
                Ordering::Less => {
                    exponents.push(b[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    shared_min += a[i].exp.min(b[j].exp);
                    exponents.push(VarPower::new(a[i].var, a[i].exp.max(b[j].exp)));
                    i += 1;
                    j += 1;
                }
            }
        }
        exponents.extend_from_slice(&a[i..]);
        exponents.extend_from_slice(&b[j..]);
        Self::create(
            exponents,
            lhs.total_degree() + rhs.total_degree() - shared_min,
        )
    }

    /// [`Monomial::lcm`] with `None` acting as identity.
    pub fn lcm_opt(lhs: Option<&Monomial>, rhs: Option<&Monomial>) -> Option<Monomial> {
        match (lhs, rhs) {
            (None, None) => None,
            (Some(m), None) | (None, Some(m)) => Some(m.clone()),
            (Some(a), Some(b)) => Some(Self::lcm(a, b)),
        }
    }

    /// Raise to the power `k`; `pow(0)` is `1`.
    ///
    /// # Panics
    ///
    /// Panics when the total degree of the result does not fit in a `u32`.
    /// Use [`Monomial::checked_pow`] to handle that case.
    pub fn pow(&self, k: u32) -> Monomial {
        match self.checked_pow(k) {
            Some(m) => m,
            None => panic!("degree overflow raising {self} to the power {k}"),
        }
    }

    /// Raise to the power `k`, or `None` when the total degree of the result
    /// overflows.
    pub fn checked_pow(&self, k: u32) -> Option<Monomial> {
        match k {
            0 => Some(Self::one()),
            1 => Some(self.clone()),
            _ => {
                // Every exponent is at most the total degree.
                let total_degree = self.total_degree().checked_mul(k)?;
                let exponents: Exponents = self
                    .exponents()
                    .iter()
                    .map(|vp| VarPower::new(vp.var, vp.exp * k))
                    .collect();
                Some(Self::create(exponents, total_degree))
            }
        }
    }

    /// Radical: every exponent set to one.
    pub fn separable_part(&self) -> Monomial {
        if self.num_variables() == self.total_degree() as usize {
            return self.clone();
        }
        let exponents: Exponents = self
            .exponents()
            .iter()
            .map(|vp| VarPower::new(vp.var, 1))
            .collect();
        let degree = exponents.len() as u32;
        Self::create(exponents, degree)
    }

    /// Multiply by a single variable.
    pub fn mul_var(&self, var: Variable) -> Monomial {
        let mut exponents = self.0.exponents.clone();
        match exponents.binary_search_by(|vp| var.cmp(&vp.var)) {
            Ok(idx) => exponents[idx].exp += 1,
            Err(idx) => exponents.insert(idx, VarPower::new(var, 1)),
        }
        Self::create(exponents, self.total_degree() + 1)
    }

    /// Lexicographic order over the sorted exponent sequences.
    ///
    /// At the first differing position a smaller variable, or a smaller
    /// exponent on the same variable, is less. A strict prefix is less.
    pub fn lexical_compare(lhs: &Monomial, rhs: &Monomial) -> Ordering {
        if Arc::ptr_eq(&lhs.0, &rhs.0) {
            return Ordering::Equal;
        }
        for (a, b) in lhs.exponents().iter().zip(rhs.exponents()) {
            let ord = a.var.cmp(&b.var).then(a.exp.cmp(&b.exp));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        lhs.num_variables().cmp(&rhs.num_variables())
    }

    /// Print in infix (`x*y^2`) or prefix (`(* x (* y y))`) notation, with
    /// friendly or canonical variable names.
    pub fn to_string_with(&self, infix: bool, friendly: bool) -> String {
        if self.is_constant() {
            return "1".to_owned();
        }
        let mut out = String::new();
        if infix {
            for (i, vp) in self.exponents().iter().enumerate() {
                if i > 0 {
                    out.push('*');
                }
                out.push_str(&vp.var.name(friendly));
                if vp.exp > 1 {
                    out.push('^');
                    out.push_str(&vp.exp.to_string());
                }
            }
            return out;
        }

        let nested = self.num_variables() > 1;
        if nested {
            out.push_str("(* ");
        }
        for (i, vp) in self.exponents().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let name = vp.var.name(friendly);
            if vp.exp == 1 {
                out.push_str(&name);
            } else {
                out.push_str("(*");
                for _ in 0..vp.exp {
                    out.push(' ');
                    out.push_str(&name);
                }
                out.push(')');
            }
        }
        if nested {
            out.push(')');
        }
        out
    }
}

/// Hash of an exponent sequence, as cached in every monomial.
pub(crate) fn hash_exponents(exponents: &[VarPower]) -> u64 {
    let mut hasher = FxHasher::default();
    exponents.hash(&mut hasher);
    hasher.finish()
}

pub(crate) fn exponents_consistent(exponents: &[VarPower], total_degree: u32) -> bool {
    exponents.iter().all(|vp| vp.exp > 0)
        && exponents.windows(2).all(|w| w[0].var > w[1].var)
        && exponents.iter().map(|vp| u64::from(vp.exp)).sum::<u64>() == u64::from(total_degree)
}

impl PartialEq for Monomial {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.hash == other.0.hash && self.0.exponents == other.0.exponents)
    }
}

impl Eq for Monomial {}

impl Hash for Monomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash.hash(state);
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        Monomial::lexical_compare(self, other)
    }
}

impl Mul for &Monomial {
    type Output = Monomial;

    fn mul(self, rhs: &Monomial) -> Monomial {
        debug_assert!(self.is_consistent());
        debug_assert!(rhs.is_consistent());
        if self.is_constant() {
            return rhs.clone();
        }
        if rhs.is_constant() {
            return self.clone();
        }

        let a = self.exponents();
        let b = rhs.exponents();
        let mut exponents = Exponents::with_capacity(a.len() + b.len());
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].var.cmp(&b[j].var) {
                Ordering::Greater => {
                    exponents.push(a[i]);
                    i += 1;
                }
                Ordering::Less => {
                    exponents.push(b[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    exponents.push(VarPower::new(a[i].var, a[i].exp + b[j].exp));
                    i += 1;
                    j += 1;
                }
            }
        }
        exponents.extend_from_slice(&a[i..]);
        exponents.extend_from_slice(&b[j..]);
        Monomial::create(exponents, self.total_degree() + rhs.total_degree())
    }
}

impl Mul for Monomial {
    type Output = Monomial;

    fn mul(self, rhs: Monomial) -> Monomial {
        &self * &rhs
    }
}

impl fmt::Debug for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(true, false))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(true, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Variable {
        Variable::new(3)
    }

    fn y() -> Variable {
        Variable::new(2)
    }

    fn z() -> Variable {
        Variable::new(1)
    }

    fn mono(powers: &[(Variable, u32)]) -> Monomial {
        Monomial::from_powers(powers.iter().copied())
    }

    #[test]
    fn test_from_powers_normalizes() {
        let m = mono(&[(z(), 1), (x(), 2), (z(), 2), (y(), 0)]);
        assert_eq!(
            m.exponents(),
            &[VarPower::new(x(), 2), VarPower::new(z(), 3)]
        );
        assert_eq!(m.total_degree(), 5);
        assert!(m.is_consistent());
    }

    #[test]
    fn test_pool_identity() {
        let a = mono(&[(x(), 2), (y(), 1)]);
        let b = mono(&[(y(), 1), (x(), 2)]);
        assert!(Arc::ptr_eq(a.data(), b.data()));
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn test_monomial_mul() {
        let m1 = mono(&[(x(), 2), (y(), 1)]);
        let m2 = mono(&[(x(), 1), (y(), 3)]);
        let product = &m1 * &m2;
        assert_eq!(product, mono(&[(x(), 3), (y(), 4)]));
        assert_eq!(product.total_degree(), 7);
        assert_eq!(&Monomial::one() * &m1, m1);
    }

    #[test]
    fn test_monomial_divide() {
        let m1 = mono(&[(x(), 2), (y(), 1)]);
        let m2 = mono(&[(x(), 1), (y(), 3)]);
        assert!(m1.divide(&m2).is_none());
        assert!(m1.divide(&Monomial::from_var(z())).is_none());

        let q = m1.divide(&Monomial::from_var(x())).unwrap();
        assert_eq!(q, mono(&[(x(), 1), (y(), 1)]));
        assert_eq!(m1.divide(&m1).unwrap(), Monomial::one());
    }

    #[test]
    fn test_monomial_gcd_lcm() {
        let m1 = mono(&[(x(), 2), (y(), 1)]);
        let m2 = mono(&[(x(), 1), (y(), 3)]);
        assert_eq!(Monomial::gcd(&m1, &m2), mono(&[(x(), 1), (y(), 1)]));
        let lcm = Monomial::lcm(&m1, &m2);
        assert_eq!(lcm, mono(&[(x(), 2), (y(), 3)]));
        assert_eq!(lcm.total_degree(), 5);

        let m3 = mono(&[(z(), 4)]);
        assert_eq!(Monomial::gcd(&m1, &m3), Monomial::one());
        assert_eq!(Monomial::lcm(&m1, &m3), mono(&[(x(), 2), (y(), 1), (z(), 4)]));
    }

    #[test]
    fn test_monomial_gcd_lcm_optional() {
        let m = mono(&[(x(), 1)]);
        assert_eq!(Monomial::gcd_opt(None, Some(&m)), Some(m.clone()));
        assert_eq!(Monomial::lcm_opt(Some(&m), None), Some(m.clone()));
        assert_eq!(Monomial::gcd_opt(None, None), None);
    }

    #[test]
    fn test_calc_lcm_and_divide_by() {
        let m1 = mono(&[(x(), 2), (y(), 1)]);
        let m2 = mono(&[(y(), 3), (z(), 1)]);
        let expected = Monomial::lcm(&m1, &m2).divide(&m2).unwrap();
        assert_eq!(m1.calc_lcm_and_divide_by(&m2), expected);
        assert_eq!(expected, mono(&[(x(), 2)]));
    }

    #[test]
    fn test_drop_and_divide_var() {
        let m = mono(&[(x(), 2), (y(), 1)]);
        assert_eq!(m.drop_variable(x()), mono(&[(y(), 1)]));
        assert!(Arc::ptr_eq(m.drop_variable(z()).data(), m.data()));
        assert_eq!(mono(&[(x(), 3)]).drop_variable(x()), Monomial::one());

        assert_eq!(m.divide_var(y()).unwrap(), mono(&[(x(), 2)]));
        assert_eq!(m.divide_var(x()).unwrap(), mono(&[(x(), 1), (y(), 1)]));
        assert!(m.divide_var(z()).is_none());
    }

    #[test]
    fn test_pow_and_separable_part() {
        let m = mono(&[(x(), 2), (y(), 1)]);
        assert_eq!(m.pow(0), Monomial::one());
        assert_eq!(m.pow(3), mono(&[(x(), 6), (y(), 3)]));
        assert_eq!(m.separable_part(), mono(&[(x(), 1), (y(), 1)]));
        assert!(m.pow(2).is_square());
        assert_eq!(m.pow(2).sqrt(), Some(m.clone()));
        assert_eq!(m.sqrt(), None);
    }

    #[test]
    fn test_checked_pow_overflow() {
        let m = mono(&[(x(), 2), (y(), 1)]);
        assert_eq!(m.checked_pow(4), Some(m.pow(4)));
        let k = u32::MAX / 3;
        assert_eq!(m.checked_pow(k), Some(mono(&[(x(), 2 * k), (y(), k)])));
        assert!(m.checked_pow(u32::MAX / 2).is_none());
        assert!(mono(&[(x(), 1 << 16)]).checked_pow(1 << 16).is_none());
        assert_eq!(Monomial::one().checked_pow(u32::MAX), Some(Monomial::one()));
    }

    #[test]
    #[should_panic(expected = "degree overflow")]
    fn test_pow_overflow_panics() {
        let _ = mono(&[(x(), 1 << 20)]).pow(1 << 12);
    }

    #[test]
    fn test_mul_var() {
        let m = mono(&[(x(), 2), (z(), 1)]);
        assert_eq!(m.mul_var(y()), mono(&[(x(), 2), (y(), 1), (z(), 1)]));
        assert_eq!(m.mul_var(x()), mono(&[(x(), 3), (z(), 1)]));
        assert_eq!(Monomial::from_var(x()).mul_var(x()), mono(&[(x(), 2)]));
    }

    #[test]
    fn test_lexical_compare() {
        let x2 = mono(&[(x(), 2)]);
        let xy = mono(&[(x(), 1), (y(), 1)]);
        let x2y = mono(&[(x(), 2), (y(), 1)]);
        let y5 = mono(&[(y(), 5)]);
        assert_eq!(Monomial::lexical_compare(&x2, &xy), Ordering::Greater);
        assert_eq!(Monomial::lexical_compare(&x2, &x2y), Ordering::Less);
        assert_eq!(Monomial::lexical_compare(&y5, &xy), Ordering::Less);
        assert_eq!(Monomial::lexical_compare(&xy, &xy.clone()), Ordering::Equal);
        assert!(Monomial::one() < y5);
    }

    #[test]
    fn test_predicates() {
        let m = mono(&[(x(), 1)]);
        assert!(m.is_linear());
        assert!(m.is_at_most_linear());
        assert!(Monomial::one().is_at_most_linear());
        assert_eq!(m.single_variable(), Some(x()));
        assert!(m.has_no_other_variable(x()));
        assert!(!m.has_no_other_variable(y()));
        assert_eq!(mono(&[(x(), 1), (y(), 2)]).exponent(y()), 2);
        assert_eq!(mono(&[(x(), 1), (y(), 2)]).exponent(z()), 0);
    }

    #[test]
    fn test_to_string() {
        let m = mono(&[(x(), 1), (y(), 2)]);
        assert_eq!(m.to_string_with(true, false), "x_3*x_2^2");
        assert_eq!(m.to_string_with(false, false), "(* x_3 (* x_2 x_2))");
        assert_eq!(mono(&[(y(), 2)]).to_string_with(false, false), "(* x_2 x_2)");
        assert_eq!(mono(&[(x(), 1)]).to_string_with(false, false), "x_3");
        assert_eq!(Monomial::one().to_string(), "1");
    }

    #[test]
    fn test_friendly_names() {
        let a = Variable::named("mono_test_a");
        let m = Monomial::from_var_power(a, 2);
        assert_eq!(m.to_string(), "mono_test_a^2");
        assert_eq!(m.to_string_with(true, false), format!("x_{}^2", a.id()));
    }
}
