//! Variables and the global variable name registry.
//!
//! A [`Variable`] is a `u32` id ordered by that id. Names are optional:
//! [`Variable::named`] interns a friendly name in a process-wide
//! [`ThreadedRodeo`] and the variable carries the interned key, every other
//! variable prints with its canonical name `x_<id>`.

use lasso::{Key, Spur, ThreadedRodeo};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;
use std::sync::atomic::{self, AtomicU32};

/// First id handed out to named variables.
///
/// Ids below this value are free for callers that number variables
/// themselves through [`Variable::new`].
pub const NAMED_ID_BASE: u32 = 1 << 20;

/// First id handed out by [`Variable::fresh`]. Named ids stay below it.
pub const FRESH_ID_BASE: u32 = 1 << 30;

/// A polynomial variable.
///
/// Equality, hashing and ordering only look at the id.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    id: u32,
    #[cfg_attr(feature = "serde", serde(skip))]
    name: Option<Spur>,
}

impl Variable {
    /// Variable with an explicit id and no name.
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Variable { id, name: None }
    }

    /// Get or create the variable registered under `name`. The id is derived
    /// from the interned key, so equal names give equal variables.
    #[must_use]
    pub fn named(name: &str) -> Self {
        let key = REGISTRY.names.get_or_intern(name);
        let offset = key.into_usize() as u32;
        debug_assert!(offset < FRESH_ID_BASE - NAMED_ID_BASE);
        Variable {
            id: NAMED_ID_BASE + offset,
            name: Some(key),
        }
    }

    /// Create a new variable carrying `name`, even if the name is taken.
    #[must_use]
    pub fn fresh(name: &str) -> Self {
        let key = REGISTRY.names.get_or_intern(name);
        Variable {
            id: REGISTRY.next_fresh.fetch_add(1, atomic::Ordering::Relaxed),
            name: Some(key),
        }
    }

    /// Numeric id.
    #[inline]
    pub const fn id(self) -> u32 {
        self.id
    }

    /// Interned name, if the variable has one.
    #[inline]
    pub fn name_key(self) -> Option<Spur> {
        self.name
    }

    /// Printable name. With `friendly` the registered name is used when one
    /// exists, otherwise the canonical `x_<id>`.
    pub fn name(self, friendly: bool) -> String {
        match self.name {
            Some(key) if friendly => REGISTRY.names.resolve(&key).to_owned(),
            _ => format!("x_{}", self.id),
        }
    }
}

impl PartialEq for Variable {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x_{}", self.id)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(true))
    }
}

struct VariableRegistry {
    names: ThreadedRodeo,
    next_fresh: AtomicU32,
}

static REGISTRY: LazyLock<VariableRegistry> = LazyLock::new(|| VariableRegistry {
    names: ThreadedRodeo::new(),
    next_fresh: AtomicU32::new(FRESH_ID_BASE),
});
