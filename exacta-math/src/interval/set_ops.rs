//! Membership, intersection, splitting and the other set operations.
//!
//! Operations whose result may consist of two disjoint intervals return
//! `(Interval, Option<Interval>)`, the parts in increasing order.

use super::{BoundType, Interval, IntervalNumber};

impl<N: IntervalNumber> Interval<N> {
    /// Whether `value` is an element.
    pub fn contains(&self, value: &N) -> bool {
        if self.is_empty() {
            return false;
        }
        let above_lower = match self.lower_type {
            BoundType::Infinite => true,
            BoundType::Strict => self.lower < *value,
            BoundType::Weak => self.lower <= *value,
        };
        let below_upper = match self.upper_type {
            BoundType::Infinite => true,
            BoundType::Strict => *value < self.upper,
            BoundType::Weak => *value <= self.upper,
        };
        above_lower && below_upper
    }

    /// Whether `value` lies in the closure of the interval.
    pub fn meets(&self, value: &N) -> bool {
        if self.is_empty() {
            return false;
        }
        (self.lower_type == BoundType::Infinite || self.lower <= *value)
            && (self.upper_type == BoundType::Infinite || *value <= self.upper)
    }

    /// Whether every element of `other` is an element of `self`. The empty
    /// interval is contained in every interval.
    pub fn contains_interval(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        let lower_ok = match (self.lower_type, other.lower_type) {
            (BoundType::Infinite, _) => true,
            (_, BoundType::Infinite) => false,
            (kind, other_kind) => {
                self.lower < other.lower
                    || (self.lower == other.lower
                        && (kind == BoundType::Weak || other_kind == BoundType::Strict))
            }
        };
        let upper_ok = match (self.upper_type, other.upper_type) {
            (BoundType::Infinite, _) => true,
            (_, BoundType::Infinite) => false,
            (kind, other_kind) => {
                other.upper < self.upper
                    || (self.upper == other.upper
                        && (kind == BoundType::Weak || other_kind == BoundType::Strict))
            }
        };
        lower_ok && upper_ok
    }

    /// `self` is a subset of `other`.
    #[inline]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.contains_interval(self)
    }

    /// `self` is a subset of `other` and differs from it.
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self != other
    }

    /// Intersection. On equal bound values the strict kind wins.
    pub fn intersect(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::empty();
        }
        let (lower, lower_type) = match (self.lower_type, other.lower_type) {
            (BoundType::Infinite, BoundType::Infinite) => (N::zero(), BoundType::Infinite),
            (BoundType::Infinite, kind) => (other.lower.clone(), kind),
            (kind, BoundType::Infinite) => (self.lower.clone(), kind),
            (kind, other_kind) => {
                if self.lower > other.lower {
                    (self.lower.clone(), kind)
                } else if other.lower > self.lower {
                    (other.lower.clone(), other_kind)
                } else {
                    (self.lower.clone(), tighter(kind, other_kind))
                }
            }
        };
        let (upper, upper_type) = match (self.upper_type, other.upper_type) {
            (BoundType::Infinite, BoundType::Infinite) => (N::zero(), BoundType::Infinite),
            (BoundType::Infinite, kind) => (other.upper.clone(), kind),
            (kind, BoundType::Infinite) => (self.upper.clone(), kind),
            (kind, other_kind) => {
                if self.upper < other.upper {
                    (self.upper.clone(), kind)
                } else if other.upper < self.upper {
                    (other.upper.clone(), other_kind)
                } else {
                    (self.upper.clone(), tighter(kind, other_kind))
                }
            }
        };
        Self::new(lower, lower_type, upper, upper_type)
    }

    /// Whether the two intervals share an element.
    pub fn intersects_with(&self, other: &Self) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Smallest interval containing both. On equal bound values the weak
    /// kind wins.
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let (lower, lower_type) = match (self.lower_type, other.lower_type) {
            (BoundType::Infinite, _) | (_, BoundType::Infinite) => {
                (N::zero(), BoundType::Infinite)
            }
            (kind, other_kind) => {
                if self.lower < other.lower {
                    (self.lower.clone(), kind)
                } else if other.lower < self.lower {
                    (other.lower.clone(), other_kind)
                } else {
                    (self.lower.clone(), looser(kind, other_kind))
                }
            }
        };
        let (upper, upper_type) = match (self.upper_type, other.upper_type) {
            (BoundType::Infinite, _) | (_, BoundType::Infinite) => {
                (N::zero(), BoundType::Infinite)
            }
            (kind, other_kind) => {
                if self.upper > other.upper {
                    (self.upper.clone(), kind)
                } else if other.upper > self.upper {
                    (other.upper.clone(), other_kind)
                } else {
                    (self.upper.clone(), looser(kind, other_kind))
                }
            }
        };
        Self::new(lower, lower_type, upper, upper_type)
    }

    /// Union: the hull when the two are connected, otherwise both parts.
    pub fn unite(&self, other: &Self) -> (Self, Option<Self>) {
        if self.is_empty() {
            return (other.clone(), None);
        }
        if other.is_empty() {
            return (self.clone(), None);
        }
        if self.intersects_with(other) || self.touches(other) || other.touches(self) {
            return (self.hull(other), None);
        }
        if self.is_less_than(other) {
            (self.clone(), Some(other.clone()))
        } else {
            (other.clone(), Some(self.clone()))
        }
    }

    /// `self` ends exactly where `other` starts and the common point belongs
    /// to one of them.
    fn touches(&self, other: &Self) -> bool {
        self.upper_type != BoundType::Infinite
            && other.lower_type != BoundType::Infinite
            && self.upper == other.lower
            && (self.upper_type == BoundType::Weak || other.lower_type == BoundType::Weak)
    }

    /// Elements of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> (Self, Option<Self>) {
        if self.is_empty() {
            return (Self::empty(), None);
        }
        if !self.intersects_with(other) {
            return (self.clone(), None);
        }
        let below = match other.lower_type {
            BoundType::Infinite => Self::empty(),
            kind => self.intersect(&Self::from_upper(other.lower.clone(), kind.flip())),
        };
        let above = match other.upper_type {
            BoundType::Infinite => Self::empty(),
            kind => self.intersect(&Self::from_lower(other.upper.clone(), kind.flip())),
        };
        match (below.is_empty(), above.is_empty()) {
            (true, true) => (Self::empty(), None),
            (false, true) => (below, None),
            (true, false) => (above, None),
            (false, false) => (below, Some(above)),
        }
    }

    /// Every number not in `self`.
    pub fn complement(&self) -> (Self, Option<Self>) {
        Self::unbounded().difference(self)
    }

    /// Elements in exactly one of the two intervals.
    pub fn symmetric_difference(&self, other: &Self) -> (Self, Option<Self>) {
        let common = self.intersect(other);
        if common.is_empty() {
            return self.unite(other);
        }
        self.hull(other).difference(&common)
    }

    /// Split at the center into `[lower, m[` and `[m, upper]`, keeping the
    /// outer kinds.
    pub fn split(&self) -> (Self, Self) {
        if self.is_empty() {
            return (Self::empty(), Self::empty());
        }
        let mid = self.center();
        (
            Self::new(
                self.lower.clone(),
                self.lower_type,
                mid.clone(),
                BoundType::Strict,
            ),
            Self::new(mid, BoundType::Weak, self.upper.clone(), self.upper_type),
        )
    }

    /// Split a bounded interval into `n` pieces of equal width that
    /// partition it. Unbounded, empty and point intervals, and `n <= 1`,
    /// give the interval itself.
    pub fn split_n(&self, n: u32) -> Vec<Self> {
        if n <= 1 || self.is_empty() || self.is_unbounded() || self.is_point_interval() {
            return vec![self.clone()];
        }
        let width = self.upper.sub_up(&self.lower);
        let count = N::from_count(n);
        let mut cuts = Vec::with_capacity(n as usize - 1);
        let mut previous = self.lower.clone();
        for i in 1..n {
            let step = width.mul_down(&N::from_count(i)).div_down(&count);
            let mut cut = self.lower.add_down(&step);
            if cut < previous {
                cut = previous.clone();
            }
            if cut > self.upper {
                cut = self.upper.clone();
            }
            previous = cut.clone();
            cuts.push(cut);
        }

        let mut pieces = Vec::with_capacity(n as usize);
        let mut start = (self.lower.clone(), self.lower_type);
        for cut in cuts {
            pieces.push(Self::new(start.0, start.1, cut.clone(), BoundType::Strict));
            start = (cut, BoundType::Weak);
        }
        pieces.push(Self::new(
            start.0,
            start.1,
            self.upper.clone(),
            self.upper_type,
        ));
        pieces
    }

    /// The part of `self` at or below `value`.
    pub fn cut_until(&self, value: &N) -> Self {
        self.intersect(&Self::from_upper(value.clone(), BoundType::Weak))
    }

    /// The part of `self` at or above `value`.
    pub fn cut_from(&self, value: &N) -> Self {
        self.intersect(&Self::from_lower(value.clone(), BoundType::Weak))
    }

    /// Widen both finite bounds by `width`, keeping their kinds.
    pub fn bloat(&self, width: &N) -> Self {
        if self.is_empty() {
            return Self::empty();
        }
        let lower = match self.lower_type {
            BoundType::Infinite => N::zero(),
            _ => self.lower.sub_down(width),
        };
        let upper = match self.upper_type {
            BoundType::Infinite => N::zero(),
            _ => self.upper.add_up(width),
        };
        Self::new(lower, self.lower_type, upper, self.upper_type)
    }
}

/// Kind of a shared bound value in an intersection.
fn tighter(a: BoundType, b: BoundType) -> BoundType {
    if a == BoundType::Strict || b == BoundType::Strict {
        BoundType::Strict
    } else {
        BoundType::Weak
    }
}

/// Kind of a shared bound value in a hull.
fn looser(a: BoundType, b: BoundType) -> BoundType {
    if a == BoundType::Weak || b == BoundType::Weak {
        BoundType::Weak
    } else {
        BoundType::Strict
    }
}

#[cfg(test)]
mod tests {
    use crate::interval::{BoundType, DoubleInterval, RationalInterval};
    use num_bigint::BigInt;
    use num_rational::BigRational;

    fn rat(n: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(n))
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    fn closed(l: i64, u: i64) -> RationalInterval {
        RationalInterval::closed(rat(l), rat(u))
    }

    #[test]
    fn test_intersect_scenario() {
        let a = DoubleInterval::closed(1.0, 3.0);
        let b = DoubleInterval::new(2.0, BoundType::Strict, 5.0, BoundType::Weak);
        let c = a.intersect(&b);
        assert_eq!(
            c,
            DoubleInterval::new(2.0, BoundType::Strict, 3.0, BoundType::Weak)
        );
        assert!(!c.contains(&2.0));
        assert!(c.contains(&3.0));
        assert!(c.meets(&2.0));
    }

    #[test]
    fn test_intersect_strict_wins() {
        let a = RationalInterval::new(rat(0), BoundType::Weak, rat(2), BoundType::Strict);
        let b = closed(0, 2);
        assert_eq!(a.intersect(&b), a);
        assert!(closed(0, 1).intersect(&closed(2, 3)).is_empty());
        let touching = RationalInterval::new(rat(0), BoundType::Weak, rat(1), BoundType::Strict);
        assert!(!touching.intersects_with(&closed(1, 2)));
        assert!(closed(0, 1).intersects_with(&closed(1, 2)));
    }

    #[test]
    fn test_contains_interval() {
        let outer = RationalInterval::open(rat(0), rat(4));
        assert!(outer.contains_interval(&closed(1, 3)));
        assert!(!outer.contains_interval(&closed(0, 3)));
        assert!(outer.contains_interval(&RationalInterval::open(rat(0), rat(4))));
        assert!(outer.contains_interval(&RationalInterval::empty()));
        assert!(!outer.contains_interval(&RationalInterval::from_lower(rat(1), BoundType::Weak)));
        assert!(closed(1, 3).is_proper_subset(&outer));
        assert!(!outer.is_proper_subset(&outer));
    }

    #[test]
    fn test_hull_and_unite() {
        let a = RationalInterval::new(rat(0), BoundType::Weak, rat(1), BoundType::Strict);
        let b = closed(1, 2);
        assert_eq!(a.unite(&b), (closed(0, 2), None));
        let c = closed(3, 4);
        assert_eq!(a.unite(&c), (a.clone(), Some(c.clone())));
        assert_eq!(c.unite(&a), (a.clone(), Some(c.clone())));
        assert_eq!(a.hull(&c), closed(0, 4));
        let gap = RationalInterval::new(rat(1), BoundType::Strict, rat(2), BoundType::Weak);
        assert!(a.unite(&gap).1.is_some());
    }

    #[test]
    fn test_difference_and_complement() {
        let (left, right) = closed(0, 10).difference(&closed(3, 4));
        assert_eq!(
            left,
            RationalInterval::new(rat(0), BoundType::Weak, rat(3), BoundType::Strict)
        );
        assert_eq!(
            right,
            Some(RationalInterval::new(rat(4), BoundType::Strict, rat(10), BoundType::Weak))
        );
        assert_eq!(
            closed(0, 10).difference(&closed(5, 20)),
            (
                RationalInterval::new(rat(0), BoundType::Weak, rat(5), BoundType::Strict),
                None
            )
        );
        assert!(closed(1, 2).difference(&closed(0, 3)).0.is_empty());

        let (below, above) = closed(1, 2).complement();
        assert_eq!(below, RationalInterval::from_upper(rat(1), BoundType::Strict));
        assert_eq!(above, Some(RationalInterval::from_lower(rat(2), BoundType::Strict)));
        assert!(RationalInterval::unbounded().complement().0.is_empty());
    }

    #[test]
    fn test_symmetric_difference() {
        let (a, b) = closed(0, 2).symmetric_difference(&closed(1, 3));
        assert_eq!(
            a,
            RationalInterval::new(rat(0), BoundType::Weak, rat(1), BoundType::Strict)
        );
        assert_eq!(
            b,
            Some(RationalInterval::new(rat(2), BoundType::Strict, rat(3), BoundType::Weak))
        );
    }

    #[test]
    fn test_split() {
        let (lo, hi) = RationalInterval::open(rat(0), rat(2)).split();
        assert_eq!(lo, RationalInterval::open(rat(0), rat(1)));
        assert_eq!(
            hi,
            RationalInterval::new(rat(1), BoundType::Weak, rat(2), BoundType::Strict)
        );
    }

    #[test]
    fn test_split_n_partitions() {
        let a = RationalInterval::new(rat(0), BoundType::Strict, rat(3), BoundType::Weak);
        let pieces = a.split_n(3);
        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], RationalInterval::open(rat(0), rat(1)));
        assert_eq!(
            pieces[1],
            RationalInterval::new(rat(1), BoundType::Weak, rat(2), BoundType::Strict)
        );
        assert_eq!(pieces[2], closed(2, 3));
        for v in [ratio(1, 2), rat(1), ratio(5, 2), rat(3)] {
            assert_eq!(pieces.iter().filter(|p| p.contains(&v)).count(), 1);
        }
        assert_eq!(RationalInterval::unbounded().split_n(4).len(), 1);
        assert_eq!(closed(0, 1).split_n(1), vec![closed(0, 1)]);
    }

    #[test]
    fn test_cut_and_bloat() {
        assert_eq!(closed(0, 10).cut_until(&rat(4)), closed(0, 4));
        assert_eq!(closed(0, 10).cut_from(&rat(4)), closed(4, 10));
        assert_eq!(
            RationalInterval::open(rat(0), rat(1)).bloat(&rat(1)),
            RationalInterval::open(rat(-1), rat(2))
        );
        assert_eq!(
            RationalInterval::from_lower(rat(0), BoundType::Weak).bloat(&rat(2)),
            RationalInterval::from_lower(rat(-2), BoundType::Weak)
        );
    }
}
