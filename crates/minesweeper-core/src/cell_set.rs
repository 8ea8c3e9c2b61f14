//! An order-independent set of cell handles.

use std::collections::{BTreeSet, btree_set};

use crate::CellId;

/// A set of [`CellId`]s with structural equality and hashing.
///
/// Two `CellSet`s are equal iff they contain the same cells, regardless of
/// insertion order, and equal sets hash identically — the property the
/// constraint store relies on for deduplication. The set algebra needed by
/// constraint inference (difference, intersection, symmetric difference,
/// superset and overlap tests) is provided directly so call sites stay close
/// to the math.
///
/// # Examples
///
/// ```
/// use minesweeper_core::{CellId, CellSet};
///
/// let a: CellSet = [CellId::new(1), CellId::new(2), CellId::new(3)]
///     .into_iter()
///     .collect();
/// let b: CellSet = [CellId::new(2), CellId::new(3)].into_iter().collect();
///
/// assert!(a.is_strict_superset(&b));
/// assert_eq!(a.difference(&b).len(), 1);
/// assert!(a.difference(&b).contains(CellId::new(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellSet(BTreeSet<CellId>);

impl CellSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Returns the number of cells in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `cell` is a member.
    #[must_use]
    pub fn contains(&self, cell: CellId) -> bool {
        self.0.contains(&cell)
    }

    /// Inserts a cell, returning `true` if it was not already present.
    pub fn insert(&mut self, cell: CellId) -> bool {
        self.0.insert(cell)
    }

    /// Removes a cell, returning `true` if it was present.
    pub fn remove(&mut self, cell: CellId) -> bool {
        self.0.remove(&cell)
    }

    /// Returns the cells in `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        Self(self.0.difference(&other.0).copied().collect())
    }

    /// Returns the cells present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    /// Returns the cells present in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self(self.0.symmetric_difference(&other.0).copied().collect())
    }

    /// Returns `true` if every cell of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.0.is_superset(&other.0)
    }

    /// Returns `true` if `self` contains every cell of `other` plus at least
    /// one more.
    #[must_use]
    pub fn is_strict_superset(&self, other: &Self) -> bool {
        self.len() > other.len() && self.is_superset(other)
    }

    /// Returns `true` if the two sets share at least one cell.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.0.intersection(&other.0).next().is_some()
    }

    /// Iterates over the cells in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<CellId> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<CellId> for CellSet {
    fn extend<I: IntoIterator<Item = CellId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for CellSet {
    type Item = CellId;
    type IntoIter = btree_set::IntoIter<CellId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = CellId;
    type IntoIter = std::iter::Copied<btree_set::Iter<'a, CellId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn set(ids: impl IntoIterator<Item = usize>) -> CellSet {
        ids.into_iter().map(CellId::new).collect()
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = CellSet::new();
        a.insert(CellId::new(1));
        a.insert(CellId::new(2));
        let mut b = CellSet::new();
        b.insert(CellId::new(2));
        b.insert(CellId::new(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_difference_and_intersection() {
        let a = set([1, 2, 3]);
        let b = set([2, 3, 4]);

        assert_eq!(a.difference(&b), set([1]));
        assert_eq!(b.difference(&a), set([4]));
        assert_eq!(a.intersection(&b), set([2, 3]));
        assert_eq!(a.symmetric_difference(&b), set([1, 4]));
    }

    #[test]
    fn test_superset_relations() {
        let a = set([1, 2, 3]);
        let b = set([1, 2]);

        assert!(a.is_superset(&b));
        assert!(a.is_strict_superset(&b));
        assert!(a.is_superset(&a));
        assert!(!a.is_strict_superset(&a));
        assert!(!b.is_superset(&a));
    }

    #[test]
    fn test_intersects() {
        assert!(set([1, 2]).intersects(&set([2, 3])));
        assert!(!set([1, 2]).intersects(&set([3, 4])));
        assert!(!set([1, 2]).intersects(&CellSet::new()));
    }

    #[test]
    fn test_iteration_is_sorted() {
        let cells: Vec<_> = set([9, 1, 5]).iter().collect();
        assert_eq!(cells, vec![CellId::new(1), CellId::new(5), CellId::new(9)]);
    }

    fn arb_cell_set() -> impl Strategy<Value = CellSet> {
        prop::collection::btree_set(0..64_usize, 0..16)
            .prop_map(|ids| ids.into_iter().map(CellId::new).collect())
    }

    proptest! {
        #[test]
        fn prop_difference_and_intersection_partition(a in arb_cell_set(), b in arb_cell_set()) {
            prop_assert_eq!(a.difference(&b).len() + a.intersection(&b).len(), a.len());
        }

        #[test]
        fn prop_symmetric_difference_is_both_differences(a in arb_cell_set(), b in arb_cell_set()) {
            let mut both = a.difference(&b);
            both.extend(&b.difference(&a));
            prop_assert_eq!(a.symmetric_difference(&b), both);
        }

        #[test]
        fn prop_strict_superset_of_proper_subset(a in arb_cell_set(), extra in 64..128_usize) {
            let mut bigger = a.clone();
            bigger.insert(CellId::new(extra));
            prop_assert!(bigger.is_strict_superset(&a));
        }
    }
}
