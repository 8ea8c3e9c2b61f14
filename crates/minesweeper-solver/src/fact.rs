//! The unit of knowledge the solver reasons with.

use minesweeper_core::{CellId, CellSet};

/// A constraint over hidden cells: exactly `mines_contained` of `cells` are
/// mines.
///
/// Facts are created from revealed clues, from pairwise inference, or as the
/// synthetic whole-board fact, and only ever shrink afterwards: a member
/// cell is removed when it is revealed (count unchanged) or flagged (count
/// decremented). Two facts are equal iff their cell sets and counts are
/// equal — insertion order is irrelevant, and equal facts hash identically,
/// which is what lets the store deduplicate them.
///
/// # Examples
///
/// ```
/// use minesweeper_core::{CellId, CellSet};
/// use minesweeper_solver::Fact;
///
/// let cells: CellSet = [CellId::new(0), CellId::new(1)].into_iter().collect();
/// let fact = Fact::new(cells, 1);
///
/// assert!(!fact.is_certain());
/// assert!((fact.safety() - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    cells: CellSet,
    mines_contained: usize,
}

impl Fact {
    /// Creates a fact asserting that exactly `mines_contained` of `cells`
    /// are mines.
    ///
    /// # Panics
    ///
    /// Panics if `mines_contained` exceeds the number of cells; in
    /// particular, an empty fact must claim zero mines. A violation is a
    /// programmer error, never clamped.
    #[must_use]
    pub fn new(cells: CellSet, mines_contained: usize) -> Self {
        assert!(
            mines_contained <= cells.len(),
            "fact cannot contain {mines_contained} mines in {} cells",
            cells.len()
        );
        Self {
            cells,
            mines_contained,
        }
    }

    /// Returns the constrained cells.
    #[must_use]
    pub const fn cells(&self) -> &CellSet {
        &self.cells
    }

    /// Returns the exact number of mines among [`cells`](Self::cells).
    #[must_use]
    pub const fn mines_contained(&self) -> usize {
        self.mines_contained
    }

    /// Returns the number of constrained cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if no cells remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if every member cell's status is determined: the fact
    /// contains no mines at all, or nothing but mines.
    #[must_use]
    pub fn is_certain(&self) -> bool {
        self.mines_contained == 0 || self.mines_contained == self.cells.len()
    }

    /// Returns the probability that a uniformly chosen member cell is safe.
    ///
    /// # Panics
    ///
    /// Panics on an empty fact, for which safety is undefined.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn safety(&self) -> f64 {
        assert!(!self.is_empty(), "safety is undefined for an empty fact");
        1.0 - self.mines_contained as f64 / self.cells.len() as f64
    }

    /// Removes a cell because it was revealed; the mine count is unchanged.
    ///
    /// Returns `true` if the cell was a member. Removing a non-member is a
    /// no-op.
    pub fn reveal_cell(&mut self, cell: CellId) -> bool {
        self.cells.remove(cell)
    }

    /// Removes a cell because it was flagged, decrementing the mine count
    /// if the cell was a member.
    ///
    /// Returns `true` if the cell was a member.
    ///
    /// # Panics
    ///
    /// Panics if a member cell is flagged while the fact claims zero mines —
    /// two constraints contradicted each other, which is a bookkeeping bug.
    pub fn flag_cell(&mut self, cell: CellId) -> bool {
        let removed = self.cells.remove(cell);
        if removed {
            assert!(
                self.mines_contained > 0,
                "flagged {cell}, a member of a mine-free fact"
            );
            self.mines_contained -= 1;
        }
        removed
    }

    /// Attempts to derive new facts by combining this fact with another.
    ///
    /// The combination is not commutative; callers wanting both directions
    /// must invoke it both ways. Two rules apply:
    ///
    /// - **Subset**: if `self`'s cells strictly contain `other`'s, the cells
    ///   exclusive to `self` hold exactly the difference of the two mine
    ///   counts.
    /// - **Intersection-forced**: if the two overlap, neither contains the
    ///   other, and the mine-count difference equals the number of cells
    ///   exclusive to `self`, those exclusive cells are all mines, the cells
    ///   exclusive to `other` are all safe, and the overlap holds exactly
    ///   `other`'s mines.
    ///
    /// Combining with an empty fact or with an equal fact yields nothing.
    ///
    /// # Panics
    ///
    /// Panics if the two facts contradict each other; facts tracked against
    /// a single consistent board never do.
    #[must_use]
    pub fn infer(&self, other: &Self) -> Vec<Self> {
        if other.is_empty() || self == other {
            return Vec::new();
        }
        let mut inferred = Vec::new();
        self.superset_inference(other, &mut inferred);
        self.intersection_forced_inference(other, &mut inferred);
        inferred
    }

    fn superset_inference(&self, other: &Self, out: &mut Vec<Self>) {
        if !self.cells.is_strict_superset(&other.cells) {
            return;
        }
        assert!(
            self.mines_contained >= other.mines_contained,
            "contradictory facts: {self:?} vs {other:?}"
        );
        out.push(Self::new(
            self.cells.symmetric_difference(&other.cells),
            self.mines_contained - other.mines_contained,
        ));
    }

    fn intersection_forced_inference(&self, other: &Self, out: &mut Vec<Self>) {
        if !self.cells.intersects(&other.cells)
            || self.cells.is_superset(&other.cells)
            || other.cells.is_superset(&self.cells)
        {
            return;
        }
        let exclusive = self.cells.difference(&other.cells);
        if self.mines_contained < other.mines_contained
            || self.mines_contained - other.mines_contained != exclusive.len()
        {
            return;
        }
        // Every cell exclusive to self must be a mine, so everything
        // exclusive to other is safe and the overlap carries other's count.
        out.push(Self::new(
            exclusive,
            self.mines_contained - other.mines_contained,
        ));
        out.push(Self::new(other.cells.difference(&self.cells), 0));
        out.push(Self::new(
            self.cells.intersection(&other.cells),
            other.mines_contained,
        ));
    }
}
