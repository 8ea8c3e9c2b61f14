//! Stable cell identity.

use std::fmt::{self, Display};

/// A stable handle to one cell of a [`Minefield`](crate::Minefield).
///
/// Cells live in an arena owned by the minefield; a `CellId` is the cell's
/// index into that arena. The index never changes for the life of a game, so
/// constraints can reference cells by id without borrowing the board and
/// without ownership cycles between board and solver state.
///
/// # Examples
///
/// ```
/// use minesweeper_core::CellId;
///
/// let cell = CellId::new(7);
/// assert_eq!(cell.index(), 7);
/// assert_eq!(cell.to_string(), "#7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    /// Creates a cell id from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_the_index() {
        assert_eq!(CellId::new(0), CellId::new(0));
        assert_ne!(CellId::new(0), CellId::new(1));
        assert_eq!(CellId::new(42).index(), 42);
    }

    #[test]
    fn test_ordering_follows_index() {
        assert!(CellId::new(1) < CellId::new(2));
    }
}
