//! The minefield: cell arena, neighbor topology, and reveal/flag mechanics.

use std::{
    collections::VecDeque,
    fmt::{self, Display},
};

use rand::{Rng, RngExt};

use crate::{CellId, CellSet};

/// Largest fraction of a board that may be mined.
///
/// Construction rejects denser boards: the rejection sampling used to lay
/// mines needs room for the first-click safe zone, and denser boards are not
/// meaningfully playable anyway.
pub const MAX_MINE_DENSITY: f64 = 0.5;

/// Errors reported by minefield operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A reveal landed on a mine.
    ///
    /// This is the expected losing outcome of a game, not a bug; the game
    /// loop converts it into a lost game. It is a distinct variant so it can
    /// never be confused with a usage error.
    #[display("revealed a mine")]
    MineTripped,
    /// A cell id outside the board's arena was passed in.
    #[display("cell {cell} is out of bounds for a board of {num_cells} cells")]
    OutOfBounds {
        /// The offending cell id.
        cell: CellId,
        /// The number of cells in the board.
        num_cells: usize,
    },
    /// More mines were requested than [`MAX_MINE_DENSITY`] allows.
    #[display("{mines} mines do not fit a board of {num_cells} cells")]
    TooManyMines {
        /// The requested mine count.
        mines: usize,
        /// The number of cells in the board.
        num_cells: usize,
    },
}

/// The result of a successful (non-mine) reveal request.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum RevealOutcome {
    /// The cell was hidden and is now revealed.
    ///
    /// The list contains every newly revealed cell — the requested one plus
    /// any cells opened by the cascade across a zero-clue region — each
    /// exactly once, in reveal order.
    Revealed(Vec<CellId>),
    /// The cell was already revealed or is currently flagged; nothing
    /// changed.
    AlreadySettled,
}

#[derive(Debug, Clone, Default)]
struct Cell {
    mine: bool,
    revealed: bool,
    flagged: bool,
    neighbor_mines: u8,
    neighbors: Vec<CellId>,
}

/// A rectangular minefield with eight-neighbor adjacency.
///
/// The minefield owns all cells in an arena indexed by [`CellId`] and is the
/// single authority on board state: reveal and flag operations go through it,
/// and players learn about the board only through its queries. Revealing a
/// zero-clue cell cascades across the whole zero region; the newly revealed
/// cells are reported back in the [`RevealOutcome`] so the caller can notify
/// whoever is tracking the board.
///
/// # Examples
///
/// ```
/// use minesweeper_core::{CellId, Minefield};
///
/// // Deterministic layout: a 3x3 board, one mine at top-left.
/// let board = Minefield::with_mines_at(3, 3, [CellId::new(0)], CellId::new(8))?;
///
/// assert_eq!(board.num_cells(), 9);
/// assert_eq!(board.num_mines(), 1);
/// assert_eq!(board.hidden_and_unflagged_cells().len(), 9);
/// # Ok::<(), minesweeper_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Minefield {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
    num_mines: usize,
    num_flagged: usize,
    num_to_clear: usize,
    first_click: CellId,
}

impl Minefield {
    /// Generates a random minefield with a random first click.
    ///
    /// The first click and all of its neighbors are kept free of mines, so
    /// the opening reveal is always safe.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyMines`] if `num_mines` exceeds
    /// [`MAX_MINE_DENSITY`] of the board area.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn generate<R>(
        width: usize,
        height: usize,
        num_mines: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError>
    where
        R: Rng + ?Sized,
    {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        let first_click = CellId::new(rng.random_range(0..width * height));
        Self::generate_with_first_click(width, height, num_mines, first_click, rng)
    }

    /// Generates a random minefield around a chosen first click.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooManyMines`] if `num_mines` exceeds
    /// [`MAX_MINE_DENSITY`] of the board area, or
    /// [`BoardError::OutOfBounds`] if `first_click` is not on the board.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn generate_with_first_click<R>(
        width: usize,
        height: usize,
        num_mines: usize,
        first_click: CellId,
        rng: &mut R,
    ) -> Result<Self, BoardError>
    where
        R: Rng + ?Sized,
    {
        let mut board = Self::empty(width, height, num_mines, first_click)?;

        let num_cells = board.cells.len();
        #[expect(clippy::cast_precision_loss)]
        if (num_mines as f64) >= (num_cells as f64) * MAX_MINE_DENSITY {
            return Err(BoardError::TooManyMines {
                mines: num_mines,
                num_cells,
            });
        }

        // Rejection sampling: the first click and its neighbors never carry
        // a mine.
        let mut laid = 0;
        while laid < num_mines {
            let candidate = CellId::new(rng.random_range(0..num_cells));
            if candidate == first_click
                || board.cells[first_click.index()].neighbors.contains(&candidate)
                || board.cells[candidate.index()].mine
            {
                continue;
            }
            board.lay_mine(candidate);
            laid += 1;
        }
        Ok(board)
    }

    /// Builds a minefield with an explicit mine layout.
    ///
    /// Intended for tests and reproductions; no safe zone is enforced around
    /// `first_click`, the caller controls the layout completely. Duplicate
    /// mine positions are collapsed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if any mine position or
    /// `first_click` is not on the board.
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero.
    pub fn with_mines_at(
        width: usize,
        height: usize,
        mines: impl IntoIterator<Item = CellId>,
        first_click: CellId,
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty(width, height, 0, first_click)?;
        for mine in mines {
            board.check_bounds(mine)?;
            if !board.cells[mine.index()].mine {
                board.lay_mine(mine);
                board.num_mines += 1;
            }
        }
        board.num_to_clear = board.cells.len() - board.num_mines;
        Ok(board)
    }

    fn empty(
        width: usize,
        height: usize,
        num_mines: usize,
        first_click: CellId,
    ) -> Result<Self, BoardError> {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        let num_cells = width * height;
        if first_click.index() >= num_cells {
            return Err(BoardError::OutOfBounds {
                cell: first_click,
                num_cells,
            });
        }
        let mut board = Self {
            cells: vec![Cell::default(); num_cells],
            width,
            height,
            num_mines,
            num_flagged: 0,
            num_to_clear: num_cells - num_mines,
            first_click,
        };
        board.assign_neighbors();
        Ok(board)
    }

    fn assign_neighbors(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let id = self.cell_id(x, y);
                let mut neighbors = Vec::with_capacity(8);
                for ny in y.saturating_sub(1)..=(y + 1).min(self.height - 1) {
                    for nx in x.saturating_sub(1)..=(x + 1).min(self.width - 1) {
                        if (nx, ny) != (x, y) {
                            neighbors.push(self.cell_id(nx, ny));
                        }
                    }
                }
                self.cells[id.index()].neighbors = neighbors;
            }
        }
    }

    fn lay_mine(&mut self, cell: CellId) {
        self.cells[cell.index()].mine = true;
        let neighbors = self.cells[cell.index()].neighbors.clone();
        for neighbor in neighbors {
            self.cells[neighbor.index()].neighbor_mines += 1;
        }
    }

    /// Returns the board width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the board height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of mines on the board.
    #[must_use]
    pub const fn num_mines(&self) -> usize {
        self.num_mines
    }

    /// Returns the number of currently flagged cells.
    #[must_use]
    pub const fn num_flagged(&self) -> usize {
        self.num_flagged
    }

    /// Returns the always-safe opening cell.
    #[must_use]
    pub const fn first_click(&self) -> CellId {
        self.first_click
    }

    /// Returns `true` once every non-mine cell has been revealed.
    #[must_use]
    pub const fn is_cleared(&self) -> bool {
        self.num_to_clear == 0
    }

    /// Converts board coordinates to a cell id.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the board.
    #[must_use]
    pub fn cell_id(&self, x: usize, y: usize) -> CellId {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside a {}x{} board",
            self.width,
            self.height
        );
        CellId::new(y * self.width + x)
    }

    /// Converts a cell id back to board coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn position(&self, cell: CellId) -> (usize, usize) {
        assert!(
            cell.index() < self.cells.len(),
            "cell {cell} is out of bounds for a board of {} cells",
            self.cells.len()
        );
        (cell.index() % self.width, cell.index() / self.width)
    }

    /// Returns `true` if the cell has been revealed.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn is_revealed(&self, cell: CellId) -> bool {
        self.cell(cell).revealed
    }

    /// Returns `true` if the cell is currently flagged.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn is_flagged(&self, cell: CellId) -> bool {
        self.cell(cell).flagged
    }

    /// Returns the ids of the cells adjacent to `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        &self.cell(cell).neighbors
    }

    /// Returns the neighbors of `cell` that are neither revealed nor
    /// flagged — the cells a fresh clue constrains.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn hidden_unflagged_neighbors(&self, cell: CellId) -> CellSet {
        self.cell(cell)
            .neighbors
            .iter()
            .copied()
            .filter(|&n| {
                let n = &self.cells[n.index()];
                !n.revealed && !n.flagged
            })
            .collect()
    }

    /// Returns how many neighbors of `cell` are currently flagged.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn flagged_neighbor_count(&self, cell: CellId) -> usize {
        self.cell(cell)
            .neighbors
            .iter()
            .filter(|n| self.cells[n.index()].flagged)
            .count()
    }

    /// Returns the number of mines adjacent to a revealed cell, or `None`
    /// if the cell has not been revealed yet.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is not on the board.
    #[must_use]
    pub fn neighbor_mine_count(&self, cell: CellId) -> Option<u8> {
        let cell = self.cell(cell);
        cell.revealed.then_some(cell.neighbor_mines)
    }

    /// Returns every cell that is still hidden and not flagged.
    #[must_use]
    pub fn hidden_and_unflagged_cells(&self) -> CellSet {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.revealed && !cell.flagged)
            .map(|(i, _)| CellId::new(i))
            .collect()
    }

    /// Reveals a cell.
    ///
    /// Revealing a flagged or already revealed cell is a no-op reported as
    /// [`RevealOutcome::AlreadySettled`]. Revealing a zero-clue cell
    /// cascades: the whole zero region and its numbered boundary are opened
    /// in one call, and every newly revealed cell is listed in the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::MineTripped`] if the cell is a mine, or
    /// [`BoardError::OutOfBounds`] if it is not on the board.
    pub fn reveal(&mut self, cell: CellId) -> Result<RevealOutcome, BoardError> {
        self.check_bounds(cell)?;
        {
            let target = &mut self.cells[cell.index()];
            if target.revealed || target.flagged {
                return Ok(RevealOutcome::AlreadySettled);
            }
            if target.mine {
                target.revealed = true;
                return Err(BoardError::MineTripped);
            }
        }

        // Flood the zero region. Only zero-clue cells enqueue their
        // neighbors, and a zero-clue cell by definition has no adjacent
        // mine, so the cascade can never trip one.
        let mut revealed = Vec::new();
        let mut queue = VecDeque::from([cell]);
        while let Some(id) = queue.pop_front() {
            {
                let cell = &mut self.cells[id.index()];
                if cell.revealed || cell.flagged {
                    continue;
                }
                cell.revealed = true;
            }
            self.num_to_clear -= 1;
            revealed.push(id);
            if self.cells[id.index()].neighbor_mines == 0 {
                queue.extend(self.cells[id.index()].neighbors.iter().copied());
            }
        }
        Ok(RevealOutcome::Revealed(revealed))
    }

    /// Flags a hidden cell as a mine.
    ///
    /// Returns `true` if the flag state changed; flagging a revealed or
    /// already flagged cell is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the cell is not on the board.
    pub fn flag(&mut self, cell: CellId) -> Result<bool, BoardError> {
        self.check_bounds(cell)?;
        let target = &mut self.cells[cell.index()];
        if target.revealed || target.flagged {
            return Ok(false);
        }
        target.flagged = true;
        self.num_flagged += 1;
        Ok(true)
    }

    /// Removes the flag from a cell.
    ///
    /// Returns `true` if the flag state changed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the cell is not on the board.
    pub fn unflag(&mut self, cell: CellId) -> Result<bool, BoardError> {
        self.check_bounds(cell)?;
        let target = &mut self.cells[cell.index()];
        if !target.flagged {
            return Ok(false);
        }
        target.flagged = false;
        self.num_flagged -= 1;
        Ok(true)
    }

    fn cell(&self, cell: CellId) -> &Cell {
        assert!(
            cell.index() < self.cells.len(),
            "cell {cell} is out of bounds for a board of {} cells",
            self.cells.len()
        );
        &self.cells[cell.index()]
    }

    fn check_bounds(&self, cell: CellId) -> Result<(), BoardError> {
        if cell.index() < self.cells.len() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                cell,
                num_cells: self.cells.len(),
            })
        }
    }
}

impl Display for Minefield {
    /// Renders the player-visible board, one row per line: `■` hidden, `⚑`
    /// flagged, `◈` a revealed mine, `·` a revealed zero, digits otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                let cell = &self.cells[self.cell_id(x, y).index()];
                match (cell.revealed, cell.flagged, cell.mine, cell.neighbor_mines) {
                    (false, true, _, _) => write!(f, "⚑")?,
                    (false, false, _, _) => write!(f, "■")?,
                    (true, _, true, _) => write!(f, "◈")?,
                    (true, _, false, 0) => write!(f, "·")?,
                    (true, _, false, n) => write!(f, "{n}")?,
                }
            }
        }
        Ok(())
    }
}
