//! The strategy interface the game loop composes against.

use std::fmt::Debug;

use minesweeper_core::{CellId, Minefield, Move};

use crate::SolverError;

/// A Minesweeper playing strategy.
///
/// The game session owns the minefield and injects a `Player` into the
/// loop: it forwards board events to the notification hooks and asks
/// [`choose_move`](Self::choose_move) whenever a decision is due. All hooks
/// default to no-ops so trivial strategies only implement move selection.
///
/// Implementations must treat the hooks as their only source of board
/// changes — a move the session executed on their behalf is reported back
/// through the same hooks as a cascade reveal.
pub trait Player: Debug {
    /// Prepares the player for a fresh board, discarding any state from a
    /// previous game.
    fn setup(&mut self, board: &Minefield) {
        let _ = board;
    }

    /// Called once for every newly revealed cell, cascade reveals included.
    fn on_revealed(&mut self, board: &Minefield, cell: CellId) {
        let _ = (board, cell);
    }

    /// Called when a cell was flagged.
    fn on_flagged(&mut self, board: &Minefield, cell: CellId) {
        let _ = (board, cell);
    }

    /// Called when a cell's flag was removed.
    fn on_unflagged(&mut self, board: &Minefield, cell: CellId) {
        let _ = (board, cell);
    }

    /// Chooses the next move for a board that is not yet cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoMoveAvailable`] if the strategy cannot name
    /// any cell to act on — a bookkeeping bug, since an uncleared board
    /// always has hidden cells.
    fn choose_move(&mut self, board: &Minefield) -> Result<Move, SolverError>;

    /// Releases per-game state after a game ends, win or lose.
    fn clean_up(&mut self) {}
}
