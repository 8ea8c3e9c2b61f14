//! The rendering seam of the game loop.

use minesweeper_core::{Minefield, Move};

/// Receives game events for rendering or recording.
///
/// The session is constructed with an observer instead of consulting any
/// global display state; the unit observer `()` discards everything, which is
/// what benchmarks want, while an interactive front end can print each board.
/// Observers must never influence the game — they see state, they do not
/// change it.
pub trait GameObserver {
    /// Called once before the opening reveal.
    fn game_started(&mut self, board: &Minefield) {
        let _ = board;
    }

    /// Called for every move the player is about to execute.
    fn move_chosen(&mut self, board: &Minefield, mv: Move) {
        let _ = (board, mv);
    }

    /// Called after a move changed the board.
    fn board_changed(&mut self, board: &Minefield) {
        let _ = board;
    }

    /// Called once when the game ends, win or lose.
    fn game_finished(&mut self, board: &Minefield, won: bool) {
        let _ = (board, won);
    }
}

/// The silent observer.
impl GameObserver for () {}
