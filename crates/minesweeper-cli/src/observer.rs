//! Board rendering for interactive games.

use minesweeper_core::{Minefield, Move};
use minesweeper_game::GameObserver;

/// Prints each move and the resulting board to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintingObserver;

impl GameObserver for PrintingObserver {
    fn game_started(&mut self, board: &Minefield) {
        println!("{board}\n");
    }

    fn move_chosen(&mut self, _board: &Minefield, mv: Move) {
        println!("{mv}");
    }

    fn board_changed(&mut self, board: &Minefield) {
        println!("{board}\n");
    }

    fn game_finished(&mut self, board: &Minefield, won: bool) {
        println!("{board}");
        println!("{}", if won { "Victory!" } else { "Boom." });
    }
}
