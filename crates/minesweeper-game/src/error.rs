//! Failures that end a game abnormally.

use minesweeper_core::BoardError;
use minesweeper_solver::SolverError;

/// An error that aborts a game session.
///
/// A tripped mine is deliberately *not* represented here: it is the expected
/// losing outcome, handled inside [`Session::play`](crate::Session::play) and
/// reported as `Ok(false)`. What remains are genuine faults — a move the
/// board rejects or a player that cannot produce one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GameError {
    /// The board rejected a move for a reason other than a mine.
    #[display("board rejected a move: {_0}")]
    Board(BoardError),
    /// The player could not produce a move for an uncleared board.
    #[display("player failed: {_0}")]
    Player(SolverError),
}
