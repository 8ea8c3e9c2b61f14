//! The guessing baseline.

use std::fmt::Debug;

use minesweeper_core::{CellId, Minefield, Move};
use rand::{Rng, seq::IndexedRandom as _};

use crate::{Player, SolverError};

/// A strategy that reveals a uniformly random hidden, unflagged cell.
///
/// Useless at winning, useful as the benchmark floor the deducing player is
/// measured against.
#[derive(Debug)]
pub struct RandomPlayer<R> {
    rng: R,
}

impl<R> RandomPlayer<R>
where
    R: Rng,
{
    /// Creates a random player drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R> Player for RandomPlayer<R>
where
    R: Rng + Debug,
{
    fn choose_move(&mut self, board: &Minefield) -> Result<Move, SolverError> {
        let candidates: Vec<CellId> = board.hidden_and_unflagged_cells().iter().collect();
        let cell = candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(SolverError::NoMoveAvailable)?;
        Ok(Move::reveal(cell))
    }
}
