//! The constraint-driven strategy.

use std::{collections::VecDeque, fmt::Debug};

use minesweeper_core::{CellId, Minefield, Move};
use rand::{Rng, seq::IndexedRandom as _};

use crate::{Fact, FactStore, Player, SolverConfig, SolverError};

/// A strategy that plays by deduction and guesses only as a last resort.
///
/// Every revealed clue becomes a [`Fact`] over the clue cell's hidden,
/// unflagged neighbors. Facts live in a [`FactStore`] and are combined
/// pairwise until a certainty appears; certain facts become queued moves that
/// are executed before any further inference. When local knowledge stalls,
/// the whole-board fact (every hidden unflagged cell, the remaining mine
/// count) is injected once per stall to unblock the chain. Only when that
/// fails too does the player guess, picking a uniformly random cell from the
/// safest fact it knows — the one place a game can be lost.
///
/// # Examples
///
/// ```
/// use minesweeper_core::{CellId, Minefield};
/// use minesweeper_solver::{DeductionPlayer, Player as _};
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let mut board = Minefield::with_mines_at(3, 3, [CellId::new(4)], CellId::new(0))?;
/// let mut player = DeductionPlayer::new(Pcg64::seed_from_u64(0));
///
/// player.setup(&board);
/// if let minesweeper_core::RevealOutcome::Revealed(cells) = board.reveal(board.first_click())? {
///     for cell in cells {
///         player.on_revealed(&board, cell);
///     }
/// }
/// let mv = player.choose_move(&board)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct DeductionPlayer<R> {
    facts: FactStore,
    move_queue: VecDeque<Move>,
    config: SolverConfig,
    rng: R,
    num_guesses: usize,
}

impl<R> DeductionPlayer<R>
where
    R: Rng,
{
    /// Creates a deducing player with the default tuning.
    pub fn new(rng: R) -> Self {
        Self::with_config(SolverConfig::default(), rng)
    }

    /// Creates a deducing player with explicit tuning parameters.
    pub fn with_config(config: SolverConfig, rng: R) -> Self {
        Self {
            facts: FactStore::new(config),
            move_queue: VecDeque::new(),
            config,
            rng,
            num_guesses: 0,
        }
    }

    /// Returns how many guess moves this player has issued since
    /// [`setup`](Player::setup).
    ///
    /// Everything except a guess is provably correct, so this counts the
    /// opportunities the player had to lose.
    #[must_use]
    pub const fn num_guesses(&self) -> usize {
        self.num_guesses
    }

    /// The fact spanning every hidden, unflagged cell with the number of
    /// mines not yet flagged.
    fn global_fact(board: &Minefield) -> Fact {
        Fact::new(
            board.hidden_and_unflagged_cells(),
            board.num_mines() - board.num_flagged(),
        )
    }

    /// Drops queued moves that a board event has since settled.
    fn evict_queued_moves(&mut self, cell: CellId) {
        self.move_queue.retain(|mv| mv.cell() != cell);
    }

    /// Runs inference to a fixed point, injecting the whole-board fact once
    /// if the first pass stalls without certainty.
    fn infer_until_certain(&mut self, board: &Minefield) {
        loop {
            while !self.facts.has_certain() && self.facts.infer() {}
            if self.facts.has_certain() || self.facts.global_fact_added() {
                break;
            }
            let global = Self::global_fact(board);
            if global.len() >= self.config.max_global_fact_cells {
                log::debug!("whole-board fact spans {} cells, not injecting", global.len());
                break;
            }
            if !self.facts.add(global) {
                break;
            }
            log::debug!("injected the whole-board fact");
            self.facts.mark_global_fact_added();
            self.facts.prune();
        }
        // Whatever the injection unlocked has been derived; drop the
        // oversized facts it required before they breed.
        if self.facts.global_fact_added() {
            self.facts.clear_global_fact_added();
            self.facts.prune();
        }
    }

    /// Picks a uniformly random cell from the safest known fact.
    fn guess(&mut self, board: &Minefield) -> Result<Move, SolverError> {
        let safest = self.facts.safest(Self::global_fact(board));
        let candidates: Vec<CellId> = safest.cells().iter().collect();
        let cell = candidates
            .choose(&mut self.rng)
            .copied()
            .ok_or(SolverError::NoMoveAvailable)?;
        self.num_guesses += 1;
        log::debug!("guessing {cell} with safety {:.2}", safest.safety());
        Ok(Move::reveal(cell))
    }
}

impl<R> Player for DeductionPlayer<R>
where
    R: Rng + Debug,
{
    fn setup(&mut self, board: &Minefield) {
        let _ = board;
        self.facts = FactStore::new(self.config);
        self.move_queue.clear();
        self.num_guesses = 0;
    }

    fn on_revealed(&mut self, board: &Minefield, cell: CellId) {
        self.facts.remove_cell(cell, false);
        self.evict_queued_moves(cell);

        let Some(clue) = board.neighbor_mine_count(cell) else {
            return;
        };
        let neighbors = board.hidden_unflagged_neighbors(cell);
        let mines = usize::from(clue) - board.flagged_neighbor_count(cell);
        self.facts.add(Fact::new(neighbors, mines));
    }

    fn on_flagged(&mut self, board: &Minefield, cell: CellId) {
        let _ = board;
        self.facts.remove_cell(cell, true);
        self.evict_queued_moves(cell);
    }

    fn choose_move(&mut self, board: &Minefield) -> Result<Move, SolverError> {
        // Certainty already computed is exhausted before any new inference.
        if let Some(mv) = self.move_queue.pop_front() {
            return Ok(mv);
        }

        self.facts.prune();
        self.infer_until_certain(board);

        if self.facts.has_certain() {
            self.move_queue.extend(self.facts.pop_certain_moves());
        } else {
            let guess = self.guess(board)?;
            self.move_queue.push_back(guess);
        }
        self.move_queue
            .pop_front()
            .ok_or(SolverError::NoMoveAvailable)
    }

    fn clean_up(&mut self) {
        self.facts = FactStore::new(self.config);
        self.move_queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use minesweeper_core::RevealOutcome;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn player() -> DeductionPlayer<Pcg64> {
        DeductionPlayer::new(Pcg64::seed_from_u64(7))
    }

    /// Reveals a cell on the board and forwards the notifications the game
    /// session would send.
    fn reveal(board: &mut Minefield, player: &mut DeductionPlayer<Pcg64>, cell: CellId) {
        let RevealOutcome::Revealed(cells) = board.reveal(cell).unwrap() else {
            panic!("expected {cell} to be hidden");
        };
        for cell in cells {
            player.on_revealed(board, cell);
        }
    }

    fn flag(board: &mut Minefield, player: &mut DeductionPlayer<Pcg64>, cell: CellId) {
        assert!(board.flag(cell).unwrap());
        player.on_flagged(board, cell);
    }

    #[test]
    fn test_flags_forced_mine() {
        // ■ ◈ with a 1-clue on the left: the right cell must be the mine.
        let mut board =
            Minefield::with_mines_at(2, 1, [CellId::new(1)], CellId::new(0)).unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(0));
        assert_eq!(
            player.choose_move(&board).unwrap(),
            Move::flag(CellId::new(1))
        );
        assert_eq!(player.num_guesses(), 0);
    }

    #[test]
    fn test_reveals_forced_safe_cell() {
        // Row of three, mine on the left. The cascade from the right reveals
        // the middle 1-clue, which pins the mine.
        let mut board =
            Minefield::with_mines_at(3, 1, [CellId::new(0)], CellId::new(2)).unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(2));
        assert_eq!(
            player.choose_move(&board).unwrap(),
            Move::flag(CellId::new(0))
        );
    }

    #[test]
    fn test_flagging_resolves_the_remainder() {
        // Row of three, mine in the middle. Once the middle is flagged the
        // far cell is certainly safe.
        let mut board =
            Minefield::with_mines_at(3, 1, [CellId::new(1)], CellId::new(0)).unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(0));
        assert_eq!(
            player.choose_move(&board).unwrap(),
            Move::flag(CellId::new(1))
        );
        flag(&mut board, &mut player, CellId::new(1));

        assert_eq!(
            player.choose_move(&board).unwrap(),
            Move::reveal(CellId::new(2))
        );
        assert_eq!(player.num_guesses(), 0);
    }

    #[test]
    fn test_global_fact_unblocks_local_stall() {
        // Mine in the center: the opening 1-clue alone proves nothing, but
        // combined with the whole-board fact the five non-neighbor cells are
        // certainly safe.
        let mut board =
            Minefield::with_mines_at(3, 3, [CellId::new(4)], CellId::new(0)).unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(0));
        let mv = player.choose_move(&board).unwrap();
        assert!(!mv.is_flag());
        assert!(!board.neighbors(CellId::new(0)).contains(&mv.cell()));
        assert_eq!(player.num_guesses(), 0);
    }

    #[test]
    fn test_guesses_when_nothing_is_deducible() {
        // A 1-clue over three corner neighbors with one mine among them:
        // no certainty exists and the player must gamble.
        let mut board =
            Minefield::with_mines_at(2, 2, [CellId::new(0)], CellId::new(3)).unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(3));
        let mv = player.choose_move(&board).unwrap();
        assert!(!mv.is_flag());
        assert_ne!(mv.cell(), CellId::new(3));
        assert_eq!(player.num_guesses(), 1);
    }

    #[test]
    fn test_queue_drains_before_new_inference() {
        // Two independent forced mines arrive as one batch of certain moves;
        // the second is served from the queue.
        let mut board =
            Minefield::with_mines_at(5, 1, [CellId::new(0), CellId::new(4)], CellId::new(2))
                .unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(2));
        let first = player.choose_move(&board).unwrap();
        let second = player.choose_move(&board).unwrap();
        let mut flagged: Vec<CellId> = vec![first.cell(), second.cell()];
        flagged.sort_unstable();

        assert!(first.is_flag() && second.is_flag());
        assert_eq!(flagged, vec![CellId::new(0), CellId::new(4)]);
    }

    #[test]
    fn test_stale_queued_moves_are_evicted() {
        let mut board =
            Minefield::with_mines_at(7, 1, [CellId::new(0), CellId::new(4)], CellId::new(2))
                .unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(2));
        let first = player.choose_move(&board).unwrap();
        flag(&mut board, &mut player, first.cell());

        // The twin of the executed move is settled out of band; the queued
        // copy must not be replayed.
        let other = if first.cell() == CellId::new(0) {
            CellId::new(4)
        } else {
            CellId::new(0)
        };
        flag(&mut board, &mut player, other);

        // With both mines accounted for, the next move is a certain reveal
        // of one of the untouched cells, not the stale queued flag.
        let mv = player.choose_move(&board).unwrap();
        assert!(!mv.is_flag());
        assert!([CellId::new(5), CellId::new(6)].contains(&mv.cell()));
        assert_eq!(player.num_guesses(), 0);
    }

    #[test]
    fn test_setup_resets_per_game_state() {
        let mut board =
            Minefield::with_mines_at(2, 2, [CellId::new(0)], CellId::new(3)).unwrap();
        let mut player = player();
        player.setup(&board);

        reveal(&mut board, &mut player, CellId::new(3));
        player.choose_move(&board).unwrap();
        assert_eq!(player.num_guesses(), 1);

        let fresh = Minefield::with_mines_at(2, 2, [CellId::new(0)], CellId::new(3)).unwrap();
        player.setup(&fresh);
        assert_eq!(player.num_guesses(), 0);
    }
}
