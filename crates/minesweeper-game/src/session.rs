//! The game loop.

use minesweeper_core::{BoardError, CellId, Minefield, Move, RevealOutcome};
use minesweeper_solver::Player;

use crate::{GameError, GameObserver};

/// Plays games by composing a board, a player, and an observer.
///
/// The session is the only component that mutates the board: the player names
/// moves, the session executes them and relays the resulting board events
/// back through the player's notification hooks. One session can play any
/// number of games in sequence.
///
/// # Examples
///
/// ```
/// use minesweeper_core::{CellId, Minefield};
/// use minesweeper_game::Session;
/// use minesweeper_solver::DeductionPlayer;
/// use rand::SeedableRng as _;
/// use rand_pcg::Pcg64;
///
/// let mut board = Minefield::with_mines_at(3, 3, [CellId::new(0)], CellId::new(8))?;
/// let mut player = DeductionPlayer::new(Pcg64::seed_from_u64(1));
///
/// assert!(Session::new().play(&mut board, &mut player)?);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session<O = ()> {
    observer: O,
}

impl Session {
    /// Creates a session that plays silently.
    #[must_use]
    pub const fn new() -> Self {
        Self { observer: () }
    }
}

impl<O> Session<O>
where
    O: GameObserver,
{
    /// Creates a session that reports game events to `observer`.
    pub const fn with_observer(observer: O) -> Self {
        Self { observer }
    }

    /// Plays one game to its end.
    ///
    /// Performs the opening reveal on the board's designated first click,
    /// then alternates between asking the player for a move and executing it
    /// until the board is cleared or a reveal trips a mine. Returns `Ok(true)`
    /// for a cleared board and `Ok(false)` for a tripped mine.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Player`] if the player cannot produce a move for
    /// an uncleared board, or [`GameError::Board`] if it produces one the
    /// board rejects as out of bounds.
    pub fn play<P>(&mut self, board: &mut Minefield, player: &mut P) -> Result<bool, GameError>
    where
        P: Player,
    {
        player.setup(board);
        self.observer.game_started(board);

        let won = self.run(board, player)?;

        player.clean_up();
        self.observer.game_finished(board, won);
        log::debug!("game over: {}", if won { "cleared" } else { "mine tripped" });
        Ok(won)
    }

    fn run<P>(&mut self, board: &mut Minefield, player: &mut P) -> Result<bool, GameError>
    where
        P: Player,
    {
        if !self.reveal(board, player, board.first_click())? {
            return Ok(false);
        }
        while !board.is_cleared() {
            let mv = player.choose_move(board).map_err(GameError::Player)?;
            log::trace!("executing {mv}");
            self.observer.move_chosen(board, mv);

            let survived = if mv.is_flag() {
                if board.flag(mv.cell())? {
                    player.on_flagged(board, mv.cell());
                }
                true
            } else {
                self.reveal(board, player, mv.cell())?
            };
            if !survived {
                return Ok(false);
            }
            self.observer.board_changed(board);
        }
        Ok(true)
    }

    /// Reveals `cell`, forwarding every newly opened cell to the player.
    ///
    /// Returns `Ok(false)` for a tripped mine, the one board "error" that is
    /// an outcome rather than a fault.
    fn reveal<P>(
        &mut self,
        board: &mut Minefield,
        player: &mut P,
        cell: CellId,
    ) -> Result<bool, GameError>
    where
        P: Player,
    {
        match board.reveal(cell) {
            Ok(RevealOutcome::Revealed(cells)) => {
                for cell in cells {
                    player.on_revealed(board, cell);
                }
                Ok(true)
            }
            Ok(RevealOutcome::AlreadySettled) => Ok(true),
            Err(BoardError::MineTripped) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}
