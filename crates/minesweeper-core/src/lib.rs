//! Core board-side data model for the Minesweeper solver.
//!
//! This crate provides the mechanical collaborators the constraint engine
//! reasons about:
//!
//! - [`CellId`]: a stable, copyable handle to one board cell
//! - [`CellSet`]: an order-independent set of cell handles with the set
//!   algebra constraint inference needs
//! - [`Minefield`]: the board itself — construction, reveal/flag/unflag with
//!   their side effects (cascade reveal, mine-trip signaling), and the
//!   queries a player uses to build constraints
//! - [`Move`]: a fully specified player action
//!
//! The solver lives in `minesweeper-solver`; this crate has no knowledge of
//! constraints or strategies.
//!
//! # Examples
//!
//! ```
//! use minesweeper_core::{CellId, Minefield, RevealOutcome};
//!
//! // A 3x3 board with a single mine in the top-left corner and a first
//! // click in the opposite corner.
//! let mut board = Minefield::with_mines_at(3, 3, [CellId::new(0)], CellId::new(8))?;
//!
//! // Revealing the zero-clue corner cascades across the zero region.
//! let outcome = board.reveal(board.first_click())?;
//! assert!(outcome.is_revealed());
//! assert!(board.is_cleared());
//! # Ok::<(), minesweeper_core::BoardError>(())
//! ```

pub use self::{board::*, cell::*, cell_set::*, moves::*};

mod board;
mod cell;
mod cell_set;
mod moves;
