//! The constraint-inference engine behind the autonomous Minesweeper player.
//!
//! Every revealed clue becomes a [`Fact`]: "exactly K of these N hidden
//! cells are mines". Facts combine pairwise into new, more specific facts
//! ([`Fact::infer`]); the live set is held by a [`FactStore`] partitioned
//! into certain and uncertain facts; and [`DeductionPlayer`] drives the
//! prune → infer → inject → emit cycle that turns certainty into moves and,
//! only when no certainty exists, falls back to the statistically safest
//! guess.
//!
//! Strategies implement the [`Player`] trait and are composed into the game
//! loop by dependency injection; [`RandomPlayer`] is the guessing baseline
//! the engine is benchmarked against.
//!
//! # Examples
//!
//! ```
//! use minesweeper_core::{CellId, CellSet};
//! use minesweeper_solver::Fact;
//!
//! let cells = |ids: &[usize]| ids.iter().map(|&i| CellId::new(i)).collect::<CellSet>();
//!
//! // "2 of {a, b, c} are mines" combined with "1 of {a, b} is a mine"
//! // pins the third cell as a mine.
//! let outer = Fact::new(cells(&[0, 1, 2]), 2);
//! let inner = Fact::new(cells(&[0, 1]), 1);
//! assert_eq!(outer.infer(&inner), vec![Fact::new(cells(&[2]), 1)]);
//! ```

pub use self::{
    config::*, deduction_player::*, error::*, fact::*, fact_store::*, player::*, random_player::*,
};

mod config;
mod deduction_player;
mod error;
mod fact;
mod fact_store;
mod player;
mod random_player;
