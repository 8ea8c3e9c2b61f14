//! Drives one player against one minefield.
//!
//! A [`Session`] owns nothing but an observer: the caller supplies the board
//! and the strategy, and [`Session::play`] runs the game to its end —
//! performing the opening reveal, executing the player's moves, relaying
//! every board change back through the [`Player`](minesweeper_solver::Player)
//! hooks, and converting a tripped mine into a lost game rather than an
//! error.
//!
//! # Examples
//!
//! ```
//! use minesweeper_core::Minefield;
//! use minesweeper_game::Session;
//! use minesweeper_solver::DeductionPlayer;
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//!
//! let mut rng = Pcg64::seed_from_u64(42);
//! let mut board = Minefield::generate(9, 9, 10, &mut rng)?;
//! let mut player = DeductionPlayer::new(rng);
//!
//! let won = Session::new().play(&mut board, &mut player)?;
//! println!("{}", if won { "cleared" } else { "boom" });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, observer::*, session::*};

mod error;
mod observer;
mod session;
