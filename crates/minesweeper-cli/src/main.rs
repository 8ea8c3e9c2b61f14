//! Command-line driver for the autonomous Minesweeper player.
//!
//! Three subcommands cover the life of the solver:
//!
//! - `play` renders a single game move by move
//! - `benchmark` measures the win rate on one board configuration
//! - `suite` runs the three classic difficulties and summarizes each with a
//!   mean win rate and its spread
//!
//! # Usage
//!
//! ```sh
//! cargo run --release -- play --width 16 --height 16 --mines 40
//! cargo run --release -- benchmark --runs 1000
//! cargo run --release -- --player random benchmark --runs 1000
//! cargo run --release -- suite --runs-per-set 200 --sets 20
//! cargo run --release -- --seed 7 play
//! ```

use std::{error::Error, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};
use minesweeper_core::Minefield;
use minesweeper_game::Session;
use minesweeper_solver::{DeductionPlayer, Player, RandomPlayer};
use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::observer::PrintingObserver;

mod observer;
mod stats;

/// The classic difficulty ladder: name, width, height, mines.
const DIFFICULTIES: [(&str, usize, usize, usize); 3] = [
    ("Beginner", 9, 9, 10),
    ("Intermediate", 16, 16, 40),
    ("Expert", 30, 16, 99),
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// RNG seed for reproducible boards and guesses.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Strategy to play with.
    #[arg(long, value_name = "PLAYER", default_value = "deduction")]
    player: PlayerKind,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlayerKind {
    /// The constraint-inference engine.
    Deduction,
    /// Uniformly random reveals, the benchmark floor.
    Random,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a single game, printing the board after every move.
    Play {
        /// Board width in cells.
        #[arg(long, default_value_t = 9)]
        width: usize,
        /// Board height in cells.
        #[arg(long, default_value_t = 9)]
        height: usize,
        /// Number of mines to lay.
        #[arg(long, default_value_t = 10)]
        mines: usize,
    },
    /// Play many games on one configuration and report the win rate.
    Benchmark {
        /// Board width in cells.
        #[arg(long, default_value_t = 9)]
        width: usize,
        /// Board height in cells.
        #[arg(long, default_value_t = 9)]
        height: usize,
        /// Number of mines to lay.
        #[arg(long, default_value_t = 10)]
        mines: usize,
        /// Number of games to play.
        #[arg(long, default_value_t = 1000)]
        runs: usize,
    },
    /// Run the three classic difficulties and summarize each.
    Suite {
        /// Games per set; each set yields one win-rate sample.
        #[arg(long, default_value_t = 200)]
        runs_per_set: usize,
        /// Sets per difficulty.
        #[arg(long, default_value_t = 20)]
        sets: usize,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    let mut rng = args
        .seed
        .map_or_else(|| Pcg64::from_rng(&mut rand::rng()), Pcg64::seed_from_u64);

    let result = match args.player {
        PlayerKind::Deduction => {
            let player = DeductionPlayer::new(Pcg64::seed_from_u64(rng.random()));
            run(&args.command, player, &mut rng)
        }
        PlayerKind::Random => {
            let player = RandomPlayer::new(Pcg64::seed_from_u64(rng.random()));
            run(&args.command, player, &mut rng)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<P>(command: &Command, mut player: P, rng: &mut Pcg64) -> Result<(), Box<dyn Error>>
where
    P: Player,
{
    match *command {
        Command::Play {
            width,
            height,
            mines,
        } => play(width, height, mines, &mut player, rng),
        Command::Benchmark {
            width,
            height,
            mines,
            runs,
        } => {
            let rate = benchmark(width, height, mines, runs, &mut player, rng)?;
            println!(
                "won {:.1}% of {runs} games on {width}x{height} with {mines} mines",
                rate * 100.0
            );
            Ok(())
        }
        Command::Suite { runs_per_set, sets } => suite(runs_per_set, sets, &mut player, rng),
    }
}

fn play<P>(
    width: usize,
    height: usize,
    mines: usize,
    player: &mut P,
    rng: &mut Pcg64,
) -> Result<(), Box<dyn Error>>
where
    P: Player,
{
    let mut board = Minefield::generate(width, height, mines, rng)?;
    let mut session = Session::with_observer(PrintingObserver);
    session.play(&mut board, player)?;
    Ok(())
}

/// Plays `runs` games and returns the fraction won.
///
/// A tripped mine counts as a loss and the run continues; only genuine
/// faults abort.
fn benchmark<P>(
    width: usize,
    height: usize,
    mines: usize,
    runs: usize,
    player: &mut P,
    rng: &mut Pcg64,
) -> Result<f64, Box<dyn Error>>
where
    P: Player,
{
    let mut session = Session::new();
    let mut wins = 0_usize;
    for i in 0..runs {
        if runs >= 10 && i % (runs / 10) == 0 {
            log::info!("game {i}/{runs}");
        }
        let mut board = Minefield::generate(width, height, mines, rng)?;
        if session.play(&mut board, player)? {
            wins += 1;
        }
    }
    #[expect(clippy::cast_precision_loss)]
    let rate = wins as f64 / runs as f64;
    Ok(rate)
}

fn suite<P>(
    runs_per_set: usize,
    sets: usize,
    player: &mut P,
    rng: &mut Pcg64,
) -> Result<(), Box<dyn Error>>
where
    P: Player,
{
    for (name, width, height, mines) in DIFFICULTIES {
        log::info!("running {name} ({width}x{height}, {mines} mines)");
        let rates = (0..sets)
            .map(|_| benchmark(width, height, mines, runs_per_set, player, rng))
            .collect::<Result<Vec<_>, _>>()?;
        println!(
            "{name:>12}: mean win rate {:.3}, sigma {:.3} over {sets} sets of {runs_per_set}",
            stats::mean(&rates),
            stats::std_dev(&rates),
        );
    }
    Ok(())
}
