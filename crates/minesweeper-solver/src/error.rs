//! Errors surfaced by a player's decision logic.

/// A failure in a player's decision logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The player had neither a certain move nor a fact to guess from while
    /// the board was still uncleared.
    ///
    /// This indicates a bookkeeping bug — a board event the player never
    /// heard about — and is deliberately an error rather than a silent
    /// stall.
    #[display("no legal move available: fact bookkeeping lost track of the board")]
    NoMoveAvailable,
}
