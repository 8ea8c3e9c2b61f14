//! Tuning knobs for the constraint engine.

/// Default ceiling on the uncertain-fact count above which an inference
/// round is skipped.
pub const DEFAULT_MAX_INFERENCE_FACTS: usize = 60;

/// Default cell-count ceiling above which an uncertain fact is pruned.
pub const DEFAULT_MAX_FACT_CELLS: usize = 8;

/// Default largest whole-board fact considered worth injecting.
pub const DEFAULT_MAX_GLOBAL_FACT_CELLS: usize = 16;

/// Runtime/precision tradeoffs of the constraint engine.
///
/// Pairwise inference is quadratic in the number of live facts, and large
/// facts breed more large facts, so the engine bounds both: rounds are
/// skipped entirely past [`max_inference_facts`](Self::max_inference_facts)
/// uncertain facts, and facts wider than
/// [`max_fact_cells`](Self::max_fact_cells) cells are pruned between moves.
/// The whole-board fact is only injected while it spans fewer than
/// [`max_global_fact_cells`](Self::max_global_fact_cells) cells — on a
/// larger board it is both useless and expensive.
///
/// The defaults are empirically tuned; treat them as a starting point, not
/// derived truths.
///
/// # Examples
///
/// ```
/// use minesweeper_solver::SolverConfig;
///
/// let config = SolverConfig {
///     max_fact_cells: 12,
///     ..SolverConfig::default()
/// };
/// assert_eq!(config.max_inference_facts, 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Skip an inference round when more uncertain facts than this are live.
    pub max_inference_facts: usize,
    /// Prune uncertain facts spanning more cells than this.
    pub max_fact_cells: usize,
    /// Do not inject a whole-board fact spanning this many cells or more.
    pub max_global_fact_cells: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_inference_facts: DEFAULT_MAX_INFERENCE_FACTS,
            max_fact_cells: DEFAULT_MAX_FACT_CELLS,
            max_global_fact_cells: DEFAULT_MAX_GLOBAL_FACT_CELLS,
        }
    }
}
