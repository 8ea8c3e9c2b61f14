//! The live collection of facts, partitioned by certainty.

use std::collections::HashSet;

use minesweeper_core::{CellId, Move};

use crate::{Fact, SolverConfig};

/// Holds every live [`Fact`], split into a certain and an uncertain
/// partition.
///
/// A fact is promoted to the certain partition the instant it becomes
/// certain — at insertion, after a cell removal, or after inference — so
/// [`pop_certain_moves`](Self::pop_certain_moves) can rely on everything in
/// that partition being fully determined. Both partitions are hash sets:
/// re-deriving an already known fact is a no-op the caller can detect.
///
/// The store also tracks whether the whole-board fact has been injected in
/// the current stall cycle, because pruning must let oversized facts survive
/// long enough to combine with it.
///
/// # Examples
///
/// ```
/// use minesweeper_core::{CellId, CellSet};
/// use minesweeper_solver::{Fact, FactStore, SolverConfig};
///
/// let mut store = FactStore::new(SolverConfig::default());
/// let cells: CellSet = [CellId::new(0), CellId::new(1)].into_iter().collect();
///
/// assert!(store.add(Fact::new(cells.clone(), 1)));
/// // A structurally equal fact teaches nothing new.
/// assert!(!store.add(Fact::new(cells, 1)));
/// ```
#[derive(Debug, Clone)]
pub struct FactStore {
    certain: HashSet<Fact>,
    uncertain: HashSet<Fact>,
    global_fact_added: bool,
    config: SolverConfig,
}

impl FactStore {
    /// Creates an empty store with the given tuning parameters.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self {
            certain: HashSet::new(),
            uncertain: HashSet::new(),
            global_fact_added: false,
            config,
        }
    }

    /// Returns the number of live facts across both partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.certain.len() + self.uncertain.len()
    }

    /// Returns `true` if no facts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.certain.is_empty() && self.uncertain.is_empty()
    }

    /// Returns `true` if at least one certain fact is live.
    #[must_use]
    pub fn has_certain(&self) -> bool {
        !self.certain.is_empty()
    }

    /// Returns `true` if at least one uncertain fact is live.
    #[must_use]
    pub fn has_uncertain(&self) -> bool {
        !self.uncertain.is_empty()
    }

    /// Returns `true` if the whole-board fact was injected this stall cycle.
    #[must_use]
    pub const fn global_fact_added(&self) -> bool {
        self.global_fact_added
    }

    /// Records that the whole-board fact has been injected.
    pub fn mark_global_fact_added(&mut self) {
        self.global_fact_added = true;
    }

    /// Ends the current stall cycle, allowing a future re-injection.
    pub fn clear_global_fact_added(&mut self) {
        self.global_fact_added = false;
    }

    /// Adds a fact to the partition matching its certainty.
    ///
    /// Returns `false` — nothing new was learned — for an empty fact or a
    /// duplicate of a live fact.
    pub fn add(&mut self, fact: Fact) -> bool {
        if fact.is_empty() {
            return false;
        }
        if fact.is_certain() {
            self.certain.insert(fact)
        } else {
            self.uncertain.insert(fact)
        }
    }

    /// Adds every fact of an iterator, returning `true` if at least one was
    /// new.
    pub fn add_all<I>(&mut self, facts: I) -> bool
    where
        I: IntoIterator<Item = Fact>,
    {
        let mut added = false;
        for fact in facts {
            added |= self.add(fact);
        }
        added
    }

    /// Updates every fact containing `cell` after the board settled it.
    ///
    /// Each containing fact — certain or not — is touched exactly once:
    /// revealed cells are removed with the mine count intact, flagged cells
    /// decrement it. Facts that become certain are promoted; facts that
    /// become empty are discarded.
    pub fn remove_cell(&mut self, cell: CellId, flagged: bool) {
        let mut touched = Vec::new();
        for partition in [&mut self.certain, &mut self.uncertain] {
            let containing: Vec<Fact> = partition
                .iter()
                .filter(|fact| fact.cells().contains(cell))
                .cloned()
                .collect();
            for fact in containing {
                partition.remove(&fact);
                touched.push(fact);
            }
        }
        for mut fact in touched {
            if flagged {
                fact.flag_cell(cell);
            } else {
                fact.reveal_cell(cell);
            }
            self.add(fact);
        }
    }

    /// Runs one full round of pairwise inference over the uncertain facts.
    ///
    /// Every ordered pair is combined and all results added. Returns `true`
    /// if at least one new fact was learned. The round is skipped entirely
    /// when there is nothing to combine or when the uncertain partition
    /// exceeds the configured ceiling — past that point the quadratic sweep
    /// costs more than the extra precision is worth.
    pub fn infer(&mut self) -> bool {
        if self.uncertain.is_empty() || self.uncertain.len() > self.config.max_inference_facts {
            return false;
        }
        log::trace!("inference round over {} facts", self.uncertain.len());
        let mut inferred = HashSet::new();
        for left in &self.uncertain {
            for right in &self.uncertain {
                inferred.extend(left.infer(right));
            }
        }
        self.add_all(inferred)
    }

    /// Discards empty facts, and uncertain facts above the size ceiling.
    ///
    /// Oversized facts are kept while the whole-board fact is injected:
    /// combining with it is the one moment they pay for themselves.
    pub fn prune(&mut self) {
        self.certain.retain(|fact| !fact.is_empty());
        self.uncertain.retain(|fact| !fact.is_empty());
        if !self.global_fact_added {
            let ceiling = self.config.max_fact_cells;
            self.uncertain.retain(|fact| fact.len() <= ceiling);
        }
    }

    /// Returns the uncertain fact with the highest safety, or `fallback` if
    /// none exist.
    #[must_use]
    pub fn safest(&self, fallback: Fact) -> Fact {
        let mut safest = fallback;
        for fact in &self.uncertain {
            if safest.is_empty() || fact.safety() > safest.safety() {
                safest = fact.clone();
            }
        }
        safest
    }

    /// Converts every certain fact into moves and clears the certain
    /// partition.
    ///
    /// A fact made of nothing but mines flags each member; a mine-free fact
    /// reveals each member. Moves are deduplicated across facts.
    pub fn pop_certain_moves(&mut self) -> Vec<Move> {
        let mut seen = HashSet::new();
        let mut moves = Vec::new();
        for fact in self.certain.drain() {
            let flag = fact.mines_contained() == fact.len();
            for cell in fact.cells() {
                let mv = if flag { Move::flag(cell) } else { Move::reveal(cell) };
                if seen.insert(mv) {
                    moves.push(mv);
                }
            }
        }
        moves
    }
}

impl Default for FactStore {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use minesweeper_core::CellSet;

    use super::*;

    fn fact(ids: &[usize], mines: usize) -> Fact {
        Fact::new(ids.iter().map(|&i| CellId::new(i)).collect(), mines)
    }

    fn store_with(facts: &[Fact]) -> FactStore {
        let mut store = FactStore::new(SolverConfig::default());
        store.add_all(facts.iter().cloned());
        store
    }

    #[test]
    fn test_add_partitions_by_certainty() {
        let mut store = FactStore::default();

        assert!(store.add(fact(&[1, 2], 1)));
        assert!(store.add(fact(&[3, 4], 2)));
        assert!(store.has_certain());
        assert!(store.has_uncertain());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_rejects_empty_and_duplicates() {
        let mut store = FactStore::default();

        assert!(!store.add(Fact::new(CellSet::new(), 0)));
        assert!(store.add(fact(&[1, 2], 1)));
        assert!(!store.add(fact(&[2, 1], 1)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_remove_cell_reveal_semantics() {
        let mut store = store_with(&[fact(&[1, 2, 3], 1)]);

        store.remove_cell(CellId::new(1), false);
        assert!(!store.has_certain());
        assert!(store.has_uncertain());

        // Removing down to one cell with one mine promotes to certain.
        store.remove_cell(CellId::new(2), false);
        assert!(store.has_certain());
        assert!(!store.has_uncertain());
    }

    #[test]
    fn test_remove_cell_flag_semantics() {
        let mut store = store_with(&[fact(&[1, 2, 3], 1)]);

        store.remove_cell(CellId::new(1), true);
        // One mine accounted for: the remainder is certainly safe.
        assert!(store.has_certain());
        let moves = store.pop_certain_moves();
        assert!(moves.contains(&Move::reveal(CellId::new(2))));
        assert!(moves.contains(&Move::reveal(CellId::new(3))));
    }

    #[test]
    fn test_remove_cell_discards_emptied_facts() {
        let mut store = store_with(&[fact(&[1], 1)]);

        store.remove_cell(CellId::new(1), true);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_cell_touches_both_partitions() {
        let mut store = store_with(&[fact(&[1, 2], 1), fact(&[1, 3], 2)]);

        store.remove_cell(CellId::new(1), true);
        // Uncertain {1,2}:1 became {2}:0, certain {1,3}:2 became {3}:1.
        let moves = store.pop_certain_moves();
        assert!(moves.contains(&Move::reveal(CellId::new(2))));
        assert!(moves.contains(&Move::flag(CellId::new(3))));
    }

    #[test]
    fn test_infer_derives_subset_fact() {
        let mut store = store_with(&[fact(&[1, 2, 3], 2), fact(&[1, 2], 1)]);

        assert!(store.infer());
        assert!(store.has_certain());
        assert_eq!(store.pop_certain_moves(), vec![Move::flag(CellId::new(3))]);
    }

    #[test]
    fn test_infer_reports_fixed_point() {
        let mut store = store_with(&[fact(&[1, 2, 3], 2), fact(&[1, 2], 1)]);

        assert!(store.infer());
        assert!(!store.infer());
    }

    #[test]
    fn test_infer_skips_empty_store() {
        let mut store = FactStore::default();
        assert!(!store.infer());
    }

    #[test]
    fn test_infer_skips_oversized_partition() {
        let config = SolverConfig {
            max_inference_facts: 1,
            ..SolverConfig::default()
        };
        let mut store = FactStore::new(config);
        store.add(fact(&[1, 2, 3], 2));
        store.add(fact(&[1, 2], 1));

        assert!(!store.infer());
    }

    #[test]
    fn test_prune_drops_oversized_uncertain_facts() {
        let mut store = store_with(&[fact(&[1, 2], 1), fact(&(1..=12).collect::<Vec<_>>(), 3)]);

        store.prune();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_prune_spares_oversized_facts_while_global_fact_is_live() {
        let mut store = store_with(&[fact(&(1..=12).collect::<Vec<_>>(), 3)]);

        store.mark_global_fact_added();
        store.prune();
        assert_eq!(store.len(), 1);

        store.clear_global_fact_added();
        store.prune();
        assert!(store.is_empty());
    }

    #[test]
    fn test_prune_is_idempotent() {
        let mut store = store_with(&[
            fact(&[1, 2], 1),
            fact(&[3, 4, 5], 1),
            fact(&(1..=12).collect::<Vec<_>>(), 3),
        ]);

        store.prune();
        let after_once = store.clone();
        store.prune();
        assert_eq!(store.len(), after_once.len());
        assert_eq!(store.has_uncertain(), after_once.has_uncertain());
    }

    #[test]
    fn test_safest_picks_highest_safety() {
        let store = store_with(&[fact(&[1, 2], 1), fact(&[3, 4, 5, 6], 1)]);

        let safest = store.safest(fact(&[9], 0));
        // The fallback (safety 1.0) beats both uncertain facts here.
        assert_eq!(safest, fact(&[9], 0));

        let safest = store.safest(fact(&[9], 1));
        // 3/4 safe beats 1/2 safe and the all-mine fallback.
        assert_eq!(safest, fact(&[3, 4, 5, 6], 1));
    }

    #[test]
    fn test_safest_falls_back_when_no_uncertain_facts() {
        let store = FactStore::default();
        assert_eq!(store.safest(fact(&[1], 0)), fact(&[1], 0));
    }

    #[test]
    fn test_pop_certain_moves_flags_and_reveals() {
        let mut store = store_with(&[fact(&[1, 2], 2), fact(&[3], 0)]);

        let moves = store.pop_certain_moves();
        assert_eq!(moves.len(), 3);
        assert!(moves.contains(&Move::flag(CellId::new(1))));
        assert!(moves.contains(&Move::flag(CellId::new(2))));
        assert!(moves.contains(&Move::reveal(CellId::new(3))));
        assert!(!store.has_certain());
    }

    #[test]
    fn test_pop_certain_moves_deduplicates() {
        let mut store = store_with(&[fact(&[1], 0), fact(&[1, 2], 0)]);

        let moves = store.pop_certain_moves();
        assert_eq!(moves.len(), 2);
    }
}
