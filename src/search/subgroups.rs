//! Subgroup enumeration for `(Zm × Zn, +)`.
//!
//! The search grows a working subset by whole combinations of fresh elements. For every subset
//! size `1..=m·n` and every combination of that size (drawn from the product-ordered element
//! list) that is disjoint from the working subset, the combination is appended; if the union is
//! closed under addition mod `(m, n)` it is recorded (once per distinct set) and extended
//! further. The combination is removed again before the next one is tried.
//!
//! Closure alone is enough: a non-empty finite subset of a group closed under the operation
//! always contains the identity and all inverses. The empty subgroup is never produced.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::core::pair::{universe, Pair, PairSet};
use crate::core::subgroup::Subgroup;
use crate::rules::closure::is_closed_subset;
use crate::scenario::{Moduli, SearchError};
use crate::search::candidates::Combinations;
use crate::search::stats::StatsTracker;
use crate::search::SearchOutcome;

struct SubgroupSearch {
    universe: Vec<Pair>,
    /// Working subset in insertion order.
    solution: Vec<Pair>,
    /// Same elements as `solution`, for O(1) membership.
    members: PairSet,
    /// Canonical forms already recorded.
    seen: FxHashSet<Subgroup>,
    tracker: StatsTracker,
}

impl SubgroupSearch {
    fn new(moduli: Moduli) -> Self {
        Self {
            universe: universe(moduli),
            solution: Vec::with_capacity(moduli.size()),
            members: PairSet::new(moduli),
            seen: FxHashSet::default(),
            tracker: StatsTracker::new(),
        }
    }

    fn descend(&mut self) -> Result<(), SearchError> {
        self.tracker.enter_node();
        let total = self.universe.len();

        for size in 1..=total {
            let mut combos = Combinations::new(total, size);
            while let Some(picked) = combos.next_combination() {
                self.tracker.bump_candidates();
                if picked.iter().any(|&i| self.members.contains_index(i)) {
                    self.tracker.bump_skipped();
                    continue;
                }

                for &i in picked {
                    let p = self.universe[i];
                    self.solution.push(p);
                    self.members.insert(p);
                }

                let outcome = if is_closed_subset(&self.members) {
                    self.record().and_then(|()| self.descend())
                } else {
                    self.tracker.bump_pruned();
                    Ok(())
                };

                for _ in 0..size {
                    if let Some(p) = self.solution.pop() {
                        self.members.remove(p);
                    }
                }
                outcome?;
            }
        }
        Ok(())
    }

    fn record(&mut self) -> Result<(), SearchError> {
        let candidate = Subgroup::from_elements(self.solution.clone());
        if self.seen.contains(&candidate) {
            return Ok(());
        }
        self.tracker
            .try_reserve_set("record_subgroup", "seen_subgroups", &mut self.seen, 1)?;
        debug!(size = candidate.len(), elements = ?candidate.elements(), "subgroup recorded");
        self.seen.insert(candidate);
        self.tracker.bump_solutions();
        Ok(())
    }
}

/// All subgroups of `Zm × Zn`, ordered by size, then lexicographically by their sorted elements.
///
/// Fails with [`SearchError::InvalidModuli`] if `m < 1` or `n < 1`.
pub fn find_subgroups(m: usize, n: usize) -> Result<Vec<Subgroup>, SearchError> {
    Ok(find_subgroups_with_stats(m, n)?.structures)
}

/// Like [`find_subgroups`], also returning search counters.
pub fn find_subgroups_with_stats(
    m: usize,
    n: usize,
) -> Result<SearchOutcome<Subgroup>, SearchError> {
    let moduli = Moduli::new(m, n)?;
    info!(m, n, "enumerating subgroups of Zm x Zn");

    let mut search = SubgroupSearch::new(moduli);
    search.descend()?;

    let stats = search.tracker.stats();
    let mut structures: Vec<Subgroup> = search.seen.into_iter().collect();
    structures.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    info!(
        m,
        n,
        count = structures.len(),
        nodes = stats.nodes,
        skipped = stats.skipped,
        "subgroup enumeration finished"
    );
    Ok(SearchOutcome { structures, stats })
}
