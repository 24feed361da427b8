//! Search counters and allocation guards.
//!
//! Enumerations explode combinatorially. Engines record what they did in a [`SearchStats`] and
//! grow their large buffers through `try_reserve` wrappers, so an allocation failure surfaces as
//! [`SearchError::AllocationFailed`] instead of a hard abort.

use rustc_hash::FxHashSet;

use crate::scenario::{SearchError, SearchStats};

#[derive(Debug, Clone, Default)]
/// Tracks counters during one top-level search.
pub struct StatsTracker {
    stats: SearchStats,
}

impl StatsTracker {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[inline]
    pub fn enter_node(&mut self) {
        self.stats.nodes = self.stats.nodes.saturating_add(1);
    }

    #[inline]
    pub fn bump_candidates(&mut self) {
        self.stats.candidates = self.stats.candidates.saturating_add(1);
    }

    #[inline]
    pub fn bump_pruned(&mut self) {
        self.stats.pruned = self.stats.pruned.saturating_add(1);
    }

    #[inline]
    pub fn bump_skipped(&mut self) {
        self.stats.skipped = self.stats.skipped.saturating_add(1);
    }

    #[inline]
    pub fn bump_solutions(&mut self) {
        self.stats.solutions = self.stats.solutions.saturating_add(1);
    }

    pub fn allocation_failed(&self, stage: &'static str, structure: &'static str) -> SearchError {
        SearchError::AllocationFailed {
            stage,
            structure,
            stats: self.stats,
        }
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| self.allocation_failed(stage, structure))
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| self.allocation_failed(stage, structure))
    }
}
