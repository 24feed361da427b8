//! Row-at-a-time backtracking shared by the semigroup and Abelian group engines.
//!
//! The table is a single buffer: a candidate row is pushed, checked against the law set, kept
//! for the recursive call if admitted, and popped again before the next candidate is tried.
//! Complete tables are recorded as independent snapshots.

use tracing::debug;

use crate::core::table::OperationTable;
use crate::rules::TableLaw;
use crate::scenario::{Order, SearchError};
use crate::search::candidates::CandidateRows;
use crate::search::stats::StatsTracker;
use crate::search::SearchOutcome;

pub(crate) struct RowSearch<'a, L> {
    laws: &'a L,
    /// Candidates for row 0.
    first: &'a CandidateRows,
    /// Candidates for every later row.
    rest: &'a CandidateRows,
    table: OperationTable,
    found: Vec<OperationTable>,
    tracker: StatsTracker,
}

impl<'a, L: TableLaw> RowSearch<'a, L> {
    pub(crate) fn new(
        order: Order,
        laws: &'a L,
        first: &'a CandidateRows,
        rest: &'a CandidateRows,
        tracker: StatsTracker,
    ) -> Self {
        debug_assert_eq!(first.width(), order.get());
        debug_assert_eq!(rest.width(), order.get());
        Self {
            laws,
            first,
            rest,
            table: OperationTable::empty(order.get()),
            found: Vec::new(),
            tracker,
        }
    }

    pub(crate) fn run(mut self) -> Result<SearchOutcome<OperationTable>, SearchError> {
        self.descend()?;
        Ok(SearchOutcome {
            structures: self.found,
            stats: self.tracker.stats(),
        })
    }

    fn descend(&mut self) -> Result<(), SearchError> {
        self.tracker.enter_node();
        let candidates = if self.table.is_empty() {
            self.first
        } else {
            self.rest
        };
        for row in candidates.iter() {
            self.try_row(row)?;
        }
        Ok(())
    }

    fn try_row(&mut self, row: &[usize]) -> Result<(), SearchError> {
        self.tracker.bump_candidates();
        self.table.push_row(row);

        let outcome = if !self.laws.admits(&self.table) {
            self.tracker.bump_pruned();
            Ok(())
        } else if self.table.is_complete() {
            self.record()
        } else {
            self.descend()
        };

        self.table.pop_row();
        outcome
    }

    fn record(&mut self) -> Result<(), SearchError> {
        self.tracker
            .try_reserve_vec("record_table", "solutions", &mut self.found, 1)?;
        self.found.push(self.table.clone());
        self.tracker.bump_solutions();
        debug!(index = self.found.len(), rows = ?self.table.to_rows(), "table recorded");
        Ok(())
    }
}
