//! Semigroup enumeration: every associative operation table on `{0, .., n-1}`.
//!
//! Candidate rows range over all `n^n` tuples (a semigroup row need not be a bijection). A row is
//! kept as soon as it does not contradict associativity among the rows already placed.

use tracing::info;

use crate::core::table::OperationTable;
use crate::rules::SemigroupLaws;
use crate::scenario::{Order, SearchError};
use crate::search::candidates::cartesian_rows;
use crate::search::stats::StatsTracker;
use crate::search::tables::RowSearch;
use crate::search::SearchOutcome;

/// All associative tables of order `n`, in candidate order.
///
/// Fails with [`SearchError::InvalidOrder`] if `n < 1`.
pub fn generate_semigroups(n: usize) -> Result<Vec<OperationTable>, SearchError> {
    Ok(generate_semigroups_with_stats(n)?.structures)
}

/// Like [`generate_semigroups`], also returning search counters.
pub fn generate_semigroups_with_stats(
    n: usize,
) -> Result<SearchOutcome<OperationTable>, SearchError> {
    let order = Order::new(n)?;
    info!(n, "enumerating semigroups");

    let tracker = StatsTracker::new();
    let rows = cartesian_rows(order.get(), &tracker)?;
    let outcome = RowSearch::new(order, &SemigroupLaws, &rows, &rows, tracker).run()?;

    info!(
        n,
        count = outcome.structures.len(),
        nodes = outcome.stats.nodes,
        pruned = outcome.stats.pruned,
        "semigroup enumeration finished"
    );
    Ok(outcome)
}
