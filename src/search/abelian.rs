//! Abelian group enumeration: every commutative, associative Latin-square table on
//! `{0, .., n-1}`.
//!
//! Candidate rows are the `n!` permutations of `0..n`, so every row is a bijection by
//! construction. A row is kept if the partial table stays associative and commutative and the
//! new row repeats no value already present in any of its columns.
//!
//! Results are labeled tables: the same group appears once per relabeling (for `n = 2` both
//! `[[0,1],[1,0]]` and `[[1,0],[0,1]]` are found). [`AbelianOptions::identity_at_zero`]
//! restricts the search to tables whose identity is element `0`.

use tracing::info;

use crate::core::table::OperationTable;
use crate::rules::AbelianGroupLaws;
use crate::scenario::{Order, SearchError};
use crate::search::candidates::{permutation_rows, CandidateRows};
use crate::search::stats::StatsTracker;
use crate::search::tables::RowSearch;
use crate::search::SearchOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbelianOptions {
    /// Pin row 0 to the identity permutation, so `0 ⊕ x = x` (and, by commutativity,
    /// `x ⊕ 0 = x`).
    pub identity_at_zero: bool,
}

/// All Abelian group tables of order `n`, in candidate order.
///
/// Fails with [`SearchError::InvalidOrder`] if `n < 1`.
pub fn generate_abelian_groups(n: usize) -> Result<Vec<OperationTable>, SearchError> {
    Ok(generate_abelian_groups_with(n, AbelianOptions::default())?.structures)
}

/// Like [`generate_abelian_groups`], also returning search counters.
pub fn generate_abelian_groups_with_stats(
    n: usize,
) -> Result<SearchOutcome<OperationTable>, SearchError> {
    generate_abelian_groups_with(n, AbelianOptions::default())
}

/// Like [`generate_abelian_groups_with_stats`], with options.
pub fn generate_abelian_groups_with(
    n: usize,
    options: AbelianOptions,
) -> Result<SearchOutcome<OperationTable>, SearchError> {
    let order = Order::new(n)?;
    info!(n, identity_at_zero = options.identity_at_zero, "enumerating Abelian groups");

    let tracker = StatsTracker::new();
    let rows = permutation_rows(order.get(), &tracker)?;
    // The first permutation generated is the identity 0, 1, .., n-1.
    let pinned;
    let first = if options.identity_at_zero {
        pinned = CandidateRows::single(rows.get(0));
        &pinned
    } else {
        &rows
    };

    let outcome = RowSearch::new(order, &AbelianGroupLaws, first, &rows, tracker).run()?;

    info!(
        n,
        count = outcome.structures.len(),
        nodes = outcome.stats.nodes,
        pruned = outcome.stats.pruned,
        "Abelian group enumeration finished"
    );
    Ok(outcome)
}
