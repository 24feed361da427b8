//! Consistency predicates over partial and complete structures.
//!
//! Partial-table predicates treat a product whose row is not filled in yet as "not yet
//! determined" and skip it; only an inconsistency among rows already present rejects the table.
//! A complete table has no undefined products, so the same predicates become the full laws.

pub mod associativity;
pub mod closure;
pub mod commutativity;
pub mod identity;
pub mod latin;

use crate::core::table::OperationTable;

/// The set of laws a row-by-row table search must maintain.
///
/// `admits` is called right after a row is appended. It may assume every earlier prefix of the
/// table was already admitted.
pub trait TableLaw {
    fn admits(&self, table: &OperationTable) -> bool;
}

/// Associativity only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemigroupLaws;

impl TableLaw for SemigroupLaws {
    #[inline]
    fn admits(&self, table: &OperationTable) -> bool {
        associativity::is_partially_associative(table)
    }
}

/// Associativity, commutativity and column uniqueness of the newest row.
///
/// Rows are expected to be permutations already (the candidate generator guarantees it).
#[derive(Debug, Clone, Copy, Default)]
pub struct AbelianGroupLaws;

impl TableLaw for AbelianGroupLaws {
    #[inline]
    fn admits(&self, table: &OperationTable) -> bool {
        associativity::is_partially_associative(table)
            && commutativity::is_partially_commutative(table)
            && latin::last_row_columns_unique(table)
    }
}
