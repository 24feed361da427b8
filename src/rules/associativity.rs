use crate::core::table::OperationTable;

/// `(a ⊕ b) ⊕ c == a ⊕ (b ⊕ c)` for every triple whose four products are all defined.
///
/// Triples that touch a missing row are skipped, so a partial table is rejected only when the
/// rows present already contradict associativity.
pub fn is_partially_associative(table: &OperationTable) -> bool {
    let n = table.order();
    for a in 0..n {
        for b in 0..n {
            let Some(ab) = table.get(a, b) else {
                continue;
            };
            for c in 0..n {
                let Some(lhs) = table.get(ab, c) else {
                    continue;
                };
                let Some(bc) = table.get(b, c) else {
                    continue;
                };
                let Some(rhs) = table.get(a, bc) else {
                    continue;
                };
                if lhs != rhs {
                    return false;
                }
            }
        }
    }
    true
}

/// Full associativity. Incomplete tables are never associative.
pub fn is_associative(table: &OperationTable) -> bool {
    table.is_complete() && is_partially_associative(table)
}
