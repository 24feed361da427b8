use crate::core::table::OperationTable;

/// `i ⊕ j == j ⊕ i` for every pair `i <= j` where both products are defined.
pub fn is_partially_commutative(table: &OperationTable) -> bool {
    let n = table.order();
    for i in 0..n {
        for j in i..n {
            let (Some(ij), Some(ji)) = (table.get(i, j), table.get(j, i)) else {
                continue;
            };
            if ij != ji {
                return false;
            }
        }
    }
    true
}

/// Full commutativity. Incomplete tables are never commutative.
pub fn is_commutative(table: &OperationTable) -> bool {
    table.is_complete() && is_partially_commutative(table)
}
