use crate::core::table::OperationTable;

/// The two-sided identity `e` (`e ⊕ x == x ⊕ e == x` for all `x`), if the table has one.
///
/// Requires a complete table.
pub fn identity_element(table: &OperationTable) -> Option<usize> {
    if !table.is_complete() {
        return None;
    }
    let n = table.order();
    (0..n).find(|&e| (0..n).all(|x| table.get(e, x) == Some(x) && table.get(x, e) == Some(x)))
}

/// Every element has a two-sided inverse with respect to `identity`.
pub fn has_inverses(table: &OperationTable, identity: usize) -> bool {
    let n = table.order();
    (0..n).all(|a| {
        (0..n).any(|b| table.get(a, b) == Some(identity) && table.get(b, a) == Some(identity))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_identity_wherever_it_is_labelled() {
        let z2_at_0 = OperationTable::from_rows(2, &[[0, 1], [1, 0]]).unwrap();
        assert_eq!(identity_element(&z2_at_0), Some(0));
        let z2_at_1 = OperationTable::from_rows(2, &[[1, 0], [0, 1]]).unwrap();
        assert_eq!(identity_element(&z2_at_1), Some(1));
        assert!(has_inverses(&z2_at_1, 1));
    }

    #[test]
    fn null_semigroup_has_no_identity() {
        let t = OperationTable::from_rows(2, &[[0, 0], [0, 0]]).unwrap();
        assert_eq!(identity_element(&t), None);
    }
}
