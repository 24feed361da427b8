use crate::core::table::OperationTable;

/// The newest row shares no value with any earlier row in the same column.
///
/// Only the last row is checked: earlier rows were checked against their own predecessors when
/// they were appended.
pub fn last_row_columns_unique(table: &OperationTable) -> bool {
    let len = table.len();
    let Some(last) = len.checked_sub(1) else {
        return true;
    };
    let newest = table.row(last);
    (0..last).all(|k| {
        table
            .row(k)
            .iter()
            .zip(newest)
            .all(|(above, below)| above != below)
    })
}

fn is_permutation(values: impl Iterator<Item = usize>, n: usize) -> bool {
    let mut seen = vec![false; n];
    for v in values {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    seen.iter().all(|&s| s)
}

/// Every row and every column is a permutation of `0..n`.
pub fn is_latin_square(table: &OperationTable) -> bool {
    if !table.is_complete() {
        return false;
    }
    let n = table.order();
    let rows_ok = table.rows().all(|row| is_permutation(row.iter().copied(), n));
    let cols_ok = (0..n).all(|c| is_permutation(table.rows().map(|row| row[c]), n));
    rows_ok && cols_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_column_value_in_newest_row_is_rejected() {
        let mut t = OperationTable::from_rows(3, &[[0, 1, 2]]).unwrap();
        t.push_row(&[1, 2, 0]);
        assert!(last_row_columns_unique(&t));
        t.push_row(&[2, 1, 0]);
        assert!(!last_row_columns_unique(&t));
    }

    #[test]
    fn empty_and_single_row_tables_pass() {
        let t = OperationTable::empty(3);
        assert!(last_row_columns_unique(&t));
        let t = OperationTable::from_rows(3, &[[2, 2, 2]]).unwrap();
        assert!(last_row_columns_unique(&t));
    }

    #[test]
    fn cyclic_square_is_latin_but_constant_table_is_not() {
        let rows: Vec<Vec<usize>> = (0..5).map(|r| (0..5).map(|c| (r + c) % 5).collect()).collect();
        assert!(is_latin_square(&OperationTable::from_rows(5, &rows).unwrap()));

        let t = OperationTable::from_rows(2, &[[0, 0], [0, 0]]).unwrap();
        assert!(!is_latin_square(&t));
    }
}
