use serde::{Deserialize, Serialize};

use crate::scenario::SearchError;

/// A (possibly partial) Cayley table on `{0, .., order-1}`.
///
/// Row `i` holds the results of `i ⊕ x` for every `x`. A partial table has fewer than `order`
/// rows; lookups into rows that do not exist yet return `None` (see [`OperationTable::get`]).
///
/// Cells are stored flat in row-major order so that the search can push/pop rows without
/// reallocating once capacity for a full table has been reserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "TableRepr", try_from = "TableRepr")]
pub struct OperationTable {
    order: usize,
    cells: Vec<usize>,
}

/// Serialized form: `{ "order": n, "rows": [[..], ..] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableRepr {
    order: usize,
    rows: Vec<Vec<usize>>,
}

impl OperationTable {
    /// An empty table of the given order with capacity for all `order` rows.
    pub fn empty(order: usize) -> Self {
        Self {
            order,
            cells: Vec::with_capacity(order.saturating_mul(order)),
        }
    }

    /// Build a table from explicit rows.
    ///
    /// Accepts partial tables (fewer than `order` rows) but rejects rows of the wrong width and
    /// entries outside `0..order`.
    pub fn from_rows<R: AsRef<[usize]>>(order: usize, rows: &[R]) -> Result<Self, SearchError> {
        if order == 0 {
            return Err(SearchError::InvalidTable {
                reason: "order must be at least 1".to_string(),
            });
        }
        if rows.len() > order {
            return Err(SearchError::InvalidTable {
                reason: format!("{} rows for a table of order {order}", rows.len()),
            });
        }

        let mut table = Self::empty(order);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != order {
                return Err(SearchError::InvalidTable {
                    reason: format!("row {i} has {} entries, expected {order}", row.len()),
                });
            }
            if let Some(&bad) = row.iter().find(|&&e| e >= order) {
                return Err(SearchError::InvalidTable {
                    reason: format!("row {i} contains {bad}, outside 0..{order}"),
                });
            }
            table.push_row(row);
        }
        Ok(table)
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of rows currently present.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len() / self.order.max(1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.len() == self.order
    }

    /// `a ⊕ b`, or `None` if row `a` has not been filled in yet.
    ///
    /// This is the guarded lookup used by every partial-table predicate: an undefined product
    /// means "not yet determined", never "violated".
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> Option<usize> {
        if b >= self.order {
            return None;
        }
        self.cells.get(a * self.order + b).copied()
    }

    /// Row `i`.
    ///
    /// # Panics
    /// Panics if row `i` is not present.
    #[inline]
    pub fn row(&self, i: usize) -> &[usize] {
        &self.cells[i * self.order..(i + 1) * self.order]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.cells.chunks_exact(self.order.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        self.rows().map(<[usize]>::to_vec).collect()
    }

    /// Append a row. The caller guarantees `row.len() == order`.
    #[inline]
    pub fn push_row(&mut self, row: &[usize]) {
        debug_assert_eq!(row.len(), self.order);
        debug_assert!(self.len() < self.order);
        self.cells.extend_from_slice(row);
    }

    /// Remove the most recently appended row (no-op on an empty table).
    #[inline]
    pub fn pop_row(&mut self) {
        let keep = self.cells.len().saturating_sub(self.order);
        self.cells.truncate(keep);
    }
}

impl From<OperationTable> for TableRepr {
    fn from(t: OperationTable) -> Self {
        TableRepr {
            order: t.order,
            rows: t.to_rows(),
        }
    }
}

impl TryFrom<TableRepr> for OperationTable {
    type Error = SearchError;

    fn try_from(r: TableRepr) -> Result<Self, Self::Error> {
        OperationTable::from_rows(r.order, &r.rows)
    }
}
