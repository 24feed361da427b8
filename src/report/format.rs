//! Human-readable rendering of tables and subgroups.
//!
//! Elements are shown as `a₁, a₂, ..`: element `i` gets the 1-based subscript `i + 1`.

use std::borrow::Cow;

use crate::core::subgroup::Subgroup;
use crate::core::table::OperationTable;

const SUBSCRIPT_LABELS: [&str; 20] = [
    "₁", "₂", "₃", "₄", "₅", "₆", "₇", "₈", "₉", "₁₀", "₁₁", "₁₂", "₁₃", "₁₄", "₁₅", "₁₆", "₁₇",
    "₁₈", "₁₉", "₂₀",
];

const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Subscript label of element `index` (`0 → "₁"`).
///
/// The first 20 labels come from a fixed table; larger indices are spelled digit by digit.
pub fn subscript(index: usize) -> Cow<'static, str> {
    if let Some(&label) = SUBSCRIPT_LABELS.get(index) {
        return Cow::Borrowed(label);
    }
    let label = (index + 1)
        .to_string()
        .bytes()
        .map(|d| SUBSCRIPT_DIGITS[usize::from(d - b'0')])
        .collect();
    Cow::Owned(label)
}

pub fn element_label(index: usize) -> String {
    format!("a{}", subscript(index))
}

/// One line per row: `[ a₁ a₂ .. ]`.
pub fn format_operation_table(table: &OperationTable) -> String {
    table
        .rows()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|&e| element_label(e)).collect();
            format!("[ {} ]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `((0, 0), (1, 0))`
pub fn format_subgroup(subgroup: &Subgroup) -> String {
    let pairs: Vec<String> = subgroup.iter().map(|p| p.to_string()).collect();
    format!("({})", pairs.join(", "))
}
