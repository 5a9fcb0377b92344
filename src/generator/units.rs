//! Unit allocation arithmetic.
//!
//! `num_lines` only drives how many units exist and how many records each
//! unit emits. Both values come from integer division, so the emitted total
//! is `unit_count * per_unit` and the remainder is dropped on purpose.
//!
//! Example: `num_lines = 25` gives 3 units of 8 records (24 rows).

use crate::utils::config::{ROWS_PER_UNIT_DIVISOR, UNIT_PREFIX};

/// Number of units for a requested row count: `floor(num_lines / 10) + 1`
///
/// Always at least 1, even for `num_lines == 0`.
pub fn unit_count(num_lines: usize) -> usize {
    num_lines / ROWS_PER_UNIT_DIVISOR + 1
}

/// Records emitted by every unit: `floor(num_lines / unit_count)`
pub fn per_unit(num_lines: usize) -> usize {
    num_lines / unit_count(num_lines)
}

/// Total rows actually emitted for a requested row count
pub fn expected_rows(num_lines: usize) -> usize {
    unit_count(num_lines) * per_unit(num_lines)
}

/// Identifier of the unit with 1-based index `index`
pub fn unit_id(index: usize) -> String {
    format!("{}{}", UNIT_PREFIX, index)
}

/// Identifiers `Unit_1 ..= Unit_<count>`
pub fn unit_ids(count: usize) -> Vec<String> {
    (1..=count).map(unit_id).collect()
}
