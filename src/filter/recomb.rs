use crate::core::query::RecombFilter;
use crate::core::recomb::{RecombRow, RecombTable};

/// True if the row satisfies every constraint present in the filter.
pub fn row_matches(row: &RecombRow<'_>, filter: &RecombFilter) -> bool {
    filter
        .chromosome_eq
        .as_deref()
        .map_or(true, |chromosome| row.chromosome == chromosome)
        && filter.position_le.map_or(true, |max| row.position <= max)
        && filter.position_ge.map_or(true, |min| row.position >= min)
        && filter.id_in.map_or(true, |id| row.id == id)
}

/// Build a new columnar table holding the matching rows, in table order.
pub fn filter_recomb(table: &RecombTable, filter: &RecombFilter) -> RecombTable {
    table.rows().filter(|row| row_matches(row, filter)).collect()
}
