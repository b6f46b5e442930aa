//! Table → record normalization.

use crate::model::record::Record;
use crate::model::sheet::RawTable;

/// Converts a table into addressable records, one per row.
///
/// `position` is always the index in the incoming (pre-reversal) table, so
/// status updates address the right backend row whatever the display order.
/// With `newest_first` the returned sequence is reversed, which is how every
/// production sheet is shown (rows are appended chronologically).
///
/// An empty table yields an empty vec; rows with missing values normalize
/// without error.
pub fn normalize(table: &RawTable, newest_first: bool) -> Vec<Record> {
    let mut records: Vec<Record> = table
        .rows
        .iter()
        .enumerate()
        .map(|(position, fields)| Record {
            position,
            fields: fields.clone(),
        })
        .collect();

    if newest_first {
        records.reverse();
    }
    records
}
