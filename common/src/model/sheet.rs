use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column key the backend injects into each row for the Drive attachment,
/// without declaring it in the sheet's header row.
pub const ATTACHMENT_KEY: &str = "pdf_drive_id";

/// Bookkeeping key the backend injects with the 1-based sheet row number.
/// Redundant with [`super::record::Record::position`], so it is not carried
/// into the normalized table.
pub const ROW_NUMBER_KEY: &str = "sheet_row_number";

/// Wire payload of a sheet-data endpoint
/// (`GET {base}/{data-path}?spreadsheet_id=…&range_name=…`).
///
/// `headers` is the sheet's header row. Each entry of `data` is one data row
/// as a loose JSON object: values may be strings, numbers or null, and the
/// backend adds `pdf_drive_id` / `sheet_row_number` keys that are absent
/// from `headers`.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct SheetFeed {
    pub headers: Vec<String>,
    pub data: Vec<HashMap<String, Value>>,
    /// Informational note the backend attaches when the sheet is empty.
    #[serde(default)]
    pub message: Option<String>,
}

/// An immutable header/row table where every row key is one of `headers`.
///
/// Built once per fetch from a [`SheetFeed`] and replaced wholesale on
/// re-fetch. Cell values are `None` where the sheet had no value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<BTreeMap<String, Option<String>>>,
}

impl SheetFeed {
    /// Converts the loose wire rows into a [`RawTable`].
    ///
    /// - scalar values are stringified, JSON null becomes `None`;
    /// - a trailing `pdf_drive_id` header is appended when rows carry that
    ///   key but the sheet header row does not, so the attachment stays
    ///   addressable without breaking the keys ⊆ headers invariant;
    /// - the injected `sheet_row_number` key is dropped (row position is
    ///   the join key);
    /// - row keys not covered by any header are discarded.
    pub fn into_table(self) -> RawTable {
        let mut headers = self.headers;
        let has_attachment_rows = self
            .data
            .iter()
            .any(|row| matches!(row.get(ATTACHMENT_KEY), Some(v) if !v.is_null()));
        if has_attachment_rows && !headers.iter().any(|h| h == ATTACHMENT_KEY) {
            headers.push(ATTACHMENT_KEY.to_string());
        }

        let rows = self
            .data
            .into_iter()
            .map(|mut raw| {
                headers
                    .iter()
                    .map(|header| (header.clone(), raw.remove(header).and_then(cell_text)))
                    .collect()
            })
            .collect();

        RawTable { headers, rows }
    }
}

/// Renders one JSON cell as display text. Null maps to `None`; numbers and
/// booleans keep their JSON rendering.
fn cell_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed_from(value: Value) -> SheetFeed {
        serde_json::from_value(value).expect("feed should deserialize")
    }

    #[test]
    fn mixed_value_rows_deserialize_and_stringify() {
        let feed = feed_from(json!({
            "headers": ["name", "legajo"],
            "data": [
                { "name": "Ana", "legajo": 123, "sheet_row_number": 2 },
                { "name": null, "legajo": "456", "sheet_row_number": 3 }
            ]
        }));

        let table = feed.into_table();
        assert_eq!(table.headers, vec!["name", "legajo"]);
        assert_eq!(table.rows[0]["legajo"].as_deref(), Some("123"));
        assert_eq!(table.rows[1]["name"].as_deref(), None);
    }

    #[test]
    fn attachment_key_becomes_trailing_header() {
        let feed = feed_from(json!({
            "headers": ["name"],
            "data": [
                { "name": "Ana", "pdf_drive_id": "abc", "sheet_row_number": 2 }
            ]
        }));

        let table = feed.into_table();
        assert_eq!(table.headers, vec!["name", "pdf_drive_id"]);
        assert_eq!(table.rows[0]["pdf_drive_id"].as_deref(), Some("abc"));
    }

    #[test]
    fn attachment_header_not_added_when_rows_never_carry_one() {
        let feed = feed_from(json!({
            "headers": ["name"],
            "data": [
                { "name": "Ana", "pdf_drive_id": null, "sheet_row_number": 2 }
            ]
        }));

        assert_eq!(feed.into_table().headers, vec!["name"]);
    }

    #[test]
    fn row_number_key_is_dropped() {
        let feed = feed_from(json!({
            "headers": ["name"],
            "data": [ { "name": "Ana", "sheet_row_number": 2 } ]
        }));

        let table = feed.into_table();
        assert!(table.rows[0].keys().all(|k| k != ROW_NUMBER_KEY));
    }

    #[test]
    fn rows_only_hold_declared_headers() {
        let feed = feed_from(json!({
            "headers": ["name", "email"],
            "data": [ { "name": "Ana", "sorpresa": "x" } ]
        }));

        let table = feed.into_table();
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.rows[0]["email"].as_deref(), None);
    }
}
