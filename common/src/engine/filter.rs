//! Free-text search and pagination over the normalized record list.

use crate::model::record::Record;

/// The visible slice of the record set for one page, plus the page count
/// the pagination controls should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredPage {
    pub visible: Vec<Record>,
    pub page_count: usize,
}

/// Applies the query and cuts out the requested page (1-based).
///
/// A record matches the empty query trivially; otherwise it matches when
/// any field value contains the query as a case-insensitive substring.
/// Absent values match nothing.
///
/// `page_count` is `ceil(matches / page_size)` with a floor of 1, so a page
/// indicator renders consistently even over zero matches. Pure function:
/// the caller resets the page on query changes and clamps out-of-range
/// pages before calling.
pub fn filter(records: &[Record], query: &str, page: usize, page_size: usize) -> FilteredPage {
    let needle = query.to_lowercase();
    let matched: Vec<&Record> = records
        .iter()
        .filter(|record| {
            needle.is_empty()
                || record.fields.values().any(|value| {
                    value
                        .as_deref()
                        .is_some_and(|v| v.to_lowercase().contains(&needle))
                })
        })
        .collect();

    let page_count = matched.len().div_ceil(page_size).max(1);
    let start = (page.max(1) - 1) * page_size;
    let visible = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    FilteredPage {
        visible,
        page_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn records(values: &[&str]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(position, v)| Record {
                position,
                fields: BTreeMap::from([
                    ("name".to_string(), Some(v.to_string())),
                    ("obs".to_string(), None),
                ]),
            })
            .collect()
    }

    #[test]
    fn empty_query_returns_every_record() {
        let rs = records(&["Ana", "Bruno", "Carla"]);
        let page = filter(&rs, "", 1, 10);
        assert_eq!(page.visible, rs);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn full_value_query_always_matches_its_record() {
        let rs = records(&["Ana", "Bruno"]);
        let page = filter(&rs, "Bruno", 1, 10);
        assert_eq!(page.visible.len(), 1);
        assert_eq!(page.visible[0].position, 1);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let rs = records(&["Ana María", "Bruno"]);
        assert_eq!(filter(&rs, "marí", 1, 10).visible.len(), 1);
        assert_eq!(filter(&rs, "RUN", 1, 10).visible.len(), 1);
    }

    #[test]
    fn absent_values_never_match() {
        // JS would have matched "null" via String(null); here nulls are opaque.
        let rs = records(&["Ana"]);
        assert!(filter(&rs, "null", 1, 10).visible.is_empty());
    }

    #[test]
    fn pages_partition_the_match_set() {
        let rs = records(&["a1", "a2", "a3", "a4", "a5", "a6", "a7"]);
        let page_size = 3;
        let first = filter(&rs, "a", 1, page_size);
        assert_eq!(first.page_count, 3);

        let total: usize = (1..=first.page_count)
            .map(|p| filter(&rs, "a", p, page_size).visible.len())
            .sum();
        assert_eq!(total, rs.len());
        assert_eq!(filter(&rs, "a", 3, page_size).visible.len(), 1);
    }

    #[test]
    fn page_count_has_a_floor_of_one() {
        let rs = records(&["Ana"]);
        let page = filter(&rs, "zzz", 1, 10);
        assert!(page.visible.is_empty());
        assert_eq!(page.page_count, 1);

        assert_eq!(filter(&[], "", 1, 10).page_count, 1);
    }
}
