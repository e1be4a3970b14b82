//! The view derivation pipeline: filter -> sort -> paginate.
//!
//! Every function here is pure. Records are never copied or mutated; the
//! derived rows are references into the caller's slice, so deriving twice
//! from the same inputs yields rows pointing at the very same records.

use serde::{Deserialize, Serialize};

use crate::data::record::Record;

use super::compare::{compare_values, stable_sort_by};
use super::filter::FilterMatcher;
use super::options::{Filter, Pagination, Sort};

/// The rows to display for the current state, plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<'a, R> {
    /// The current page's rows, in display order
    pub rows: Vec<&'a R>,
    /// True iff fewer rows than a full page came back
    pub is_last_page: bool,
    /// Number of records that passed the filter, before pagination
    pub total_items: usize,
}

impl<R> DerivedView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Filter then sort, without paginating.
///
/// Sorting is skipped entirely when the direction is `None`, so the filtered
/// records keep their source order.
pub fn select_rows<'a, R: Record>(
    records: &'a [R],
    sort: &Sort,
    filter: Option<&Filter>,
) -> Vec<&'a R> {
    let mut rows: Vec<&'a R> = match FilterMatcher::active(filter) {
        Some(matcher) => records.iter().filter(|r| matcher.matches(*r)).collect(),
        None => records.iter().collect(),
    };

    if !sort.direction.is_none() {
        let key = sort.key.as_str();
        let direction = sort.direction;
        stable_sort_by(&mut rows, |a, b| {
            compare_values(&a.field(key), &b.field(key), direction)
        });
    }

    rows
}

/// Derive the visible page.
///
/// `is_last_page` is `rows.len() < page_size`: a final page that is exactly
/// full reports `false`, and a page past the end reports `true` with no rows.
pub fn derive_view<'a, R: Record>(
    records: &'a [R],
    pagination: Pagination,
    sort: &Sort,
    filter: Option<&Filter>,
) -> DerivedView<'a, R> {
    let selected = select_rows(records, sort, filter);
    let total_items = selected.len();

    let start = pagination.start().min(total_items);
    let end = start.saturating_add(pagination.page_size).min(total_items);
    let rows = selected[start..end].to_vec();
    let is_last_page = rows.len() < pagination.page_size;

    log::debug!(
        "derived page {} (size {}): {} of {} rows, last={}",
        pagination.page,
        pagination.page_size,
        rows.len(),
        total_items,
        is_last_page
    );

    DerivedView {
        rows,
        is_last_page,
        total_items,
    }
}

/// Filter and sort with no pagination: every selected row, flagged as the
/// last page.
pub fn derive_unpaginated<'a, R: Record>(
    records: &'a [R],
    sort: &Sort,
    filter: Option<&Filter>,
) -> DerivedView<'a, R> {
    let rows = select_rows(records, sort, filter);
    DerivedView {
        total_items: rows.len(),
        rows,
        is_last_page: true,
    }
}

/// Pagination footer data: "6 - 10 of 12" plus prev/next availability.
///
/// Row numbers are 1-based and computed from the cursor alone, the same way
/// the footer has always shown them; an empty table reads "1 - 0 of 0".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStatus {
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
    /// 1-based number of the first row on the page
    pub first: usize,
    /// 1-based number of the last row on the page
    pub last: usize,
    pub total: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageStatus {
    pub fn new(pagination: Pagination, total_items: usize, is_last_page: bool) -> Self {
        let first = pagination.start().saturating_add(1);
        let last = pagination
            .page
            .saturating_add(1)
            .saturating_mul(pagination.page_size)
            .min(total_items);

        PageStatus {
            page: pagination.page,
            page_size: pagination.page_size,
            first,
            last,
            total: total_items,
            has_previous: pagination.page > 0,
            has_next: !is_last_page,
        }
    }

    pub fn label(&self) -> String {
        format!("{} - {} of {}", self.first, self.last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::options::SortDirection;
    use serde_json::{json, Value as Json};

    fn people() -> Vec<Json> {
        vec![
            json!({"id": 1, "name": "Alice", "age": 25}),
            json!({"id": 2, "name": "Bob", "age": 30}),
            json!({"id": 3, "name": "Charlie", "age": 35}),
        ]
    }

    fn numbered(count: usize) -> Vec<Json> {
        (0..count).map(|i| json!({"id": i})).collect()
    }

    fn ids<R: Record>(view: &DerivedView<'_, R>) -> Vec<String> {
        view.rows.iter().map(|r| r.field("id").to_string()).collect()
    }

    #[test]
    fn test_filter_runs_before_sort() {
        let records = people();
        let view = derive_view(
            &records,
            Pagination::default(),
            &Sort::descending("age"),
            Some(&Filter::new("name", "li")),
        );

        let names: Vec<String> = view.rows.iter().map(|r| r.field("name").to_string()).collect();
        assert_eq!(names, vec!["Charlie", "Alice"]);
        assert_eq!(view.total_items, 2);
        assert!(view.is_last_page);
    }

    #[test]
    fn test_pagination_boundaries() {
        let records = numbered(5);
        let sort = Sort::unsorted("id");

        let page0 = derive_view(&records, Pagination::new(0, 2), &sort, None);
        assert_eq!(ids(&page0), vec!["0", "1"]);
        assert!(!page0.is_last_page);

        let page2 = derive_view(&records, Pagination::new(2, 2), &sort, None);
        assert_eq!(ids(&page2), vec!["4"]);
        assert!(page2.is_last_page);

        let page3 = derive_view(&records, Pagination::new(3, 2), &sort, None);
        assert!(page3.rows.is_empty());
        assert!(page3.is_last_page);
        assert_eq!(page3.total_items, 5);
    }

    #[test]
    fn test_full_final_page_reports_not_last() {
        let records = numbered(4);
        let view = derive_view(&records, Pagination::new(1, 2), &Sort::unsorted("id"), None);
        assert_eq!(view.rows.len(), 2);
        assert!(!view.is_last_page);
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let records = numbered(3);
        let view = derive_view(
            &records,
            Pagination::new(usize::MAX, 10),
            &Sort::unsorted("id"),
            None,
        );
        assert!(view.rows.is_empty());
        assert!(view.is_last_page);
    }

    #[test]
    fn test_empty_records() {
        let records: Vec<Json> = Vec::new();
        let view = derive_view(&records, Pagination::default(), &Sort::unsorted("id"), None);
        assert!(view.rows.is_empty());
        assert!(view.is_last_page);
        assert_eq!(view.total_items, 0);
    }

    #[test]
    fn test_none_direction_keeps_source_order() {
        let records = vec![
            json!({"id": 3}),
            json!({"id": 1}),
            json!({"id": 2}),
        ];
        let view = derive_view(
            &records,
            Pagination::default(),
            &Sort::new("id", SortDirection::None),
            None,
        );
        assert_eq!(ids(&view), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_ties_keep_source_order() {
        let records = vec![
            json!({"id": 1, "section": "Dairy"}),
            json!({"id": 2, "section": "Bakery"}),
            json!({"id": 3, "section": "Dairy"}),
            json!({"id": 4, "section": "Bakery"}),
        ];
        let asc = derive_view(&records, Pagination::default(), &Sort::ascending("section"), None);
        assert_eq!(ids(&asc), vec!["2", "4", "1", "3"]);

        let desc = derive_view(&records, Pagination::default(), &Sort::descending("section"), None);
        assert_eq!(ids(&desc), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_rows_reference_source_records() {
        let records = people();
        let first = derive_view(&records, Pagination::default(), &Sort::descending("age"), None);
        let second = derive_view(&records, Pagination::default(), &Sort::descending("age"), None);

        assert_eq!(first, second);
        assert!(std::ptr::eq(first.rows[0], &records[2]));
        assert!(std::ptr::eq(second.rows[0], &records[2]));
    }

    #[test]
    fn test_source_is_not_reordered() {
        let records = people();
        let before = records.clone();
        let _ = derive_view(&records, Pagination::default(), &Sort::descending("name"), None);
        assert_eq!(records, before);
    }

    #[test]
    fn test_unpaginated_returns_everything() {
        let records = numbered(12);
        let view = derive_unpaginated(&records, &Sort::unsorted("id"), None);
        assert_eq!(view.rows.len(), 12);
        assert_eq!(view.total_items, 12);
        assert!(view.is_last_page);
    }

    #[test]
    fn test_page_status() {
        let status = PageStatus::new(Pagination::new(1, 5), 12, false);
        assert_eq!(status.label(), "6 - 10 of 12");
        assert!(status.has_previous);
        assert!(status.has_next);
        assert_eq!((status.page, status.page_size), (1, 5));

        let status = PageStatus::new(Pagination::new(2, 5), 12, true);
        assert_eq!(status.label(), "11 - 12 of 12");
        assert!(!status.has_next);

        let status = PageStatus::new(Pagination::default(), 0, true);
        assert_eq!(status.label(), "1 - 0 of 0");
        assert!(!status.has_previous);
    }
}
