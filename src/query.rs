//! Filter, order and page a store snapshot.

use serde::Deserialize;
use tracing::debug;

use crate::actor_framework::RecordId;
use crate::pagination::{paginate_items, Page, Pagination};

/// Caller-supplied list request, shaped like the list screens' query string.
///
/// `sort_by` and `order` are accepted but every list is ordered newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    pub keyword: String,
    pub status: String,
    pub page: i64,
    pub page_size: i64,
    pub sort_by: String,
    pub order: String,
}

impl SearchParams {
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = keyword.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn with_page(mut self, page: i64, page_size: i64) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// What the query engine needs to know about a record.
pub trait Searchable {
    fn record_id(&self) -> RecordId;

    /// Fields the keyword is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Field the `status` parameter must equal.
    fn filter_field(&self) -> &str;

    fn matches(&self, keyword_lower: &str, status: &str) -> bool {
        let keyword_hit = keyword_lower.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(keyword_lower));
        let status_hit = status.is_empty() || self.filter_field() == status;
        keyword_hit && status_hit
    }
}

/// Keep matching records, newest (highest id) first.
pub fn filter_and_sort<T: Searchable>(records: Vec<T>, params: &SearchParams) -> Vec<T> {
    let keyword = params.keyword.to_lowercase();
    let mut filtered: Vec<T> = records
        .into_iter()
        .filter(|record| record.matches(&keyword, &params.status))
        .collect();
    filtered.sort_by(|a, b| b.record_id().cmp(&a.record_id()));
    filtered
}

pub fn search<T: Searchable>(records: Vec<T>, params: &SearchParams, default_page_size: usize) -> Page<T> {
    let pagination = Pagination::normalize(params.page, params.page_size, default_page_size);
    let filtered = filter_and_sort(records, params);
    debug!(matched = filtered.len(), page = pagination.page, "Query evaluated");
    paginate_items(filtered, pagination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        name: &'static str,
        code: &'static str,
        state: &'static str,
    }

    impl Searchable for Row {
        fn record_id(&self) -> RecordId {
            self.id
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.code]
        }

        fn filter_field(&self) -> &str {
            self.state
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: 2, name: "张三", code: "ORD0002", state: "paid" },
            Row { id: 5, name: "Zhang Wei", code: "ORD0005", state: "pending" },
            Row { id: 1, name: "李四", code: "ord0001", state: "pending" },
            Row { id: 9, name: "王五", code: "X-ZHANG", state: "paid" },
        ]
    }

    fn ids(rows: &[Row]) -> Vec<RecordId> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn no_filters_orders_by_descending_id() {
        let out = filter_and_sort(rows(), &SearchParams::default());
        assert_eq!(ids(&out), vec![9, 5, 2, 1]);
    }

    #[test]
    fn keyword_is_case_insensitive_substring() {
        let out = filter_and_sort(rows(), &SearchParams::default().with_keyword("zhang"));
        assert_eq!(ids(&out), vec![9, 5]);

        let out = filter_and_sort(rows(), &SearchParams::default().with_keyword("ORD000"));
        assert_eq!(ids(&out), vec![5, 2, 1]);
    }

    #[test]
    fn status_is_exact_match() {
        let out = filter_and_sort(rows(), &SearchParams::default().with_status("pending"));
        assert_eq!(ids(&out), vec![5, 1]);
        assert!(filter_and_sort(rows(), &SearchParams::default().with_status("Pending")).is_empty());
    }

    #[test]
    fn keyword_and_status_combine() {
        let params = SearchParams::default().with_keyword("zhang").with_status("paid");
        assert_eq!(ids(&filter_and_sort(rows(), &params)), vec![9]);
    }

    #[test]
    fn no_match_still_reports_pagination() {
        let page = search(rows(), &SearchParams::default().with_keyword("nobody"), 10);
        assert!(page.items.is_empty());
        assert_eq!(page.page_info.total, 0);
        assert_eq!(page.page_info.total_pages, 0);
        assert_eq!(page.page_info.page, 1);
    }

    #[test]
    fn search_pages_with_default_size() {
        let page = search(rows(), &SearchParams::default().with_page(2, 0), 3);
        assert_eq!(ids(&page.items), vec![1]);
        assert_eq!(page.page_info.page_size, 3);
        assert_eq!(page.page_info.total_pages, 2);
    }
}
