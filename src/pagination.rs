//! Pagination utilities shared by every list screen.
//!
//! Works purely on counts and indices; nothing here knows about entity types.

use serde::Serialize;

/// Normalized paging request. Both fields are always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: usize,
    /// items per page
    pub page_size: usize,
}

impl Pagination {
    /// Default raw inputs: non-positive page becomes 1, non-positive size becomes `default_page_size`.
    pub fn normalize(page: i64, page_size: i64, default_page_size: usize) -> Self {
        let page = usize::try_from(page).ok().filter(|p| *p > 0).unwrap_or(1);
        let page_size = usize::try_from(page_size)
            .ok()
            .filter(|s| *s > 0)
            .unwrap_or(default_page_size)
            .max(1);
        Self { page, page_size }
    }

    pub fn bounds(&self, total: usize) -> PageBounds {
        paginate(total, self.page, self.page_size)
    }
}

/// Slice boundaries of one page within a result of `total` items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageBounds {
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
}

/// `start..end` is the visible slice; it is empty when the page lies past the end.
pub fn paginate(total: usize, page: usize, page_size: usize) -> PageBounds {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let total_pages = total.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    PageBounds {
        start,
        end,
        total_pages,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub total_pages: usize,
}

/// One page of results plus the metadata needed to render page links.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page_info: PageInfo,
}

/// Cut one page out of an already filtered and ordered sequence.
pub fn paginate_items<T>(items: Vec<T>, pagination: Pagination) -> Page<T> {
    let total = items.len();
    let bounds = pagination.bounds(total);
    let items = items
        .into_iter()
        .skip(bounds.start)
        .take(bounds.end - bounds.start)
        .collect();

    Page {
        items,
        page_info: PageInfo {
            page: pagination.page,
            page_size: pagination.page_size,
            total,
            total_pages: bounds.total_pages,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_partial_page() {
        let b = paginate(23, 3, 10);
        assert_eq!(b, PageBounds { start: 20, end: 23, total_pages: 3 });
    }

    #[test]
    fn empty_collection_has_zero_pages() {
        let b = paginate(0, 1, 10);
        assert_eq!(b, PageBounds { start: 0, end: 0, total_pages: 0 });
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_totals() {
        let page = paginate_items((1..=23).collect::<Vec<_>>(), Pagination { page: 5, page_size: 10 });
        assert!(page.items.is_empty());
        assert_eq!(
            page.page_info,
            PageInfo { page: 5, page_size: 10, total: 23, total_pages: 3 }
        );
    }

    #[test]
    fn bounds_stay_within_total() {
        for total in 0..40 {
            for page_size in 1..12 {
                for page in 1..8 {
                    let b = paginate(total, page, page_size);
                    assert!(b.start <= b.end && b.end <= total, "{total} {page} {page_size}");
                    assert_eq!(b.total_pages, (total + page_size - 1) / page_size);
                    assert!(b.end - b.start <= page_size);
                }
            }
        }
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let b = paginate(5, usize::MAX, usize::MAX);
        assert_eq!((b.start, b.end, b.total_pages), (5, 5, 1));
    }

    #[test]
    fn normalize_applies_defaults() {
        assert_eq!(Pagination::normalize(0, 0, 12), Pagination { page: 1, page_size: 12 });
        assert_eq!(Pagination::normalize(-3, -1, 10), Pagination { page: 1, page_size: 10 });
        assert_eq!(Pagination::normalize(4, 25, 10), Pagination { page: 4, page_size: 25 });
        assert_eq!(Pagination::normalize(1, 0, 0), Pagination { page: 1, page_size: 1 });
    }

    #[test]
    fn middle_page_slices_items() {
        let page = paginate_items((1..=23).collect::<Vec<_>>(), Pagination { page: 2, page_size: 10 });
        assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
    }
}
