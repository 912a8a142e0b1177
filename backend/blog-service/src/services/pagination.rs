/// Pagination helper
///
/// Feeds are sliced into fixed-size pages of ten items. Requested page
/// numbers are clamped to the nearest valid page: anything below one becomes
/// page one, anything past the end becomes the last page. An empty
/// collection still has a single empty page, so views always have a page
/// object to render.
use serde::{Deserialize, Serialize};

/// Number of posts displayed per page
pub const POSTS_PER_PAGE: i64 = 10;

/// Computes page bounds for a collection of known size.
#[derive(Debug, Clone, Copy)]
pub struct Paginator {
    total_items: i64,
    per_page: i64,
}

/// The bounds of one resolved page, ready to feed into LIMIT/OFFSET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub number: i64,
    pub num_pages: i64,
    pub limit: i64,
    pub offset: i64,
}

/// One rendered page of items plus the navigation context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: i64,
    pub num_pages: i64,
    pub total_items: i64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Paginator {
    pub fn new(total_items: i64, per_page: i64) -> Self {
        Self {
            total_items: total_items.max(0),
            per_page: per_page.max(1),
        }
    }

    /// Total number of pages; at least one even when empty.
    pub fn num_pages(&self) -> i64 {
        ((self.total_items + self.per_page - 1) / self.per_page).max(1)
    }

    /// Resolve a requested page number to valid bounds.
    pub fn page(&self, requested: i64) -> PageSpec {
        let num_pages = self.num_pages();
        let number = requested.clamp(1, num_pages);

        PageSpec {
            number,
            num_pages,
            limit: self.per_page,
            offset: (number - 1) * self.per_page,
        }
    }
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, spec: PageSpec, total_items: i64) -> Self {
        Self {
            items,
            page: spec.number,
            num_pages: spec.num_pages,
            total_items,
            has_next: spec.number < spec.num_pages,
            has_previous: spec.number > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_len(total: i64, requested: i64) -> i64 {
        let paginator = Paginator::new(total, POSTS_PER_PAGE);
        let spec = paginator.page(requested);
        (total - spec.offset).clamp(0, spec.limit)
    }

    #[test]
    fn twelve_items_split_ten_and_two() {
        assert_eq!(page_len(12, 1), 10);
        assert_eq!(page_len(12, 2), 2);

        let paginator = Paginator::new(12, POSTS_PER_PAGE);
        assert_eq!(paginator.num_pages(), 2);
        assert_eq!(paginator.page(2).offset, 10);
    }

    #[test]
    fn out_of_range_pages_clamp_to_nearest() {
        let paginator = Paginator::new(12, POSTS_PER_PAGE);
        assert_eq!(paginator.page(0).number, 1);
        assert_eq!(paginator.page(-5).number, 1);
        assert_eq!(paginator.page(99).number, 2);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let paginator = Paginator::new(0, POSTS_PER_PAGE);
        assert_eq!(paginator.num_pages(), 1);

        let spec = paginator.page(1);
        assert_eq!(spec.number, 1);
        assert_eq!(spec.num_pages, 1);
        assert_eq!(spec.offset, 0);
    }

    #[test]
    fn navigation_flags() {
        let paginator = Paginator::new(25, POSTS_PER_PAGE);
        let first = Page::new(vec![(); 10], paginator.page(1), 25);
        assert!(first.has_next);
        assert!(!first.has_previous);

        let last = Page::new(vec![(); 5], paginator.page(3), 25);
        assert!(!last.has_next);
        assert!(last.has_previous);
    }
}
