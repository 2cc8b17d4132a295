//! Pagination

use std::num::NonZeroUsize;

/// Page size used when a view does not choose one.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// One page of a filtered collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    items: Vec<T>,
    page: usize,
    page_size: NonZeroUsize,
    total_count: usize,
    total_pages: usize,
}

impl<T> Page<T> {
    /// Items on this page
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// 1-based page number
    pub fn page(&self) -> usize {
        self.page
    }

    /// Maximum items per page
    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Number of items across all pages
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of pages; zero when there are no items
    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Returns true if a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns true if an earlier page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1 && self.total_pages > 0
    }

    /// 1-based positions of the first and last items on this page, if any.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }

        let first = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size.get())
            .saturating_add(1);

        Some((first, first.saturating_add(self.items.len() - 1)))
    }
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get())
}

/// Clamp a 1-based page number into `[1, max(total_pages, 1)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice out page `page` (1-based) of `items`.
///
/// The slice is clipped to the collection, so page 0 and pages past the end are empty.
/// Callers that accept user input should [`clamp_page`] first.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: NonZeroUsize) -> Page<T> {
    let slice = page
        .checked_sub(1)
        .map(|index| {
            let start = index.saturating_mul(page_size.get());
            let end = start.saturating_add(page_size.get()).min(items.len());

            items.get(start..end).unwrap_or_default()
        })
        .unwrap_or_default();

    Page {
        items: slice.to_vec(),
        page,
        page_size,
        total_count: items.len(),
        total_pages: total_pages(items.len(), page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN)
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<usize> = (0..13).collect();

        let page = paginate(&items, 3, size(5));

        assert_eq!(page.items(), &[10, 11, 12]);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.total_count(), 13);
        assert_eq!(page.item_range(), Some((11, 13)));
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let items: [u8; 0] = [];

        let page = paginate(&items, 1, size(5));

        assert!(page.items().is_empty());
        assert_eq!(page.total_pages(), 0);
        assert_eq!(page.item_range(), None);
        assert!(!page.has_next());
        assert!(!page.has_previous());
    }

    #[test]
    fn page_past_end_is_empty() {
        let items = [1, 2, 3];

        let page = paginate(&items, 9, size(2));

        assert!(page.items().is_empty());
        assert_eq!(page.total_pages(), 2);
    }

    #[test]
    fn page_zero_is_empty() {
        let items: Vec<usize> = (0..13).collect();

        let page = paginate(&items, 0, size(5));

        assert!(page.items().is_empty());
        assert_eq!(page.page(), 0);
        assert_eq!(page.total_count(), 13);
        assert_eq!(page.item_range(), None);
        assert!(!page.has_previous());
    }

    #[test]
    fn page_sizes_sum_to_total() {
        let items: Vec<usize> = (0..23).collect();
        let page_size = size(4);
        let pages = total_pages(items.len(), page_size);

        let sum: usize = (1..=pages)
            .map(|page| paginate(&items, page, page_size).items().len())
            .sum();

        assert_eq!(pages, 6);
        assert_eq!(sum, items.len());
    }

    #[test]
    fn pages_concatenate_to_input() {
        let items: Vec<usize> = (0..11).collect();
        let page_size = size(3);

        let rebuilt: Vec<usize> = (1..=total_pages(items.len(), page_size))
            .flat_map(|page| paginate(&items, page, page_size).into_items())
            .collect();

        assert_eq!(rebuilt, items);
    }

    #[test]
    fn paginate_is_deterministic() {
        let items: Vec<usize> = (0..13).collect();

        assert_eq!(
            paginate(&items, 2, size(5)),
            paginate(&items, 2, size(5))
        );
    }

    #[test]
    fn clamp_page_keeps_page_in_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(7, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn default_page_size_is_ten() {
        assert_eq!(DEFAULT_PAGE_SIZE.get(), 10);
    }
}
