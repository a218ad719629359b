//! Page math for the list view.

/// Listings shown on one list page.
pub const JOBS_PER_PAGE: usize = 20;

/// One list page: 1-based number plus the slice of items it shows.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub number: usize,
    pub items: &'a [T],
}

/// ceil(total / per_page), never less than 1.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Splits `items` into consecutive pages, preserving order.
/// An empty input still yields one (empty) page.
pub fn paginate<T>(items: &[T], per_page: usize) -> Vec<Page<'_, T>> {
    if items.is_empty() {
        return vec![Page {
            number: 1,
            items: &[],
        }];
    }

    items
        .chunks(per_page.max(1))
        .enumerate()
        .map(|(index, chunk)| Page {
            number: index + 1,
            items: chunk,
        })
        .collect()
}
