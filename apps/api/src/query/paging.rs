//! Pagination over an already filtered and sorted sequence.

/// Default page size when the request asks for a page without a size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Returns the 1-indexed page `page` of `items`: the slice
/// `[(page-1)·per_page, page·per_page)`. A page beyond the end (or page 0,
/// or a zero page size) yields an empty slice, never an error.
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if page == 0 || per_page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

/// `ceil(total / per_page)`.
pub fn page_count(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    }
}
