//! Pagination over an ordered record sequence.

/// Page sizes the picker offers.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 25];

/// The window `[page_index * page_size, page_index * page_size + page_size)`,
/// clamped to the available length. A window past the end is empty.
pub fn paginate<T>(items: &[T], page_index: usize, page_size: usize) -> &[T] {
    let start = page_index.saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items at `page_size` per page.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Filler rows needed to keep the table's visual height constant.
///
/// Non-zero only on a trailing page that underfills; page 0 never pads.
pub fn filler_rows(len: usize, page_index: usize, page_size: usize) -> usize {
    if page_index == 0 {
        return 0;
    }
    ((page_index + 1) * page_size)
        .saturating_sub(len)
        .min(page_size)
}
