// Paginator
// Splits a result set into fixed-size, ordered pages

use std::num::NonZeroUsize;

/// Number of users shown on one page.
pub const PAGE_SIZE: usize = 10;

/// The default page size as a `NonZeroUsize`.
pub fn default_page_size() -> NonZeroUsize {
    NonZeroUsize::new(PAGE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

/// Split `items` into `ceil(len / page_size)` contiguous pages.
///
/// Every page holds exactly `page_size` items except possibly the last one,
/// which holds the remainder. An empty input yields no pages at all.
pub fn paginate<T: Clone>(items: &[T], page_size: NonZeroUsize) -> Vec<Vec<T>> {
    items
        .chunks(page_size.get())
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Number of pages `paginate` would produce for `len` items.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}
