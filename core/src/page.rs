//! Fixed-size pagination over an already-filtered result set.

/// Posts shown per page.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed to show `count` items. Zero items means zero pages.
pub fn total_pages(count: usize) -> u32 {
    count.div_ceil(PAGE_SIZE) as u32
}

/// Clamp a requested 1-based page into range. With zero pages the result is
/// page 1, which [`page_slice`] renders as empty.
pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// The 1-based `page`'s items: indices `[(page-1)*10, page*10)`, truncated
/// at the end of the slice.
pub fn page_slice<T>(items: &[T], page: u32) -> &[T] {
    let start = (page.saturating_sub(1) as usize).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}
