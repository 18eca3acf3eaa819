//! Fixed-size pagination over filtered results.

/// Questions shown per result page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// One slice of a result list plus which neighbours exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    pub batch: &'a [T],
    /// Zero-based.
    pub index: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Page<'_, T> {
    /// One-based number for display.
    pub fn label(&self) -> usize {
        self.index + 1
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }
}

/// Slices `results` into page `page` of `page_size` items.
///
/// An out-of-range page yields an empty batch. A page size of zero is
/// treated as one.
pub fn paginate<T>(results: &[T], page_size: usize, page: usize) -> Page<'_, T> {
    let size = page_size.max(1);
    let start = page.saturating_mul(size).min(results.len());
    let end = page
        .saturating_add(1)
        .saturating_mul(size)
        .min(results.len());
    Page {
        batch: &results[start..end],
        index: page,
        has_prev: page > 0,
        has_next: page.saturating_add(1).saturating_mul(size) < results.len(),
    }
}
