//! Per-list pagination state
//!
//! Each result list carries its own `Pagination`. The page index is
//! zero-based; `page_slice` is the read used by rendering, and it
//! re-syncs the count against the list it is given so a page index
//! that has run past a shrunken list is clamped before slicing.

/// Pagination state for one result list
#[derive(Debug, Clone)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    result_count: usize,
}

impl Pagination {
    /// Create pagination with a fixed page size. The size is immutable
    /// after construction and is forced to at least 1.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 0,
            items_per_page: items_per_page.max(1),
            result_count: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn result_count(&self) -> usize {
        self.result_count
    }

    /// Total page count: `ceil(result_count / items_per_page)`.
    pub fn total_pages(&self) -> usize {
        self.result_count.div_ceil(self.items_per_page)
    }

    /// Set the current page directly. No bounds check here; the index
    /// is clamped lazily the next time the count is synced.
    pub fn set_page(&mut self, page_index: usize) {
        self.current_page = page_index;
    }

    /// Record a new result count and clamp the page index into
    /// `[0, total_pages)`. Called whenever the underlying list changes
    /// length.
    pub fn sync_count(&mut self, count: usize) {
        self.result_count = count;
        let total = self.total_pages();
        if total == 0 {
            self.current_page = 0;
        } else if self.current_page >= total {
            self.current_page = total - 1;
        }
    }

    /// Return the current page's slice of `list`.
    ///
    /// Syncs the count first, so an out-of-range page index is clamped
    /// to the last page rather than producing an empty slice. The
    /// offset is `current_page * items_per_page` (zero-based index);
    /// the last page may be shorter than `items_per_page`.
    pub fn page_slice<'a, T>(&mut self, list: &'a [T]) -> &'a [T] {
        self.sync_count(list.len());
        let start = self.current_page * self.items_per_page;
        let end = (start + self.items_per_page).min(list.len());
        if start >= list.len() {
            &[]
        } else {
            &list[start..end]
        }
    }
}
