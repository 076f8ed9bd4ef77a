use serde::{Deserialize, Serialize};

pub const DEFAULT_ROWS_PER_PAGE: usize = 200;

/// 1-based page cursor over a row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub rows_per_page: usize,
    pub page: usize,
}

impl Default for Pagination {
    fn default() -> Self { Self::new(DEFAULT_ROWS_PER_PAGE) }
}

impl Pagination {
    /// First page with the given page size (a zero size is bumped to one).
    pub fn new(rows_per_page: usize) -> Self {
        Self { rows_per_page: rows_per_page.max(1), page: 1 }
    }

    /// Number of pages needed for `len` rows.
    #[inline] pub fn total_pages(&self, len: usize) -> usize { len.div_ceil(self.rows_per_page.max(1)) }

    /// Rows of the current page; empty past the end.
    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let size = self.rows_per_page.max(1);
        let start = self.page.saturating_sub(1).saturating_mul(size).min(rows.len());
        let end = start.saturating_add(size).min(rows.len());
        &rows[start..end]
    }

    #[inline] pub fn has_previous(&self) -> bool { self.page > 1 }

    #[inline] pub fn has_next(&self, len: usize) -> bool { self.page < self.total_pages(len) }

    /// Advance one page, staying on the last page.
    pub fn next(&mut self, len: usize) {
        if self.has_next(len) { self.page += 1 }
    }

    /// Go back one page, staying on the first page.
    pub fn previous(&mut self) {
        if self.has_previous() { self.page -= 1 }
    }

    #[inline] pub fn reset(&mut self) { self.page = 1 }
}
