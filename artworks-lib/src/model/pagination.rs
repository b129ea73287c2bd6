//! Collection-wide pagination metadata

use serde::Deserialize;

/// Pagination block returned with every listing page.
///
/// `current_page` is the index of the page that was fetched together with
/// this metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaginationMeta {
    /// Total number of items in the collection.
    pub total: u64,
    /// Page size the service applied.
    pub limit: u64,
    /// Offset of the first item of the current page.
    #[serde(default)]
    pub offset: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// 1-based index of the current page.
    pub current_page: u64,
}

/// Row range shown by a paginator: "{first} - {last} of {total}".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageReport {
    /// 1-based number of the first row on the page.
    pub first: u64,
    /// 1-based number of the last row on the page.
    pub last: u64,
    /// Total rows in the collection.
    pub total: u64,
}

impl std::fmt::Display for PageReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} of {}", self.first, self.last, self.total)
    }
}

impl PaginationMeta {
    /// Zero-based offset of the first row of the current page.
    pub fn first_row_offset(&self) -> u64 {
        self.current_page.saturating_sub(1).saturating_mul(self.limit)
    }

    /// Converts a first-row offset reported by a paginator into a page index.
    pub fn page_for_offset(&self, first: u64) -> u64 {
        if self.limit == 0 {
            return 1;
        }
        (first / self.limit).saturating_add(1)
    }

    /// Returns the row range of the current page, or `None` if it is empty.
    pub fn report(&self) -> Option<PageReport> {
        let first = self.first_row_offset();
        if first >= self.total {
            return None;
        }
        Some(PageReport {
            first: first + 1,
            last: first.saturating_add(self.limit).min(self.total),
            total: self.total,
        })
    }

    /// Returns `true` if there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns `true` if there is a page before the current one.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }
}
