//! Paginated response envelope
//!
//! The backend returns one page of a larger result set together with metadata
//! describing the total size. Pages are 1-indexed.

use serde::{Deserialize, Serialize};

/// One page of a server-side result set.
///
/// Invariants (guaranteed by the backend, relied on by the page controllers):
/// `content.len() <= page_size`; `page <= total_pages` whenever
/// `total_pages > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// Records of the current page, in server order.
    pub content: Vec<T>,

    /// Current page number (starts at 1).
    pub page: usize,

    /// Requested page size.
    pub page_size: usize,

    /// Total number of records across all pages.
    pub total_elements: usize,

    /// Total number of pages.
    pub total_pages: usize,

    /// Number of records in this page.
    pub number_of_elements: usize,
}

impl<T> Paginated<T> {
    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// An empty first page, used as the initial controller state in tests.
    pub fn empty(page_size: usize) -> Self {
        Self {
            content: Vec::new(),
            page: 1,
            page_size,
            total_elements: 0,
            total_pages: 0,
            number_of_elements: 0,
        }
    }
}
