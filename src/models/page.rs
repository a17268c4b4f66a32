//! Hypermedia page DTO

use serde::Serialize;

/// A page of rows plus the metadata needed to navigate to its neighbours.
///
/// Serializes to a JSON object; missing neighbours become `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HyperPage<'a, T> {
    /// Requested page number (1-indexed)
    pub page: usize,
    /// Number of rows in `data`
    pub page_size: usize,
    /// Number of pages in the dataset at the requested page size
    pub total_pages: usize,
    /// Rows of this page
    pub data: &'a [T],
    /// Previous page number, if any
    pub prev_page: Option<usize>,
    /// Next page number, if any
    pub next_page: Option<usize>,
}
