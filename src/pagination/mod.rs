//! Pagination Module
//!
//! Page-based slicing of an in-memory dataset, with optional hypermedia
//! navigation metadata.

mod paginator;

pub use paginator::Paginator;

// == Public Constants ==
/// First page number; pages are 1-indexed
pub const DEFAULT_PAGE: usize = 1;

/// Rows per page when none is requested
pub const DEFAULT_PAGE_SIZE: usize = 10;

// == Index Range ==
/// Returns the half-open `(start, end)` row range of a 1-indexed page.
///
/// Page 0 has no rows and yields `(0, 0)`.
pub fn index_range(page: usize, page_size: usize) -> (usize, usize) {
    if page == 0 {
        return (0, 0);
    }
    let start = (page - 1).saturating_mul(page_size);
    (start, start.saturating_add(page_size))
}
