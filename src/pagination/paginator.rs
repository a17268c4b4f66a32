//! Paginator over a caller-supplied dataset.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::HyperPage;
use crate::pagination::index_range;

// == Paginator ==
/// Serves fixed-size pages out of an owned dataset.
///
/// Loading the rows (from a file or elsewhere) is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct Paginator<T> {
    dataset: Vec<T>,
}

impl<T> Paginator<T> {
    // == Constructor ==
    /// Wraps an already loaded dataset.
    pub fn new(dataset: Vec<T>) -> Self {
        Self { dataset }
    }

    // == Length ==
    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    // == Total Pages ==
    /// Number of pages of `page_size` rows, the last one possibly partial.
    pub fn total_pages(&self, page_size: usize) -> Result<usize> {
        validate_page_size(page_size)?;
        Ok(self.dataset.len().div_ceil(page_size))
    }

    // == Get Page ==
    /// Returns the rows of a 1-indexed page.
    ///
    /// Pages past the end of the dataset are empty. The last page may be
    /// shorter than `page_size`.
    ///
    /// # Errors
    /// - [`Error::InvalidPage`] if `page` is 0
    /// - [`Error::InvalidPageSize`] if `page_size` is 0
    pub fn get_page(&self, page: usize, page_size: usize) -> Result<&[T]> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }
        validate_page_size(page_size)?;

        let (start, end) = index_range(page, page_size);
        let len = self.dataset.len();
        let rows: &[T] = if start >= len {
            &[]
        } else {
            &self.dataset[start..end.min(len)]
        };

        debug!(page, page_size, rows = rows.len(), "serving page");
        Ok(rows)
    }

    // == Get Hyper ==
    /// Returns a page together with its navigation metadata.
    ///
    /// `page_size` in the result is the number of rows actually returned.
    pub fn get_hyper(&self, page: usize, page_size: usize) -> Result<HyperPage<'_, T>> {
        let data = self.get_page(page, page_size)?;
        let total_pages = self.total_pages(page_size)?;

        Ok(HyperPage {
            page,
            page_size: data.len(),
            total_pages,
            data,
            prev_page: (page > 1).then(|| page - 1),
            next_page: (page < total_pages).then(|| page + 1),
        })
    }
}

fn validate_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(Error::InvalidPageSize(page_size));
    }
    Ok(())
}
