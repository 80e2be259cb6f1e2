//! Paginated result packaging.
//!
//! Handlers hand the builder an already-correct slice (skip/take done against
//! the data source) together with the independently-computed total count; the
//! builder only validates the page parameters and derives the metadata. It
//! never re-sorts, re-slices, or cross-checks the slice against the count.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error(
        "Invalid page parameters: page_number={page_number}, page_size={page_size} (both must be >= 1)"
    )]
    InvalidPageParameters { page_number: i64, page_size: i64 },
}

/// An immutable page of a larger collection plus its position metadata.
///
/// Iterates like a read-only slice of its items while also exposing the
/// metadata fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedList<T> {
    items: Vec<T>,
    current_page: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
}

impl<T> PagedList<T> {
    /// Build a page from a caller-supplied slice and metadata.
    ///
    /// Rejects non-positive `page_number` or `page_size` before computing
    /// anything else; values are never clamped. `total_pages` is the ceiling
    /// of `total_count / page_size` (zero when the collection is empty).
    pub fn new(
        items: Vec<T>,
        total_count: u64,
        page_number: i64,
        page_size: i64,
    ) -> Result<Self, PageError> {
        if page_number < 1 || page_size < 1 {
            return Err(PageError::InvalidPageParameters {
                page_number,
                page_size,
            });
        }
        let page_size = page_size as u64;
        Ok(Self {
            items,
            current_page: page_number as u64,
            page_size,
            total_count,
            total_pages: total_count.div_ceil(page_size),
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl<T> std::ops::Deref for PagedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
