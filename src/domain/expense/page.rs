//! Pagination parameters and page envelopes

use serde::{Deserialize, Serialize};

/// Default page size when the caller omits one
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Server-side page size bounds
pub const MIN_PAGE_SIZE: u32 = 1;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Normalized 1-indexed pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Normalize optional caller-supplied parameters
    ///
    /// Page floors at 1; page size clamps to [1, 100]. Defaults are
    /// `page=1, page_size=20`.
    pub fn normalized(page: Option<u32>, page_size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            page_size: page_size
                .unwrap_or(DEFAULT_PAGE_SIZE)
                .clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
        }
    }

    pub fn new(page: u32, page_size: u32) -> Self {
        Self::normalized(Some(page), Some(page_size))
    }

    /// Offset of the first item on this page
    pub fn offset(&self) -> usize {
        (self.page as usize - 1) * self.page_size as usize
    }
}

/// Pagination metadata returned alongside every page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total_items: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl PageInfo {
    pub fn new(total_items: u64, request: &PageRequest) -> Self {
        Self {
            total_items,
            current_page: request.page,
            page_size: request.page_size,
            total_pages: total_pages(total_items, request.page_size),
        }
    }
}

/// `ceil(total_items / page_size)`
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    let size = page_size.max(1) as u64;
    total_items.div_ceil(size) as u32
}

/// A page of records with its pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

impl<T: Clone> Page<T> {
    /// Slice one page out of an already-filtered collection
    ///
    /// A page number past the end yields an empty data slice with correct
    /// metadata; that is a normal outcome, not an error.
    pub fn slice(items: &[T], request: &PageRequest) -> Self {
        let total_items = items.len() as u64;
        let start = request.offset().min(items.len());
        let end = (start + request.page_size as usize).min(items.len());

        Self {
            data: items[start..end].to_vec(),
            pagination: PageInfo::new(total_items, request),
        }
    }
}
