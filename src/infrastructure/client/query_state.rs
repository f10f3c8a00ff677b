//! Explicit view state threaded through the query layer

use crate::domain::expense::{ExpenseFilter, PageRequest};

/// UI-settable page size bounds (tighter than the server's [1, 100])
pub const UI_MIN_PAGE_SIZE: u32 = 20;
pub const UI_MAX_PAGE_SIZE: u32 = 100;

/// The full set of parameters a cached read depends on
///
/// One value object instead of closure-captured state: cache keys derive
/// from it deterministically, and the page-reset invariant lives in its
/// transitions. Whenever `category` or `month` changes, `page` returns to
/// 1 before the next fetch can be issued; so does changing the page size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    category: Option<String>,
    month: Option<String>,
    page: u32,
    page_size: u32,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            category: None,
            month: None,
            page: 1,
            page_size: 20,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Change the category filter; a real change resets to page 1
    pub fn set_category(&mut self, category: Option<String>) {
        if self.category != category {
            self.category = category;
            self.page = 1;
        }
    }

    /// Change the month filter; a real change resets to page 1
    pub fn set_month(&mut self, month: Option<String>) {
        if self.month != month {
            self.month = month;
            self.page = 1;
        }
    }

    /// Navigate to a page; floors at 1
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Change the page size: clamps to [20, 100] and resets to page 1
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = page_size.clamp(UI_MIN_PAGE_SIZE, UI_MAX_PAGE_SIZE);
        self.page = 1;
    }

    /// The filter portion of this state
    pub fn filter(&self) -> ExpenseFilter {
        ExpenseFilter {
            category: self.category.clone(),
            month: self.month.clone(),
        }
    }

    /// The pagination portion of this state
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            page_size: self.page_size,
        }
    }
}
