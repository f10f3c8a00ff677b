//! Cache key derivation for ledger queries
//!
//! Every key is a deterministic function of the complete parameter tuple
//! the query depends on, so two distinct filter/pagination combinations
//! never share a key and a filter change is always a cache miss. Absent
//! filter values serialize as `*` so that a filter family is an exact
//! string prefix of all its page keys.

use crate::domain::expense::{ExpenseFilter, PageRequest};

/// Resource segment for list queries
pub const LIST_RESOURCE: &str = "expenses:list";

/// Resource segment for summary queries
pub const SUMMARY_RESOURCE: &str = "expenses:summary";

fn filter_segment(filter: &ExpenseFilter) -> String {
    format!(
        "category={}:month={}",
        filter.category.as_deref().unwrap_or("*"),
        filter.month.as_deref().unwrap_or("*"),
    )
}

/// Key for one page of a filtered list
pub fn list_key(filter: &ExpenseFilter, page: &PageRequest) -> String {
    format!(
        "{}:{}:page={}:size={}",
        LIST_RESOURCE,
        filter_segment(filter),
        page.page,
        page.page_size,
    )
}

/// Prefix covering every page key of one filter combination
pub fn list_family(filter: &ExpenseFilter) -> String {
    format!("{}:{}:", LIST_RESOURCE, filter_segment(filter))
}

/// Key for the aggregate summary of one filter combination
pub fn summary_key(filter: &ExpenseFilter) -> String {
    format!("{}:{}", SUMMARY_RESOURCE, filter_segment(filter))
}
