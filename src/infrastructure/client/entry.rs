//! Cached read state stored per query key

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::expense::{Expense, ExpenseSummary, Page, PageInfo};

/// One cached page of the list view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedPage {
    pub data: Vec<Expense>,
    pub pagination: PageInfo,
    pub fetched_at: DateTime<Utc>,
}

impl CachedPage {
    /// Stamp a freshly fetched page
    pub fn from_page(page: Page<Expense>) -> Self {
        Self {
            data: page.data,
            pagination: page.pagination,
            fetched_at: Utc::now(),
        }
    }
}

/// The cached summary view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedSummary {
    pub summary: ExpenseSummary,
    pub fetched_at: DateTime<Utc>,
}

impl CachedSummary {
    pub fn from_summary(summary: ExpenseSummary) -> Self {
        Self {
            summary,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expense::{ExpenseFilter, PageRequest};

    #[test]
    fn test_cached_page_round_trip() {
        let page = Page::slice(&Vec::<Expense>::new(), &PageRequest::default());
        let entry = CachedPage::from_page(page);

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"fetchedAt\""));

        let decoded: CachedPage = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_cached_summary_round_trip() {
        let entry = CachedSummary::from_summary(ExpenseSummary::of(&[], &ExpenseFilter::all()));

        let json = serde_json::to_string(&entry).unwrap();
        let decoded: CachedSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, entry);
    }
}
