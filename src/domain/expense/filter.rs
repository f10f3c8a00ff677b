//! Filter criteria for ledger queries

use serde::{Deserialize, Serialize};

use super::entity::Expense;

/// Optional filter criteria combined with AND semantics
///
/// An absent criterion matches everything on its dimension. Serialization
/// omits absent keys entirely, which is what lets summary responses echo
/// back only the filters that were actually supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseFilter {
    /// Exact category match
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// `YYYY-MM` prefix match against the record date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
}

impl ExpenseFilter {
    /// A filter that matches every record
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    /// Whether no criteria were supplied
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.month.is_none()
    }

    /// AND of the supplied predicates; vacuously true for absent ones
    pub fn matches(&self, expense: &Expense) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map(|c| expense.category() == c)
            .unwrap_or(true);

        let month_ok = self
            .month
            .as_deref()
            .map(|m| expense.date().starts_with(m))
            .unwrap_or(true);

        category_ok && month_ok
    }
}
