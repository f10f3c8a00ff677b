//! Aggregate summary over a filtered set of records

use serde::{Deserialize, Serialize};

use super::entity::Expense;
use super::filter::ExpenseFilter;

/// Sum and count over the records matching a filter
///
/// `filters` echoes back exactly the criteria that were supplied; absent
/// keys do not appear in the serialized form at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSummary {
    pub total: f64,
    pub count: u64,
    pub filters: ExpenseFilter,
}

impl ExpenseSummary {
    /// Aggregate an already-filtered set, echoing the filter it came from
    pub fn of(matching: &[Expense], filters: &ExpenseFilter) -> Self {
        Self {
            total: matching.iter().map(Expense::amount).sum(),
            count: matching.len() as u64,
            filters: filters.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::expense::NewExpense;

    fn expense(amount: f64, category: &str, date: &str) -> Expense {
        Expense::from_input(NewExpense::new(amount, category, date))
    }

    #[test]
    fn test_summary_totals() {
        let records = vec![
            expense(10.0, "food", "2025-01-05"),
            expense(20.0, "food", "2025-01-12"),
            expense(30.0, "food", "2025-01-20"),
        ];

        let summary = ExpenseSummary::of(&records, &ExpenseFilter::all().with_month("2025-01"));
        assert_eq!(summary.total, 60.0);
        assert_eq!(summary.count, 3);
    }

    #[test]
    fn test_empty_set_is_zero_not_error() {
        let summary = ExpenseSummary::of(&[], &ExpenseFilter::all());
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.count, 0);
    }

    #[test]
    fn test_filter_echo_fidelity() {
        let summary = ExpenseSummary::of(&[], &ExpenseFilter::all());
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"filters\":{}"));

        let summary = ExpenseSummary::of(&[], &ExpenseFilter::all().with_category("food"));
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"filters\":{\"category\":\"food\"}"));
        assert!(!json.contains("month"));
    }
}
