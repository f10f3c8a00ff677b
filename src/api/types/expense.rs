//! Wire DTOs for the expenses endpoints

use serde::Deserialize;

use crate::domain::expense::{ExpenseFilter, NewExpense, PageRequest};

/// Query parameters for `GET /expenses`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListExpensesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub category: Option<String>,
    pub month: Option<String>,
}

impl ListExpensesQuery {
    pub fn filter(&self) -> ExpenseFilter {
        ExpenseFilter {
            category: self.category.clone(),
            month: self.month.clone(),
        }
    }

    /// Defaults and server-side clamping applied
    pub fn page_request(&self) -> PageRequest {
        PageRequest::normalized(self.page, self.page_size)
    }
}

/// Query parameters for `GET /expenses/summary`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryQuery {
    pub category: Option<String>,
    pub month: Option<String>,
}

impl SummaryQuery {
    pub fn filter(&self) -> ExpenseFilter {
        ExpenseFilter {
            category: self.category.clone(),
            month: self.month.clone(),
        }
    }
}

/// Body for `POST /expenses`
///
/// Schema validation sits in middleware upstream of this layer; the body
/// maps straight into the domain input.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenseBody {
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl From<CreateExpenseBody> for NewExpense {
    fn from(body: CreateExpenseBody) -> Self {
        NewExpense::new(body.amount, body.category, body.date)
    }
}
