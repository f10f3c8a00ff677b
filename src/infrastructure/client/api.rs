//! The record-store boundary consumed by the client layer

use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::expense::{
    Expense, ExpenseFilter, ExpenseSummary, NewExpense, Page, PageRequest,
};
use crate::domain::DomainError;

/// Read/write boundary against the ledger's record store
///
/// Implementations may sit in front of a network (see `HttpExpenseApi`) or
/// wrap an in-process repository (see `LocalExpenseApi`). The boundary
/// itself performs no retries; retry policy belongs to the query layer.
#[async_trait]
pub trait ExpenseApi: Send + Sync + Debug {
    async fn list_expenses(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError>;

    async fn summarize_expenses(&self, filter: &ExpenseFilter)
        -> Result<ExpenseSummary, DomainError>;

    async fn create_expense(&self, input: &NewExpense) -> Result<Expense, DomainError>;
}
