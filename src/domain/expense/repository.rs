//! Record store trait definition

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::{Expense, NewExpense};
use super::filter::ExpenseFilter;
use super::page::{Page, PageRequest};
use super::summary::ExpenseSummary;

/// The canonical record store: filter, paginate, aggregate, append
///
/// Implementations own a single volatile collection kept in insertion
/// order, which makes pagination deterministic between mutations. Methods
/// are total functions over already-validated input; they never fail for
/// business reasons.
#[async_trait]
pub trait ExpenseRepository: Send + Sync {
    /// Assign a fresh unique id, append, return the stored record
    async fn create(&self, input: NewExpense) -> Result<Expense, DomainError>;

    /// All records matching the filter, in insertion order
    async fn filter(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, DomainError>;

    /// Sum and count over the filtered set, echoing the supplied filter keys
    async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, DomainError>;

    /// One page of the filtered set with pagination metadata
    async fn find_expenses(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError>;

    /// Clear the collection. Test-harness affordance only; production
    /// paths never call this.
    async fn reset(&self) -> Result<(), DomainError>;
}
