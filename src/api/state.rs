//! Application state for shared services

use std::sync::Arc;

use crate::domain::expense::{
    Expense, ExpenseFilter, ExpenseSummary, NewExpense, Page, PageRequest,
};
use crate::domain::DomainError;
use crate::infrastructure::services::ExpenseService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub expense_service: Arc<dyn ExpenseServiceTrait>,
}

impl AppState {
    pub fn new(expense_service: Arc<dyn ExpenseServiceTrait>) -> Self {
        Self { expense_service }
    }
}

/// Trait for expense service operations
#[async_trait::async_trait]
pub trait ExpenseServiceTrait: Send + Sync {
    async fn create(&self, input: NewExpense) -> Result<Expense, DomainError>;
    async fn find(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError>;
    async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, DomainError>;
}

#[async_trait::async_trait]
impl ExpenseServiceTrait for ExpenseService {
    async fn create(&self, input: NewExpense) -> Result<Expense, DomainError> {
        ExpenseService::create(self, input).await
    }

    async fn find(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError> {
        ExpenseService::find(self, filter, page).await
    }

    async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, DomainError> {
        ExpenseService::summarize(self, filter).await
    }
}
