//! Server-side expense service

use std::sync::Arc;

use tracing::debug;

use crate::domain::expense::{
    Expense, ExpenseFilter, ExpenseRepository, ExpenseSummary, NewExpense, Page, PageRequest,
};
use crate::domain::DomainError;

/// Thin facade over the record store used by the HTTP handlers
///
/// Input validation sits in front of the API layer; by the time a request
/// reaches this service its payload is assumed well-formed beyond the
/// pagination clamping the handlers already performed.
#[derive(Clone)]
pub struct ExpenseService {
    repository: Arc<dyn ExpenseRepository>,
}

impl std::fmt::Debug for ExpenseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseService").finish_non_exhaustive()
    }
}

impl ExpenseService {
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, input: NewExpense) -> Result<Expense, DomainError> {
        let expense = self.repository.create(input).await?;
        debug!(id = %expense.id(), "expense created");
        Ok(expense)
    }

    pub async fn find(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError> {
        self.repository.find_expenses(filter, page).await
    }

    pub async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, DomainError> {
        self.repository.summarize(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::expense::InMemoryExpenseRepository;

    #[tokio::test]
    async fn test_service_delegates_to_repository() {
        let service = ExpenseService::new(Arc::new(InMemoryExpenseRepository::new()));

        let created = service
            .create(NewExpense::new(12.5, "food", "2025-01-10"))
            .await
            .unwrap();

        let page = service
            .find(&ExpenseFilter::all(), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.data, vec![created]);

        let summary = service.summarize(&ExpenseFilter::all()).await.unwrap();
        assert_eq!(summary.total, 12.5);
    }
}
