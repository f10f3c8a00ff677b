//! In-process implementation of the record-store boundary

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::expense::{
    Expense, ExpenseFilter, ExpenseRepository, ExpenseSummary, NewExpense, Page, PageRequest,
};
use crate::domain::DomainError;

use super::api::ExpenseApi;

/// Boundary adapter over an in-process repository
///
/// Useful when the client layer and the store share a process; also the
/// workhorse for exercising the query/mutation services without a network.
#[derive(Clone)]
pub struct LocalExpenseApi {
    repository: Arc<dyn ExpenseRepository>,
}

impl LocalExpenseApi {
    pub fn new(repository: Arc<dyn ExpenseRepository>) -> Self {
        Self { repository }
    }
}

// The repository trait carries no Debug bound; keep the field opaque
impl std::fmt::Debug for LocalExpenseApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalExpenseApi").finish_non_exhaustive()
    }
}

#[async_trait]
impl ExpenseApi for LocalExpenseApi {
    async fn list_expenses(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError> {
        self.repository.find_expenses(filter, page).await
    }

    async fn summarize_expenses(
        &self,
        filter: &ExpenseFilter,
    ) -> Result<ExpenseSummary, DomainError> {
        self.repository.summarize(filter).await
    }

    async fn create_expense(&self, input: &NewExpense) -> Result<Expense, DomainError> {
        self.repository.create(input.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::expense::InMemoryExpenseRepository;

    #[tokio::test]
    async fn test_forwards_to_repository() {
        let repo = Arc::new(InMemoryExpenseRepository::new());
        let api = LocalExpenseApi::new(repo.clone());

        let created = api
            .create_expense(&NewExpense::new(12.5, "food", "2025-01-10"))
            .await
            .unwrap();

        let page = api
            .list_expenses(&ExpenseFilter::all(), &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(page.data, vec![created]);

        let summary = api.summarize_expenses(&ExpenseFilter::all()).await.unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.total, 12.5);
    }
}
