//! In-memory expense repository implementation

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::error::DomainError;
use crate::domain::expense::{
    Expense, ExpenseFilter, ExpenseRepository, ExpenseSummary, NewExpense, Page, PageRequest,
};

/// Volatile, insertion-ordered implementation of [`ExpenseRepository`]
///
/// The collection is a `Vec` behind one RwLock: records keep their
/// insertion order (pagination stays deterministic between mutations) and
/// every operation serializes on the lock, so a `create` is fully visible
/// to the next read. A process restart clears everything; durability is a
/// non-goal.
#[derive(Debug)]
pub struct InMemoryExpenseRepository {
    records: Arc<RwLock<Vec<Expense>>>,
}

impl InMemoryExpenseRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a repository pre-seeded with records (for testing)
    pub fn with_records(records: Vec<Expense>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

impl Default for InMemoryExpenseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExpenseRepository for InMemoryExpenseRepository {
    async fn create(&self, input: NewExpense) -> Result<Expense, DomainError> {
        let expense = Expense::from_input(input);
        let mut records = self.records.write().await;
        records.push(expense.clone());
        Ok(expense)
    }

    async fn filter(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|e| filter.matches(e)).cloned().collect())
    }

    async fn summarize(&self, filter: &ExpenseFilter) -> Result<ExpenseSummary, DomainError> {
        let matching = self.filter(filter).await?;
        Ok(ExpenseSummary::of(&matching, filter))
    }

    async fn find_expenses(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError> {
        let matching = self.filter(filter).await?;
        Ok(Page::slice(&matching, page))
    }

    async fn reset(&self) -> Result<(), DomainError> {
        self.records.write().await.clear();
        Ok(())
    }
}
