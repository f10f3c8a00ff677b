//! HTTP implementation of the record-store boundary

use async_trait::async_trait;

use crate::domain::expense::{
    Expense, ExpenseFilter, ExpenseSummary, NewExpense, Page, PageRequest,
};
use crate::domain::DomainError;

use super::api::ExpenseApi;

/// Boundary client speaking the ledger's HTTP surface
///
/// Maps transport and decode failures to `DomainError::Network`; performs
/// no retries of its own.
#[derive(Debug, Clone)]
pub struct HttpExpenseApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpExpenseApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: std::time::Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn filter_params(filter: &ExpenseFilter) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = &filter.category {
            params.push(("category", category.clone()));
        }
        if let Some(month) = &filter.month {
            params.push(("month", month.clone()));
        }
        params
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DomainError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::network(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::network(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ExpenseApi for HttpExpenseApi {
    async fn list_expenses(
        &self,
        filter: &ExpenseFilter,
        page: &PageRequest,
    ) -> Result<Page<Expense>, DomainError> {
        let mut params = Self::filter_params(filter);
        params.push(("page", page.page.to_string()));
        params.push(("pageSize", page.page_size.to_string()));

        let response = self
            .client
            .get(format!("{}/expenses", self.base_url))
            .query(&params)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }

    async fn summarize_expenses(
        &self,
        filter: &ExpenseFilter,
    ) -> Result<ExpenseSummary, DomainError> {
        let response = self
            .client
            .get(format!("{}/expenses/summary", self.base_url))
            .query(&Self::filter_params(filter))
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }

    async fn create_expense(&self, input: &NewExpense) -> Result<Expense, DomainError> {
        let response = self
            .client
            .post(format!("{}/expenses", self.base_url))
            .json(input)
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }
}
