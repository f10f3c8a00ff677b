//! Expenses endpoint handlers

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateExpenseBody, ListExpensesQuery, SummaryQuery};
use crate::domain::expense::{Expense, ExpenseSummary, Page};

/// GET /expenses
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ListExpensesQuery>,
) -> Result<Json<Page<Expense>>, ApiError> {
    let filter = query.filter();
    let page = query.page_request();
    debug!(?filter, page = page.page, page_size = page.page_size, "listing expenses");

    let result = state
        .expense_service
        .find(&filter, &page)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(result))
}

/// GET /expenses/summary
pub async fn summarize_expenses(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<ExpenseSummary>, ApiError> {
    let filter = query.filter();
    debug!(?filter, "summarizing expenses");

    let summary = state
        .expense_service
        .summarize(&filter)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(summary))
}

/// POST /expenses
pub async fn create_expense(
    State(state): State<AppState>,
    Json(body): Json<CreateExpenseBody>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    let created = state
        .expense_service
        .create(body.into())
        .await
        .map_err(ApiError::from)?;

    debug!(id = %created.id(), "expense created");
    Ok((StatusCode::CREATED, Json(created)))
}
