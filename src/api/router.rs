use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::expenses;
use super::health;
use super::state::AppState;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /ready and the expenses endpoints are not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Ledger endpoints
        .route(
            "/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route("/expenses/summary", get(expenses::summarize_expenses))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
