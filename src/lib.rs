//! Expense Ledger API
//!
//! A small expense ledger: a volatile in-memory record store exposing
//! filter/paginate/aggregate operations over HTTP, and a client-side
//! caching/synchronization layer that keeps a paginated list view, an
//! aggregate summary view and a record-creation flow consistent as
//! filters change, refreshes occur and new records are added.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::cache::{InMemoryCache, InMemoryCacheConfig};
use infrastructure::client::{
    ExpenseMutationService, ExpenseQueryService, HttpExpenseApi, InvalidationQueue, LedgerSession,
    RefreshTracker,
};
use infrastructure::expense::InMemoryExpenseRepository;
use infrastructure::services::ExpenseService;
use infrastructure::telemetry::TracingTelemetryEmitter;

/// Create the application state with all services initialized
///
/// The store instance is constructed exactly once here and handed to every
/// consumer through the state; nothing reaches for an ambient singleton.
pub fn create_app_state() -> AppState {
    let repository = Arc::new(InMemoryExpenseRepository::new());
    let expense_service = Arc::new(ExpenseService::new(repository));

    AppState::new(expense_service)
}

/// Create a client session against a ledger server
///
/// Wires the HTTP boundary client, the cache store, the shared
/// invalidation queue and telemetry into one [`LedgerSession`]. Each
/// session carries its own correlation id.
pub fn create_client_session(config: &AppConfig) -> LedgerSession {
    let api = Arc::new(HttpExpenseApi::new(config.client.base_url.clone()));

    let cache_config = InMemoryCacheConfig::default()
        .with_max_capacity(config.cache.max_capacity)
        .with_default_ttl(config.cache.ttl());
    let cache_config = match config.cache.time_to_idle() {
        Some(tti) => cache_config.with_time_to_idle(tti),
        None => cache_config,
    };
    let cache = Arc::new(InMemoryCache::with_config(cache_config));

    let invalidations = Arc::new(InvalidationQueue::new());
    let emitter = Arc::new(TracingTelemetryEmitter::new());
    let tracker = RefreshTracker::new(emitter);

    let queries = Arc::new(ExpenseQueryService::new(
        api.clone(),
        cache.clone(),
        invalidations.clone(),
        tracker,
    ));
    let mutations = Arc::new(ExpenseMutationService::new(api, cache, invalidations));

    LedgerSession::new(queries, mutations).with_stale_threshold(config.client.stale_threshold())
}
