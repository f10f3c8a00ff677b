//! Client-side caching and synchronization layer
//!
//! Keeps a paginated list view, an aggregate summary view and a
//! record-creation flow consistent against the record-store boundary as
//! filters change, refreshes occur and new records are added.

pub mod api;
pub mod entry;
pub mod http;
pub mod invalidation;
pub mod local;
pub mod mutation_service;
pub mod query_service;
pub mod query_state;
pub mod refresh_tracker;
pub mod session;
pub mod stale;

pub use api::ExpenseApi;
pub use entry::{CachedPage, CachedSummary};
pub use http::HttpExpenseApi;
pub use invalidation::InvalidationQueue;
pub use local::LocalExpenseApi;
pub use mutation_service::{patch_first_page, ExpenseMutationService};
pub use query_service::{ExpenseQueryService, QueryCacheConfig};
pub use query_state::{QueryState, UI_MAX_PAGE_SIZE, UI_MIN_PAGE_SIZE};
pub use refresh_tracker::RefreshTracker;
pub use session::LedgerSession;
pub use stale::{is_stale, StaleTimer, DEFAULT_STALE_THRESHOLD};
