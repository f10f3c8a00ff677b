//! One mounted view over the ledger: state, reads, creates, staleness

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::expense::{Expense, NewExpense};
use crate::domain::telemetry::RefreshSource;
use crate::domain::DomainError;

use super::entry::{CachedPage, CachedSummary};
use super::mutation_service::ExpenseMutationService;
use super::query_service::ExpenseQueryService;
use super::query_state::QueryState;
use super::stale::{StaleTimer, DEFAULT_STALE_THRESHOLD};

/// Client session tying the list view, summary view and creation flow
/// to one explicit `QueryState`
///
/// Filter setters reset pagination before the next fetch is issued, every
/// successful load re-arms the one stale timer this session owns, and
/// `teardown` cancels it so a dismounted view never hears back.
pub struct LedgerSession {
    state: QueryState,
    queries: Arc<ExpenseQueryService>,
    mutations: Arc<ExpenseMutationService>,
    stale_threshold: Duration,
    stale_timer: Option<StaleTimer>,
    stale_flag: Arc<AtomicBool>,
}

impl LedgerSession {
    pub fn new(queries: Arc<ExpenseQueryService>, mutations: Arc<ExpenseMutationService>) -> Self {
        Self {
            state: QueryState::new(),
            queries,
            mutations,
            stale_threshold: DEFAULT_STALE_THRESHOLD,
            stale_timer: None,
            stale_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_stale_threshold(mut self, threshold: Duration) -> Self {
        self.stale_threshold = threshold;
        self
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Whether the stale timer has fired since the last successful load
    pub fn is_view_stale(&self) -> bool {
        self.stale_flag.load(Ordering::SeqCst)
    }

    /// Change the category filter and load the (reset) first page
    pub async fn set_category(&mut self, category: Option<String>) -> Result<CachedPage, DomainError> {
        self.state.set_category(category);
        self.load(RefreshSource::Auto).await
    }

    /// Change the month filter and load the (reset) first page
    pub async fn set_month(&mut self, month: Option<String>) -> Result<CachedPage, DomainError> {
        self.state.set_month(month);
        self.load(RefreshSource::Auto).await
    }

    /// Navigate to a page and load it
    pub async fn set_page(&mut self, page: u32) -> Result<CachedPage, DomainError> {
        self.state.set_page(page);
        self.load(RefreshSource::Auto).await
    }

    /// Change the page size (clamped, page resets) and load
    pub async fn set_page_size(&mut self, page_size: u32) -> Result<CachedPage, DomainError> {
        self.state.set_page_size(page_size);
        self.load(RefreshSource::Auto).await
    }

    /// Load the current page, serving cache where it is fresh
    pub async fn current_page(&mut self) -> Result<CachedPage, DomainError> {
        self.load(RefreshSource::Auto).await
    }

    /// User-initiated refresh: always goes to the boundary
    pub async fn refresh(&mut self) -> Result<CachedPage, DomainError> {
        let page = self
            .queries
            .refetch_list(&self.state, RefreshSource::Manual)
            .await?;
        self.arm_stale_timer();
        Ok(page)
    }

    /// The summary for the active filters
    pub async fn summary(&self) -> Result<CachedSummary, DomainError> {
        self.queries
            .summary(&self.state.filter(), RefreshSource::Auto)
            .await
    }

    /// Create a record, then reconcile the visible page
    ///
    /// The optimistic patch and dirty marking happen inside the mutation
    /// service; the post-success refetch converges the view to the
    /// server's true state.
    pub async fn create(&mut self, input: NewExpense) -> Result<(Expense, CachedPage), DomainError> {
        let created = self.mutations.create(input, &self.state).await?;

        let page = self
            .queries
            .refetch_list(&self.state, RefreshSource::PostSuccess)
            .await?;
        self.arm_stale_timer();

        Ok((created, page))
    }

    /// Cancel the pending stale callback; call when the view dismounts
    pub fn teardown(&mut self) {
        if let Some(timer) = self.stale_timer.take() {
            timer.cancel();
        }
    }

    fn arm_stale_timer(&mut self) {
        self.stale_flag.store(false, Ordering::SeqCst);
        let flag = self.stale_flag.clone();

        self.stale_timer = Some(StaleTimer::reset(
            self.stale_timer.take(),
            self.stale_threshold,
            move || {
                flag.store(true, Ordering::SeqCst);
            },
        ));
    }

    async fn load(&mut self, source: RefreshSource) -> Result<CachedPage, DomainError> {
        let page = self.queries.list(&self.state, source).await?;
        self.arm_stale_timer();
        Ok(page)
    }
}

impl Drop for LedgerSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
