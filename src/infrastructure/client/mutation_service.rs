//! Record creation with an optimistic list patch

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::cache::{key, Cache, CacheExt};
use crate::domain::expense::{total_pages, Expense, NewExpense, PageInfo, PageRequest};
use crate::domain::DomainError;

use super::api::ExpenseApi;
use super::entry::CachedPage;
use super::invalidation::InvalidationQueue;
use super::query_state::QueryState;

/// Prepend a created record to a cached first page
///
/// The patched page never exceeds `page_size` items, and `total_items`
/// grows by exactly one (with `total_pages` following from the same
/// arithmetic). Aggregate sums are never recomputed here; reconciliation
/// is the job of the refetch triggered by invalidation.
pub fn patch_first_page(page: &CachedPage, record: &Expense, page_size: u32) -> CachedPage {
    let mut data = Vec::with_capacity((page.data.len() + 1).min(page_size as usize));
    data.push(record.clone());
    data.extend(page.data.iter().cloned());
    data.truncate(page_size as usize);

    let total_items = page.pagination.total_items + 1;

    CachedPage {
        data,
        pagination: PageInfo {
            total_items,
            current_page: page.pagination.current_page,
            page_size,
            total_pages: total_pages(total_items, page_size),
        },
        fetched_at: page.fetched_at,
    }
}

/// Creation flow: boundary write, optimistic patch, dirty marking
///
/// Only the first page of the currently active filter combination is
/// patched. Other cached pages and filter combinations that might also
/// match the record stay stale until their own invalidation or TTL expiry
/// fires; that laziness is deliberate.
#[derive(Debug)]
pub struct ExpenseMutationService {
    api: Arc<dyn ExpenseApi>,
    cache: Arc<dyn Cache>,
    invalidations: Arc<InvalidationQueue>,
    entry_ttl: Duration,
}

impl ExpenseMutationService {
    pub fn new(
        api: Arc<dyn ExpenseApi>,
        cache: Arc<dyn Cache>,
        invalidations: Arc<InvalidationQueue>,
    ) -> Self {
        Self {
            api,
            cache,
            invalidations,
            entry_ttl: Duration::from_secs(3600),
        }
    }

    pub fn with_entry_ttl(mut self, ttl: Duration) -> Self {
        self.entry_ttl = ttl;
        self
    }

    /// Create a record against the boundary
    ///
    /// On failure nothing is patched and the cache is left untouched; the
    /// error surfaces to the caller. On success the active first page is
    /// patched, then the list and summary families for the active filters
    /// are marked dirty so an eventual refetch reconciles exact totals.
    pub async fn create(
        &self,
        input: NewExpense,
        state: &QueryState,
    ) -> Result<Expense, DomainError> {
        let created = self.api.create_expense(&input).await?;

        self.apply_optimistic_patch(&created, state).await;

        let filter = state.filter();
        self.invalidations.mark(key::list_family(&filter));
        self.invalidations.mark(key::summary_key(&filter));

        Ok(created)
    }

    /// Best-effort patch of the active filter combination's first page
    ///
    /// A cache hiccup here must not fail a create that already succeeded
    /// server-side, so errors are logged and dropped.
    async fn apply_optimistic_patch(&self, created: &Expense, state: &QueryState) {
        let first_page = PageRequest::new(1, state.page_size());
        let cache_key = key::list_key(&state.filter(), &first_page);

        let entry: Option<CachedPage> = match self.cache.get(&cache_key).await {
            Ok(entry) => entry,
            Err(error) => {
                debug!(%error, key = %cache_key, "skipping optimistic patch: cache read failed");
                return;
            }
        };

        let Some(entry) = entry else {
            debug!(key = %cache_key, "no cached first page to patch");
            return;
        };

        let patched = patch_first_page(&entry, created, state.page_size());

        if let Err(error) = self.cache.set(&cache_key, &patched, self.entry_ttl).await {
            debug!(%error, key = %cache_key, "optimistic patch write failed");
        }
    }
}
