//! Cached read paths for the list and summary views

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use tracing::debug;

use crate::domain::cache::{key, Cache, CacheExt};
use crate::domain::expense::ExpenseFilter;
use crate::domain::telemetry::{Pane, RefreshSource};
use crate::domain::DomainError;

use super::api::ExpenseApi;
use super::entry::{CachedPage, CachedSummary};
use super::invalidation::InvalidationQueue;
use super::query_state::QueryState;
use super::refresh_tracker::RefreshTracker;

type SharedFetch<T> = Shared<BoxFuture<'static, Result<T, DomainError>>>;

/// Tuning for the cached read paths
#[derive(Debug, Clone)]
pub struct QueryCacheConfig {
    /// TTL for stored entries (eviction policy, not query logic)
    pub entry_ttl: Duration,
    /// Automatic retries for the list query. Intentionally zero: the list
    /// fails fast and surfaces its error.
    pub list_retries: u32,
    /// Automatic retries for the summary query. One silent retry before
    /// the error surfaces.
    pub summary_retries: u32,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            entry_ttl: Duration::from_secs(3600),
            list_retries: 0,
            summary_retries: 1,
        }
    }
}

/// Per-key cached read state over the record-store boundary
///
/// Keys derive from the full filter/pagination tuple, so a filter change
/// is always a miss. Reads never write speculatively: an entry is stored
/// only after its fetch succeeds. Concurrent fetches for the same key
/// coalesce into one upstream call; distinct keys proceed independently,
/// and a stale in-flight fetch can only ever land in its own key's slot.
pub struct ExpenseQueryService {
    api: Arc<dyn ExpenseApi>,
    cache: Arc<dyn Cache>,
    invalidations: Arc<InvalidationQueue>,
    tracker: RefreshTracker,
    in_flight_lists: Mutex<HashMap<String, SharedFetch<CachedPage>>>,
    in_flight_summaries: Mutex<HashMap<String, SharedFetch<CachedSummary>>>,
    config: QueryCacheConfig,
}

impl std::fmt::Debug for ExpenseQueryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpenseQueryService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ExpenseQueryService {
    pub fn new(
        api: Arc<dyn ExpenseApi>,
        cache: Arc<dyn Cache>,
        invalidations: Arc<InvalidationQueue>,
        tracker: RefreshTracker,
    ) -> Self {
        Self::with_config(api, cache, invalidations, tracker, QueryCacheConfig::default())
    }

    pub fn with_config(
        api: Arc<dyn ExpenseApi>,
        cache: Arc<dyn Cache>,
        invalidations: Arc<InvalidationQueue>,
        tracker: RefreshTracker,
        config: QueryCacheConfig,
    ) -> Self {
        Self {
            api,
            cache,
            invalidations,
            tracker,
            in_flight_lists: Mutex::new(HashMap::new()),
            in_flight_summaries: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn invalidations(&self) -> &Arc<InvalidationQueue> {
        &self.invalidations
    }

    pub fn correlation_id(&self) -> &crate::domain::telemetry::CorrelationId {
        self.tracker.correlation_id()
    }

    /// One page of the list view for the current state
    ///
    /// Serves the cached entry unless it is missing or marked dirty;
    /// otherwise fetches through the boundary and stores the result.
    pub async fn list(
        &self,
        state: &QueryState,
        source: RefreshSource,
    ) -> Result<CachedPage, DomainError> {
        let cache_key = key::list_key(&state.filter(), &state.page_request());

        if let Some(entry) = self.cache.get::<CachedPage>(&cache_key).await? {
            if !self.invalidations.invalidated_since(&cache_key, entry.fetched_at) {
                debug!(key = %cache_key, "list cache hit");
                return Ok(entry);
            }
            debug!(key = %cache_key, "list entry dirty, refetching");
        }

        self.fetch_list(state, source).await
    }

    /// Fetch the current page through the boundary, bypassing the cache
    pub async fn refetch_list(
        &self,
        state: &QueryState,
        source: RefreshSource,
    ) -> Result<CachedPage, DomainError> {
        self.fetch_list(state, source).await
    }

    /// The summary view for a filter combination
    pub async fn summary(
        &self,
        filter: &ExpenseFilter,
        source: RefreshSource,
    ) -> Result<CachedSummary, DomainError> {
        let cache_key = key::summary_key(filter);

        if let Some(entry) = self.cache.get::<CachedSummary>(&cache_key).await? {
            if !self.invalidations.invalidated_since(&cache_key, entry.fetched_at) {
                debug!(key = %cache_key, "summary cache hit");
                return Ok(entry);
            }
            debug!(key = %cache_key, "summary entry dirty, refetching");
        }

        self.fetch_summary(filter, source).await
    }

    /// Fetch the summary through the boundary, bypassing the cache
    pub async fn refetch_summary(
        &self,
        filter: &ExpenseFilter,
        source: RefreshSource,
    ) -> Result<CachedSummary, DomainError> {
        self.fetch_summary(filter, source).await
    }

    /// List fetch with singleflight coalescing and zero retries
    async fn fetch_list(
        &self,
        state: &QueryState,
        source: RefreshSource,
    ) -> Result<CachedPage, DomainError> {
        let filter = state.filter();
        let page = state.page_request();
        let cache_key = key::list_key(&filter, &page);

        let (fetch, leader) = {
            let mut in_flight = self.in_flight_lists.lock().unwrap();

            if let Some(existing) = in_flight.get(&cache_key) {
                debug!(key = %cache_key, "coalescing into in-flight list fetch");
                (existing.clone(), false)
            } else {
                let api = self.api.clone();
                let cache = self.cache.clone();
                let tracker = self.tracker.clone();
                let ttl = self.config.entry_ttl;
                let retries = self.config.list_retries;
                let fetch_key = cache_key.clone();

                let fetch: SharedFetch<CachedPage> = async move {
                    let fetched = tracker
                        .track(source, Pane::List, &filter, async {
                            retry(retries, || api.list_expenses(&filter, &page)).await
                        })
                        .await?;

                    let entry = CachedPage::from_page(fetched);
                    cache.set(&fetch_key, &entry, ttl).await?;
                    Ok(entry)
                }
                .boxed()
                .shared();

                in_flight.insert(cache_key.clone(), fetch.clone());
                (fetch, true)
            }
        };

        let result = fetch.await;

        if leader {
            self.in_flight_lists.lock().unwrap().remove(&cache_key);
        }

        result
    }

    /// Summary fetch with singleflight coalescing and one silent retry
    async fn fetch_summary(
        &self,
        filter: &ExpenseFilter,
        source: RefreshSource,
    ) -> Result<CachedSummary, DomainError> {
        let cache_key = key::summary_key(filter);

        let (fetch, leader) = {
            let mut in_flight = self.in_flight_summaries.lock().unwrap();

            if let Some(existing) = in_flight.get(&cache_key) {
                debug!(key = %cache_key, "coalescing into in-flight summary fetch");
                (existing.clone(), false)
            } else {
                let api = self.api.clone();
                let cache = self.cache.clone();
                let tracker = self.tracker.clone();
                let ttl = self.config.entry_ttl;
                let retries = self.config.summary_retries;
                let filter = filter.clone();
                let fetch_key = cache_key.clone();

                let fetch: SharedFetch<CachedSummary> = async move {
                    let fetched = tracker
                        .track(source, Pane::Summary, &filter, async {
                            retry(retries, || api.summarize_expenses(&filter)).await
                        })
                        .await?;

                    let entry = CachedSummary::from_summary(fetched);
                    cache.set(&fetch_key, &entry, ttl).await?;
                    Ok(entry)
                }
                .boxed()
                .shared();

                in_flight.insert(cache_key.clone(), fetch.clone());
                (fetch, true)
            }
        };

        let result = fetch.await;

        if leader {
            self.in_flight_summaries.lock().unwrap().remove(&cache_key);
        }

        result
    }
}

/// Run an operation with up to `retries` silent re-attempts
async fn retry<T, F, Fut>(retries: u32, mut operation: F) -> Result<T, DomainError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, DomainError>>,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if attempt < retries => {
                attempt += 1;
                debug!(%error, attempt, "fetch failed, retrying");
            }
            Err(error) => return Err(error),
        }
    }
}
