//! Timing and outcome telemetry around refresh operations

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::expense::ExpenseFilter;
use crate::domain::telemetry::{
    CorrelationId, Pane, RefreshSource, TelemetryEmitter, TelemetryEvent,
};
use crate::domain::DomainError;

/// Wraps refresh operations with exactly-one-event telemetry
///
/// The correlation id is generated once at construction and tags every
/// event this tracker emits. The wrapped operation's result or error is
/// always forwarded untouched; a failure event is emitted and the error
/// rethrown, never swallowed.
#[derive(Debug, Clone)]
pub struct RefreshTracker {
    emitter: Arc<dyn TelemetryEmitter>,
    correlation_id: CorrelationId,
}

impl RefreshTracker {
    pub fn new(emitter: Arc<dyn TelemetryEmitter>) -> Self {
        Self {
            emitter,
            correlation_id: CorrelationId::generate(),
        }
    }

    pub fn correlation_id(&self) -> &CorrelationId {
        &self.correlation_id
    }

    /// Run a refresh operation, emitting one timing/outcome event
    pub async fn track<T, F>(
        &self,
        source: RefreshSource,
        pane: Pane,
        filters: &ExpenseFilter,
        operation: F,
    ) -> Result<T, DomainError>
    where
        F: Future<Output = Result<T, DomainError>> + Send,
    {
        let start = Instant::now();
        let result = operation.await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let event = TelemetryEvent::refresh(
            source,
            pane,
            filters.clone(),
            duration_ms,
            result.is_ok(),
            result.as_ref().err().map(|e| e.to_string()),
            self.correlation_id.clone(),
        );
        self.emitter.emit(event);

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::telemetry::mock::CapturingTelemetryEmitter;

    fn tracker() -> (RefreshTracker, Arc<CapturingTelemetryEmitter>) {
        let emitter = Arc::new(CapturingTelemetryEmitter::new());
        (RefreshTracker::new(emitter.clone()), emitter)
    }

    #[tokio::test]
    async fn test_success_emits_exactly_one_event() {
        let (tracker, emitter) = tracker();

        let result = tracker
            .track(RefreshSource::Manual, Pane::List, &ExpenseFilter::all(), async {
                Ok(7u32)
            })
            .await;

        assert_eq!(result.unwrap(), 7);
        let events = emitter.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].success);
        assert!(events[0].error.is_none());
        assert_eq!(events[0].source, RefreshSource::Manual);
        assert_eq!(events[0].pane, Some(Pane::List));
    }

    #[tokio::test]
    async fn test_failure_emits_and_rethrows() {
        let (tracker, emitter) = tracker();

        let result: Result<u32, _> = tracker
            .track(RefreshSource::Auto, Pane::Summary, &ExpenseFilter::all(), async {
                Err(DomainError::network("connection refused"))
            })
            .await;

        let error = result.unwrap_err();
        assert!(error.is_network());

        let events = emitter.events();
        assert_eq!(events.len(), 1);
        assert!(!events[0].success);
        assert!(events[0]
            .error
            .as_deref()
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn test_correlation_id_stable_across_events() {
        let (tracker, emitter) = tracker();
        let filters = ExpenseFilter::all().with_category("food");

        for _ in 0..3 {
            let _ = tracker
                .track(RefreshSource::PostSuccess, Pane::List, &filters, async {
                    Ok(())
                })
                .await;
        }

        let events = emitter.events();
        assert_eq!(events.len(), 3);
        assert!(events
            .iter()
            .all(|e| e.correlation_id == events[0].correlation_id));
        assert_eq!(events[0].correlation_id, *tracker.correlation_id());
    }

    #[tokio::test]
    async fn test_event_carries_filters() {
        let (tracker, emitter) = tracker();
        let filters = ExpenseFilter::all().with_month("2025-01");

        let _ = tracker
            .track(RefreshSource::Manual, Pane::Drawer, &filters, async { Ok(()) })
            .await;

        assert_eq!(emitter.events()[0].filters, filters);
    }
}
