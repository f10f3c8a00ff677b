//! Telemetry emitter implementations

use crate::domain::telemetry::{TelemetryEmitter, TelemetryEvent};
use crate::infrastructure::observability::record_refresh;

/// Emitter that writes structured tracing events and Prometheus series
///
/// Emission is fire-and-forget: a failed metrics recorder or filtered
/// subscriber drops the event silently.
#[derive(Debug, Default)]
pub struct TracingTelemetryEmitter;

impl TracingTelemetryEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryEmitter for TracingTelemetryEmitter {
    fn emit(&self, event: TelemetryEvent) {
        tracing::info!(
            event_type = %event.event_type,
            source = %event.source,
            pane = ?event.pane,
            duration_ms = event.duration_ms,
            success = event.success,
            error = event.error.as_deref(),
            correlation_id = %event.correlation_id,
            "telemetry event"
        );

        record_refresh(&event);
    }
}

/// Emitter that discards every event
#[derive(Debug, Default)]
pub struct NullTelemetryEmitter;

impl NullTelemetryEmitter {
    pub fn new() -> Self {
        Self
    }
}

impl TelemetryEmitter for NullTelemetryEmitter {
    fn emit(&self, _event: TelemetryEvent) {}
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Emitter that captures events for assertions
    #[derive(Debug, Default)]
    pub struct CapturingTelemetryEmitter {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl CapturingTelemetryEmitter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events.lock().unwrap().clone()
        }

        pub fn len(&self) -> usize {
            self.events.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    impl TelemetryEmitter for CapturingTelemetryEmitter {
        fn emit(&self, event: TelemetryEvent) {
            self.events.lock().unwrap().push(event);
        }
    }
}
