//! Telemetry events and the emitter seam
//!
//! Delivery is at-most-once and best-effort: emitters take events by value,
//! return nothing, and must never influence the control flow of the
//! operation that produced the event.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::expense::ExpenseFilter;

/// What triggered a refresh
///
/// Pure observability metadata; never alters behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshSource {
    Manual,
    Auto,
    PostSuccess,
}

impl fmt::Display for RefreshSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => write!(f, "manual"),
            Self::Auto => write!(f, "auto"),
            Self::PostSuccess => write!(f, "post-success"),
        }
    }
}

/// Which view the refresh belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pane {
    List,
    Summary,
    Drawer,
}

impl fmt::Display for Pane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Summary => write!(f, "summary"),
            Self::Drawer => write!(f, "drawer"),
        }
    }
}

/// Stable identifier tagging every event from one logical session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh id; callers hold one per session/mount
    pub fn generate() -> Self {
        Self(format!("corr-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single telemetry event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub source: RefreshSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pane: Option<Pane>,
    pub filters: ExpenseFilter,
    pub duration_ms: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: CorrelationId,
}

impl TelemetryEvent {
    /// A refresh timing/outcome event
    pub fn refresh(
        source: RefreshSource,
        pane: Pane,
        filters: ExpenseFilter,
        duration_ms: u64,
        success: bool,
        error: Option<String>,
        correlation_id: CorrelationId,
    ) -> Self {
        Self {
            event_type: "refresh".to_string(),
            source,
            pane: Some(pane),
            filters,
            duration_ms,
            success,
            error,
            timestamp: Utc::now(),
            correlation_id,
        }
    }
}

/// Sink for telemetry events
///
/// Implementations must not block or fail the caller; dropping an event is
/// acceptable, double-delivery is not.
pub trait TelemetryEmitter: Send + Sync + fmt::Debug {
    fn emit(&self, event: TelemetryEvent);
}
