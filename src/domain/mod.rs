//! Domain layer - Core business logic and entities

pub mod cache;
pub mod error;
pub mod expense;
pub mod telemetry;

pub use cache::{Cache, CacheExt};
pub use error::DomainError;
pub use expense::{
    Expense, ExpenseFilter, ExpenseId, ExpenseRepository, ExpenseSummary, NewExpense, Page,
    PageInfo, PageRequest,
};
pub use telemetry::{CorrelationId, Pane, RefreshSource, TelemetryEmitter, TelemetryEvent};
