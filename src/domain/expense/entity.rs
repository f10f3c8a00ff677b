//! Expense domain entities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Regex pattern for valid expense IDs: exp-{uuid}
static ID_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^exp-[a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12}$").unwrap()
});

/// Maximum length for expense IDs
pub const MAX_ID_LENGTH: usize = 40; // "exp-" + 36 char UUID

/// Validated expense identifier
///
/// Server-assigned, unique, stable for the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Create a new validated expense ID
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        validate_expense_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a new expense ID with UUID
    pub fn generate() -> Self {
        let uuid = uuid::Uuid::new_v4();
        Self(format!("exp-{}", uuid))
    }

    /// Get the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ExpenseId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExpenseId> for String {
    fn from(id: ExpenseId) -> Self {
        id.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate an expense ID string
pub fn validate_expense_id(id: &str) -> Result<(), DomainError> {
    if id.is_empty() {
        return Err(DomainError::invalid_id("Expense ID cannot be empty"));
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(DomainError::invalid_id(format!(
            "Expense ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }

    if !ID_PATTERN.is_match(id) {
        return Err(DomainError::invalid_id(format!(
            "Invalid expense ID '{}': must be in format exp-{{uuid}}",
            id
        )));
    }

    Ok(())
}

/// An expense record
///
/// `date` is a `YYYY-MM-DD` calendar date; the store treats it as an
/// already-validated opaque string (validation sits upstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    id: ExpenseId,
    amount: f64,
    category: String,
    date: String,
}

impl Expense {
    /// Create a stored expense from validated input with a fresh ID
    pub fn from_input(input: NewExpense) -> Self {
        Self {
            id: ExpenseId::generate(),
            amount: input.amount,
            category: input.category,
            date: input.date,
        }
    }

    /// Create an expense with a specific ID (for testing)
    pub fn with_id(id: ExpenseId, amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id,
            amount,
            category: category.into(),
            date: date.into(),
        }
    }

    pub fn id(&self) -> &ExpenseId {
        &self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> &str {
        &self.date
    }
}

/// Input for creating an expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl NewExpense {
    pub fn new(amount: f64, category: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            date: date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_id_generate() {
        let id = ExpenseId::generate();
        assert!(id.as_str().starts_with("exp-"));
        assert_eq!(id.as_str().len(), 40); // "exp-" + 36 char UUID
    }

    #[test]
    fn test_expense_id_valid() {
        let id = ExpenseId::new("exp-12345678-1234-1234-1234-123456789abc");
        assert!(id.is_ok());
    }

    #[test]
    fn test_expense_id_invalid() {
        assert!(ExpenseId::new("").is_err());
        assert!(ExpenseId::new("invalid").is_err());
        assert!(ExpenseId::new("exp-invalid").is_err());
        assert!(ExpenseId::new("12345678-1234-1234-1234-123456789abc").is_err());
    }

    #[test]
    fn test_expense_id_serialization() {
        let id = ExpenseId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert!(json.starts_with("\"exp-"));

        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_expense_from_input() {
        let expense = Expense::from_input(NewExpense::new(12.5, "food", "2025-01-10"));

        assert!(expense.id().as_str().starts_with("exp-"));
        assert_eq!(expense.amount(), 12.5);
        assert_eq!(expense.category(), "food");
        assert_eq!(expense.date(), "2025-01-10");
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Expense::from_input(NewExpense::new(1.0, "food", "2025-01-01"));
        let b = Expense::from_input(NewExpense::new(1.0, "food", "2025-01-01"));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_expense_serialization() {
        let expense = Expense::with_id(
            ExpenseId::new("exp-12345678-1234-1234-1234-123456789abc").unwrap(),
            42.0,
            "travel",
            "2025-03-02",
        );

        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"category\":\"travel\""));
        assert!(json.contains("\"date\":\"2025-03-02\""));

        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, expense);
    }
}
