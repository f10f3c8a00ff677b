//! Service layer wiring domain logic to infrastructure

pub mod expense_service;

pub use expense_service::ExpenseService;
