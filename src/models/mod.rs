//! Core data models for the budget planner
//!
//! An expense is a single purchased line item; money amounts and stable
//! identifiers get their own types.

pub mod expense;
pub mod ids;
pub mod money;

pub use expense::{Expense, ExpenseInput, ExpenseValidationError};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
