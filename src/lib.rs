//! Budget Planner - console expense tracking for renovation projects
//!
//! Tracks itemized expenses against a single budget figure and saves them to
//! a plain text file.
//!
//! # Architecture
//!
//! - `models`: expense records, money amounts and identifiers
//! - `store`: the in-memory expense list plus budget
//! - `input`: input validators and interactive prompt loops
//! - `display`: summary and listing formatting
//! - `storage`: the text file format and atomic file I/O
//! - `session`: the single owner of a store for one user
//! - `config`: path resolution and user settings
//! - `cli`: the interactive menu and non-interactive commands
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust
//! use planner::models::{ExpenseInput, Money};
//! use planner::store::ExpenseStore;
//!
//! let mut store = ExpenseStore::new();
//! store.set_budget(Money::from_dollars(3000.0)).unwrap();
//! store.add_expense(ExpenseInput::new("Furniture", "Sofa", 2, Money::from_dollars(450.0)));
//! assert_eq!(store.total_spent(), Money::from_dollars(900.0));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;

pub use error::{PlannerError, PlannerResult};
