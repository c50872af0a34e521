//! Display formatting for terminal output
//!
//! Everything here builds strings; writing them is left to the caller.

pub mod expense;
pub mod report;
pub mod summary;

pub use expense::format_selection_list;
pub use summary::{format_summary, BudgetStatus, SummaryReport};
