//! Storage layer for the budget planner
//!
//! Saves and loads an [`ExpenseStore`] as a plain text file, one value per
//! line. Writes are atomic; loads build a new store and never touch the
//! caller's.

pub mod file_io;
pub mod text_format;

pub use file_io::{read_text_required, write_text_atomic};
pub use text_format::{decode, encode};

use std::path::Path;

use tracing::info;

use crate::error::PlannerResult;
use crate::store::ExpenseStore;

/// Write a store to `path`
pub fn save_store<P: AsRef<Path>>(path: P, store: &ExpenseStore) -> PlannerResult<()> {
    let path = path.as_ref();
    write_text_atomic(path, &encode(store))?;
    info!(path = %path.display(), expenses = store.len(), "saved expenses");
    Ok(())
}

/// Read a store from `path`
pub fn load_store<P: AsRef<Path>>(path: P) -> PlannerResult<ExpenseStore> {
    let path = path.as_ref();
    let store = decode(&read_text_required(path)?)?;
    info!(path = %path.display(), expenses = store.len(), "loaded expenses");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseInput, Money};
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.txt");

        let mut store = ExpenseStore::new();
        store.set_budget(Money::from_dollars(3000.0)).unwrap();
        store.add_expense(ExpenseInput::new("Furniture", "Sofa", 2, Money::from_dollars(450.0)));

        save_store(&path, &store).unwrap();
        let loaded = load_store(&path).unwrap();

        assert_eq!(loaded.budget(), Money::from_dollars(3000.0));
        let sofa = loaded.get_at(0).unwrap();
        assert_eq!(sofa.input(), store.get_at(0).unwrap().input());
        assert_eq!(sofa.total_cost, Money::from_dollars(900.0));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_store(temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, crate::error::PlannerError::Io(_)));
    }
}
