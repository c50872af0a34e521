//! Expense listing for selection prompts

use crate::store::ExpenseStore;

/// One line per expense, prefixed with its position
///
/// Positions are what the edit and delete prompts accept.
pub fn format_selection_list(store: &ExpenseStore) -> String {
    store
        .list_all()
        .map(|(index, expense)| format!("{}: {}\n", index, expense))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseInput, Money};

    #[test]
    fn test_selection_list() {
        let mut store = ExpenseStore::new();
        store.add_expense(ExpenseInput::new("Furniture", "Sofa", 2, Money::from_dollars(450.0)));
        store.add_expense(ExpenseInput::new("Paint", "", 1, Money::from_dollars(19.5)));

        assert_eq!(format_selection_list(&store), "0: Sofa - $900.00\n1:  - $19.50\n");
    }

    #[test]
    fn test_empty_selection_list() {
        assert_eq!(format_selection_list(&ExpenseStore::new()), "");
    }
}
