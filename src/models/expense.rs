//! Expense model
//!
//! One purchased line item: what it was, how many, and what it cost.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// The user-supplied fields of an expense
///
/// Used for both adding and editing; the total is always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub category: String,
    pub item_name: String,
    pub quantity: u32,
    pub cost_per_item: Money,
}

impl ExpenseInput {
    pub fn new(
        category: impl Into<String>,
        item_name: impl Into<String>,
        quantity: u32,
        cost_per_item: Money,
    ) -> Self {
        Self {
            category: category.into(),
            item_name: item_name.into(),
            quantity,
            cost_per_item,
        }
    }

    /// Validate the fields against the record invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if is_all_digits(&self.category) {
            return Err(ExpenseValidationError::NumericCategory(self.category.clone()));
        }

        if self.quantity == 0 {
            return Err(ExpenseValidationError::ZeroQuantity);
        }

        let cost = self.cost_per_item.value();
        if !cost.is_finite() || cost < 0.0 {
            return Err(ExpenseValidationError::NegativeCost(cost));
        }

        Ok(())
    }
}

/// True for a non-empty string made only of ASCII digits
pub(crate) fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// A recorded expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier, not persisted to the text file
    pub id: ExpenseId,

    /// Expense category (e.g., "Furniture", "Paint")
    pub category: String,

    /// Name of the item purchased; may be empty
    pub item_name: String,

    pub quantity: u32,

    pub cost_per_item: Money,

    /// Always `quantity * cost_per_item`
    pub total_cost: Money,
}

impl Expense {
    /// Create a new expense from already validated fields
    pub fn new(input: ExpenseInput) -> Self {
        let total_cost = input.cost_per_item.times(input.quantity);
        Self {
            id: ExpenseId::new(),
            category: input.category,
            item_name: input.item_name,
            quantity: input.quantity,
            cost_per_item: input.cost_per_item,
            total_cost,
        }
    }

    /// Overwrite every user field and recompute the total; the id is kept
    pub fn apply(&mut self, input: ExpenseInput) {
        self.total_cost = input.cost_per_item.times(input.quantity);
        self.category = input.category;
        self.item_name = input.item_name;
        self.quantity = input.quantity;
        self.cost_per_item = input.cost_per_item;
    }

    /// The user fields of this expense
    pub fn input(&self) -> ExpenseInput {
        ExpenseInput {
            category: self.category.clone(),
            item_name: self.item_name.clone(),
            quantity: self.quantity,
            cost_per_item: self.cost_per_item,
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.item_name, self.total_cost)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    NumericCategory(String),
    ZeroQuantity,
    NegativeCost(f64),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericCategory(c) => {
                write!(f, "Category cannot be only numbers (got '{}')", c)
            }
            Self::ZeroQuantity => write!(f, "Quantity must be a positive integer"),
            Self::NegativeCost(_) => write!(f, "Cost per item must be a non-negative number"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa() -> ExpenseInput {
        ExpenseInput::new("Furniture", "Sofa", 2, Money::from_dollars(450.0))
    }

    #[test]
    fn test_new_expense_computes_total() {
        let expense = Expense::new(sofa());
        assert_eq!(expense.category, "Furniture");
        assert_eq!(expense.item_name, "Sofa");
        assert_eq!(expense.total_cost, Money::from_dollars(900.0));
    }

    #[test]
    fn test_apply_recomputes_total_and_keeps_id() {
        let mut expense = Expense::new(sofa());
        let id = expense.id;

        expense.apply(ExpenseInput::new("Paint", "", 3, Money::from_dollars(19.99)));

        assert_eq!(expense.id, id);
        assert_eq!(expense.category, "Paint");
        assert_eq!(expense.item_name, "");
        assert_eq!(expense.total_cost.value(), 3.0 * 19.99);
    }

    #[test]
    fn test_input_round_trip() {
        let expense = Expense::new(sofa());
        assert_eq!(expense.input(), sofa());
    }

    #[test]
    fn test_validation() {
        assert!(sofa().validate().is_ok());
        assert!(ExpenseInput::new("", "", 1, Money::zero()).validate().is_ok());
        assert!(ExpenseInput::new("Room 12", "", 1, Money::zero()).validate().is_ok());

        assert_eq!(
            ExpenseInput::new("123", "Lamp", 1, Money::zero()).validate(),
            Err(ExpenseValidationError::NumericCategory("123".into()))
        );
        assert_eq!(
            ExpenseInput::new("Decor", "Lamp", 0, Money::zero()).validate(),
            Err(ExpenseValidationError::ZeroQuantity)
        );
        assert!(matches!(
            ExpenseInput::new("Decor", "Lamp", 1, Money::from_dollars(-1.0)).validate(),
            Err(ExpenseValidationError::NegativeCost(_))
        ));
    }

    #[test]
    fn test_display() {
        let expense = Expense::new(sofa());
        assert_eq!(expense.to_string(), "Sofa - $900.00");
    }
}
