//! In-memory expense store
//!
//! Holds the ordered list of expenses plus the single budget figure. Order is
//! insertion order; deleting shifts later entries down by one position.

use tracing::debug;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Expense, ExpenseId, ExpenseInput, Money};

/// Expenses and the budget they are tracked against
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    budget: Money,
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store with a zero budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already validated parts
    pub fn from_parts(budget: Money, expenses: Vec<Expense>) -> Self {
        Self { budget, expenses }
    }

    pub fn budget(&self) -> Money {
        self.budget
    }

    /// Set the budget; zero and negative values are rejected
    pub fn set_budget(&mut self, budget: Money) -> PlannerResult<()> {
        if !budget.is_positive() || !budget.value().is_finite() {
            return Err(PlannerError::Validation(
                "Budget must be greater than zero".into(),
            ));
        }

        debug!(budget = budget.value(), "budget set");
        self.budget = budget;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Append a new expense and return its id
    pub fn add_expense(&mut self, input: ExpenseInput) -> ExpenseId {
        let expense = Expense::new(input);
        let id = expense.id;
        debug!(%id, total = expense.total_cost.value(), "expense added");
        self.expenses.push(expense);
        id
    }

    /// Overwrite the expense at `index`
    pub fn edit_expense(&mut self, index: usize, input: ExpenseInput) -> PlannerResult<&Expense> {
        let len = self.expenses.len();
        let expense = self
            .expenses
            .get_mut(index)
            .ok_or(PlannerError::IndexOutOfRange { index, len })?;

        expense.apply(input);
        debug!(index, id = %expense.id, "expense edited");
        Ok(expense)
    }

    /// Remove the expense at `index`, shifting later entries down
    pub fn delete_expense(&mut self, index: usize) -> PlannerResult<Expense> {
        let len = self.expenses.len();
        if index >= len {
            return Err(PlannerError::IndexOutOfRange { index, len });
        }

        let removed = self.expenses.remove(index);
        debug!(index, id = %removed.id, "expense deleted");
        Ok(removed)
    }

    /// Sum of every expense total; zero when empty
    pub fn total_spent(&self) -> Money {
        self.expenses.iter().map(|e| e.total_cost).sum()
    }

    /// Positions and expenses in storage order
    ///
    /// The iterator is lazy and cloneable; call again to restart.
    pub fn list_all(&self) -> impl Iterator<Item = (usize, &Expense)> + Clone + '_ {
        self.expenses.iter().enumerate()
    }

    pub fn get_at(&self, index: usize) -> Option<&Expense> {
        self.expenses.get(index)
    }

    /// Current position of an expense
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.expenses.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Validate and append an expense
    ///
    /// For callers that did not collect the fields through the prompts.
    pub fn try_add_expense(&mut self, input: ExpenseInput) -> PlannerResult<ExpenseId> {
        input.validate()?;
        Ok(self.add_expense(input))
    }

    /// Validate and overwrite an expense selected by id
    pub fn edit_by_id(&mut self, id: ExpenseId, input: ExpenseInput) -> PlannerResult<&Expense> {
        input.validate()?;
        let index = self
            .position(id)
            .ok_or_else(|| PlannerError::expense_not_found(id.to_string()))?;
        self.edit_expense(index, input)
    }

    /// Remove an expense selected by id
    pub fn delete_by_id(&mut self, id: ExpenseId) -> PlannerResult<Expense> {
        let index = self
            .position(id)
            .ok_or_else(|| PlannerError::expense_not_found(id.to_string()))?;
        self.delete_expense(index)
    }
}
