//! Spending summary
//!
//! Renders every expense followed by the totals block and the over/under
//! budget line. All amounts are shown with two decimal places.

use serde::Serialize;
use std::fmt;

use crate::models::{Expense, Money};
use crate::store::ExpenseStore;

use super::report::{double_separator, format_header, separator, SUMMARY_WIDTH};

/// Where spending stands against the budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spent more than budgeted, by this much
    Over(Money),
    /// Budget left over (zero when exactly on budget)
    Remaining(Money),
}

impl BudgetStatus {
    pub fn new(total_spent: Money, total_budget: Money) -> Self {
        if total_spent > total_budget {
            Self::Over(total_spent - total_budget)
        } else {
            Self::Remaining(total_budget - total_spent)
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Over(amount) => write!(f, "OVER BUDGET by {}!", amount),
            Self::Remaining(amount) => write!(f, "Remaining Budget: {}", amount),
        }
    }
}

/// Machine-readable summary, used by `planner summary --json`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport<'a> {
    pub expenses: Vec<&'a Expense>,
    pub total_spent: Money,
    pub total_budget: Money,
    pub budget_status: BudgetStatus,
}

impl<'a> SummaryReport<'a> {
    pub fn new(store: &'a ExpenseStore) -> Self {
        let total_spent = store.total_spent();
        let total_budget = store.budget();
        Self {
            expenses: store.list_all().map(|(_, e)| e).collect(),
            total_spent,
            total_budget,
            budget_status: BudgetStatus::new(total_spent, total_budget),
        }
    }
}

/// Format the full summary, or a short notice for an empty store
pub fn format_summary(store: &ExpenseStore) -> String {
    if store.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let report = SummaryReport::new(store);
    let mut output = String::new();

    output.push_str(&double_separator(SUMMARY_WIDTH));
    output.push('\n');
    output.push_str(&format_header("EXPENSE SUMMARY", SUMMARY_WIDTH));
    output.push('\n');
    output.push_str(&double_separator(SUMMARY_WIDTH));
    output.push('\n');

    for expense in &report.expenses {
        output.push('\n');
        output.push_str(&separator(SUMMARY_WIDTH));
        output.push('\n');
        output.push_str(&format_expense_details(expense));
    }

    output.push('\n');
    output.push_str(&double_separator(SUMMARY_WIDTH));
    output.push('\n');
    output.push_str(&format!("Total Spent      : {}\n", report.total_spent));
    output.push_str(&format!("Total Budget     : {}\n", report.total_budget));
    output.push('\n');
    output.push_str(&format!("{}\n", report.budget_status));
    output.push_str(&double_separator(SUMMARY_WIDTH));
    output.push('\n');

    output
}

/// Format the five field lines of one expense
pub fn format_expense_details(expense: &Expense) -> String {
    format!(
        "Category : {}\nItem     : {}\nQuantity : {}\nCost per item: {}\nTotal    : {}\n",
        expense.category,
        expense.item_name,
        expense.quantity,
        expense.cost_per_item,
        expense.total_cost,
    )
}
