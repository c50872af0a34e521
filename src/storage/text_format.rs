//! Line-oriented expense file format
//!
//! ```text
//! <budget>
//! <count>
//! <category>        repeated <count> times,
//! <item name>       five lines per expense
//! <quantity>
//! <cost per item>
//! <total cost>
//! ```
//!
//! Text fields are written verbatim with no escaping. Numbers use the
//! shortest `f64` rendering that reads back to the same value.

use std::fmt::Write as _;
use std::str::{FromStr, Lines};

use tracing::warn;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{Expense, ExpenseInput, Money};
use crate::store::ExpenseStore;

/// Render the store in file format
pub fn encode(store: &ExpenseStore) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", store.budget().value());
    let _ = writeln!(out, "{}", store.len());

    for (_, expense) in store.list_all() {
        let _ = writeln!(out, "{}", expense.category);
        let _ = writeln!(out, "{}", expense.item_name);
        let _ = writeln!(out, "{}", expense.quantity);
        let _ = writeln!(out, "{}", expense.cost_per_item.value());
        let _ = writeln!(out, "{}", expense.total_cost.value());
    }

    out
}

/// Parse file contents into a fresh store
///
/// Nothing is shared with any existing store, so a failed parse leaves the
/// caller's state untouched. Lines after the last declared expense are
/// ignored.
pub fn decode(text: &str) -> PlannerResult<ExpenseStore> {
    let mut reader = LineReader::new(text);

    let budget = reader.amount("budget")?;
    let count: usize = reader.number("expense count")?;

    let mut expenses = Vec::new();
    for n in 1..=count {
        let category = reader.text(&format!("category of expense {}", n))?;
        let item_name = reader.text(&format!("item name of expense {}", n))?;

        let quantity_line = reader.line_no + 1;
        let quantity: i64 = reader.number(&format!("quantity of expense {}", n))?;
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| {
                PlannerError::parse(quantity_line, format!("quantity {} is not positive", quantity))
            })?;

        let cost_per_item = reader.amount(&format!("cost per item of expense {}", n))?;
        let total_line = reader.line_no + 1;
        let stored_total: f64 = reader.number(&format!("total cost of expense {}", n))?;

        let expense = Expense::new(ExpenseInput {
            category: category.to_string(),
            item_name: item_name.to_string(),
            quantity,
            cost_per_item,
        });

        if stored_total != expense.total_cost.value() {
            warn!(
                line = total_line,
                stored = stored_total,
                computed = expense.total_cost.value(),
                "stored total disagrees with quantity * cost per item; using computed total"
            );
        }

        expenses.push(expense);
    }

    Ok(ExpenseStore::from_parts(budget, expenses))
}

/// Line cursor that remembers the 1-based number of the last line read
struct LineReader<'a> {
    lines: Lines<'a>,
    line_no: usize,
}

impl<'a> LineReader<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line_no: 0,
        }
    }

    fn text(&mut self, what: &str) -> PlannerResult<&'a str> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                Ok(line)
            }
            None => Err(PlannerError::parse(
                self.line_no + 1,
                format!("unexpected end of file, expected {}", what),
            )),
        }
    }

    fn number<T: FromStr>(&mut self, what: &str) -> PlannerResult<T> {
        let line = self.text(what)?;
        line.trim().parse().map_err(|_| {
            PlannerError::parse(self.line_no, format!("invalid {} '{}'", what, line.trim()))
        })
    }

    /// A finite, non-negative amount
    fn amount(&mut self, what: &str) -> PlannerResult<Money> {
        let value: f64 = self.number(what)?;
        if !value.is_finite() || value < 0.0 {
            return Err(PlannerError::parse(
                self.line_no,
                format!("{} must be a non-negative number", what),
            ));
        }
        Ok(Money::from_dollars(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofa_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.set_budget(Money::from_dollars(3000.0)).unwrap();
        store.add_expense(ExpenseInput::new(
            "Furniture",
            "Sofa",
            2,
            Money::from_dollars(450.0),
        ));
        store
    }

    #[test]
    fn test_encode_layout() {
        assert_eq!(
            encode(&sofa_store()),
            "3000\n1\nFurniture\nSofa\n2\n450\n900\n"
        );
        assert_eq!(encode(&ExpenseStore::new()), "0\n0\n");
    }

    #[test]
    fn test_round_trip() {
        let mut store = sofa_store();
        store.add_expense(ExpenseInput::new("Paint", "", 3, Money::from_dollars(19.99)));

        let loaded = decode(&encode(&store)).unwrap();

        assert_eq!(loaded.budget(), store.budget());
        let saved: Vec<ExpenseInput> = store.list_all().map(|(_, e)| e.input()).collect();
        let reloaded: Vec<ExpenseInput> = loaded.list_all().map(|(_, e)| e.input()).collect();
        assert_eq!(saved, reloaded);
        assert_eq!(loaded.total_spent(), store.total_spent());
    }

    #[test]
    fn test_decode_accepts_crlf_and_trailing_lines() {
        let text = "500.5\r\n1\r\nLighting\r\nPendant\r\n1\r\n80\r\n80\r\nextra\n";
        let store = decode(text).unwrap();
        assert_eq!(store.budget(), Money::from_dollars(500.5));
        assert_eq!(store.get_at(0).unwrap().item_name, "Pendant");
    }

    #[test]
    fn test_decode_corrupted_number() {
        let text = "3000\n1\nFurniture\nSofa\ntwo\n450\n900\n";
        let err = decode(text).unwrap_err();
        assert!(matches!(err, PlannerError::Parse { line: 5, .. }));
    }

    #[test]
    fn test_decode_bad_budget_and_count() {
        assert!(matches!(
            decode("lots\n0\n"),
            Err(PlannerError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            decode("100\n-1\n"),
            Err(PlannerError::Parse { line: 2, .. })
        ));
        assert!(decode("-5\n0\n").unwrap_err().is_parse());
        assert!(decode("").unwrap_err().is_parse());
    }

    #[test]
    fn test_decode_truncated() {
        let text = "3000\n2\nFurniture\nSofa\n2\n450\n900\nPaint\n";
        let err = decode(text).unwrap_err();
        assert!(matches!(err, PlannerError::Parse { line: 9, .. }));
        assert!(err.to_string().contains("item name of expense 2"));
    }

    #[test]
    fn test_decode_rejects_invalid_values() {
        assert!(decode("1\n1\nA\nB\n0\n1\n0\n").is_err());
        assert!(decode("1\n1\nA\nB\n1\n-1\n-1\n").is_err());
        assert!(decode("1\n1\nA\nB\n1\nNaN\n1\n").is_err());
        assert!(decode("1\n1\nA\nB\n1\n1\nmany\n").is_err());
    }

    #[test]
    fn test_decode_recomputes_total() {
        let store = decode("100\n1\nDecor\nVase\n2\n10\n999\n").unwrap();
        assert_eq!(store.get_at(0).unwrap().total_cost, Money::from_dollars(20.0));
    }

    #[test]
    fn test_round_trip_overflowing_total() {
        let mut store = ExpenseStore::new();
        store.add_expense(ExpenseInput::new("Art", "Fresco", 10, Money::from_dollars(1e308)));

        let text = encode(&store);
        assert!(text.ends_with("\ninf\n"));

        let loaded = decode(&text).unwrap();
        let expense = loaded.get_at(0).unwrap();
        assert_eq!(expense.cost_per_item, Money::from_dollars(1e308));
        assert_eq!(expense.total_cost.value(), f64::INFINITY);
    }
}
