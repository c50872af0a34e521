//! Pure input validators
//!
//! Each validator turns one line of user text into a typed value or a
//! `PlannerError::Validation`. The interactive retry loops live in
//! [`super::prompt`]; these functions never read input themselves.

use crate::error::{PlannerError, PlannerResult};
use crate::models::expense::is_all_digits;
use crate::models::Money;

/// Highest menu entry
pub const MENU_CHOICES: i64 = 8;

/// Read the leading integer of a line, ignoring whatever follows it
///
/// Leading whitespace and a single sign are allowed. Returns `None` when the
/// line does not start with a number or the number overflows.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with('+') || s.starts_with('-'));
    let digits_len = s[sign_len..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits_len == 0 {
        return None;
    }

    s[..sign_len + digits_len].parse().ok()
}

/// Parse a quantity: a positive integer, trailing text discarded
pub fn parse_quantity(s: &str) -> PlannerResult<u32> {
    let invalid =
        || PlannerError::Validation("Invalid input. Quantity must be a positive integer.".into());

    let value = leading_integer(s).ok_or_else(invalid)?;
    if value <= 0 {
        return Err(invalid());
    }

    u32::try_from(value).map_err(|_| invalid())
}

/// Parse a cost per item: a non-negative amount, `$` allowed anywhere
pub fn parse_cost(s: &str) -> PlannerResult<Money> {
    let invalid = || {
        PlannerError::Validation("Invalid input. Cost per item must be a non-negative number.".into())
    };

    let amount = Money::parse(s).map_err(|_| invalid())?;
    if amount.is_negative() {
        return Err(invalid());
    }

    Ok(amount)
}

/// Parse a budget: a strictly positive amount, `$` allowed anywhere
pub fn parse_budget(s: &str) -> PlannerResult<Money> {
    let amount = Money::parse(s)
        .map_err(|_| PlannerError::Validation("Invalid budget amount.".into()))?;

    if !amount.is_positive() {
        return Err(PlannerError::Validation("Invalid budget amount.".into()));
    }

    Ok(amount)
}

/// Check a category label
///
/// Surrounding whitespace is trimmed. An empty label is accepted; a label
/// made only of digits is not.
pub fn validate_category(s: &str) -> PlannerResult<String> {
    let category = s.trim();
    if is_all_digits(category) {
        return Err(PlannerError::Validation(
            "Invalid input. Category cannot be only numbers.".into(),
        ));
    }

    Ok(category.to_string())
}

/// Parse a main menu choice in `1..=8`
pub fn parse_menu_choice(s: &str) -> PlannerResult<u8> {
    match leading_integer(s) {
        Some(n) if (1..=MENU_CHOICES).contains(&n) => Ok(n as u8),
        _ => Err(PlannerError::Validation(
            "Invalid choice. Please try again.".into(),
        )),
    }
}

/// Parse a position in a listing of `len` expenses
pub fn parse_index(s: &str, len: usize) -> PlannerResult<usize> {
    let value = leading_integer(s).ok_or_else(|| {
        PlannerError::Validation("Invalid input. Please enter a valid integer.".into())
    })?;

    let index = usize::try_from(value).map_err(|_| {
        PlannerError::Validation("Invalid selection. Please enter a valid expense number.".into())
    })?;

    if index >= len {
        return Err(PlannerError::IndexOutOfRange { index, len });
    }

    Ok(index)
}
