//! Money type for representing currency amounts
//!
//! Amounts are kept as 64-bit floats so a saved file reproduces the values it
//! was written from exactly. Display always rounds to two decimal places.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount in dollars
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a dollar value
    ///
    /// # Examples
    /// ```
    /// use planner::models::Money;
    /// let amount = Money::from_dollars(10.5);
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_dollars(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw dollar value
    pub const fn value(&self) -> f64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Multiply a unit price by a quantity
    pub fn times(&self, quantity: u32) -> Self {
        Self(f64::from(quantity) * self.0)
    }

    /// Parse a money amount from user text
    ///
    /// Every `$` is removed before parsing, so "$10.50", "10.50$" and
    /// "10.50" are equivalent. Surrounding whitespace is allowed; anything
    /// else after the number is not. Non-finite values are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s.chars().filter(|c| *c != '$').collect();
        let cleaned = cleaned.trim();

        if cleaned.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let value: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.trim().to_string()))?;

        if !value.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.trim().to_string()));
        }

        Ok(Self(value))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${:.2}", self.0.abs())
        } else {
            write!(f, "${:.2}", self.0.abs())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "No amount entered"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_dollars(10.5).to_string(), "$10.50");
        assert_eq!(Money::from_dollars(0.0).to_string(), "$0.00");
        assert_eq!(Money::from_dollars(-0.0).to_string(), "$0.00");
        assert_eq!(Money::from_dollars(-200.0).to_string(), "-$200.00");
        assert_eq!(Money::from_dollars(0.05).to_string(), "$0.05");
    }

    #[test]
    fn test_times() {
        let price = Money::from_dollars(450.0);
        assert_eq!(price.times(2), Money::from_dollars(900.0));
        assert_eq!(Money::from_dollars(19.99).times(3).value(), 3.0 * 19.99);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Money::parse("$10.50").unwrap().value(), 10.5);
        assert_eq!(Money::parse("10.50$").unwrap().value(), 10.5);
        assert_eq!(Money::parse("  $500 ").unwrap().value(), 500.0);
        assert_eq!(Money::parse("-10").unwrap().value(), -10.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert_eq!(Money::parse("$"), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12.5 dollars").is_err());
        assert!(Money::parse("1 2").is_err());
        assert!(Money::parse("inf").is_err());
        assert!(Money::parse("NaN").is_err());
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Money::from_dollars(1000.0);
        let b = Money::from_dollars(800.0);
        assert_eq!((a - b).value(), 200.0);

        let amounts = vec![
            Money::from_dollars(100.0),
            Money::from_dollars(200.0),
            Money::from_dollars(300.0),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.value(), 600.0);
    }

    #[test]
    fn test_comparison() {
        assert!(Money::from_dollars(10.0) > Money::from_dollars(5.0));
        assert!(!Money::zero().is_positive());
        assert!(Money::from_dollars(1.0).is_positive());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_dollars(10.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
