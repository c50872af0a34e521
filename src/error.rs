//! Custom error types for the budget planner
//!
//! Every failure the planner can report is a variant of [`PlannerError`].
//! None of them are fatal: the menu loop renders the message and carries on.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Rejected user input (quantity, amount, category, menu choice)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Positional selection outside the current listing
    #[error("Invalid selection: {index} (expected 0 to {})", .len.saturating_sub(1))]
    IndexOutOfRange { index: usize, len: usize },

    /// Entity looked up by a stable identifier that is not in the store
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed data in a saved expense file
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The interactive input stream reached end of file
    #[error("Input closed")]
    InputClosed,
}

impl PlannerError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Check if this is a validation error (including bad selections)
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::IndexOutOfRange { .. })
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Message shown to the user at the prompt
    ///
    /// Validation messages are already phrased for the user, so they are
    /// shown without the "Validation error" prefix.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<crate::models::ExpenseValidationError> for PlannerError {
    fn from(err: crate::models::ExpenseValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::Validation("quantity must be positive".into());
        assert_eq!(err.to_string(), "Validation error: quantity must be positive");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = PlannerError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(err.to_string(), "Invalid selection: 5 (expected 0 to 2)");
        assert!(err.is_validation());
    }

    #[test]
    fn test_parse_error() {
        let err = PlannerError::parse(4, "invalid quantity 'two'");
        assert_eq!(err.to_string(), "Parse error on line 4: invalid quantity 'two'");
        assert!(err.is_parse());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = PlannerError::expense_not_found("exp-1234abcd");
        assert_eq!(err.to_string(), "Expense not found: exp-1234abcd");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PlannerError = io_err.into();
        assert!(matches!(err, PlannerError::Io(_)));
    }
}
