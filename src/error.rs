//! Custom error types for bucket-budget
//!
//! Every fallible operation in the crate returns [`BudgetResult`]. The budget
//! aggregate never recovers from its own errors; callers decide how to
//! present them.

use thiserror::Error;

/// The main error type for bucket-budget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Day, month or year outside the accepted ranges
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Currency text that does not parse as an amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A transaction references a category the budget does not have
    #[error("{0} does not currently exist in the budget!")]
    UnknownCategory(String),

    /// A category with this name already exists
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),

    /// Malformed or unreadable budget file
    #[error("File format error: {0}")]
    FileFormat(String),

    /// Input rejected before it reaches the budget
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create a file format error pinned to a 1-based line number
    pub fn file_format_at(line: usize, message: impl std::fmt::Display) -> Self {
        Self::FileFormat(format!("line {}: {}", line, message))
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a file format error
    pub fn is_file_format(&self) -> bool {
        matches!(self, Self::FileFormat(_))
    }
}

/// Result type alias for bucket-budget operations
pub type BudgetResult<T> = Result<T, BudgetError>;
