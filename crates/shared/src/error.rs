//! Monetary value-type errors.

use thiserror::Error;

use crate::types::Currency;

/// Result type alias using `MoneyError`.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Errors raised by the monetary value primitives.
#[derive(Debug, Error)]
pub enum MoneyError {
    /// Arithmetic attempted between two different currencies.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency of the left-hand operand.
        expected: Currency,
        /// Currency of the right-hand operand.
        actual: Currency,
    },

    /// Division by a zero divisor.
    #[error("Division by zero is undefined")]
    DivisionByZero,

    /// Amount text could not be read as a whole number of minor units.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl MoneyError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
        }
    }
}
