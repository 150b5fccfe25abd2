//! Operation error types.
//!
//! One variant per failure cause, so callers branch on the cause rather
//! than parse a message string. Value-type and format-adapter errors pass
//! through transparently.

use moneta_shared::MoneyError;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::format::FormatError;

/// Errors that can occur during monetary operations.
#[derive(Debug, Error)]
pub enum OperationError {
    /// `split` called with fewer than one part.
    #[error("times must be >= 1, {0} given")]
    InvalidTimes(usize),

    /// `join` or `average` called with no parts.
    #[error("parts cannot be empty")]
    EmptyParts,

    /// `split` exhausted its retry budget without reaching an exact sum.
    #[error("Could not split {amount} value to {times} parts")]
    ReconciliationFailed {
        /// Minor-unit amount of the value being split.
        amount: Decimal,
        /// Requested number of parts.
        times: usize,
    },

    /// Percentage text could not be read as an exact decimal.
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Error propagated from the monetary value primitives.
    #[error(transparent)]
    Money(#[from] MoneyError),

    /// Error propagated from the locale format adapter.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl OperationError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTimes(_) => "INVALID_TIMES",
            Self::EmptyParts => "EMPTY_PARTS",
            Self::ReconciliationFailed { .. } => "RECONCILIATION_FAILED",
            Self::InvalidPercentage(_) => "INVALID_PERCENTAGE",
            Self::Money(err) => err.error_code(),
            Self::Format(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_codes() {
        assert_eq!(OperationError::InvalidTimes(0).error_code(), "INVALID_TIMES");
        assert_eq!(OperationError::EmptyParts.error_code(), "EMPTY_PARTS");
        assert_eq!(
            OperationError::ReconciliationFailed {
                amount: dec!(288),
                times: 5,
            }
            .error_code(),
            "RECONCILIATION_FAILED"
        );
        assert_eq!(
            OperationError::InvalidPercentage(String::new()).error_code(),
            "INVALID_PERCENTAGE"
        );
    }

    #[test]
    fn test_wrapped_errors_keep_their_codes() {
        let money: OperationError = MoneyError::DivisionByZero.into();
        assert_eq!(money.error_code(), "DIVISION_BY_ZERO");

        let format: OperationError = FormatError::UnsupportedLocale("xx_XX".to_string()).into();
        assert_eq!(format.error_code(), "UNSUPPORTED_LOCALE");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            OperationError::InvalidTimes(0).to_string(),
            "times must be >= 1, 0 given"
        );
        assert_eq!(
            OperationError::ReconciliationFailed {
                amount: dec!(288),
                times: 5,
            }
            .to_string(),
            "Could not split 288 value to 5 parts"
        );
    }
}
