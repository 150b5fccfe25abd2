//! Format adapter error types.

use thiserror::Error;

/// Errors raised by the locale format adapter.
#[derive(Debug, Error)]
pub enum FormatError {
    /// No formatting data is available for the requested locale.
    #[error("No formatting data for locale: {0}")]
    UnsupportedLocale(String),

    /// Input text does not follow the locale's number conventions.
    #[error("Invalid monetary text: {0}")]
    InvalidFormat(String),

    /// No known currency symbol was found in the input.
    #[error("No currency symbol recognized in: {0}")]
    UnknownSymbol(String),

    /// The amount falls outside the formatter's numeric range.
    #[error("Amount out of formattable range: {0}")]
    AmountOutOfRange(String),
}

impl FormatError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLocale(_) => "UNSUPPORTED_LOCALE",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::UnknownSymbol(_) => "UNKNOWN_SYMBOL",
            Self::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FormatError::UnsupportedLocale(String::new()).error_code(),
            "UNSUPPORTED_LOCALE"
        );
        assert_eq!(
            FormatError::InvalidFormat(String::new()).error_code(),
            "INVALID_FORMAT"
        );
        assert_eq!(
            FormatError::UnknownSymbol(String::new()).error_code(),
            "UNKNOWN_SYMBOL"
        );
        assert_eq!(
            FormatError::AmountOutOfRange(String::new()).error_code(),
            "AMOUNT_OUT_OF_RANGE"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormatError::UnsupportedLocale("xx_XX".to_string()).to_string(),
            "No formatting data for locale: xx_XX"
        );
        assert_eq!(
            FormatError::InvalidFormat("1..0".to_string()).to_string(),
            "Invalid monetary text: 1..0"
        );
    }
}
