//! Locale-aware text entry points for the operation context.
//!
//! These delegate to the format adapter in [`crate::format`]; the `_with`
//! variants accept any injected formatter/parser service.

use moneta_shared::Money;

use crate::format::{LocaleFormatter, LocaleParser, MoneyFormatter, MoneyParser};
use crate::operation::{Operation, OperationError};

impl Operation {
    /// Renders the subject using the built-in formatter for `locale`.
    ///
    /// Fails with [`crate::format::FormatError::UnsupportedLocale`] when
    /// no formatting data exists for the locale.
    pub fn format(&self, locale: &str) -> Result<String, OperationError> {
        let formatter = LocaleFormatter::new(locale)?;
        self.format_with(&formatter)
    }

    /// Renders the subject using an injected formatter service.
    pub fn format_with<F: MoneyFormatter>(&self, formatter: &F) -> Result<String, OperationError> {
        Ok(formatter.format(&self.money())?)
    }

    /// Parses locale-formatted text using the built-in parser for
    /// `locale`.
    ///
    /// Fails with [`crate::format::FormatError::UnsupportedLocale`] when
    /// no formatting data exists for the locale.
    pub fn parse(input: &str, locale: &str) -> Result<Money, OperationError> {
        let parser = LocaleParser::new(locale)?;
        Self::parse_with(input, &parser)
    }

    /// Parses monetary text using an injected parser service.
    pub fn parse_with<P: MoneyParser>(input: &str, parser: &P) -> Result<Money, OperationError> {
        Ok(parser.parse(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moneta_shared::Currency;
    use rstest::rstest;

    #[rstest]
    #[case(100, Currency::Usd, "en_US", "$1.00")]
    #[case(288, Currency::Eur, "es_ES", "2,88 €")]
    fn test_format_and_parse_round_trip(
        #[case] amount: i64,
        #[case] currency: Currency,
        #[case] locale: &str,
        #[case] expected: &str,
    ) {
        let money = Money::from_minor(amount, currency);
        let formatted = Operation::of(money).format(locale).unwrap();
        assert_eq!(formatted, expected);

        let parsed = Operation::parse(&formatted, locale).unwrap();
        assert_eq!(parsed, money);
    }

    #[test]
    fn test_format_unknown_locale() {
        let err = Operation::of_values(100, Currency::Usd)
            .format("xx_XX")
            .unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_LOCALE");
    }

    #[test]
    fn test_parse_unknown_locale() {
        let err = Operation::parse("$1.00", "xx_XX").unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_LOCALE");
    }
}
