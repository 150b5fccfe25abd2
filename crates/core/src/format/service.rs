//! Built-in locale formatter and parser services.

use moneta_shared::{Currency, Money};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::format::error::FormatError;
use crate::format::locale::{self, LocaleSpec, SymbolPosition};

/// Renders a monetary value as locale-formatted text.
pub trait MoneyFormatter {
    /// Formats `money` under this formatter's conventions.
    fn format(&self, money: &Money) -> Result<String, FormatError>;
}

/// Parses locale-formatted text back into a monetary value.
pub trait MoneyParser {
    /// Parses `input` under this parser's conventions.
    fn parse(&self, input: &str) -> Result<Money, FormatError>;
}

/// Currency symbols in matching order: longest first, so "S$" wins over
/// "$".
const SYMBOLS: [(&str, Currency); 5] = [
    (Currency::Sgd.symbol(), Currency::Sgd),
    (Currency::Idr.symbol(), Currency::Idr),
    (Currency::Usd.symbol(), Currency::Usd),
    (Currency::Eur.symbol(), Currency::Eur),
    (Currency::Jpy.symbol(), Currency::Jpy),
];

/// Formatter backed by the built-in locale table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleFormatter {
    spec: LocaleSpec,
}

impl LocaleFormatter {
    /// Creates a formatter for `locale`.
    ///
    /// Fails with [`FormatError::UnsupportedLocale`] when no formatting
    /// data exists for the locale.
    pub fn new(locale: &str) -> Result<Self, FormatError> {
        locale::lookup(locale)
            .map(|spec| Self { spec })
            .ok_or_else(|| FormatError::UnsupportedLocale(locale.to_string()))
    }
}

impl MoneyFormatter for LocaleFormatter {
    fn format(&self, money: &Money) -> Result<String, FormatError> {
        let minor = money
            .amount
            .to_i128()
            .ok_or_else(|| FormatError::AmountOutOfRange(money.amount.to_string()))?;

        let magnitude = minor.unsigned_abs();
        let exponent = money.currency.minor_units();
        let scale = 10u128.pow(exponent);

        let mut number = group_digits(magnitude / scale, self.spec.grouping_separator);
        if exponent > 0 {
            number.push(self.spec.decimal_separator);
            let fraction = magnitude % scale;
            number.push_str(&format!("{fraction:0width$}", width = exponent as usize));
        }

        let symbol = money.currency.symbol();
        let rendered = match (self.spec.symbol_position, self.spec.symbol_spaced) {
            (SymbolPosition::Prefix, true) => format!("{symbol} {number}"),
            (SymbolPosition::Prefix, false) => format!("{symbol}{number}"),
            (SymbolPosition::Suffix, true) => format!("{number} {symbol}"),
            (SymbolPosition::Suffix, false) => format!("{number}{symbol}"),
        };

        if minor < 0 {
            Ok(format!("-{rendered}"))
        } else {
            Ok(rendered)
        }
    }
}

/// Parser backed by the built-in locale table.
#[derive(Debug, Clone, Copy)]
pub struct LocaleParser {
    spec: LocaleSpec,
}

impl LocaleParser {
    /// Creates a parser for `locale`.
    ///
    /// Fails with [`FormatError::UnsupportedLocale`] when no formatting
    /// data exists for the locale.
    pub fn new(locale: &str) -> Result<Self, FormatError> {
        locale::lookup(locale)
            .map(|spec| Self { spec })
            .ok_or_else(|| FormatError::UnsupportedLocale(locale.to_string()))
    }
}

impl MoneyParser for LocaleParser {
    fn parse(&self, input: &str) -> Result<Money, FormatError> {
        let text = input.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, text),
        };

        let (currency, number) = strip_symbol(text)?;
        let amount = parse_number(number.trim(), currency, &self.spec)?;

        Ok(Money::new(
            if negative { -amount } else { amount },
            currency,
        ))
    }
}

/// Identifies the currency by its symbol, at either end of the text.
fn strip_symbol(text: &str) -> Result<(Currency, &str), FormatError> {
    for (symbol, currency) in SYMBOLS {
        if let Some(rest) = text.strip_prefix(symbol) {
            return Ok((currency, rest));
        }
        if let Some(rest) = text.strip_suffix(symbol) {
            return Ok((currency, rest));
        }
    }
    Err(FormatError::UnknownSymbol(text.to_string()))
}

/// Reads a grouped, locale-punctuated number as minor units.
fn parse_number(number: &str, currency: Currency, spec: &LocaleSpec) -> Result<Decimal, FormatError> {
    let exponent = currency.minor_units() as usize;
    let cleaned: String = number
        .chars()
        .filter(|&c| c != spec.grouping_separator)
        .collect();

    let mut pieces = cleaned.split(spec.decimal_separator);
    let major_text = pieces.next().unwrap_or_default();
    let fraction_text = pieces.next().unwrap_or_default();
    if pieces.next().is_some() || fraction_text.len() > exponent {
        return Err(FormatError::InvalidFormat(number.to_string()));
    }

    let major = major_text
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidFormat(number.to_string()))?;
    let fraction = if fraction_text.is_empty() {
        0
    } else {
        let padded = format!("{fraction_text:0<exponent$}");
        padded
            .parse::<u64>()
            .map_err(|_| FormatError::InvalidFormat(number.to_string()))?
    };

    let scale = 10u64.pow(currency.minor_units());
    let minor = major
        .checked_mul(scale)
        .and_then(|v| v.checked_add(fraction))
        .ok_or_else(|| FormatError::AmountOutOfRange(number.to_string()))?;

    Ok(Decimal::from(minor))
}

/// Inserts the grouping separator every three digits of the major part.
fn group_digits(value: u128, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
