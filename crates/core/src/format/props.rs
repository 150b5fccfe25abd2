//! Property-based tests for the format adapter.

use moneta_shared::{Currency, Money};
use proptest::prelude::*;

use super::service::{LocaleFormatter, LocaleParser, MoneyFormatter, MoneyParser};

/// Strategy to generate minor-unit amounts (±100,000,000.00).
fn minor_amount() -> impl Strategy<Value = i64> {
    -10_000_000_000i64..10_000_000_000i64
}

/// Strategy to generate a currency.
fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::Usd),
        Just(Currency::Idr),
        Just(Currency::Eur),
        Just(Currency::Sgd),
        Just(Currency::Jpy),
    ]
}

/// Strategy to generate a supported locale identifier.
fn locale() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("en_US"),
        Just("en_GB"),
        Just("de_DE"),
        Just("es_ES"),
        Just("fr_FR"),
        Just("id_ID"),
        Just("ja_JP"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Round-trip: parsing a formatted value reproduces it exactly.
    #[test]
    fn prop_format_parse_round_trip(
        amount in minor_amount(),
        currency in currency(),
        locale in locale(),
    ) {
        let money = Money::from_minor(amount, currency);
        let formatter = LocaleFormatter::new(locale).expect("locale is in the table");
        let parser = LocaleParser::new(locale).expect("locale is in the table");

        let text = formatter.format(&money).expect("formats in range");
        let parsed = parser.parse(&text).expect("own output parses");

        prop_assert_eq!(parsed, money, "round trip failed for {}", text);
    }

    /// Formatting is deterministic.
    #[test]
    fn prop_format_is_deterministic(
        amount in minor_amount(),
        currency in currency(),
        locale in locale(),
    ) {
        let money = Money::from_minor(amount, currency);
        let formatter = LocaleFormatter::new(locale).expect("locale is in the table");

        let first = formatter.format(&money).expect("formats in range");
        let second = formatter.format(&money).expect("formats in range");
        prop_assert_eq!(first, second);
    }
}
