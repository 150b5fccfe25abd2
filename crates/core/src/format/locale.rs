//! Number-formatting conventions per locale.

/// Placement of the currency symbol relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// Symbol before the number ("$1.00").
    Prefix,
    /// Symbol after the number ("2,88 €").
    Suffix,
}

/// Number-formatting conventions for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleSpec {
    /// Locale identifier, e.g. "en_US".
    pub id: &'static str,
    /// Separator between major and minor units.
    pub decimal_separator: char,
    /// Thousands grouping separator for the major part.
    pub grouping_separator: char,
    /// Where the currency symbol goes.
    pub symbol_position: SymbolPosition,
    /// Whether a space separates symbol and number.
    pub symbol_spaced: bool,
}

/// Locales with built-in formatting data.
const LOCALES: &[LocaleSpec] = &[
    LocaleSpec {
        id: "en_US",
        decimal_separator: '.',
        grouping_separator: ',',
        symbol_position: SymbolPosition::Prefix,
        symbol_spaced: false,
    },
    LocaleSpec {
        id: "en_GB",
        decimal_separator: '.',
        grouping_separator: ',',
        symbol_position: SymbolPosition::Prefix,
        symbol_spaced: false,
    },
    LocaleSpec {
        id: "de_DE",
        decimal_separator: ',',
        grouping_separator: '.',
        symbol_position: SymbolPosition::Suffix,
        symbol_spaced: true,
    },
    LocaleSpec {
        id: "es_ES",
        decimal_separator: ',',
        grouping_separator: '.',
        symbol_position: SymbolPosition::Suffix,
        symbol_spaced: true,
    },
    LocaleSpec {
        id: "fr_FR",
        decimal_separator: ',',
        grouping_separator: '\u{a0}',
        symbol_position: SymbolPosition::Suffix,
        symbol_spaced: true,
    },
    LocaleSpec {
        id: "id_ID",
        decimal_separator: ',',
        grouping_separator: '.',
        symbol_position: SymbolPosition::Prefix,
        symbol_spaced: false,
    },
    LocaleSpec {
        id: "ja_JP",
        decimal_separator: '.',
        grouping_separator: ',',
        symbol_position: SymbolPosition::Prefix,
        symbol_spaced: false,
    },
];

/// Looks up formatting data for a locale identifier.
#[must_use]
pub fn lookup(locale: &str) -> Option<LocaleSpec> {
    LOCALES.iter().copied().find(|spec| spec.id == locale)
}

/// Identifiers of all locales with built-in formatting data.
#[must_use]
pub fn supported() -> Vec<&'static str> {
    LOCALES.iter().map(|spec| spec.id).collect()
}
