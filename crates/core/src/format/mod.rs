//! Locale-aware monetary text rendering and parsing.
//!
//! This module implements the format adapter:
//! - Formatter/parser service traits, so callers can inject their own
//! - A built-in implementation backed by a static locale table
//! - Error types distinguishing unavailable locales from malformed input

pub mod error;
pub mod locale;
pub mod service;

#[cfg(test)]
mod props;

pub use error::FormatError;
pub use locale::{LocaleSpec, SymbolPosition};
pub use service::{LocaleFormatter, LocaleParser, MoneyFormatter, MoneyParser};
