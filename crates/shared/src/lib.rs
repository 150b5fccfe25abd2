//! Shared monetary value types and errors for Moneta.
//!
//! This crate provides the value-type contract consumed by the operation
//! crates:
//! - Money values holding exact minor-unit amounts
//! - ISO 4217 currency identities with formatting metadata
//! - Rounding modes for the multiply/divide primitives
//! - Value-type error definitions

pub mod error;
pub mod types;

pub use error::{MoneyError, MoneyResult};
pub use types::{Currency, Money, RoundingMode};
