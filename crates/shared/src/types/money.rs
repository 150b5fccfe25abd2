//! Money type with exact minor-unit amounts and currency identity.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are integral counts of minor units held in a
//! `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{MoneyError, MoneyResult};
use crate::types::currency::Currency;
use crate::types::rounding::RoundingMode;

/// Represents a monetary amount with currency.
///
/// `amount` counts minor units (e.g. cents) and stays integral: the
/// multiply/divide primitives round back to whole minor units under the
/// caller's [`RoundingMode`]. Values are immutable; every primitive
/// returns a new instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in the smallest currency unit (e.g., cents).
    pub amount: Decimal,
    /// ISO 4217 currency of the amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new Money instance from a minor-unit amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a Money instance from an integer number of minor units.
    #[must_use]
    pub fn from_minor(amount: i64, currency: Currency) -> Self {
        Self {
            amount: Decimal::from(amount),
            currency,
        }
    }

    /// Creates a Money instance from a numeric minor-unit string.
    ///
    /// The text must read as an exact whole number of minor units.
    pub fn from_amount(amount: &str, currency: Currency) -> MoneyResult<Self> {
        let parsed = amount
            .parse::<Decimal>()
            .map_err(|_| MoneyError::InvalidAmount(amount.to_string()))?;
        if !parsed.is_integer() {
            return Err(MoneyError::InvalidAmount(amount.to_string()));
        }
        Ok(Self {
            amount: parsed,
            currency,
        })
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Adds another value of the same currency.
    pub fn add(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount + other.amount, self.currency))
    }

    /// Subtracts another value of the same currency.
    pub fn subtract(&self, other: &Self) -> MoneyResult<Self> {
        self.ensure_same_currency(other)?;
        Ok(Self::new(self.amount - other.amount, self.currency))
    }

    /// Multiplies by an exact decimal factor.
    ///
    /// The product is rounded back to a whole number of minor units under
    /// `mode`.
    #[must_use]
    pub fn multiply(&self, factor: Decimal, mode: RoundingMode) -> Self {
        let product = (self.amount * factor).round_dp_with_strategy(0, mode.strategy());
        Self::new(product, self.currency)
    }

    /// Divides by an exact decimal divisor.
    ///
    /// The quotient is rounded back to a whole number of minor units under
    /// `mode`. A zero divisor fails with [`MoneyError::DivisionByZero`].
    pub fn divide(&self, divisor: Decimal, mode: RoundingMode) -> MoneyResult<Self> {
        if divisor.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        let quotient = (self.amount / divisor).round_dp_with_strategy(0, mode.strategy());
        Ok(Self::new(quotient, self.currency))
    }

    /// Returns true if this value is strictly smaller than `other`.
    pub fn less_than(&self, other: &Self) -> MoneyResult<bool> {
        self.ensure_same_currency(other)?;
        Ok(self.amount < other.amount)
    }

    /// The major-unit representation (e.g. 1234 cents -> 12.34).
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        self.amount / Decimal::from(10u64.pow(self.currency.minor_units()))
    }

    fn ensure_same_currency(&self, other: &Self) -> MoneyResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::CurrencyMismatch {
                expected: self.currency,
                actual: other.currency,
            })
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
