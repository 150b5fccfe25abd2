//! Percentage adjustment over the subject value.

use moneta_shared::{Money, MoneyError, RoundingMode};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::operation::{Operation, OperationError};

impl Operation {
    /// Increases the subject by `percentage` percent using half-up
    /// rounding.
    pub fn percentage_increase(&self, percentage: &str) -> Result<Money, OperationError> {
        self.percentage_increase_with(percentage, RoundingMode::default())
    }

    /// Increases the subject by `percentage` percent.
    ///
    /// The adjustment is `subject * percentage / 100`, with the multiply
    /// and the divide each rounding to whole minor units under `mode`, in
    /// that order. The percentage must be an exact decimal string; sign is
    /// the caller's responsibility.
    pub fn percentage_increase_with(
        &self,
        percentage: &str,
        mode: RoundingMode,
    ) -> Result<Money, OperationError> {
        let delta = self.percentage_delta(percentage, mode)?;
        Ok(self.money().add(&delta)?)
    }

    /// Decreases the subject by `percentage` percent using half-up
    /// rounding.
    pub fn percentage_decrease(&self, percentage: &str) -> Result<Money, OperationError> {
        self.percentage_decrease_with(percentage, RoundingMode::default())
    }

    /// Decreases the subject by `percentage` percent.
    ///
    /// Accepts already-signed deltas: leading minus signs are stripped
    /// before use, so `"20"` and `"-20"` both decrease by 20 percent.
    pub fn percentage_decrease_with(
        &self,
        percentage: &str,
        mode: RoundingMode,
    ) -> Result<Money, OperationError> {
        let delta = self.percentage_delta(percentage.trim_start_matches('-'), mode)?;
        Ok(self.money().subtract(&delta)?)
    }

    /// Relative difference from the subject to `other`, in percent.
    ///
    /// Computed over `f64` conversions of the two minor-unit amounts, so
    /// the result is approximate: a reporting convenience, not an
    /// accounting primitive. A zero subject amount fails with
    /// [`MoneyError::DivisionByZero`] instead of producing a NaN.
    #[allow(clippy::float_arithmetic)]
    pub fn percentage_difference(&self, other: &Money) -> Result<f64, OperationError> {
        if self.money().amount.is_zero() {
            return Err(MoneyError::DivisionByZero.into());
        }

        let a = self.money().amount.to_f64().unwrap_or(0.0);
        let b = other.amount.to_f64().unwrap_or(0.0);

        Ok((b - a) / a * 100.0)
    }

    fn percentage_delta(
        &self,
        percentage: &str,
        mode: RoundingMode,
    ) -> Result<Money, OperationError> {
        let factor = percentage
            .parse::<Decimal>()
            .map_err(|_| OperationError::InvalidPercentage(percentage.to_string()))?;
        Ok(self
            .money()
            .multiply(factor, mode)
            .divide(Decimal::ONE_HUNDRED, mode)?)
    }
}
