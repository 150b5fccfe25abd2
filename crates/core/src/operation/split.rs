//! Sum-preserving splitting with minor-unit reconciliation.

use moneta_shared::{Money, RoundingMode};
use rust_decimal::Decimal;

use crate::operation::{Operation, OperationError};

impl Operation {
    /// Splits the subject into `times` parts that sum back exactly, using
    /// half-up rounding and the default retry budget.
    pub fn split(&self, times: usize) -> Result<Vec<Money>, OperationError> {
        self.split_with(times, RoundingMode::default(), Self::DEFAULT_TRIES)
    }

    /// Splits the subject into `times` parts that sum back exactly.
    ///
    /// Each part starts as the subject divided by `times` under `mode`.
    /// The reconciliation loop then nudges the first part by one minor
    /// unit per iteration, toward the subject, until the parts sum to the
    /// subject exactly, giving up with
    /// [`OperationError::ReconciliationFailed`] once `max_tries`
    /// adjustments are spent. Whenever this returns `Ok`, joining the
    /// result reproduces the subject exactly.
    pub fn split_with(
        &self,
        times: usize,
        mode: RoundingMode,
        max_tries: u32,
    ) -> Result<Vec<Money>, OperationError> {
        if times == 0 {
            return Err(OperationError::InvalidTimes(times));
        }

        let subject = self.money();
        let part = subject.divide(Decimal::from(times as u64), mode)?;
        let mut parts = vec![part; times];

        let mut tries = max_tries;
        while !self.assert_split(&parts)? {
            if tries == 0 {
                return Err(OperationError::ReconciliationFailed {
                    amount: subject.amount,
                    times,
                });
            }

            let unit = Money::from_minor(1, subject.currency);
            parts[0] = if Self::join(&parts)?.less_than(&subject)? {
                parts[0].add(&unit)?
            } else {
                parts[0].subtract(&unit)?
            };

            tries -= 1;
        }

        Ok(parts)
    }
}
