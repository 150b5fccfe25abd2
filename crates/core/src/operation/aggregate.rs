//! Aggregation over part sequences.

use moneta_shared::{Money, RoundingMode};
use rust_decimal::Decimal;

use crate::operation::{Operation, OperationError};

impl Operation {
    /// Sums a non-empty sequence of parts, left to right.
    ///
    /// The fold is seeded with the first part, so all parts must share its
    /// currency; a mismatch surfaces the value type's error.
    pub fn join(parts: &[Money]) -> Result<Money, OperationError> {
        let (first, rest) = parts.split_first().ok_or(OperationError::EmptyParts)?;

        let mut total = *first;
        for part in rest {
            total = total.add(part)?;
        }

        Ok(total)
    }

    /// Arithmetic mean of a non-empty sequence of parts.
    ///
    /// Divides the joined total by the part count under the default
    /// half-up rounding.
    pub fn average(parts: &[Money]) -> Result<Money, OperationError> {
        let total = Self::join(parts)?;
        Ok(total.divide(Decimal::from(parts.len() as u64), RoundingMode::default())?)
    }
}
