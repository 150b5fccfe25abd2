//! Rounding modes for the monetary multiply/divide primitives.

use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

/// Policy for rounding a non-integral intermediate result back to a whole
/// number of minor units.
///
/// Passed through unchanged to the multiply/divide primitives; the default
/// is half-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round half away from zero (common commercial rounding).
    #[default]
    HalfUp,
    /// Round half toward zero.
    HalfDown,
    /// Round half to the nearest even digit (banker's rounding).
    HalfEven,
    /// Always round away from zero.
    Up,
    /// Always round toward zero (truncate).
    Down,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward negative infinity.
    Floor,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` rounding strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_half_up() {
        assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
    }

    #[test]
    fn test_midpoint_strategies() {
        let half = dec!(2.5);
        assert_eq!(
            half.round_dp_with_strategy(0, RoundingMode::HalfUp.strategy()),
            dec!(3)
        );
        assert_eq!(
            half.round_dp_with_strategy(0, RoundingMode::HalfDown.strategy()),
            dec!(2)
        );
        assert_eq!(
            half.round_dp_with_strategy(0, RoundingMode::HalfEven.strategy()),
            dec!(2)
        );
    }

    #[test]
    fn test_directed_strategies() {
        let value = dec!(-2.5);
        assert_eq!(
            value.round_dp_with_strategy(0, RoundingMode::Ceiling.strategy()),
            dec!(-2)
        );
        assert_eq!(
            value.round_dp_with_strategy(0, RoundingMode::Floor.strategy()),
            dec!(-3)
        );
        assert_eq!(
            value.round_dp_with_strategy(0, RoundingMode::Up.strategy()),
            dec!(-3)
        );
        assert_eq!(
            value.round_dp_with_strategy(0, RoundingMode::Down.strategy()),
            dec!(-2)
        );
    }
}
