//! Property-based tests for monetary operations.
//!
//! - Split/join round trip and part counts
//! - Determinism of reconciliation
//! - Average as join over count

use moneta_shared::{Currency, Money, RoundingMode};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::Operation;

/// Strategy to generate minor-unit amounts (±10,000,000.00).
fn minor_amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy to generate part counts (1 to 24).
fn part_count() -> impl Strategy<Value = usize> {
    1usize..=24
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

/// Strategy to generate a rounding mode.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfEven),
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::Floor),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whenever split succeeds, joining the parts reproduces the subject.
    #[test]
    fn prop_split_join_round_trip(
        amount in minor_amount(),
        count in part_count(),
        currency in currency(),
    ) {
        let subject = Money::from_minor(amount, currency);
        if let Ok(parts) = Operation::of(subject).split(count) {
            let joined = Operation::join(&parts).expect("split output is non-empty");
            prop_assert_eq!(joined, subject);
        }
    }

    /// A budget of one adjustment per part is always enough to reconcile,
    /// under every rounding mode.
    #[test]
    fn prop_split_succeeds_with_per_part_budget(
        amount in minor_amount(),
        count in part_count(),
        currency in currency(),
        mode in rounding_mode(),
    ) {
        let subject = Money::from_minor(amount, currency);
        let budget = u32::try_from(count).expect("count fits");

        let parts = Operation::of(subject).split_with(count, mode, budget);
        prop_assert!(parts.is_ok(), "split failed with budget {}: {:?}", budget, parts);

        let parts = parts.expect("checked above");
        prop_assert_eq!(parts.len(), count);
        prop_assert_eq!(Operation::join(&parts).expect("non-empty"), subject);
    }

    /// Reconciliation only ever touches the first part: the rest stay
    /// identical copies of the seed quotient.
    #[test]
    fn prop_split_adjusts_only_first_part(
        amount in minor_amount(),
        count in part_count(),
        currency in currency(),
    ) {
        let subject = Money::from_minor(amount, currency);
        let budget = u32::try_from(count).expect("count fits");

        let parts = Operation::of(subject)
            .split_with(count, RoundingMode::HalfUp, budget)
            .expect("per-part budget reconciles");
        for pair in parts[1..].windows(2) {
            prop_assert_eq!(pair[0], pair[1]);
        }
    }

    /// Split is deterministic: identical inputs, identical outputs.
    #[test]
    fn prop_split_is_deterministic(
        amount in minor_amount(),
        count in part_count(),
        currency in currency(),
    ) {
        let subject = Operation::of(Money::from_minor(amount, currency));
        let budget = u32::try_from(count).expect("count fits");

        let first = subject.split_with(count, RoundingMode::HalfUp, budget).expect("reconciles");
        let second = subject.split_with(count, RoundingMode::HalfUp, budget).expect("reconciles");
        prop_assert_eq!(first, second);
    }

    /// assert_split holds exactly when the parts join to the subject.
    #[test]
    fn prop_assert_split_matches_join(
        amounts in prop::collection::vec(minor_amount(), 1..12),
        subject_amount in minor_amount(),
        currency in currency(),
    ) {
        let parts: Vec<Money> = amounts
            .iter()
            .map(|a| Money::from_minor(*a, currency))
            .collect();
        let subject = Money::from_minor(subject_amount, currency);

        let joined = Operation::join(&parts).expect("non-empty");
        let asserted = Operation::of(subject).assert_split(&parts).expect("non-empty");
        prop_assert_eq!(asserted, joined == subject);
    }

    /// Average is join divided by the part count under half-up rounding.
    #[test]
    fn prop_average_is_join_over_count(
        amounts in prop::collection::vec(minor_amount(), 1..12),
        currency in currency(),
    ) {
        let parts: Vec<Money> = amounts
            .iter()
            .map(|a| Money::from_minor(*a, currency))
            .collect();

        let average = Operation::average(&parts).expect("non-empty");
        let expected = Operation::join(&parts)
            .expect("non-empty")
            .divide(Decimal::from(parts.len() as u64), RoundingMode::HalfUp)
            .expect("count is non-zero");
        prop_assert_eq!(average, expected);
    }
}
