//! Property-based tests for split computation.

use divvy_shared::types::UserId;
use divvy_shared::types::money;
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::calculator::{ExactShare, PercentShare, SplitCalculator, SplitSpec};

/// Strategy to generate positive cent amounts (0.01 to 100,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate distinct participants (1 to 50).
fn participants() -> impl Strategy<Value = Vec<UserId>> {
    (1usize..=50).prop_map(|n| {
        (0..n)
            .map(|i| UserId::from_uuid(Uuid::from_u128(u128::try_from(i).unwrap() + 1)))
            .collect()
    })
}

/// Strategy to generate whole-number percentages summing to exactly 100.
fn whole_percentages() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..50, 1..8).prop_map(|mut values| {
        // Scale the tail so the list sums to 100 exactly.
        let sum: u32 = values.iter().sum();
        if sum < 100 {
            values.push(100 - sum);
        } else {
            let mut remaining = 100u32;
            values = values
                .into_iter()
                .take_while(|v| {
                    let take = *v < remaining;
                    if take {
                        remaining -= v;
                    }
                    take
                })
                .collect();
            values.push(remaining);
        }
        values.into_iter().map(Decimal::from).collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Equal-split exactness
    // =========================================================================

    /// An equal split sums to the total exactly - no epsilon - for any
    /// positive amount and 1 to 50 participants.
    #[test]
    fn prop_equal_split_sums_exactly(
        total in positive_amount(),
        participants in participants(),
    ) {
        let entries = SplitCalculator::compute(
            total,
            &SplitSpec::Equal { participants },
        ).unwrap();

        let sum: Decimal = entries.iter().map(|e| e.owed_amount).sum();
        prop_assert_eq!(sum, total, "equal split must sum to the total exactly");
    }

    /// At most one entry (the residual holder) deviates from the rounded
    /// equal share; all other entries are identical.
    #[test]
    fn prop_equal_split_single_residual_holder(
        total in positive_amount(),
        participants in participants(),
    ) {
        let entries = SplitCalculator::compute(
            total,
            &SplitSpec::Equal { participants },
        ).unwrap();

        if entries.len() > 1 {
            let tail_share = entries[1].owed_amount;
            for entry in &entries[1..] {
                prop_assert_eq!(entry.owed_amount, tail_share);
            }
        }
    }

    /// Splitting is deterministic: the same input yields the same entries.
    #[test]
    fn prop_equal_split_deterministic(
        total in positive_amount(),
        participants in participants(),
    ) {
        let spec = SplitSpec::Equal { participants };
        let first = SplitCalculator::compute(total, &spec).unwrap();
        let second = SplitCalculator::compute(total, &spec).unwrap();
        prop_assert_eq!(first, second);
    }

    // =========================================================================
    // Exact-split validation
    // =========================================================================

    /// Shares that sum exactly to the total pass through unchanged.
    #[test]
    fn prop_exact_split_passes_through(
        amounts in prop::collection::vec(1i64..1_000_000i64, 1..10),
    ) {
        let shares: Vec<ExactShare> = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| ExactShare {
                user: UserId::from_uuid(Uuid::from_u128(u128::try_from(i).unwrap() + 1)),
                amount: Decimal::new(*cents, 2),
            })
            .collect();
        let total: Decimal = shares.iter().map(|s| s.amount).sum();

        let entries = SplitCalculator::compute(
            total,
            &SplitSpec::Exact { shares: shares.clone() },
        ).unwrap();

        prop_assert_eq!(entries.len(), shares.len());
        for (entry, share) in entries.iter().zip(&shares) {
            prop_assert_eq!(entry.user, share.user);
            prop_assert_eq!(entry.owed_amount, share.amount);
        }
    }

    /// Shares that miss the total by a cent or more are rejected.
    #[test]
    fn prop_exact_split_rejects_discrepancy(
        amounts in prop::collection::vec(1i64..1_000_000i64, 1..10),
        drift_cents in 1i64..100,
    ) {
        let shares: Vec<ExactShare> = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| ExactShare {
                user: UserId::from_uuid(Uuid::from_u128(u128::try_from(i).unwrap() + 1)),
                amount: Decimal::new(*cents, 2),
            })
            .collect();
        let total: Decimal =
            shares.iter().map(|s| s.amount).sum::<Decimal>() + Decimal::new(drift_cents, 2);

        let result = SplitCalculator::compute(total, &SplitSpec::Exact { shares });
        prop_assert!(result.is_err());
    }

    // =========================================================================
    // Percentage-split computation
    // =========================================================================

    /// Whole percentages summing to 100 produce one rounded share per
    /// participant, each within half a cent of its exact value, and a sum
    /// that lands within half a cent per participant of the total.
    #[test]
    fn prop_percentage_split_rounds_per_share(
        total in positive_amount(),
        percentages in whole_percentages(),
    ) {
        let shares: Vec<PercentShare> = percentages
            .iter()
            .enumerate()
            .map(|(i, percentage)| PercentShare {
                user: UserId::from_uuid(Uuid::from_u128(u128::try_from(i).unwrap() + 1)),
                percentage: *percentage,
            })
            .collect();
        let count = shares.len();

        let entries = SplitCalculator::compute(
            total,
            &SplitSpec::Percentage { shares: shares.clone() },
        ).unwrap();

        for (entry, share) in entries.iter().zip(&shares) {
            let exact = total * share.percentage / Decimal::ONE_HUNDRED;
            prop_assert!((entry.owed_amount - exact).abs() <= Decimal::new(5, 3));
            prop_assert_eq!(entry.percentage, Some(share.percentage));
        }

        // No residual correction: the sum may drift, but only by what
        // per-share rounding can introduce.
        let sum: Decimal = entries.iter().map(|e| e.owed_amount).sum();
        let max_drift = Decimal::new(5, 3) * Decimal::from(count as u64);
        prop_assert!((sum - total).abs() <= max_drift);
    }

    /// Percentage sums other than exactly 100 are rejected.
    #[test]
    fn prop_percentage_split_rejects_bad_sum(
        total in positive_amount(),
        percentages in whole_percentages(),
        extra in 1u32..50,
    ) {
        let mut shares: Vec<PercentShare> = percentages
            .iter()
            .enumerate()
            .map(|(i, percentage)| PercentShare {
                user: UserId::from_uuid(Uuid::from_u128(u128::try_from(i).unwrap() + 1)),
                percentage: *percentage,
            })
            .collect();
        shares.push(PercentShare {
            user: UserId::from_uuid(Uuid::from_u128(0xFFFF)),
            percentage: Decimal::from(extra),
        });

        let result = SplitCalculator::compute(total, &SplitSpec::Percentage { shares });
        let is_mismatch = matches!(result, Err(super::SplitError::PercentageMismatch { .. }));
        prop_assert!(is_mismatch);
    }

    /// Every computed share is non-negative regardless of strategy inputs
    /// seen here.
    #[test]
    fn prop_percentage_shares_non_negative(
        total in positive_amount(),
        percentages in whole_percentages(),
    ) {
        let shares: Vec<PercentShare> = percentages
            .iter()
            .enumerate()
            .map(|(i, percentage)| PercentShare {
                user: UserId::from_uuid(Uuid::from_u128(u128::try_from(i).unwrap() + 1)),
                percentage: *percentage,
            })
            .collect();

        let entries = SplitCalculator::compute(
            total,
            &SplitSpec::Percentage { shares },
        ).unwrap();

        for entry in &entries {
            prop_assert!(entry.owed_amount >= Decimal::ZERO);
            prop_assert!(money::round_to_cents(entry.owed_amount) == entry.owed_amount);
        }
    }
}
