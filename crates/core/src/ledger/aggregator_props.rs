//! Property-based tests for balance aggregation.

use chrono::NaiveDate;
use divvy_shared::types::{GroupId, UserId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::aggregator::BalanceAggregator;
use crate::expense::Expense;
use crate::split::SplitSpec;

fn user(n: u128) -> UserId {
    UserId::from_uuid(Uuid::from_u128(n + 1))
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
}

/// Strategy to generate one equal-split expense over a pool of ten users.
fn equal_expense() -> impl Strategy<Value = Expense> {
    (
        1i64..1_000_000i64,
        0u128..10,
        prop::collection::btree_set(0u128..10, 1..=10),
    )
        .prop_map(|(cents, payer, participants)| {
            Expense::new(
                GroupId::from_uuid(Uuid::nil()),
                "Generated".to_string(),
                Decimal::new(cents, 2),
                date(),
                user(payer),
                &SplitSpec::Equal {
                    participants: participants.into_iter().map(user).collect(),
                },
            )
            .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every expense contributes a zero-sum adjustment: the payer's credit
    /// exactly cancels the participants' debits. Equal splits carry no
    /// rounding drift at all, so the residual is exactly zero.
    #[test]
    fn prop_each_expense_is_zero_sum(expense in equal_expense()) {
        prop_assert_eq!(
            BalanceAggregator::net_adjustment(&expense),
            Decimal::ZERO
        );

        let sheet = BalanceAggregator::aggregate(std::slice::from_ref(&expense));
        prop_assert_eq!(sheet.residual(), Decimal::ZERO);
    }

    /// A whole history of well-formed expenses folds into a zero-sum sheet.
    #[test]
    fn prop_history_folds_to_zero_sum(
        expenses in prop::collection::vec(equal_expense(), 0..20),
    ) {
        let sheet = BalanceAggregator::aggregate(&expenses);
        prop_assert_eq!(sheet.residual(), Decimal::ZERO);
    }

    /// Aggregation is a pure fold: the same snapshot produces the same
    /// sheet, and the input is left untouched for the next caller.
    #[test]
    fn prop_aggregation_deterministic(
        expenses in prop::collection::vec(equal_expense(), 0..20),
    ) {
        let first = BalanceAggregator::aggregate(&expenses);
        let second = BalanceAggregator::aggregate(&expenses);
        prop_assert_eq!(first, second);
    }

    /// The payer's balance moves by the total minus their own share;
    /// everyone else's moves by minus their share.
    #[test]
    fn prop_payer_nets_own_share(expense in equal_expense()) {
        let sheet = BalanceAggregator::aggregate(std::slice::from_ref(&expense));

        let own_share: Decimal = expense
            .splits
            .iter()
            .filter(|s| s.user == expense.payer)
            .map(|s| s.owed_amount)
            .sum();

        prop_assert_eq!(
            sheet.balance_of(expense.payer),
            expense.total_amount - own_share
        );
    }
}
