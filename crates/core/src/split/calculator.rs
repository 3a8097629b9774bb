//! Split computation for the three supported strategies.

use std::collections::HashSet;

use divvy_shared::types::UserId;
use divvy_shared::types::money;
use rust_decimal::Decimal;

use super::error::SplitError;
use crate::expense::{SplitEntry, SplitStrategy};

/// One participant's directly-supplied amount for an exact split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactShare {
    /// The participant who owes this amount.
    pub user: UserId,
    /// The amount they owe. Must be positive.
    pub amount: Decimal,
}

/// One participant's percentage for a percentage split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PercentShare {
    /// The participant who owes this percentage of the total.
    pub user: UserId,
    /// Their percentage in (0, 100]. Must be positive.
    pub percentage: Decimal,
}

/// Strategy-specific input for computing a split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSpec {
    /// Divide the total evenly among these participants.
    Equal {
        /// The participants sharing the total. Non-empty, no duplicates.
        participants: Vec<UserId>,
    },
    /// The caller supplies each participant's amount directly.
    Exact {
        /// The per-participant amounts. Must sum to the total within a cent.
        shares: Vec<ExactShare>,
    },
    /// Each participant owes a percentage of the total.
    Percentage {
        /// The per-participant percentages. Must sum to exactly 100.
        shares: Vec<PercentShare>,
    },
}

impl SplitSpec {
    /// The strategy this input belongs to.
    #[must_use]
    pub const fn strategy(&self) -> SplitStrategy {
        match self {
            Self::Equal { .. } => SplitStrategy::Equal,
            Self::Exact { .. } => SplitStrategy::Exact,
            Self::Percentage { .. } => SplitStrategy::Percentage,
        }
    }
}

/// Converts a total amount plus strategy-specific input into a validated
/// list of [`SplitEntry`].
///
/// Pure computation: no side effects, deterministic for a given input.
pub struct SplitCalculator;

impl SplitCalculator {
    /// Computes the per-participant shares of `total_amount`.
    ///
    /// # Errors
    ///
    /// Returns `SplitError` if the total is not positive, the participant
    /// list is empty or contains duplicates, a share amount or percentage
    /// is not positive, or the supplied sums do not reconcile.
    pub fn compute(total_amount: Decimal, spec: &SplitSpec) -> Result<Vec<SplitEntry>, SplitError> {
        if total_amount <= Decimal::ZERO {
            return Err(SplitError::NonPositiveTotal {
                amount: total_amount,
            });
        }

        match spec {
            SplitSpec::Equal { participants } => Self::split_equal(total_amount, participants),
            SplitSpec::Exact { shares } => Self::split_exact(total_amount, shares),
            SplitSpec::Percentage { shares } => Self::split_percentage(total_amount, shares),
        }
    }

    /// Divides the total evenly, rounding each share to cents.
    ///
    /// Rounding can leave a residual (100 / 3 rounds to three shares of
    /// 33.33); the entire residual is added to the FIRST participant in the
    /// supplied order so the shares sum to the total exactly. That
    /// participant's share can therefore differ from the naive equal share
    /// by up to two cents.
    fn split_equal(total: Decimal, participants: &[UserId]) -> Result<Vec<SplitEntry>, SplitError> {
        if participants.is_empty() {
            return Err(SplitError::NoParticipants);
        }

        let mut seen = HashSet::with_capacity(participants.len());
        for user in participants {
            if !seen.insert(user) {
                return Err(SplitError::DuplicateParticipant(*user));
            }
        }

        let count = Decimal::from(participants.len() as u64);
        let share = money::round_to_cents(total / count);

        let mut entries: Vec<SplitEntry> = participants
            .iter()
            .map(|user| SplitEntry {
                user: *user,
                owed_amount: share,
                percentage: None,
            })
            .collect();

        let residual = total - share * count;
        if !residual.is_zero() {
            entries[0].owed_amount += residual;
        }

        Ok(entries)
    }

    /// Passes the supplied amounts through unchanged after checking that
    /// they reconcile with the total. A discrepancy of a full cent or more
    /// is rejected; no rounding is performed.
    fn split_exact(total: Decimal, shares: &[ExactShare]) -> Result<Vec<SplitEntry>, SplitError> {
        if shares.is_empty() {
            return Err(SplitError::NoParticipants);
        }

        for share in shares {
            if share.amount <= Decimal::ZERO {
                return Err(SplitError::NonPositiveShare {
                    user: share.user,
                    amount: share.amount,
                });
            }
        }

        let actual: Decimal = shares.iter().map(|s| s.amount).sum();
        if (actual - total).abs() >= money::CENT {
            return Err(SplitError::SplitMismatch {
                expected: total,
                actual,
            });
        }

        Ok(shares
            .iter()
            .map(|s| SplitEntry {
                user: s.user,
                owed_amount: s.amount,
                percentage: None,
            })
            .collect())
    }

    /// Computes each share as a rounded percentage of the total.
    ///
    /// Percentages must sum to exactly 100 - no epsilon; they are expected
    /// to be clean inputs. Unlike an equal split, NO residual correction is
    /// applied afterwards: the rounded amounts can land a few cents off the
    /// total. That asymmetry is deliberate and relied upon by callers that
    /// display the recorded percentages.
    fn split_percentage(
        total: Decimal,
        shares: &[PercentShare],
    ) -> Result<Vec<SplitEntry>, SplitError> {
        if shares.is_empty() {
            return Err(SplitError::NoParticipants);
        }

        for share in shares {
            if share.percentage <= Decimal::ZERO {
                return Err(SplitError::NonPositivePercentage {
                    user: share.user,
                    percentage: share.percentage,
                });
            }
        }

        let sum: Decimal = shares.iter().map(|s| s.percentage).sum();
        if sum != Decimal::ONE_HUNDRED {
            return Err(SplitError::PercentageMismatch { sum });
        }

        Ok(shares
            .iter()
            .map(|s| SplitEntry {
                user: s.user,
                owed_amount: money::round_to_cents(total * s.percentage / Decimal::ONE_HUNDRED),
                percentage: Some(s.percentage),
            })
            .collect())
    }
}
