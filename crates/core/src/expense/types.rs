//! Expense domain types.
//!
//! The expense record is the unit of history: everything the ledger later
//! computes is a fold over immutable expenses. Constructing one runs the
//! split calculator, so an expense whose splits do not sum to its total
//! (within one cent) is never created in the first place; downstream code
//! relies on that and does not re-validate.

use chrono::NaiveDate;
use divvy_shared::types::{ExpenseId, GroupId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::split::{ExactShare, SplitCalculator, SplitError, SplitSpec};

/// How a total expense amount is divided among participants.
///
/// Fixed, closed set - not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SplitStrategy {
    /// Divide the total evenly among the selected participants.
    Equal,
    /// The caller supplies each participant's amount directly.
    Exact,
    /// Each participant owes a percentage of the total.
    Percentage,
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "EQUAL"),
            Self::Exact => write!(f, "EXACT"),
            Self::Percentage => write!(f, "PERCENTAGE"),
        }
    }
}

impl std::str::FromStr for SplitStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EQUAL" => Ok(Self::Equal),
            "EXACT" => Ok(Self::Exact),
            "PERCENTAGE" => Ok(Self::Percentage),
            _ => Err(format!("Unknown split strategy: {s}")),
        }
    }
}

/// One participant's share of an expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEntry {
    /// The participant who owes this share.
    pub user: UserId,
    /// The amount owed for this expense. Never negative.
    pub owed_amount: Decimal,
    /// The percentage this share was computed from; recorded for
    /// percentage splits only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
}

/// A shared expense recorded against a group.
///
/// Immutable once created. `splits` sums to `total_amount` within one cent;
/// this is enforced by [`Expense::new`] and assumed by the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// The expense ID.
    pub id: ExpenseId,
    /// The group this expense belongs to.
    pub group: GroupId,
    /// Human-readable description (e.g. "Dinner").
    pub description: String,
    /// Total amount paid. Always positive.
    pub total_amount: Decimal,
    /// The date the expense occurred.
    pub date: NaiveDate,
    /// The user who paid the total.
    pub payer: UserId,
    /// The strategy the splits were computed with.
    pub strategy: SplitStrategy,
    /// Per-participant shares of the total.
    pub splits: Vec<SplitEntry>,
}

impl Expense {
    /// Creates a new expense, computing and validating its splits.
    ///
    /// A validation error here blocks the expense from ever existing, so
    /// nothing malformed reaches persistence.
    pub fn new(
        group: GroupId,
        description: String,
        total_amount: Decimal,
        date: NaiveDate,
        payer: UserId,
        spec: &SplitSpec,
    ) -> Result<Self, SplitError> {
        let splits = SplitCalculator::compute(total_amount, spec)?;
        Ok(Self {
            id: ExpenseId::new(),
            group,
            description,
            total_amount,
            date,
            payer,
            strategy: spec.strategy(),
            splits,
        })
    }

    /// Records a settle-up payment of `amount` from `from` to `to`.
    ///
    /// A payment is just an expense paid by the debtor whose single split
    /// falls entirely on the creditor: folding it credits `from` and debits
    /// `to`, moving both balances toward zero.
    pub fn settlement(
        group: GroupId,
        from: UserId,
        to: UserId,
        amount: Decimal,
        date: NaiveDate,
    ) -> Result<Self, SplitError> {
        let spec = SplitSpec::Exact {
            shares: vec![ExactShare { user: to, amount }],
        };
        Self::new(group, "Settlement".to_string(), amount, date, from, &spec)
    }

    /// Sum of all split amounts.
    #[must_use]
    pub fn split_total(&self) -> Decimal {
        self.splits.iter().map(|s| s.owed_amount).sum()
    }
}
