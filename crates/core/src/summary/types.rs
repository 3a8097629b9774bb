//! Balance summary types.

use serde::{Deserialize, Serialize};

use crate::ledger::BalanceSheet;
use crate::settle::Debt;

/// The answer to "who owes whom?" for one group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    /// Net balance per user: positive is owed, negative owes.
    pub balances: BalanceSheet,
    /// Settle-up transactions derived from `balances`.
    pub simplified_debts: Vec<Debt>,
}
