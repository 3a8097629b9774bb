//! The balance sheet: one signed net position per user.

use std::collections::BTreeMap;

use divvy_shared::types::UserId;
use divvy_shared::types::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Net balance per user for one group.
///
/// Positive means the user is owed money; negative means they owe. A sheet
/// is built fresh by one aggregation pass and never mutated incrementally
/// afterwards. Entries iterate in `UserId` order, so every computation
/// derived from a sheet is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSheet {
    balances: BTreeMap<UserId, Decimal>,
}

impl BalanceSheet {
    /// Creates an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds to a user's balance (money owed TO them).
    pub fn credit(&mut self, user: UserId, amount: Decimal) {
        *self.balances.entry(user).or_default() += amount;
    }

    /// Subtracts from a user's balance (money they owe).
    pub fn debit(&mut self, user: UserId, amount: Decimal) {
        *self.balances.entry(user).or_default() -= amount;
    }

    /// The user's net balance; zero for users the sheet has never seen.
    #[must_use]
    pub fn balance_of(&self, user: UserId) -> Decimal {
        self.balances.get(&user).copied().unwrap_or_default()
    }

    /// Iterates balances in `UserId` order.
    pub fn iter(&self) -> impl Iterator<Item = (UserId, Decimal)> + '_ {
        self.balances.iter().map(|(user, balance)| (*user, *balance))
    }

    /// Sum of every balance. Zero (within a cent) for a well-formed sheet.
    #[must_use]
    pub fn residual(&self) -> Decimal {
        self.balances.values().copied().sum()
    }

    /// True when every balance is within a cent of zero.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.balances.values().all(|b| money::is_settled(*b))
    }

    /// Number of users on the sheet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// True when the sheet has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl FromIterator<(UserId, Decimal)> for BalanceSheet {
    fn from_iter<I: IntoIterator<Item = (UserId, Decimal)>>(iter: I) -> Self {
        let mut sheet = Self::new();
        for (user, balance) in iter {
            sheet.credit(user, balance);
        }
        sheet
    }
}
