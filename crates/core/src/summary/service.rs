//! Service combining aggregation and simplification.

use super::types::BalanceSummary;
use crate::expense::Expense;
use crate::ledger::BalanceAggregator;
use crate::settle::{DebtSimplifier, SettleError};

/// Computes balance views over a group's expense history.
///
/// Pure and stateless: each call works on the snapshot it is given. The
/// caller is responsible for providing the complete history of exactly one
/// group - expenses from different groups folded together produce a
/// meaningless sheet.
pub struct GroupLedgerService;

impl GroupLedgerService {
    /// Aggregates the history into balances and derives the settle-up plan.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError`] if the aggregated sheet fails to settle,
    /// which indicates a corrupted expense record upstream.
    pub fn balance_summary(expenses: &[Expense]) -> Result<BalanceSummary, SettleError> {
        let balances = BalanceAggregator::aggregate(expenses);
        let simplified_debts = DebtSimplifier::simplify(&balances)?;
        Ok(BalanceSummary {
            balances,
            simplified_debts,
        })
    }
}
