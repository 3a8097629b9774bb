//! Folding a group's expense history into a balance sheet.

use divvy_shared::types::money;
use rust_decimal::Decimal;

use super::sheet::BalanceSheet;
use crate::expense::Expense;

/// Builds a fresh [`BalanceSheet`] from a snapshot of expenses.
///
/// Pure fold: nothing is cached or shared between calls, so concurrent
/// callers can aggregate independent snapshots safely. The caller decides
/// which expenses make up the snapshot; read-your-writes consistency is the
/// persistence layer's problem.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Folds expenses into one net balance per user.
    ///
    /// For each expense the payer is credited the full total and every
    /// split participant is debited their share. A payer who is also a
    /// split participant receives both adjustments, which nets their own
    /// share out and leaves only what others owe them.
    ///
    /// Expenses are trusted to be internally consistent - the sum invariant
    /// was enforced when they were created and is NOT re-checked here. An
    /// expense that violates it anyway is still folded in, but the drift is
    /// reported via `tracing` so the embedding service can surface the
    /// upstream bug.
    #[must_use]
    pub fn aggregate(expenses: &[Expense]) -> BalanceSheet {
        let mut sheet = BalanceSheet::new();

        for expense in expenses {
            let split_total = expense.split_total();
            if !money::approx_eq(split_total, expense.total_amount) {
                tracing::warn!(
                    expense = %expense.id,
                    total = %expense.total_amount,
                    split_total = %split_total,
                    "expense splits do not sum to its total"
                );
            }

            sheet.credit(expense.payer, expense.total_amount);
            for split in &expense.splits {
                sheet.debit(split.user, split.owed_amount);
            }
        }

        sheet
    }

    /// The net adjustment one expense contributes to a sheet.
    ///
    /// Zero (within a cent) for every well-formed expense: the payer's
    /// credit cancels the participants' debits.
    #[must_use]
    pub fn net_adjustment(expense: &Expense) -> Decimal {
        expense.total_amount - expense.split_total()
    }
}
