//! Greedy reduction of a balance sheet into pairwise transactions.

use divvy_shared::types::UserId;
use divvy_shared::types::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::SettleError;
use crate::ledger::BalanceSheet;

/// A settle-up transaction: `from` should pay `to` this amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    /// The debtor making the payment.
    pub from: UserId,
    /// The creditor receiving it.
    pub to: UserId,
    /// The payment amount. Always positive.
    pub amount: Decimal,
}

/// Reduces a balance sheet to a short list of pairwise transactions.
///
/// Greedy matching: the largest debt is repeatedly paired with the largest
/// credit. This keeps the transaction count low for typical groups but is
/// NOT a minimum-transaction-count solver - true optimality is a much
/// harder combinatorial problem and not worth it here.
pub struct DebtSimplifier;

impl DebtSimplifier {
    /// Produces the settle-up plan for a sheet.
    ///
    /// Users within one cent of zero are already settled and excluded.
    /// Output is deterministic: debtors and creditors are ordered by
    /// balance size with user ID as the tie-break, so the same sheet
    /// always yields the same ordered list.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::UnsettledResidual`] if balances do not
    /// cancel out - only possible for a sheet that violates the zero-sum
    /// invariant upstream.
    pub fn simplify(sheet: &BalanceSheet) -> Result<Vec<Debt>, SettleError> {
        let mut debtors: Vec<(UserId, Decimal)> = Vec::new();
        let mut creditors: Vec<(UserId, Decimal)> = Vec::new();

        for (user, balance) in sheet.iter() {
            if money::is_settled(balance) {
                continue;
            }
            if balance < Decimal::ZERO {
                debtors.push((user, balance));
            } else {
                creditors.push((user, balance));
            }
        }

        // Most negative first / most positive first: the biggest debts and
        // credits meet early, which is what keeps the plan short.
        debtors.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        creditors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut debts = Vec::new();
        let mut d = 0;
        let mut c = 0;

        while d < debtors.len() && c < creditors.len() {
            let settled = money::round_to_cents(debtors[d].1.abs().min(creditors[c].1));
            if settled > Decimal::ZERO {
                debts.push(Debt {
                    from: debtors[d].0,
                    to: creditors[c].0,
                    amount: settled,
                });
            }

            debtors[d].1 += settled;
            creditors[c].1 -= settled;

            if money::is_settled(debtors[d].1) {
                d += 1;
            }
            if money::is_settled(creditors[c].1) {
                c += 1;
            }
        }

        // One side ran out; anything beyond tolerance on the other side
        // means the sheet was never zero-sum to begin with.
        let residual: Decimal = debtors[d..]
            .iter()
            .chain(creditors[c..].iter())
            .map(|&(_, balance)| balance)
            .sum();
        if money::is_settled(residual) {
            Ok(debts)
        } else {
            tracing::warn!(%residual, "balance sheet left a residual after settlement");
            Err(SettleError::UnsettledResidual { residual })
        }
    }
}
