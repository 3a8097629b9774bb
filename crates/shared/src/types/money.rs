//! Monetary helpers with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal` values carried to two
//! fraction digits; these helpers centralize the rounding and
//! tolerance rules used across the ledger.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Number of fraction digits carried by every monetary amount.
pub const SCALE: u32 = 2;

/// One cent: the tolerance inside which a balance counts as settled.
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, SCALE);

/// Rounds an amount to cents using banker's rounding.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Returns true if the amount is within one cent of zero.
#[must_use]
pub fn is_settled(amount: Decimal) -> bool {
    amount.abs() <= CENT
}

/// Returns true if two amounts differ by no more than one cent.
#[must_use]
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= CENT
}
