//! Reducing balances to settle-up transactions.
//!
//! Given a zero-sum balance sheet, the simplifier produces a short list of
//! "who pays whom" transactions that clears every balance. The list is
//! derived, never stored: recomputing it from the same sheet always yields
//! the same result.

pub mod error;
pub mod simplifier;


pub use error::SettleError;
pub use simplifier::{Debt, DebtSimplifier};
