//! Expense records and split strategies.
//!
//! An [`Expense`] is created once, validated at construction, and read many
//! times by the ledger. This module defines the expense record itself plus
//! the constructors that run the split calculator before anything is stored.

pub mod types;

pub use types::{Expense, SplitEntry, SplitStrategy};
