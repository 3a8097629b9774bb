//! Dividing a total into per-participant shares.
//!
//! The split calculator is the validation gate for expense creation:
//! strategy-specific input goes in, a list of shares that sums to the
//! total (within one cent) comes out, or a [`SplitError`] explaining why
//! the input was rejected.

pub mod calculator;
pub mod error;

#[cfg(test)]
mod calculator_props;

pub use calculator::{ExactShare, PercentShare, SplitCalculator, SplitSpec};
pub use error::SplitError;
