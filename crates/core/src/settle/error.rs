//! Error types for debt simplification.

use divvy_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while simplifying debts.
#[derive(Debug, Error)]
pub enum SettleError {
    /// The sheet's balances did not cancel out: an upstream bug, not a
    /// user error - every sheet built from validated expenses is zero-sum.
    #[error("Balance sheet is not zero-sum: {residual} left unsettled")]
    UnsettledResidual {
        /// The amount left over once one side ran out of counterparties.
        residual: Decimal,
    },
}

impl SettleError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnsettledResidual { .. } => "UNSETTLED_RESIDUAL",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 500 Internal Server Error - invariant violation, not user input
            Self::UnsettledResidual { .. } => 500,
        }
    }
}

impl From<SettleError> for AppError {
    fn from(err: SettleError) -> Self {
        Self::Internal(err.to_string())
    }
}
