//! Error types for split computation.

use divvy_shared::AppError;
use divvy_shared::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while computing a split.
#[derive(Debug, Error)]
pub enum SplitError {
    // ========== Invalid Input ==========
    /// Total amount must be positive.
    #[error("Total amount must be positive, got {amount}")]
    NonPositiveTotal {
        /// The rejected total.
        amount: Decimal,
    },

    /// A split needs at least one participant.
    #[error("A split needs at least one participant")]
    NoParticipants,

    /// The same participant appears more than once in an equal split.
    #[error("Participant {0} appears more than once")]
    DuplicateParticipant(UserId),

    /// An exact share amount must be positive.
    #[error("Share amount for {user} must be positive, got {amount}")]
    NonPositiveShare {
        /// The participant with the rejected share.
        user: UserId,
        /// The rejected amount.
        amount: Decimal,
    },

    /// A percentage must be positive.
    #[error("Percentage for {user} must be positive, got {percentage}")]
    NonPositivePercentage {
        /// The participant with the rejected percentage.
        user: UserId,
        /// The rejected percentage.
        percentage: Decimal,
    },

    // ========== Sum Mismatches ==========
    /// Exact split amounts do not sum to the total.
    #[error("Split amounts sum ({actual}) does not equal total ({expected})")]
    SplitMismatch {
        /// The expense total the shares were expected to sum to.
        expected: Decimal,
        /// What the supplied shares actually sum to.
        actual: Decimal,
    },

    /// Percentages do not add up to 100.
    #[error("Percentages must add up to 100%. Current: {sum}%")]
    PercentageMismatch {
        /// What the supplied percentages sum to.
        sum: Decimal,
    },
}

impl SplitError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveTotal { .. } => "NON_POSITIVE_TOTAL",
            Self::NoParticipants => "NO_PARTICIPANTS",
            Self::DuplicateParticipant(_) => "DUPLICATE_PARTICIPANT",
            Self::NonPositiveShare { .. } => "NON_POSITIVE_SHARE",
            Self::NonPositivePercentage { .. } => "NON_POSITIVE_PERCENTAGE",
            Self::SplitMismatch { .. } => "SPLIT_MISMATCH",
            Self::PercentageMismatch { .. } => "PERCENTAGE_MISMATCH",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - malformed input
            Self::NonPositiveTotal { .. }
            | Self::NoParticipants
            | Self::DuplicateParticipant(_)
            | Self::NonPositiveShare { .. }
            | Self::NonPositivePercentage { .. } => 400,

            // 422 Unprocessable Entity - sums that do not reconcile
            Self::SplitMismatch { .. } | Self::PercentageMismatch { .. } => 422,
        }
    }
}

impl From<SplitError> for AppError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::SplitMismatch { .. } | SplitError::PercentageMismatch { .. } => {
                Self::BusinessRule(err.to_string())
            }
            _ => Self::Validation(err.to_string()),
        }
    }
}
