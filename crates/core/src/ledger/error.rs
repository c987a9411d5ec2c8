//! Ledger error types for validation, registry, and query failures.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::id::AccountId;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Entry debits and credits do not match, or both sides sum to zero.
    #[error("Entry is not balanced. Debit: {debits}, Credit: {credits}")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },

    /// Entry has fewer than 2 effective lines (after zero-amount lines are
    /// dropped).
    #[error("Entry must have at least 2 lines, got {provided}")]
    EmptyLines {
        /// Number of effective lines submitted.
        provided: usize,
    },

    /// A line references an account that does not exist in the registry.
    #[error("Unknown account: {account_id}")]
    UnknownAccount {
        /// The missing account id.
        account_id: AccountId,
    },

    /// A line carries a negative amount.
    #[error("Line amount must be positive, got {amount} on account {account_id}")]
    NonPositiveAmount {
        /// The account the offending line posts to.
        account_id: AccountId,
        /// The rejected amount.
        amount: Decimal,
    },

    // ========== Registry Errors ==========
    /// An account with this id already exists.
    #[error("Account id already taken: {account_id}")]
    DuplicateId {
        /// The colliding account id.
        account_id: AccountId,
    },

    /// Account lookup failed.
    #[error("Account not found: {account_id}")]
    NotFound {
        /// The requested account id.
        account_id: AccountId,
    },

    // ========== Query Errors ==========
    /// Date-range filter with `from` after `to`.
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange {
        /// Requested lower bound.
        from: NaiveDate,
        /// Requested upper bound.
        to: NaiveDate,
    },

    // ========== Internal Errors ==========
    /// Ledger lock poisoned by a panicking writer.
    #[error("Internal error: {reason}")]
    Internal {
        /// What went wrong.
        reason: String,
    },
}

impl LedgerError {
    /// Returns a stable machine-readable code for callers that match on
    /// errors across serialization boundaries.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unbalanced { .. } => "UNBALANCED",
            Self::EmptyLines { .. } => "EMPTY_LINES",
            Self::UnknownAccount { .. } => "UNKNOWN_ACCOUNT",
            Self::NonPositiveAmount { .. } => "NON_POSITIVE_AMOUNT",
            Self::DuplicateId { .. } => "DUPLICATE_ID",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::InvalidDateRange { .. } => "INVALID_DATE_RANGE",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// True for failures the caller can fix by correcting the submitted
    /// entry. These are never retried automatically.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Unbalanced { .. }
                | Self::EmptyLines { .. }
                | Self::UnknownAccount { .. }
                | Self::NonPositiveAmount { .. }
        )
    }
}
