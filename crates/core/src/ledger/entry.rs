//! Journal entry domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{AccountId, EntryId};

/// Direction of a journal line.
///
/// In double-entry bookkeeping:
/// - Debits increase asset/expense accounts, decrease liability/equity/revenue accounts
/// - Credits decrease asset/expense accounts, increase liability/equity/revenue accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Debit line.
    Debit,
    /// Credit line.
    Credit,
}

/// A single debit or credit line within a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalLine {
    /// The account this line posts to.
    pub account_id: AccountId,
    /// Whether this is a debit or credit.
    pub side: Side,
    /// Amount, strictly positive in any stored entry.
    pub amount: Decimal,
}

impl JournalLine {
    /// Creates a line against an account.
    #[must_use]
    pub fn new(account_id: impl Into<AccountId>, side: Side, amount: Decimal) -> Self {
        Self {
            account_id: account_id.into(),
            side,
            amount,
        }
    }

    /// Returns the raw signed amount (positive for debit, negative for
    /// credit), before any account-type convention is applied.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.side {
            Side::Debit => self.amount,
            Side::Credit => -self.amount,
        }
    }
}

/// A candidate journal entry as submitted by callers.
///
/// Has no id: ids are assigned by the store at acceptance, after the input
/// has passed validation.
#[derive(Debug, Clone)]
pub struct EntryInput {
    /// Transaction date (date-only granularity).
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Candidate lines; zero-amount lines are dropped during validation.
    pub lines: Vec<JournalLine>,
}

/// Debit and credit totals of a set of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryTotals {
    /// Sum of the debit side.
    pub debit: Decimal,
    /// Sum of the credit side.
    pub credit: Decimal,
    /// Whether debits equal credits.
    pub is_balanced: bool,
}

impl EntryTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }

    /// Sums a set of lines by side.
    #[must_use]
    pub fn from_lines(lines: &[JournalLine]) -> Self {
        let mut debit = Decimal::ZERO;
        let mut credit = Decimal::ZERO;
        for line in lines {
            match line.side {
                Side::Debit => debit += line.amount,
                Side::Credit => credit += line.amount,
            }
        }
        Self::new(debit, credit)
    }

    /// Returns the difference between debits and credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// A posted journal entry.
///
/// Immutable once stored. Corrections are made by posting new offsetting
/// entries, never by editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier, assigned at acceptance.
    pub id: EntryId,
    /// Store-assigned acceptance sequence, starting at 1. Breaks date ties
    /// during projection.
    pub seq: u64,
    /// Transaction date.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// The balanced lines, at least 2.
    pub lines: Vec<JournalLine>,
    /// When the entry was accepted. Metadata only, never used for ordering.
    pub posted_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Sum of the debit side, which equals the credit side for any stored
    /// entry.
    #[must_use]
    pub fn total(&self) -> Decimal {
        EntryTotals::from_lines(&self.lines).debit
    }
}
