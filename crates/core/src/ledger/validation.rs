//! Business rule validation for journal entries.
//!
//! Validation is authoritative at the posting boundary: whatever advisory
//! checks callers run first, every entry passes through [`validate_entry`]
//! before it can reach the store. [`ValidatedEntry`] cannot be constructed
//! anywhere else, so there is no bypass path.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::entry::{EntryInput, EntryTotals, JournalLine};
use super::error::LedgerError;
use super::id::AccountId;

/// A journal entry that has passed validation and is ready to append.
///
/// Only [`validate_entry`] produces one.
#[derive(Debug, Clone)]
pub struct ValidatedEntry {
    date: NaiveDate,
    description: String,
    lines: Vec<JournalLine>,
    totals: EntryTotals,
}

impl ValidatedEntry {
    /// Transaction date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The effective lines, zero-amount lines already dropped.
    #[must_use]
    pub fn lines(&self) -> &[JournalLine] {
        &self.lines
    }

    /// Balanced debit/credit totals.
    #[must_use]
    pub fn totals(&self) -> EntryTotals {
        self.totals
    }

    /// Decomposes into the parts the store persists.
    pub(super) fn into_parts(self) -> (NaiveDate, String, Vec<JournalLine>) {
        (self.date, self.description, self.lines)
    }
}

/// Validates a candidate entry against the posting rules.
///
/// Registry access is injected as a closure so the function stays pure and
/// the caller controls which snapshot of the chart of accounts is consulted.
///
/// Checks, in order:
/// 1. Negative amounts are rejected (`NonPositiveAmount`).
/// 2. Zero-amount lines are dropped. Posting forms submit template rows
///    with empty amounts; the documented policy is to filter them rather
///    than reject the whole entry.
/// 3. Fewer than 2 surviving lines fails (`EmptyLines`).
/// 4. Every surviving line must reference a known account
///    (`UnknownAccount`).
/// 5. Debit and credit totals must match and be strictly positive
///    (`Unbalanced`). Totals are exact decimal sums, never floats.
///
/// # Errors
///
/// Returns the first violated rule as a [`LedgerError`].
pub fn validate_entry<F>(input: EntryInput, account_exists: F) -> Result<ValidatedEntry, LedgerError>
where
    F: Fn(&AccountId) -> bool,
{
    for line in &input.lines {
        if line.amount < Decimal::ZERO {
            return Err(LedgerError::NonPositiveAmount {
                account_id: line.account_id.clone(),
                amount: line.amount,
            });
        }
    }

    let lines: Vec<JournalLine> = input
        .lines
        .into_iter()
        .filter(|line| !line.amount.is_zero())
        .collect();

    if lines.len() < 2 {
        return Err(LedgerError::EmptyLines {
            provided: lines.len(),
        });
    }

    for line in &lines {
        if !account_exists(&line.account_id) {
            return Err(LedgerError::UnknownAccount {
                account_id: line.account_id.clone(),
            });
        }
    }

    let totals = EntryTotals::from_lines(&lines);
    if !totals.is_balanced || totals.debit <= Decimal::ZERO {
        return Err(LedgerError::Unbalanced {
            debits: totals.debit,
            credits: totals.credit,
        });
    }

    Ok(ValidatedEntry {
        date: input.date,
        description: input.description,
        lines,
        totals,
    })
}
