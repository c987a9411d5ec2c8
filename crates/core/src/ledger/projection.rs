//! Running-balance projection over stored entries.
//!
//! The projector is a pure function over a snapshot: sort entries
//! chronologically, fold per-account running balances with the normal-balance
//! sign convention, then filter the emitted rows. Filters select which rows
//! are returned, never which entries are folded, so a narrowed view shows
//! the same running balances as the full ledger.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::account::Account;
use super::entry::{JournalEntry, Side};
use super::error::LedgerError;
use super::id::{AccountId, EntryId};

/// Filters for a ledger projection. `None` fields are unbounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerQuery {
    /// Earliest date to include, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Latest date to include, inclusive. Future-dated entries are shown
    /// unless this bound excludes them.
    pub date_to: Option<NaiveDate>,
    /// Restrict rows to a single account.
    pub account_id: Option<AccountId>,
}

impl LedgerQuery {
    /// Query for one account across all dates.
    #[must_use]
    pub fn for_account(account_id: impl Into<AccountId>) -> Self {
        Self {
            account_id: Some(account_id.into()),
            ..Self::default()
        }
    }

    /// Query for a closed date window across all accounts.
    #[must_use]
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            date_from: Some(from),
            date_to: Some(to),
            ..Self::default()
        }
    }

    fn includes_date(&self, date: NaiveDate) -> bool {
        self.date_from.is_none_or(|from| date >= from) && self.date_to.is_none_or(|to| date <= to)
    }

    fn includes_account(&self, account_id: &AccountId) -> bool {
        self.account_id
            .as_ref()
            .is_none_or(|wanted| wanted == account_id)
    }
}

/// One projected ledger line with its post-line running balance.
///
/// Derived on every projection, never stored. Export collaborators map the
/// fields straight to output columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// The entry this row belongs to.
    pub entry_id: EntryId,
    /// Transaction date of the entry.
    pub date: NaiveDate,
    /// Description of the entry.
    pub description: String,
    /// The account the line posts to.
    pub account_id: AccountId,
    /// Display name of the account.
    pub account_name: String,
    /// Whether the line is a debit or credit.
    pub side: Side,
    /// The line amount, always positive.
    pub amount: Decimal,
    /// Per-account cumulative balance up to and including this line, in
    /// chronological order, signed by the account's normal balance.
    pub running_balance: Decimal,
}

struct AccountSlot<'a> {
    account: &'a Account,
    balance: Decimal,
}

/// Projects ledger rows with per-account running balances.
///
/// Entries are ordered by `(date, seq)`, so same-day entries replay in
/// acceptance order. Each account's balance starts from its opening balance.
/// The query filters are applied to the emitted rows only, after the fold.
///
/// Pure: identical inputs always produce identical output.
///
/// # Errors
///
/// Returns `InvalidDateRange` if `date_from > date_to`, and
/// `UnknownAccount` if an entry references an account missing from
/// `accounts` (cannot happen for entries that went through posting).
pub fn project(
    entries: &[JournalEntry],
    accounts: &[Account],
    query: &LedgerQuery,
) -> Result<Vec<LedgerRow>, LedgerError> {
    if let (Some(from), Some(to)) = (query.date_from, query.date_to) {
        if from > to {
            return Err(LedgerError::InvalidDateRange { from, to });
        }
    }

    let mut slots: HashMap<&AccountId, AccountSlot<'_>> = accounts
        .iter()
        .map(|account| {
            (
                &account.id,
                AccountSlot {
                    account,
                    balance: account.opening_balance,
                },
            )
        })
        .collect();

    let mut ordered: Vec<&JournalEntry> = entries.iter().collect();
    ordered.sort_by_key(|entry| (entry.date, entry.seq));

    let mut rows = Vec::new();
    for entry in ordered {
        for line in &entry.lines {
            let Some(slot) = slots.get_mut(&line.account_id) else {
                return Err(LedgerError::UnknownAccount {
                    account_id: line.account_id.clone(),
                });
            };

            let convention = slot.account.account_type.normal_balance();
            slot.balance += convention.balance_change(line.side, line.amount);

            rows.push(LedgerRow {
                entry_id: entry.id,
                date: entry.date,
                description: entry.description.clone(),
                account_id: line.account_id.clone(),
                account_name: slot.account.name.clone(),
                side: line.side,
                amount: line.amount,
                running_balance: slot.balance,
            });
        }
    }

    rows.retain(|row| query.includes_date(row.date) && query.includes_account(&row.account_id));
    Ok(rows)
}
