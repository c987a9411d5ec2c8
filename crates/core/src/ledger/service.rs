//! General ledger facade.
//!
//! Composes the registry, validator, store, and projector behind a single
//! handle with explicit lifecycle: construct, use, drop. Callers hold a
//! reference; there is no ambient global state.
//!
//! Concurrency: one writer, many readers. `post_entry` holds the write lock
//! across validate+append, so a rejected entry leaves no trace and sequence
//! numbers never collide. Reads clone a snapshot under the read lock and
//! project outside it.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::account::{Account, AccountType};
use super::entry::{EntryInput, JournalEntry, JournalLine};
use super::error::LedgerError;
use super::id::AccountId;
use super::projection::{self, LedgerQuery, LedgerRow};
use super::registry::AccountRegistry;
use super::store::JournalStore;
use super::validation;

/// Consistent point-in-time copy of accounts and entries.
///
/// Several projections can run against one snapshot without holding any
/// lock, which is how report collaborators derive multiple views from the
/// same state.
#[derive(Debug, Clone)]
pub struct LedgerSnapshot {
    /// Accounts ordered by id.
    pub accounts: Vec<Account>,
    /// Entries in acceptance order.
    pub entries: Vec<JournalEntry>,
}

impl LedgerSnapshot {
    /// Projects ledger rows from this snapshot.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` for a reversed date window.
    pub fn project(&self, query: &LedgerQuery) -> Result<Vec<LedgerRow>, LedgerError> {
        projection::project(&self.entries, &self.accounts, query)
    }
}

#[derive(Debug, Default)]
struct LedgerState {
    registry: AccountRegistry,
    journal: JournalStore,
}

/// The general ledger engine.
///
/// Single-writer/multiple-reader over the registry and journal. All writes
/// go through the validator; reads never mutate.
#[derive(Debug, Default)]
pub struct GeneralLedger {
    inner: RwLock<LedgerState>,
}

impl GeneralLedger {
    /// Creates an empty ledger with no accounts and no entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerState::default()),
        }
    }

    /// Registers an account in the chart of accounts.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is already taken.
    pub fn create_account(
        &self,
        id: impl Into<AccountId>,
        name: impl Into<String>,
        account_type: AccountType,
        opening_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        let mut state = self.write_state()?;
        let account = state
            .registry
            .create_account(id.into(), name, account_type, opening_balance)?;
        info!(
            account_id = %account.id,
            account_type = %account.account_type,
            opening_balance = %account.opening_balance,
            "account created"
        );
        Ok(account)
    }

    /// Looks up an account by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub fn get_account(&self, id: &AccountId) -> Result<Account, LedgerError> {
        let state = self.read_state()?;
        state.registry.get_account(id).cloned()
    }

    /// Lists accounts ordered by id, optionally narrowed to one type.
    ///
    /// # Errors
    ///
    /// Only fails if the ledger lock is poisoned.
    pub fn list_accounts(&self, account_type: Option<AccountType>) -> Result<Vec<Account>, LedgerError> {
        Ok(self.read_state()?.registry.list_accounts(account_type))
    }

    /// Validates and appends a journal entry in one atomic step.
    ///
    /// The write lock spans validation and append: concurrent posts
    /// serialize, the registry snapshot consulted by validation cannot
    /// change mid-check, and a rejected entry has zero observable effect.
    ///
    /// # Errors
    ///
    /// Returns the validation error when the entry is rejected; nothing is
    /// stored in that case.
    pub fn post_entry(
        &self,
        date: NaiveDate,
        description: impl Into<String>,
        lines: Vec<JournalLine>,
    ) -> Result<JournalEntry, LedgerError> {
        let input = EntryInput {
            date,
            description: description.into(),
            lines,
        };

        let mut state = self.write_state()?;
        let validated = match validation::validate_entry(input, |id| state.registry.contains(id)) {
            Ok(validated) => validated,
            Err(err) => {
                warn!(error_code = err.error_code(), error = %err, "entry rejected");
                return Err(err);
            }
        };

        let entry = state.journal.append(validated);
        info!(
            entry_id = %entry.id,
            seq = entry.seq,
            date = %entry.date,
            lines = entry.lines.len(),
            total = %entry.total(),
            "entry posted"
        );
        Ok(entry)
    }

    /// Projects ledger rows from a current snapshot.
    ///
    /// Snapshot acquisition is the only part that touches the lock; the
    /// sort and fold run on the copy, so long projections never block
    /// writers.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateRange` for a reversed date window.
    pub fn query_ledger(&self, query: &LedgerQuery) -> Result<Vec<LedgerRow>, LedgerError> {
        let snapshot = self.snapshot()?;
        let rows = snapshot.project(query)?;
        debug!(
            date_from = ?query.date_from,
            date_to = ?query.date_to,
            account_id = ?query.account_id,
            rows = rows.len(),
            "ledger queried"
        );
        Ok(rows)
    }

    /// Clones the current accounts and entries under the read lock.
    ///
    /// # Errors
    ///
    /// Only fails if the ledger lock is poisoned.
    pub fn snapshot(&self) -> Result<LedgerSnapshot, LedgerError> {
        let state = self.read_state()?;
        Ok(LedgerSnapshot {
            accounts: state.registry.list_accounts(None),
            entries: state.journal.all_entries().to_vec(),
        })
    }

    /// Number of entries accepted so far.
    ///
    /// # Errors
    ///
    /// Only fails if the ledger lock is poisoned.
    pub fn entry_count(&self) -> Result<usize, LedgerError> {
        Ok(self.read_state()?.journal.len())
    }

    fn read_state(&self) -> Result<RwLockReadGuard<'_, LedgerState>, LedgerError> {
        self.inner.read().map_err(|_| LedgerError::Internal {
            reason: "ledger read lock poisoned".to_string(),
        })
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, LedgerState>, LedgerError> {
        self.inner.write().map_err(|_| LedgerError::Internal {
            reason: "ledger write lock poisoned".to_string(),
        })
    }
}
