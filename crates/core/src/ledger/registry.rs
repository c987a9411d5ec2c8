//! In-memory chart of accounts.

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;

use super::account::{Account, AccountType};
use super::error::LedgerError;
use super::id::AccountId;

/// The chart of accounts.
///
/// Ids are unique and account types never change after creation. Accounts
/// are never deleted while the ledger references them, so no removal
/// operation exists. Kept in a `BTreeMap` so listings come out ordered by
/// id without a separate sort.
#[derive(Debug, Default, Clone)]
pub struct AccountRegistry {
    accounts: BTreeMap<AccountId, Account>,
}

impl AccountRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateId` if the id is already taken.
    pub fn create_account(
        &mut self,
        id: AccountId,
        name: impl Into<String>,
        account_type: AccountType,
        opening_balance: Decimal,
    ) -> Result<Account, LedgerError> {
        if self.accounts.contains_key(&id) {
            return Err(LedgerError::DuplicateId { account_id: id });
        }

        let account = Account {
            id: id.clone(),
            name: name.into(),
            account_type,
            opening_balance,
            created_at: Utc::now(),
        };
        self.accounts.insert(id, account.clone());
        Ok(account)
    }

    /// Looks up an account by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no account has this id.
    pub fn get_account(&self, id: &AccountId) -> Result<&Account, LedgerError> {
        self.accounts.get(id).ok_or_else(|| LedgerError::NotFound {
            account_id: id.clone(),
        })
    }

    /// Returns true if an account with this id exists.
    #[must_use]
    pub fn contains(&self, id: &AccountId) -> bool {
        self.accounts.contains_key(id)
    }

    /// Lists accounts ordered by id, optionally narrowed to one type.
    #[must_use]
    pub fn list_accounts(&self, account_type: Option<AccountType>) -> Vec<Account> {
        self.accounts
            .values()
            .filter(|account| account_type.is_none_or(|wanted| account.account_type == wanted))
            .cloned()
            .collect()
    }

    /// Number of registered accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if no accounts are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
