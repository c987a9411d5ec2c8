//! Chart of accounts domain types and sign conventions.
//!
//! The five account classes and the normal-balance rule:
//! - Asset/Expense: debit-normal, balance increases with debits
//! - Liability/Equity/Revenue: credit-normal, balance increases with credits

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entry::Side;
use super::id::AccountId;

/// The five account classes of double-entry bookkeeping.
///
/// The type is fixed at account creation. Changing it after entries
/// reference the account would silently corrupt historical balances, so no
/// mutation path exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Resources owned (cash, receivables, inventory).
    Asset,
    /// Obligations owed (payables, loans).
    Liability,
    /// Owner claims on the business.
    Equity,
    /// Income earned.
    Revenue,
    /// Costs incurred.
    Expense,
}

impl AccountType {
    /// Returns the normal-balance convention for this account class.
    #[must_use]
    pub fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::DebitNormal,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::CreditNormal,
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Asset => "asset",
            Self::Liability => "liability",
            Self::Equity => "equity",
            Self::Revenue => "revenue",
            Self::Expense => "expense",
        };
        write!(f, "{name}")
    }
}

/// Sign convention for balance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense).
    DebitNormal,
    /// Credit-normal accounts (Liability, Equity, Revenue).
    CreditNormal,
}

impl NormalBalance {
    /// Signed change a single line applies to a running balance.
    ///
    /// This is the only place the sign convention is encoded; every balance
    /// in the engine is derived through it.
    #[must_use]
    pub fn balance_change(self, side: Side, amount: Decimal) -> Decimal {
        match (self, side) {
            (Self::DebitNormal, Side::Debit) | (Self::CreditNormal, Side::Credit) => amount,
            (Self::DebitNormal, Side::Credit) | (Self::CreditNormal, Side::Debit) => -amount,
        }
    }
}

/// An account in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, immutable once created.
    pub id: AccountId,
    /// Display label.
    pub name: String,
    /// Account class, immutable once created.
    pub account_type: AccountType,
    /// Signed starting balance, set at creation and never mutated.
    /// Running balances are recomputed from journal lines on top of it.
    pub opening_balance: Decimal,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}
