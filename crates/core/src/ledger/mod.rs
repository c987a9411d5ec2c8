//! Double-entry bookkeeping engine.
//!
//! This module implements the general ledger:
//! - Chart of accounts and sign conventions
//! - Journal entry domain types
//! - Business rule validation (balance invariant)
//! - Append-only journal storage
//! - Running-balance projection
//! - Query facade composing the above
//! - Error types for ledger operations

pub mod account;
pub mod entry;
pub mod error;
pub mod id;
pub mod projection;
pub mod registry;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod projection_props;

pub use account::{Account, AccountType, NormalBalance};
pub use entry::{EntryInput, EntryTotals, JournalEntry, JournalLine, Side};
pub use error::LedgerError;
pub use id::{AccountId, EntryId};
pub use projection::{LedgerQuery, LedgerRow};
pub use registry::AccountRegistry;
pub use service::{GeneralLedger, LedgerSnapshot};
pub use store::JournalStore;
