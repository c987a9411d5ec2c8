//! Core ledger engine for Folio.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and balance computations live here.
//!
//! # Modules
//!
//! - `ledger` - Double-entry posting, storage, and running-balance projection

pub mod ledger;
