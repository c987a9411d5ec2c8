//! Append-only journal storage.

use chrono::Utc;

use super::entry::JournalEntry;
use super::id::EntryId;
use super::validation::ValidatedEntry;

/// Append-only collection of accepted journal entries.
///
/// The store is the source of truth. Entries receive their id, acceptance
/// sequence, and posting timestamp here and are never mutated or removed
/// afterward. Acceptance order is not date order; chronological sorting is
/// the projection's job.
#[derive(Debug, Clone)]
pub struct JournalStore {
    entries: Vec<JournalEntry>,
    next_seq: u64,
}

impl JournalStore {
    /// Creates an empty store. Sequence numbers start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_seq: 1,
        }
    }

    /// Appends a validated entry, assigning its id, sequence, and posting
    /// time. Only validated entries can reach this point.
    pub fn append(&mut self, validated: ValidatedEntry) -> JournalEntry {
        let (date, description, lines) = validated.into_parts();
        let entry = JournalEntry {
            id: EntryId::new(),
            seq: self.next_seq,
            date,
            description,
            lines,
            posted_at: Utc::now(),
        };
        self.next_seq += 1;
        self.entries.push(entry.clone());
        entry
    }

    /// All stored entries in acceptance order.
    #[must_use]
    pub fn all_entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been posted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}
