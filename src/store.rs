//! Schedule store.
//!
//! Owns the working copy of the timetable: the flat collection of
//! entries seeded wholesale from the generator result. Entries are
//! never created or deleted here — an accepted edit rewrites the
//! placement fields of one entry in place, atomically. A rejected edit
//! leaves the store untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ReferenceCatalog;
use crate::conflict::{validate_edit, EditRequest, RejectReason};
use crate::models::{EntryKey, ScheduleEntry};

/// Why an edit could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// No entry matches the identity key.
    #[error("no schedule entry matches key {0}")]
    EntryNotFound(EntryKey),

    /// The conflict validator rejected the patch.
    #[error(transparent)]
    Rejected(#[from] RejectReason),
}

/// The current ordered collection of schedule entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store from a generator result, replacing any previous
    /// contents.
    pub fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// All entries, in seed order.
    pub fn all(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry with the given identity key.
    pub fn find(&self, key: &EntryKey) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.key() == *key)
    }

    /// Applies a validated edit to the entry with the given key.
    ///
    /// Runs the conflict validator first; on rejection the store is
    /// not modified and the reason is returned. On acceptance the
    /// entry's placement fields are rewritten along with the
    /// denormalized `instructor_name` and `room_type`, both recomputed
    /// from the catalog. Identity fields (course, section kind) are
    /// never changed; the entry's key changes only through the new day
    /// and start time.
    pub fn apply(
        &mut self,
        catalog: &ReferenceCatalog,
        key: &EntryKey,
        request: &EditRequest,
    ) -> Result<(), EditError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.key() == *key)
            .ok_or_else(|| EditError::EntryNotFound(key.clone()))?;

        let approval = validate_edit(catalog, &self.entries, index, request)?;

        let entry = &mut self.entries[index];
        entry.day = request.day;
        entry.start_time = request.start_time.clone();
        entry.end_time = request.end_time.clone();
        entry.room_id = request.room_id.clone();
        entry.room_type = approval.room_type;
        entry.instructor_id = request.instructor_id.clone();
        entry.instructor_name = approval.instructor_name;
        Ok(())
    }
}
