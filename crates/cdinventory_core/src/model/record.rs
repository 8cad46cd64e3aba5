//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical catalog entry (`id`, `title`, `artist`).
//! - Define `RecordStore`, the ordered table owned by one session.
//!
//! # Invariants
//! - `RecordStore` preserves insertion order across mutation and persistence.
//! - Duplicate ids are representable; the store never rejects or merges them.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Integer identifier typed by the user for each record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Ids are bounded to the `i64` range and parsed as plain decimal digits with
/// an optional sign; underscores such as `1_000` are not accepted.
pub type RecordId = i64;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// User-assigned integer ID.
    pub id: RecordId,
    /// CD title, non-empty by convention only.
    pub title: String,
    /// Artist name, non-empty by convention only.
    pub artist: String,
}

impl Record {
    pub fn new(id: RecordId, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Formats one inventory line as `id<TAB>title (by: artist)`.
///
/// The id and title are tab-separated rather than comma-separated so the id
/// column lines up under the `ID` table header.
impl Display for Record {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{} (by: {})", self.id, self.title, self.artist)
    }
}

/// Ordered in-memory table of records for one session.
///
/// Serialized as a bare sequence so the persisted blob is exactly the
/// ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Returns whether any record carries `id`.
    pub fn contains_id(&self, id: RecordId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Appends one record at the end of the table.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Removes the first record with `id` in insertion order.
    ///
    /// Returns the removed record, or `None` when no record matches. Later
    /// duplicates are left in place.
    pub fn remove_first(&mut self, id: RecordId) -> Option<Record> {
        let position = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(position))
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
