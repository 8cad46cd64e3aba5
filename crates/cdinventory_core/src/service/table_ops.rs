//! Insert and remove-by-id operations on `RecordStore`.
//!
//! # Responsibility
//! - Parse user-typed ID text into `RecordId`.
//! - Mutate the store in place without any I/O.
//!
//! # Invariants
//! - A failed parse never mutates the store.
//! - `remove_by_id` removes at most one record: the first match in insertion order.
//! - Duplicate ids are accepted unless `IdPolicy::RejectDuplicates` is requested.

use crate::config::IdPolicy;
use crate::model::record::{Record, RecordId, RecordStore};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;

pub type TableResult<T> = Result<T, TableError>;

/// Error for table mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// ID text is not an integer.
    InvalidId { input: String, source: ParseIntError },
    /// ID already present while duplicates are rejected.
    DuplicateId(RecordId),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidId { input, source } => {
                write!(f, "invalid record id `{input}`: {source}")
            }
            Self::DuplicateId(id) => write!(f, "record id {id} already exists"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidId { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

/// Outcome of `remove_by_id`.
///
/// "Not found" is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(Record),
    NotFound(RecordId),
}

impl RemoveOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

/// Parses user-typed ID text, ignoring surrounding whitespace.
pub fn parse_record_id(id_text: &str) -> TableResult<RecordId> {
    let trimmed = id_text.trim();
    trimmed
        .parse::<RecordId>()
        .map_err(|source| TableError::InvalidId {
            input: trimmed.to_string(),
            source,
        })
}

/// Appends a new record parsed from user input, tolerating duplicate ids.
///
/// # Errors
/// - `TableError::InvalidId` when `id_text` is not an integer.
pub fn insert(
    id_text: &str,
    title: impl Into<String>,
    artist: impl Into<String>,
    store: &mut RecordStore,
) -> TableResult<RecordId> {
    insert_with_policy(id_text, title, artist, store, IdPolicy::AllowDuplicates)
}

/// Appends a new record parsed from user input under an explicit id policy.
///
/// # Errors
/// - `TableError::InvalidId` when `id_text` is not an integer.
/// - `TableError::DuplicateId` when the policy rejects duplicates and `id` exists.
pub fn insert_with_policy(
    id_text: &str,
    title: impl Into<String>,
    artist: impl Into<String>,
    store: &mut RecordStore,
    policy: IdPolicy,
) -> TableResult<RecordId> {
    let id = match parse_record_id(id_text) {
        Ok(id) => id,
        Err(err) => {
            warn!("event=record_insert module=table status=error error_code=invalid_id");
            return Err(err);
        }
    };

    if policy == IdPolicy::RejectDuplicates && store.contains_id(id) {
        warn!(
            "event=record_insert module=table status=error error_code=duplicate_id id={}",
            id
        );
        return Err(TableError::DuplicateId(id));
    }

    store.push(Record::new(id, title, artist));
    debug!(
        "event=record_insert module=table status=ok id={} records={}",
        id,
        store.len()
    );
    Ok(id)
}

/// Removes the first record whose id matches the parsed `id_text`.
///
/// # Errors
/// - `TableError::InvalidId` when `id_text` is not an integer.
pub fn remove_by_id(id_text: &str, store: &mut RecordStore) -> TableResult<RemoveOutcome> {
    let id = match parse_record_id(id_text) {
        Ok(id) => id,
        Err(err) => {
            warn!("event=record_remove module=table status=error error_code=invalid_id");
            return Err(err);
        }
    };

    let outcome = match store.remove_first(id) {
        Some(record) => RemoveOutcome::Removed(record),
        None => RemoveOutcome::NotFound(id),
    };
    debug!(
        "event=record_remove module=table status=ok id={} removed={} records={}",
        id,
        outcome.is_removed(),
        store.len()
    );
    Ok(outcome)
}
