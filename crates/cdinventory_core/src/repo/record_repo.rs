//! Record repository contract and file-backed implementation.
//!
//! # Responsibility
//! - Read and write the whole `RecordStore` as one MessagePack blob.
//! - Classify failures into missing-file, read/decode and write/encode errors.
//!
//! # Invariants
//! - `save` overwrites the target file in place; there is no temp file or backup,
//!   so an interrupted write can leave a truncated file behind.
//! - `load` reproduces the saved sequence exactly, duplicates included.

use crate::model::record::RecordStore;
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for loading or saving the inventory file.
#[derive(Debug)]
pub enum StoreError {
    /// Inventory file does not exist yet.
    NotFound(PathBuf),
    /// File exists but could not be read.
    Read { path: PathBuf, source: io::Error },
    /// File content is not a valid serialized inventory.
    Decode {
        path: PathBuf,
        source: rmp_serde::decode::Error,
    },
    /// Inventory could not be serialized.
    Encode(rmp_serde::encode::Error),
    /// File could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl StoreError {
    /// Returns whether this is the expected missing-file condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "file_not_found",
            Self::Read { .. } => "read_failed",
            Self::Decode { .. } => "decode_failed",
            Self::Encode(_) => "encode_failed",
            Self::Write { .. } => "write_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "inventory file `{}` does not exist", path.display())
            }
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "failed to decode `{}`: {source}", path.display())
            }
            Self::Encode(source) => write!(f, "failed to encode inventory: {source}"),
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Read { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Encode(source) => Some(source),
            Self::Write { source, .. } => Some(source),
        }
    }
}

impl From<rmp_serde::encode::Error> for StoreError {
    fn from(value: rmp_serde::encode::Error) -> Self {
        Self::Encode(value)
    }
}

/// Repository interface for whole-inventory persistence.
pub trait RecordRepository {
    /// Location shown to the user in diagnostics.
    fn location(&self) -> &Path;
    fn load(&self) -> StoreResult<RecordStore>;
    fn save(&self, store: &RecordStore) -> StoreResult<()>;
}

/// File-backed record repository bound to one path.
#[derive(Debug, Clone)]
pub struct FileRecordRepository {
    path: PathBuf,
}

impl FileRecordRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordRepository for FileRecordRepository {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<RecordStore> {
        let started_at = Instant::now();
        match load_store(&self.path) {
            Ok(store) => {
                info!(
                    "event=inventory_load module=repo status=ok duration_ms={} records={}",
                    started_at.elapsed().as_millis(),
                    store.len()
                );
                Ok(store)
            }
            Err(err) if err.is_not_found() => {
                warn!(
                    "event=inventory_load module=repo status=missing duration_ms={} path={}",
                    started_at.elapsed().as_millis(),
                    self.path.display()
                );
                Err(err)
            }
            Err(err) => {
                error!(
                    "event=inventory_load module=repo status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, store: &RecordStore) -> StoreResult<()> {
        let started_at = Instant::now();
        match save_store(&self.path, store) {
            Ok(()) => {
                info!(
                    "event=inventory_save module=repo status=ok duration_ms={} records={}",
                    started_at.elapsed().as_millis(),
                    store.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=inventory_save module=repo status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Reads and decodes the inventory file at `path`.
///
/// # Errors
/// - `StoreError::NotFound` when `path` does not exist.
/// - `StoreError::Read` for any other I/O failure (permissions, directories).
/// - `StoreError::Decode` when the bytes are not a serialized record sequence.
pub fn load_store(path: &Path) -> StoreResult<RecordStore> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    rmp_serde::from_slice(&bytes).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encodes `store` and overwrites the file at `path`.
///
/// # Errors
/// - `StoreError::Encode` when serialization fails.
/// - `StoreError::Write` when the file cannot be created or written.
pub fn save_store(path: &Path, store: &RecordStore) -> StoreResult<()> {
    let bytes = rmp_serde::to_vec(store)?;
    fs::write(path, bytes).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}
