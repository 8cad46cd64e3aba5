//! Session configuration.
//!
//! # Responsibility
//! - Hold the data file location, id policy and logging settings for one run.
//!
//! # Invariants
//! - `log_dir` defaults to an absolute path so logging init can accept it.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Default inventory data file, resolved against the working directory.
pub const DEFAULT_DATA_FILE: &str = "CDInventory.dat";
const DEFAULT_LOG_DIR_NAME: &str = "cdinventory-logs";

/// Duplicate-id handling for inserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Duplicate ids are appended like any other record.
    #[default]
    AllowDuplicates,
    /// Inserting an id already present fails with `TableError::DuplicateId`.
    RejectDuplicates,
}

/// Settings consumed by `Session` and the CLI bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// File the inventory is loaded from and saved to.
    pub data_file: PathBuf,
    pub id_policy: IdPolicy,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: &'static str,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
}

impl SessionConfig {
    /// Creates a config for `data_file` with all other settings defaulted.
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    /// Switches inserts to reject duplicate ids.
    pub fn strict_ids(mut self) -> Self {
        self.id_policy = IdPolicy::RejectDuplicates;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            id_policy: IdPolicy::default(),
            log_level: default_log_level(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}
