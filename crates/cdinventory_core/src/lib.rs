//! Core logic for the CD inventory tool.
//! Holds the record model, table operations, file persistence and the
//! interactive session loop driven by the CLI.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::{IdPolicy, SessionConfig, DEFAULT_DATA_FILE};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{Record, RecordId, RecordStore};
pub use repo::record_repo::{
    load_store, save_store, FileRecordRepository, RecordRepository, StoreError, StoreResult,
};
pub use service::table_ops::{
    insert, insert_with_policy, parse_record_id, remove_by_id, RemoveOutcome, TableError,
    TableResult,
};
pub use session::{Console, MenuChoice, Session, SessionState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
