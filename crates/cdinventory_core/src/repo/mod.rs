//! Persistence gateway for the record store.
//!
//! # Responsibility
//! - Define the load/save contract used by the session loop.
//! - Isolate file and encoding details from table operations.
//!
//! # Invariants
//! - Persistence APIs return semantic errors (`NotFound`) in addition to
//!   transport and decode errors.
//! - Loads never validate or rewrite persisted records.

pub mod record_repo;
