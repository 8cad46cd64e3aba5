//! Inventory domain model.
//!
//! # Responsibility
//! - Define the catalog record and the ordered in-memory table that holds it.
//!
//! # Invariants
//! - Table order is insertion order and is never re-sorted.
//! - Record ids are intended to be unique but uniqueness is not enforced here.

pub mod record;
