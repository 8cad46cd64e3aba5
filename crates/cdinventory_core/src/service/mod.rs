//! Table operations over the in-memory record store.
//!
//! # Responsibility
//! - Provide the pure insert/remove mutations used by the session loop.
//! - Keep user-facing presentation out of the data path.

pub mod table_ops;
