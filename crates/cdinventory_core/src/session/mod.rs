//! Interactive session loop.
//!
//! # Responsibility
//! - Own the record store, the repository and the terminal for one run.
//! - Translate menu choices into table operations and persistence calls.
//! - Present every recoverable failure inline and return to the menu.
//!
//! # Invariants
//! - Only this module reads user input or writes user-facing text.
//! - Nothing is saved implicitly; exit discards unsaved changes.

mod console;
mod controller;
mod menu;

pub use console::Console;
pub use controller::{Session, SessionState};
pub use menu::MenuChoice;
