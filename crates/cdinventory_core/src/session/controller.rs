//! Menu state machine driving one interactive session.
//!
//! # Invariants
//! - Invalid menu input re-prompts and never reaches dispatch.
//! - Every action except `Exit` returns to `MenuWait`.
//! - A failed load, parse or save leaves the in-memory store untouched.
//! - End of input behaves like `x`.

use super::console::Console;
use super::menu::{MenuChoice, MENU_PROMPT, MENU_TEXT};
use crate::config::{IdPolicy, SessionConfig};
use crate::model::record::RecordStore;
use crate::repo::record_repo::{RecordRepository, StoreError};
use crate::service::table_ops::{self, RemoveOutcome, TableError};
use log::{debug, info, warn};
use std::io::{self, BufRead, ErrorKind, Write};

const MISSING_FILE_HEADING: &str = "Inventory data file does not exist";
const GENERAL_ERROR_HEADING: &str = "There was a general error";
const INVALID_ID_HEADING: &str = "Invalid ID, needs to be an integer";
const DUPLICATE_ID_HEADING: &str = "This ID is already in the Inventory";
const SAVE_FAILED_HEADING: &str = "The Inventory could not be saved to file";

const RELOAD_WARNING: &str = "WARNING: If you continue, all unsaved data will be lost and the Inventory re-loaded from file.";
const RELOAD_PROMPT: &str =
    "type 'yes' to continue and reload from file. otherwise reload will be canceled: ";
const RELOAD_CANCELED_PROMPT: &str =
    "canceling... Inventory data NOT reloaded. Press [ENTER] to continue to the menu.";
const SAVE_PROMPT: &str = "Save this inventory to file? [y/n] ";
const SAVE_CANCELED_PROMPT: &str =
    "The inventory was NOT saved to file. Press [ENTER] to return to the menu.";

/// States of the interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Startup,
    MenuWait,
    Load,
    Add,
    List,
    Delete,
    Save,
    Exit,
}

impl From<MenuChoice> for SessionState {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::Load => Self::Load,
            MenuChoice::Add => Self::Add,
            MenuChoice::Inventory => Self::List,
            MenuChoice::Delete => Self::Delete,
            MenuChoice::Save => Self::Save,
            MenuChoice::Exit => Self::Exit,
        }
    }
}

/// One interactive run over a single in-memory record store.
pub struct Session<P, R, W> {
    repo: P,
    store: RecordStore,
    id_policy: IdPolicy,
    console: Console<R, W>,
}

impl<P, R, W> Session<P, R, W>
where
    P: RecordRepository,
    R: BufRead,
    W: Write,
{
    /// Creates a session with an empty store; `run` performs the initial load.
    pub fn new(repo: P, config: &SessionConfig, input: R, output: W) -> Self {
        Self {
            repo,
            store: RecordStore::new(),
            id_policy: config.id_policy,
            console: Console::new(input, output),
        }
    }

    /// Current in-memory table.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Consumes the session, returning the final store and the output sink.
    pub fn into_parts(self) -> (RecordStore, W) {
        (self.store, self.console.into_output())
    }

    /// Runs the loop from `Startup` until `Exit`.
    ///
    /// # Errors
    /// - Only terminal I/O failures; every domain failure is reported inline.
    pub fn run(&mut self) -> io::Result<()> {
        info!(
            "event=session_start module=session status=ok path={}",
            self.repo.location().display()
        );
        let mut state = SessionState::Startup;
        while state != SessionState::Exit {
            state = self.step(state)?;
        }
        info!(
            "event=session_exit module=session status=ok records={}",
            self.store.len()
        );
        Ok(())
    }

    /// Executes one state and returns the next one.
    ///
    /// Unreadable input inside an action is reported as a general error and
    /// the loop returns to the menu.
    pub fn step(&mut self, state: SessionState) -> io::Result<SessionState> {
        let result = match state {
            SessionState::Startup => self.startup(),
            SessionState::MenuWait => self.menu_wait(),
            SessionState::Load => self.reload(),
            SessionState::Add => self.add(),
            SessionState::List => {
                self.console.show_inventory(&self.store)?;
                Ok(SessionState::MenuWait)
            }
            SessionState::Delete => self.delete(),
            SessionState::Save => self.save(),
            SessionState::Exit => Ok(SessionState::Exit),
        };

        match result {
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!(
                    "event=input_rejected module=session status=error error_code=invalid_utf8 state={:?}",
                    state
                );
                self.console.report(GENERAL_ERROR_HEADING, &err)?;
                Ok(SessionState::MenuWait)
            }
            other => other,
        }
    }

    fn startup(&mut self) -> io::Result<SessionState> {
        match self.repo.load() {
            Ok(store) => self.store = store,
            Err(err) => self.report_load_error(&err)?,
        }
        Ok(SessionState::MenuWait)
    }

    fn menu_wait(&mut self) -> io::Result<SessionState> {
        self.console.println(MENU_TEXT)?;
        loop {
            let line = match self.console.prompt(MENU_PROMPT) {
                Ok(Some(line)) => line,
                Ok(None) => return Ok(SessionState::Exit),
                Err(err) if err.kind() == ErrorKind::InvalidData => continue,
                Err(err) => return Err(err),
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                debug!(
                    "event=menu_choice module=session status=ok choice={}",
                    choice.as_str()
                );
                self.console.println("")?;
                return Ok(choice.into());
            }
        }
    }

    fn reload(&mut self) -> io::Result<SessionState> {
        self.console.println(RELOAD_WARNING)?;
        let Some(answer) = self.console.prompt(RELOAD_PROMPT)? else {
            return Ok(SessionState::Exit);
        };

        if answer.trim().eq_ignore_ascii_case("yes") {
            self.console.println("reloading...\n")?;
            match self.repo.load() {
                Ok(store) => self.store = store,
                Err(err) => {
                    self.report_load_error(&err)?;
                    return Ok(SessionState::MenuWait);
                }
            }
        } else {
            debug!("event=inventory_reload module=session status=canceled");
            if self.console.prompt(RELOAD_CANCELED_PROMPT)?.is_none() {
                return Ok(SessionState::Exit);
            }
        }

        self.console.show_inventory(&self.store)?;
        Ok(SessionState::MenuWait)
    }

    fn add(&mut self) -> io::Result<SessionState> {
        let Some(id_text) = self.console.prompt("Enter ID: ")? else {
            return Ok(SessionState::Exit);
        };
        let Some(title) = self.console.prompt("What is the CD's title? ")? else {
            return Ok(SessionState::Exit);
        };
        let Some(artist) = self.console.prompt("What is the Artist's name? ")? else {
            return Ok(SessionState::Exit);
        };

        match table_ops::insert_with_policy(
            &id_text,
            title.trim(),
            artist.trim(),
            &mut self.store,
            self.id_policy,
        ) {
            Ok(_) => self.console.show_inventory(&self.store)?,
            Err(err) => self.report_table_error(&err)?,
        }
        Ok(SessionState::MenuWait)
    }

    fn delete(&mut self) -> io::Result<SessionState> {
        self.console.show_inventory(&self.store)?;
        let Some(id_text) = self.console.prompt("Which ID would you like to delete? ")? else {
            return Ok(SessionState::Exit);
        };

        match table_ops::remove_by_id(&id_text, &mut self.store) {
            Ok(RemoveOutcome::Removed(_)) => {
                self.console.println("The CD was removed")?;
                self.console.show_inventory(&self.store)?;
            }
            Ok(RemoveOutcome::NotFound(_)) => {
                self.console.println("Could not find this CD!")?;
                self.console.show_inventory(&self.store)?;
            }
            Err(err) => self.report_table_error(&err)?,
        }
        Ok(SessionState::MenuWait)
    }

    fn save(&mut self) -> io::Result<SessionState> {
        self.console.show_inventory(&self.store)?;
        let Some(answer) = self.console.prompt(SAVE_PROMPT)? else {
            return Ok(SessionState::Exit);
        };

        if answer.trim() == "y" {
            match self.repo.save(&self.store) {
                Ok(()) => self.console.println("The inventory was saved to file.")?,
                Err(err) => self.console.report(SAVE_FAILED_HEADING, &err)?,
            }
        } else if self.console.prompt(SAVE_CANCELED_PROMPT)?.is_none() {
            return Ok(SessionState::Exit);
        }
        Ok(SessionState::MenuWait)
    }

    fn report_load_error(&mut self, err: &StoreError) -> io::Result<()> {
        let heading = if err.is_not_found() {
            MISSING_FILE_HEADING
        } else {
            GENERAL_ERROR_HEADING
        };
        self.console.report(heading, err)
    }

    fn report_table_error(&mut self, err: &TableError) -> io::Result<()> {
        let heading = match err {
            TableError::InvalidId { .. } => INVALID_ID_HEADING,
            TableError::DuplicateId(_) => DUPLICATE_ID_HEADING,
        };
        self.console.report(heading, err)
    }
}
