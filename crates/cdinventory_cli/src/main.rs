//! Interactive CD inventory entry point.
//!
//! # Responsibility
//! - Bootstrap logging and default configuration.
//! - Hand stdin/stdout to the core session loop.

use cdinventory_core::{core_version, init_logging, FileRecordRepository, Session, SessionConfig};
use log::error;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = SessionConfig::default();
    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    println!("CD Inventory version={}", core_version());

    let repo = FileRecordRepository::new(config.data_file.clone());
    let stdin = io::stdin();
    let mut session = Session::new(repo, &config, stdin.lock(), io::stdout());

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=session_exit module=cli status=error error={}", err);
            eprintln!("terminal error: {err}");
            ExitCode::FAILURE
        }
    }
}
