//! Error types for the lox driver.

use rustyline::error::ReadlineError;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Command line usage error (EX_USAGE)
pub const EX_USAGE: u8 = 64;
/// Input data was malformed (EX_DATAERR)
pub const EX_DATAERR: u8 = 65;
/// Input file missing or unreadable (EX_NOINPUT)
pub const EX_NOINPUT: u8 = 66;
/// Internal failure (EX_SOFTWARE)
pub const EX_SOFTWARE: u8 = 70;

#[derive(Error, Debug)]
pub enum CliError {
    /// Script file could not be read
    #[error("Error reading file {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },

    /// Writing tokens or diagnostics failed
    #[error("Error writing output: {0}")]
    Output(#[from] io::Error),

    /// Prompt could not be created or read
    #[error("Prompt error: {0}")]
    Readline(#[from] ReadlineError),
}

impl CliError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Read { .. } => ExitCode::from(EX_NOINPUT),
            CliError::Output(_) | CliError::Readline(_) => ExitCode::from(EX_SOFTWARE),
        }
    }
}
