//! Error types for the Othello CLI.

use std::error::Error;
use std::fmt;
use std::io;

use rustyline::error::ReadlineError;

/// Errors that end an interactive session.
///
/// Malformed coordinates or illegal moves are not errors: the turn loop
/// reports them and prompts again.
#[derive(Debug)]
pub enum CliError {
    /// I/O operation failed
    Io(io::Error),
    /// The line editor failed
    Readline(ReadlineError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(err) => write!(f, "IO error: {err}"),
            CliError::Readline(err) => write!(f, "Input error: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CliError::Io(err) => Some(err),
            CliError::Readline(err) => Some(err),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Readline(err)
    }
}

/// Convenience type alias for Results with CliError.
pub type Result<T> = std::result::Result<T, CliError>;
