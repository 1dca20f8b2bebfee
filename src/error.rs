use std::io;
use thiserror::Error;

/// Every command resolves to one of two user-visible failure lines.
///
/// `InvalidInput` covers malformed requests: a missing required argument, a
/// wrong entry kind (file where a directory was expected and vice versa), an
/// unrecognized command or `os` sub-flag, or a wrong suffix handed to
/// `decompress`. It is always raised before any mutating filesystem call.
///
/// `OperationFailed` covers errors from the host itself. The underlying
/// `io::Error` is kept as the error source but never printed: the outcome
/// line stays terse.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid input")]
    InvalidInput,
    #[error("Operation failed")]
    OperationFailed(#[from] io::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;
