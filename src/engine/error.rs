use std::io;

use thiserror::Error;

use crate::builtins::registry::BuiltinError;
use crate::parser::SyntaxError;

use super::spawn::{ProcessOutcome, SpawnError};

/// Everything that can go wrong while executing one segment. All variants
/// are recoverable: the dispatch loop reports a single fixed message, drops
/// the rest of the line, and the prompt loop continues.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("syntax: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("{0}")]
    Builtin(#[from] BuiltinError),
    #[error("{0}")]
    Spawn(#[from] SpawnError),
    #[error("process could not be run")]
    Process(ProcessOutcome),
    #[error("could not create pipe: {0}")]
    Pipe(io::Error),
    #[error("could not open redirection target: {0}")]
    Redirect(io::Error),
    #[error("loop: count is not a string of decimal digits")]
    LoopCount,
    #[error("loop: missing command")]
    LoopCommand,
}
