use thiserror::Error;

use crate::builtins;
use crate::engine::ShellState;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    #[error("{name}: wrong number of arguments")]
    Arity { name: &'static str },
    #[error("cd: no such directory: {0}")]
    NoSuchDir(String),
}

pub type BuiltinRunner = fn(&[String], &mut ShellState) -> Result<(), BuiltinError>;

pub struct CommandInfo {
    pub name: &'static str,
    pub run: BuiltinRunner,
}

/// The builtins that run inside the interpreter when they head a plain
/// segment. `exit` and `loop` are dispatched before classification and are
/// not listed here; any of these names inside a pipeline or redirection runs
/// as an external command instead.
pub const BUILTINS: &[CommandInfo] = &[
    builtins::cd::COMMAND_INFO_CD,
    builtins::cd::COMMAND_INFO_PWD,
];

pub fn find_command(name: &str) -> Option<&'static CommandInfo> {
    BUILTINS.iter().find(|cmd| cmd.name == name)
}
