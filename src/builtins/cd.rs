use crate::builtins::registry::{BuiltinError, CommandInfo};
use crate::engine::ShellState;

pub const COMMAND_INFO_CD: CommandInfo = CommandInfo {
    name: "cd",
    run: cd_runner,
};

pub const COMMAND_INFO_PWD: CommandInfo = CommandInfo {
    name: "pwd",
    run: pwd_runner,
};

fn cd_runner(args: &[String], state: &mut ShellState) -> Result<(), BuiltinError> {
    run(args, state)
}

fn pwd_runner(args: &[String], state: &mut ShellState) -> Result<(), BuiltinError> {
    if !args.is_empty() {
        return Err(BuiltinError::Arity { name: "pwd" });
    }
    pwd(state);
    Ok(())
}

/// Change the interpreter's working directory. Takes exactly one argument;
/// the target is resolved against the current context directory and must be
/// an existing directory. Only the explicit context moves, never the
/// OS-level process directory.
pub fn run(args: &[String], state: &mut ShellState) -> Result<(), BuiltinError> {
    let [path] = args else {
        return Err(BuiltinError::Arity { name: "cd" });
    };
    let resolved = state
        .cwd
        .join(path)
        .canonicalize()
        .map_err(|_| BuiltinError::NoSuchDir(path.clone()))?;
    if !resolved.is_dir() {
        return Err(BuiltinError::NoSuchDir(path.clone()));
    }
    state.cwd = resolved;
    Ok(())
}

/// Print the absolute context directory with a trailing newline.
pub fn pwd(state: &ShellState) {
    println!("{}", state.cwd.display());
}
