use std::env;
use std::path::PathBuf;

/// Interpreter-wide context. The working directory lives here instead of in
/// the OS-level process global: `cd` mutates it, `pwd` reads it, and every
/// spawned child receives it, so directory changes stay deterministic under
/// test.
pub struct ShellState {
    pub cwd: PathBuf,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            cwd: env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
        }
    }
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether the prompt loop keeps reading lines afterwards.
#[derive(Debug, PartialEq, Eq)]
pub enum ExecutionResult {
    KeepRunning,
    Exit,
}
