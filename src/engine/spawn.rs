use std::io;
use std::os::fd::OwnedFd;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::process::{Child, Command, Stdio};

use thiserror::Error;

use crate::parser::Token;
use crate::signals;

use super::error::ShellError;

// ── Stream bindings ────────────────────────────────────────────────────────

/// Where a spawned process reads its input or writes its output.
///
/// A `Handle` is consumed by the spawn on every path, success or failure, so
/// descriptors cannot leak or be closed twice.
#[derive(Debug)]
pub enum StreamBinding {
    /// Inherit the interpreter's own standard stream.
    Inherit,
    /// A specific open descriptor, moved into the child.
    Handle(OwnedFd),
}

// ── Outcomes ───────────────────────────────────────────────────────────────

/// What became of one spawned process.
///
/// `AbnormalExit` means the target program could not be located or started;
/// it is indistinguishable here from the interpreter-side half of that
/// failure, and a program that did run never surfaces its own exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Success,
    SpawnFailure,
    AbnormalExit,
}

impl ProcessOutcome {
    pub fn into_result(self) -> Result<(), ShellError> {
        match self {
            ProcessOutcome::Success => Ok(()),
            other => Err(ShellError::Process(other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum SpawnError {
    /// The target program could not be started.
    #[error("could not start program: {0}")]
    Launch(io::Error),
    /// Process or descriptor resources were unavailable.
    #[error("could not create process: {0}")]
    Fork(io::Error),
}

impl SpawnError {
    pub fn outcome(&self) -> ProcessOutcome {
        match self {
            SpawnError::Launch(_) => ProcessOutcome::AbnormalExit,
            SpawnError::Fork(_) => ProcessOutcome::SpawnFailure,
        }
    }
}

// ── The spawner seam ───────────────────────────────────────────────────────

/// The single point where OS processes are created. Everything above it
/// (validator, pipeline assembly, repeat control) is testable against a fake
/// implementation.
pub trait Spawner {
    type Child;

    /// Start one process with the given stream bindings, without waiting.
    fn spawn(
        &mut self,
        argv: &[Token],
        input: StreamBinding,
        output: StreamBinding,
        cwd: &Path,
    ) -> Result<Self::Child, SpawnError>;

    /// Block until the child finishes.
    fn wait(&mut self, child: Self::Child) -> ProcessOutcome;

    /// Spawn one process and block for its outcome.
    fn run(
        &mut self,
        argv: &[Token],
        input: StreamBinding,
        output: StreamBinding,
        cwd: &Path,
    ) -> ProcessOutcome {
        match self.spawn(argv, input, output, cwd) {
            Ok(child) => self.wait(child),
            Err(err) => err.outcome(),
        }
    }
}

/// The real spawner: `argv[0]` becomes the process image directly, never via
/// a secondary command shell.
pub struct OsSpawner;

impl Spawner for OsSpawner {
    type Child = Child;

    fn spawn(
        &mut self,
        argv: &[Token],
        input: StreamBinding,
        output: StreamBinding,
        cwd: &Path,
    ) -> Result<Child, SpawnError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| SpawnError::Launch(io::ErrorKind::NotFound.into()))?;

        let mut command = Command::new(program);
        command.args(args).current_dir(cwd);

        if let StreamBinding::Handle(fd) = input {
            command.stdin(Stdio::from(fd));
        }
        if let StreamBinding::Handle(fd) = output {
            // A redirected or piped process reports errors on the same
            // stream its output goes to.
            let err_fd = fd.try_clone().map_err(SpawnError::Fork)?;
            command.stdout(Stdio::from(fd));
            command.stderr(Stdio::from(err_fd));
        }

        unsafe {
            command.pre_exec(|| {
                signals::restore_default();
                Ok(())
            });
        }

        command.spawn().map_err(|err| match err.kind() {
            io::ErrorKind::NotFound
            | io::ErrorKind::PermissionDenied
            | io::ErrorKind::InvalidInput => SpawnError::Launch(err),
            _ => SpawnError::Fork(err),
        })
    }

    fn wait(&mut self, mut child: Child) -> ProcessOutcome {
        match child.wait() {
            Ok(_status) => ProcessOutcome::Success,
            Err(_) => ProcessOutcome::SpawnFailure,
        }
    }
}

// ── Test double ────────────────────────────────────────────────────────────
