use crate::builtins::registry::{self, BuiltinError};
use crate::parser::{Segment, SyntaxVerdict, inspect};

use super::error::ShellError;
use super::pipeline;
use super::redirect;
use super::repeat;
use super::spawn::{Spawner, StreamBinding};
use super::state::{ExecutionResult, ShellState};

/// The one message the interpreter shows for any recoverable failure.
pub(crate) const ERROR_MESSAGE: &str = "rill: an error has occurred";

enum Flow {
    Continue,
    Exit,
}

// ── Dispatch loop ──────────────────────────────────────────────────────────

/// Execute the segments of one input line in order. A failing segment is
/// reported once and the remaining segments of the line are skipped; effects
/// of segments that already completed persist.
pub fn run_segments<S: Spawner>(
    segments: &[Segment],
    state: &mut ShellState,
    spawner: &mut S,
) -> ExecutionResult {
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        match run_segment(segment, state, spawner) {
            Ok(Flow::Exit) => return ExecutionResult::Exit,
            Ok(Flow::Continue) => {}
            Err(_) => {
                eprintln!("{ERROR_MESSAGE}");
                break;
            }
        }
    }
    ExecutionResult::KeepRunning
}

fn run_segment<S: Spawner>(
    segment: &Segment,
    state: &mut ShellState,
    spawner: &mut S,
) -> Result<Flow, ShellError> {
    let verdict = inspect(segment)?;
    match segment.tokens[0].as_str() {
        "exit" if segment.tokens.len() == 1 => Ok(Flow::Exit),
        "exit" => Err(BuiltinError::Arity { name: "exit" }.into()),
        "loop" => {
            repeat::run(segment, state, spawner)?;
            Ok(Flow::Continue)
        }
        _ => {
            run_classified(segment, &verdict, state, spawner)?;
            Ok(Flow::Continue)
        }
    }
}

/// Route one classified segment to its executor. Also re-entered by the
/// repeat controller for the inner command, which is why `exit` and `loop`
/// are not handled here.
pub(crate) fn run_classified<S: Spawner>(
    segment: &Segment,
    verdict: &SyntaxVerdict,
    state: &mut ShellState,
    spawner: &mut S,
) -> Result<(), ShellError> {
    if verdict.has_pipe {
        pipeline::run(segment, verdict, state, spawner)
    } else if let Some(redirect) = &verdict.redirect {
        redirect::run(segment, redirect, state, spawner)
    } else if let Some(info) = registry::find_command(segment.tokens[0].as_str()) {
        (info.run)(&segment.tokens[1..], state)?;
        Ok(())
    } else {
        spawner
            .run(
                &segment.tokens,
                StreamBinding::Inherit,
                StreamBinding::Inherit,
                &state.cwd,
            )
            .into_result()
    }
}
