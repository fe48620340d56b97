use std::io;
use std::mem;

use crate::parser::{Segment, SyntaxVerdict};

use super::error::ShellError;
use super::redirect::open_redirect_target;
use super::spawn::{ProcessOutcome, Spawner, StreamBinding};
use super::state::ShellState;

/// Run a piped segment: K stages joined by K-1 unidirectional pipes, the
/// head reading inherited stdin and the tail writing to inherited stdout or
/// the redirect target.
///
/// All stages are spawned before any is waited on, so a stage that fills a
/// pipe buffer before its reader exists cannot wedge the chain. A spawn
/// failure stops further spawning; stages already running are not killed,
/// they are reaped, and the whole pipeline reports failure.
pub fn run<S: Spawner>(
    segment: &Segment,
    verdict: &SyntaxVerdict,
    state: &ShellState,
    spawner: &mut S,
) -> Result<(), ShellError> {
    let stages = segment.stages(verdict);
    let Some((last, head)) = stages.split_last() else {
        return Ok(());
    };

    let sink = match &verdict.redirect {
        Some(redirect) => {
            let path = state.cwd.join(&segment.tokens[redirect.target]);
            let file = open_redirect_target(&path).map_err(ShellError::Redirect)?;
            StreamBinding::Handle(file.into())
        }
        None => StreamBinding::Inherit,
    };

    let mut children = Vec::with_capacity(stages.len());
    let mut source = StreamBinding::Inherit;

    for stage in head {
        let (reader, writer) = match io::pipe() {
            Ok(ends) => ends,
            Err(err) => {
                reap(spawner, children);
                return Err(ShellError::Pipe(err));
            }
        };
        let input = mem::replace(&mut source, StreamBinding::Handle(reader.into()));
        match spawner.spawn(stage.argv, input, StreamBinding::Handle(writer.into()), &state.cwd) {
            Ok(child) => children.push(child),
            Err(err) => {
                reap(spawner, children);
                return Err(err.into());
            }
        }
    }

    match spawner.spawn(last.argv, source, sink, &state.cwd) {
        Ok(child) => children.push(child),
        Err(err) => {
            reap(spawner, children);
            return Err(err.into());
        }
    }

    let mut outcome = ProcessOutcome::Success;
    for child in children {
        let waited = spawner.wait(child);
        if waited != ProcessOutcome::Success {
            outcome = waited;
        }
    }
    outcome.into_result()
}

/// Stages spawned before a failure keep running to completion; collect them
/// without killing.
fn reap<S: Spawner>(spawner: &mut S, children: Vec<S::Child>) {
    for child in children {
        let _ = spawner.wait(child);
    }
}
