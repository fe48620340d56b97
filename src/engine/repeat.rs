use crate::parser::{Segment, inspect};

use super::error::ShellError;
use super::execution;
use super::spawn::Spawner;
use super::state::ShellState;

/// `loop <N> <command...>`: re-run the inner command N times in strict
/// sequence.
///
/// The count must be a non-empty string of decimal digits (no sign); values
/// the numeric parse cannot hold are errors. The inner segment — everything
/// after the count — is classified on its own and dispatched through the
/// same router as a top-level segment, minus `exit` and nested `loop`. The
/// first failing iteration stops the loop; there is no partial success.
pub fn run<S: Spawner>(
    segment: &Segment,
    state: &mut ShellState,
    spawner: &mut S,
) -> Result<(), ShellError> {
    let count = segment
        .tokens
        .get(1)
        .filter(|tok| !tok.is_empty() && tok.chars().all(|c| c.is_ascii_digit()))
        .ok_or(ShellError::LoopCount)?
        .parse::<usize>()
        .map_err(|_| ShellError::LoopCount)?;

    let inner = Segment::new(segment.tokens[2..].to_vec());
    if inner.is_empty() {
        return Err(ShellError::LoopCommand);
    }
    let verdict = inspect(&inner)?;

    for _ in 0..count {
        execution::run_classified(&inner, &verdict, state, spawner)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::spawn::testing::FakeSpawner;
    use super::*;
    use crate::parser::parse_line;

    fn segment(line: &str) -> Segment {
        parse_line(line).remove(0)
    }

    fn state() -> ShellState {
        ShellState { cwd: "/".into() }
    }

    #[test]
    fn repeats_a_plain_command_n_times() {
        let mut spawner = FakeSpawner::default();
        run(&segment("loop 3 tool"), &mut state(), &mut spawner).unwrap();
        assert_eq!(spawner.calls.len(), 3);
        assert!(spawner.calls.iter().all(|c| c.argv == ["tool"]));
    }

    #[test]
    fn zero_count_runs_nothing() {
        let mut spawner = FakeSpawner::default();
        run(&segment("loop 0 tool"), &mut state(), &mut spawner).unwrap();
        assert!(spawner.calls.is_empty());
    }

    #[test]
    fn non_digit_count_is_rejected_without_spawning() {
        let mut spawner = FakeSpawner::default();
        let err = run(&segment("loop abc echo hi"), &mut state(), &mut spawner).unwrap_err();
        assert!(matches!(err, ShellError::LoopCount));
        assert!(spawner.calls.is_empty());
    }

    #[test]
    fn signed_count_is_rejected() {
        let mut spawner = FakeSpawner::default();
        let err = run(&segment("loop -2 tool"), &mut state(), &mut spawner).unwrap_err();
        assert!(matches!(err, ShellError::LoopCount));
    }

    #[test]
    fn missing_count_and_missing_command_are_rejected() {
        let mut spawner = FakeSpawner::default();
        assert!(matches!(
            run(&segment("loop"), &mut state(), &mut spawner),
            Err(ShellError::LoopCount)
        ));
        assert!(matches!(
            run(&segment("loop 3"), &mut state(), &mut spawner),
            Err(ShellError::LoopCommand)
        ));
        assert!(spawner.calls.is_empty());
    }

    #[test]
    fn first_failing_iteration_stops_the_loop() {
        let mut spawner = FakeSpawner {
            fail_program: Some("tool".to_string()),
            ..FakeSpawner::default()
        };
        let err = run(&segment("loop 5 tool"), &mut state(), &mut spawner).unwrap_err();
        assert!(matches!(err, ShellError::Spawn(_)));
        assert_eq!(spawner.calls.len(), 1);
    }

    #[test]
    fn inner_pipeline_is_rebuilt_every_iteration() {
        let mut spawner = FakeSpawner::default();
        run(&segment("loop 2 a | b"), &mut state(), &mut spawner).unwrap();
        assert_eq!(spawner.calls.len(), 4);
        assert_eq!(spawner.calls[0].argv, ["a"]);
        assert_eq!(spawner.calls[1].argv, ["b"]);
    }

    #[test]
    fn inner_builtin_threads_directory_state() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("a/a")).unwrap();
        let mut state = ShellState {
            cwd: dir.path().to_path_buf(),
        };
        let mut spawner = FakeSpawner::default();
        run(&segment("loop 2 cd a"), &mut state, &mut spawner).unwrap();

        assert_eq!(state.cwd, dir.path().join("a/a").canonicalize().unwrap());
        assert!(spawner.calls.is_empty());
    }
}
