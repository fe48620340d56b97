use std::fs::{File, OpenOptions};
use std::io;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use crate::parser::{Redirect, Segment};

use super::error::ShellError;
use super::spawn::{Spawner, StreamBinding};
use super::state::ShellState;

/// Open the target of an output redirection: truncate-create-write,
/// rw-r--r--.
pub fn open_redirect_target(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(path)
}

/// Run a redirected (non-piped) segment: one command with inherited stdin
/// and its output routed to the target file. An open failure reports without
/// spawning anything; the file is closed in the parent once the spawn has
/// consumed it.
pub fn run<S: Spawner>(
    segment: &Segment,
    redirect: &Redirect,
    state: &ShellState,
    spawner: &mut S,
) -> Result<(), ShellError> {
    let path = state.cwd.join(&segment.tokens[redirect.target]);
    let file = open_redirect_target(&path).map_err(ShellError::Redirect)?;
    let argv = &segment.tokens[..redirect.op];
    spawner
        .run(
            argv,
            StreamBinding::Inherit,
            StreamBinding::Handle(file.into()),
            &state.cwd,
        )
        .into_result()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use super::super::spawn::testing::FakeSpawner;
    use super::*;
    use crate::parser::{inspect, parse_line};

    fn segment(line: &str) -> (Segment, Redirect) {
        let segment = parse_line(line).remove(0);
        let verdict = inspect(&segment).unwrap();
        let redirect = verdict.redirect.unwrap();
        (segment, redirect)
    }

    #[test]
    fn target_is_created_with_expected_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out");
        open_redirect_target(&path).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn target_is_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out");
        fs::write(&path, "previous contents").unwrap();
        open_redirect_target(&path).unwrap();
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn command_is_sliced_at_the_operator_and_output_bound() {
        let dir = tempfile::tempdir().unwrap();
        let state = ShellState {
            cwd: dir.path().to_path_buf(),
        };
        let (segment, redirect) = segment("tool arg > out");
        let mut spawner = FakeSpawner::default();
        run(&segment, &redirect, &state, &mut spawner).unwrap();

        assert_eq!(spawner.calls.len(), 1);
        assert_eq!(spawner.calls[0].argv, ["tool", "arg"]);
        assert!(!spawner.calls[0].input_is_handle);
        assert!(spawner.calls[0].output_is_handle);
        assert!(dir.path().join("out").exists());
    }

    #[test]
    fn open_failure_reports_without_spawning() {
        let dir = tempfile::tempdir().unwrap();
        let state = ShellState {
            cwd: dir.path().to_path_buf(),
        };
        let (segment, redirect) = segment("tool > missing-dir/out");
        let mut spawner = FakeSpawner::default();
        let err = run(&segment, &redirect, &state, &mut spawner).unwrap_err();

        assert!(matches!(err, ShellError::Redirect(_)));
        assert!(spawner.calls.is_empty());
    }
}
