mod builtins;
mod engine;
mod parser;
mod signals;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use engine::{ExecutionResult, OsSpawner, ShellState};

const PROMPT: &str = "rill> ";

fn main() -> rustyline::Result<()> {
    signals::init();
    let mut rl = DefaultEditor::new()?;
    let mut state = ShellState::new();
    let mut spawner = OsSpawner;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                let segments = parser::parse_line(&line);
                if let ExecutionResult::Exit =
                    engine::run_segments(&segments, &mut state, &mut spawner)
                {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            // End of input terminates with success, same as `exit`.
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("rill: {err}");
                continue;
            }
        }
    }
    Ok(())
}
