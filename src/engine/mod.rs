mod error;
mod execution;
mod pipeline;
mod redirect;
mod repeat;
mod spawn;
mod state;

pub use error::ShellError;
pub use execution::run_segments;
pub use spawn::{OsSpawner, ProcessOutcome, Spawner, StreamBinding};
pub use state::{ExecutionResult, ShellState};
