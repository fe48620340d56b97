use nix::sys::signal::{SigHandler, Signal, signal};

/// The interpreter itself survives Ctrl+C / Ctrl+\; rustyline re-prompts
/// instead.
pub fn init() {
    unsafe {
        let _ = signal(Signal::SIGINT, SigHandler::SigIgn);
        let _ = signal(Signal::SIGQUIT, SigHandler::SigIgn);
    }
}

/// Give spawned children the default dispositions back. Called between fork
/// and exec, so only async-signal-safe calls are allowed here.
pub fn restore_default() {
    unsafe {
        let _ = signal(Signal::SIGINT, SigHandler::SigDfl);
        let _ = signal(Signal::SIGQUIT, SigHandler::SigDfl);
    }
}
