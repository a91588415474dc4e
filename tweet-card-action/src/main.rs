// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: the action communicates through stdout/stderr
//   (workflow commands, diagnostics).
// - exit: signaling failure to the runner via the exit code is the contract.
// - unwrap_used/expect_used: panicking on unrecoverable errors is acceptable here.
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::exit,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod action;
mod cli;
mod event;

use std::process::ExitCode;

fn main() -> ExitCode {
    let result = if action::running_in_actions() {
        action::run()
    } else {
        cli::run()
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            // Single top-level handler for unrecovered faults: log the
            // fault and fail the invocation with its own message.
            eprintln!("{err:#}");
            if action::running_in_actions() {
                action::issue_error(&format!("{err:#}"));
            }
            ExitCode::FAILURE
        }
    }
}
