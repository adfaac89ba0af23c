//! Binary entrypoint for the `tfattach` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match tfattach::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
