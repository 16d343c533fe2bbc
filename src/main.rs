//! Binary entrypoint for the `labkit` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match labkit::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
