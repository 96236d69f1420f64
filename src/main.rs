//! Binary entrypoint for the `execmock` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match execmock::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
