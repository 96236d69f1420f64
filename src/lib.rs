//! Test doubles for executable and shell invocation.
//!
//! Orchestration code programs against the traits in [`ports`]; tests hand it
//! an [`ExecMockRunner`] or [`ShellMockRunner`] configured with stdout text
//! and failures keyed by exact command string or regular expression, then
//! inspect what was invoked.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod ports;
pub mod scenario;

pub use adapters::mock::{
    ExecCall, ExecMockRunner, FakeFileSource, MockExecution, ShellMockRunner,
};
pub use dispatch::{Failure, ResponseMap};
pub use error::DispatchError;
pub use output::CaptureBuffer;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    init_logging(cli.verbose);
    commands::dispatch(&cli.command)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("execmock=debug")
    } else {
        EnvFilter::new("execmock=warn")
    };
    // A subscriber may already be installed when embedded in tests.
    let _ =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_open() {
        let result = run(["execmock", "open", "testDefaults.yml"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["execmock", "unknown"]);
        assert!(result.is_err());
    }
}
