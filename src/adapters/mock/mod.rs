//! Recording test doubles for the process-execution ports.
//!
//! The runners record every invocation and resolve it against configured
//! stdout text and failures via [`crate::dispatch`]. Nothing is spawned.

pub mod exec;
pub mod execution;
pub mod files;
pub mod shell;

pub use exec::{ExecCall, ExecMockRunner};
pub use execution::MockExecution;
pub use files::{open_file_mock, FakeFileSource};
pub use shell::ShellMockRunner;

use std::io::{self, Write};

use crate::dispatch::{dispatch, Failure, ResponseMap};
use crate::error::DispatchError;

/// Dispatch `call` to the attached stdout, discarding output when none is set.
fn dispatch_to(
    stdout: &mut Option<Box<dyn Write + Send>>,
    call: &str,
    stdout_return: &ResponseMap<String>,
    should_fail_on_command: &ResponseMap<Failure>,
) -> Result<(), DispatchError> {
    let mut sink = io::sink();
    let out: &mut dyn Write = match stdout.as_mut() {
        Some(out) => &mut **out,
        None => &mut sink,
    };
    dispatch(call, stdout_return, should_fail_on_command, out)
}
