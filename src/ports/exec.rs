//! Executable runner port for invoking programs directly.

use std::io::Write;

use super::execution::Execution;

/// Runs executables directly, without a shell.
///
/// Orchestration code takes a `&mut dyn ExecRunner` so tests can substitute a
/// recording double for real process execution.
pub trait ExecRunner: Send {
    /// Sets the working directory for subsequent invocations.
    fn set_dir(&mut self, dir: &str);

    /// Adds `KEY=value` entries to the environment of subsequent invocations.
    fn set_env(&mut self, env: &[String]);

    /// Sets the destination for the standard output of invoked programs.
    fn stdout(&mut self, out: Box<dyn Write + Send>);

    /// Sets the destination for the standard error of invoked programs.
    fn stderr(&mut self, err: Box<dyn Write + Send>);

    /// Runs `executable` with `params` and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be run or does not succeed.
    fn run_executable(
        &mut self,
        executable: &str,
        params: &[&str],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Starts `executable` with `params` without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started.
    fn run_executable_in_background(
        &mut self,
        executable: &str,
        params: &[&str],
    ) -> Result<Box<dyn Execution>, Box<dyn std::error::Error + Send + Sync>>;
}
