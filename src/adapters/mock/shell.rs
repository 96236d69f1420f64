//! Recording double for the `ShellRunner` port.

use std::io::Write;

use tracing::trace;

use super::dispatch_to;
use crate::dispatch::{Failure, ResponseMap};
use crate::ports::shell::ShellRunner;

/// Records shell invocations and replies from configured mappings.
///
/// The script is matched verbatim against the configured patterns.
#[derive(Default)]
pub struct ShellMockRunner {
    /// The last directory passed to `set_dir`.
    pub dir: String,
    /// Every environment entry added, in order.
    pub env: Vec<String>,
    /// Scripts run, in call order.
    pub calls: Vec<String>,
    /// Shell programs used, parallel to `calls`.
    pub shell: Vec<String>,
    /// Pattern to text written to stdout when a script matches.
    pub stdout_return: ResponseMap<String>,
    /// Pattern to failure returned when a script matches.
    pub should_fail_on_command: ResponseMap<Failure>,
    stdout: Option<Box<dyn Write + Send>>,
    stderr: Option<Box<dyn Write + Send>>,
}

impl ShellMockRunner {
    /// Creates a runner with no configured responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if a stderr destination has been attached.
    #[must_use]
    pub fn has_stderr(&self) -> bool {
        self.stderr.is_some()
    }
}

impl ShellRunner for ShellMockRunner {
    fn set_dir(&mut self, dir: &str) {
        self.dir = dir.to_string();
    }

    fn set_env(&mut self, env: &[String]) {
        self.env.extend_from_slice(env);
    }

    fn add_to_env(&mut self, env: &[String]) {
        self.env.extend_from_slice(env);
    }

    fn stdout(&mut self, out: Box<dyn Write + Send>) {
        self.stdout = Some(out);
    }

    fn stderr(&mut self, err: Box<dyn Write + Send>) {
        self.stderr = Some(err);
    }

    fn run_shell(
        &mut self,
        shell: &str,
        script: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        trace!(shell, script, "recorded shell call");
        self.shell.push(shell.to_string());
        self.calls.push(script.to_string());

        dispatch_to(&mut self.stdout, script, &self.stdout_return, &self.should_fail_on_command)?;
        Ok(())
    }
}
