//! Recording double for the `ExecRunner` port.

use std::io::Write;

use serde::Serialize;
use tracing::trace;

use super::dispatch_to;
use super::execution::MockExecution;
use crate::dispatch::{Failure, ResponseMap};
use crate::ports::exec::ExecRunner;
use crate::ports::execution::Execution;

/// One recorded call to [`ExecMockRunner`].
#[derive(Debug, Clone, Serialize)]
pub struct ExecCall {
    /// The executable that was invoked.
    pub exec: String,
    /// Arguments, in order.
    pub params: Vec<String>,
    /// Whether the call went through `run_executable_in_background`.
    #[serde(rename = "async")]
    pub is_async: bool,
    /// Handle returned for background calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution: Option<MockExecution>,
}

impl ExecCall {
    /// The call string matched against configured patterns: the executable
    /// followed by its arguments, separated by single spaces.
    #[must_use]
    pub fn command_line(&self) -> String {
        std::iter::once(self.exec.as_str())
            .chain(self.params.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Records direct executable invocations and replies from configured mappings.
///
/// Populate [`stdout_return`](Self::stdout_return) and
/// [`should_fail_on_command`](Self::should_fail_on_command) before handing the
/// runner to the code under test, then inspect [`calls`](Self::calls),
/// [`dir`](Self::dir) and [`env`](Self::env).
#[derive(Default)]
pub struct ExecMockRunner {
    /// Every directory passed to `set_dir`, in order.
    pub dir: Vec<String>,
    /// Every environment entry passed to `set_env`, in order.
    pub env: Vec<String>,
    /// Recorded invocations, in call order.
    pub calls: Vec<ExecCall>,
    /// Pattern to text written to stdout when a call matches.
    pub stdout_return: ResponseMap<String>,
    /// Pattern to failure returned when a call matches.
    pub should_fail_on_command: ResponseMap<Failure>,
    stdout: Option<Box<dyn Write + Send>>,
    stderr: Option<Box<dyn Write + Send>>,
}

impl ExecMockRunner {
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

    fn record(
        &mut self,
        executable: &str,
        params: &[&str],
        execution: Option<MockExecution>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let call = ExecCall {
            exec: executable.to_string(),
            params: params.iter().map(ToString::to_string).collect(),
            is_async: execution.is_some(),
            execution,
        };
        let line = call.command_line();
        trace!(call = %line, is_async = call.is_async, "recorded executable call");
        self.calls.push(call);

        dispatch_to(&mut self.stdout, &line, &self.stdout_return, &self.should_fail_on_command)?;
        Ok(())
    }
}

impl ExecRunner for ExecMockRunner {
    fn set_dir(&mut self, dir: &str) {
        self.dir.push(dir.to_string());
    }

    fn set_env(&mut self, env: &[String]) {
        self.env.extend_from_slice(env);
    }

    fn stdout(&mut self, out: Box<dyn Write + Send>) {
        self.stdout = Some(out);
    }

    fn stderr(&mut self, err: Box<dyn Write + Send>) {
        self.stderr = Some(err);
    }

    fn run_executable(
        &mut self,
        executable: &str,
        params: &[&str],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.record(executable, params, None)
    }

    fn run_executable_in_background(
        &mut self,
        executable: &str,
        params: &[&str],
    ) -> Result<Box<dyn Execution>, Box<dyn std::error::Error + Send + Sync>> {
        let execution = MockExecution::new();
        self.record(executable, params, Some(execution.clone()))?;
        Ok(Box::new(execution))
    }
}
