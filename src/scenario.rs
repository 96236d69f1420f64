//! YAML scenarios describing how the mock runners should respond.
//!
//! ```yaml
//! stdout:
//!   "go test": "ok\n"
//! fail:
//!   "rm .*": "permission denied"
//! ```
//!
//! Entry order in the file is the order patterns are tried.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::mock::{ExecMockRunner, ShellMockRunner};
use crate::dispatch::{Failure, ResponseMap};

/// Configured responses for a mock runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Pattern to stdout text.
    #[serde(default)]
    pub stdout: ResponseMap<String>,
    /// Pattern to failure message.
    #[serde(default)]
    pub fail: ResponseMap<String>,
}

impl Scenario {
    /// Parses a scenario from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid scenario document.
    pub fn from_yaml(text: &str) -> Result<Self, String> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| format!("Failed to parse scenario: {e}"))
    }

    /// Loads a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scenario file {}: {e}", path.display()))?;
        Self::from_yaml(&content).map_err(|e| format!("{}: {e}", path.display()))
    }

    fn failures(&self) -> ResponseMap<Failure> {
        self.fail
            .iter()
            .map(|(pattern, msg)| (pattern.clone(), Failure::from(msg.as_str())))
            .collect()
    }

    /// Installs the scenario's responses on an [`ExecMockRunner`], replacing
    /// any configured before.
    pub fn apply_to_exec(&self, runner: &mut ExecMockRunner) {
        runner.stdout_return = self.stdout.clone();
        runner.should_fail_on_command = self.failures();
    }

    /// Installs the scenario's responses on a [`ShellMockRunner`], replacing
    /// any configured before.
    pub fn apply_to_shell(&self, runner: &mut ShellMockRunner) {
        runner.stdout_return = self.stdout.clone();
        runner.should_fail_on_command = self.failures();
    }
}
