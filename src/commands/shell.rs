//! `execmock shell` command.

use std::path::Path;

use crate::adapters::mock::ShellMockRunner;
use crate::output::CaptureBuffer;
use crate::ports::ShellRunner;
use crate::scenario::Scenario;

/// Simulate `shell` running `script` against the scenario and print the outcome.
///
/// # Errors
///
/// Returns an error string if the scenario cannot be loaded, the calls cannot
/// be serialized, or the invocation fails.
pub fn run(scenario: Option<&Path>, shell: &str, script: &str, json: bool) -> Result<(), String> {
    let mut runner = ShellMockRunner::new();
    if let Some(path) = scenario {
        Scenario::load(path)?.apply_to_shell(&mut runner);
    }
    let buffer = CaptureBuffer::new();
    runner.stdout(Box::new(buffer.clone()));

    let result = runner.run_shell(shell, script);

    print!("{}", buffer.contents());
    if json {
        let calls = serde_json::json!({ "shell": runner.shell, "calls": runner.calls });
        let calls = serde_json::to_string_pretty(&calls)
            .map_err(|e| format!("Failed to serialize calls: {e}"))?;
        println!("{calls}");
    }
    result.map_err(|e| e.to_string())
}
