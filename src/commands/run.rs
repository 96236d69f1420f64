//! `execmock run` command.

use std::path::Path;

use crate::adapters::mock::ExecMockRunner;
use crate::output::CaptureBuffer;
use crate::ports::ExecRunner;
use crate::scenario::Scenario;

/// Simulate `exec args...` against the scenario and print the outcome.
///
/// # Errors
///
/// Returns an error string if the scenario cannot be loaded, the calls cannot
/// be serialized, or the invocation fails.
pub fn run(scenario: Option<&Path>, exec: &str, args: &[String], json: bool) -> Result<(), String> {
    let mut runner = ExecMockRunner::new();
    if let Some(path) = scenario {
        Scenario::load(path)?.apply_to_exec(&mut runner);
    }
    let buffer = CaptureBuffer::new();
    runner.stdout(Box::new(buffer.clone()));

    let params: Vec<&str> = args.iter().map(String::as_str).collect();
    let result = runner.run_executable(exec, &params);

    print!("{}", buffer.contents());
    if json {
        let calls = serde_json::to_string_pretty(&runner.calls)
            .map_err(|e| format!("Failed to serialize calls: {e}"))?;
        println!("{calls}");
    }
    result.map_err(|e| e.to_string())
}
