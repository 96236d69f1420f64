//! Command dispatch and handlers.

pub mod open;
pub mod run;
pub mod shell;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if the scenario cannot be loaded or the simulated
/// invocation fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    match command {
        Command::Run { scenario, json, exec, args } => {
            run::run(scenario.as_deref(), exec, args, *json)
        }
        Command::Shell { scenario, shell, json, script } => {
            shell::run(scenario.as_deref(), shell, script, *json)
        }
        Command::Open { name } => open::run(name),
    }
}
