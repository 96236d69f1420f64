//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `execmock`.
#[derive(Debug, Parser)]
#[command(name = "execmock", version, about = "Simulate command execution from a scenario file")]
pub struct Cli {
    /// Log each recorded call and matched pattern to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Simulate running an executable directly.
    Run {
        /// Scenario file with stdout and failure mappings.
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Print the recorded calls as JSON after the output.
        #[arg(long)]
        json: bool,
        /// Executable to simulate.
        exec: String,
        /// Arguments passed to the executable.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Simulate running a script through a shell.
    Shell {
        /// Scenario file with stdout and failure mappings.
        #[arg(long)]
        scenario: Option<PathBuf>,
        /// Shell program to record.
        #[arg(long, default_value = "sh")]
        shell: String,
        /// Print the recorded calls as JSON after the output.
        #[arg(long)]
        json: bool,
        /// Script to simulate.
        script: String,
    },
    /// Print the canned content the fake file source serves for a name.
    Open {
        /// File name to look up.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_run_with_hyphenated_args() {
        let cli = Cli::parse_from(["execmock", "run", "--scenario", "s.yml", "ls", "-la", "/tmp"]);
        match cli.command {
            Command::Run { scenario, json, exec, args } => {
                assert_eq!(scenario.unwrap().to_str(), Some("s.yml"));
                assert!(!json);
                assert_eq!(exec, "ls");
                assert_eq!(args, vec!["-la", "/tmp"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn shell_defaults_to_sh() {
        let cli = Cli::parse_from(["execmock", "shell", "echo hi"]);
        assert!(matches!(cli.command, Command::Shell { ref shell, .. } if shell == "sh"));
    }

    #[test]
    fn parses_open_and_verbose() {
        let cli = Cli::parse_from(["execmock", "-v", "open", "testDefaults.yml"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Open { ref name } if name == "testDefaults.yml"));
    }
}
