//! Shell runner port for running scripts through a shell program.

use std::io::Write;

/// Runs command strings through a shell such as `sh` or `bash`.
pub trait ShellRunner: Send {
    /// Sets the working directory for subsequent scripts.
    fn set_dir(&mut self, dir: &str);

    /// Adds `KEY=value` entries to the environment of subsequent scripts.
    fn set_env(&mut self, env: &[String]);

    /// Appends `KEY=value` entries to the environment already configured.
    fn add_to_env(&mut self, env: &[String]);

    /// Sets the destination for the standard output of scripts.
    fn stdout(&mut self, out: Box<dyn Write + Send>);

    /// Sets the destination for the standard error of scripts.
    fn stderr(&mut self, err: Box<dyn Write + Send>);

    /// Runs `script` with the `shell` program and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be run or the script fails.
    fn run_shell(
        &mut self,
        shell: &str,
        script: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
