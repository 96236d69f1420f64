//! Handle to a program started in the background.

/// A running (or finished) background invocation.
pub trait Execution: Send + Sync {
    /// Terminates the program.
    ///
    /// # Errors
    ///
    /// Returns an error if the program could not be signalled.
    fn kill(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Blocks until the program exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the program exited unsuccessfully.
    fn wait(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
