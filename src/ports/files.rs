//! File source port for opening named content.

use std::io::Read;

/// Opens named content for reading.
///
/// Abstracting file access lets configuration loaders be tested against
/// canned content without touching the real disk.
pub trait FileSource: Send + Sync {
    /// Opens `name` and returns a reader over its content.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be opened.
    fn open(
        &self,
        name: &str,
    ) -> Result<Box<dyn Read + Send>, Box<dyn std::error::Error + Send + Sync>>;
}
