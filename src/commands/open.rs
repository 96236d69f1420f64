//! `execmock open` command.

use std::io::Read;

use crate::adapters::mock::open_file_mock;

/// Print the fake file source content for `name`.
///
/// # Errors
///
/// Returns an error string if the content cannot be read.
pub fn run(name: &str) -> Result<(), String> {
    let mut content = String::new();
    open_file_mock(name)
        .and_then(|mut reader| Ok(reader.read_to_string(&mut content)?))
        .map_err(|e| format!("Failed to open {name}: {e}"))?;
    if !content.is_empty() {
        println!("{content}");
    }
    Ok(())
}
