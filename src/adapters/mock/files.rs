//! Fake file source serving canned step defaults.

use std::io::{Cursor, Read};

use crate::ports::files::FileSource;

/// Name of the canned, well-formed step defaults file.
pub const TEST_DEFAULTS: &str = "testDefaults.yml";

/// Name of the canned file whose content is not valid step defaults.
pub const TEST_DEFAULTS_INVALID: &str = "testDefaultsInvalid.yml";

fn canned_content(name: &str) -> &'static str {
    match name {
        TEST_DEFAULTS => "general:\n  testParam: testValue",
        TEST_DEFAULTS_INVALID => "invalid yaml",
        _ => "",
    }
}

/// Opens `name` from a fixed in-memory table.
///
/// [`TEST_DEFAULTS`] and [`TEST_DEFAULTS_INVALID`] have canned content; every
/// other name, including the empty string, opens as empty content.
///
/// # Errors
///
/// Never fails; the `Result` matches the [`FileSource`] signature.
pub fn open_file_mock(
    name: &str,
) -> Result<Box<dyn Read + Send>, Box<dyn std::error::Error + Send + Sync>> {
    Ok(Box::new(Cursor::new(canned_content(name).as_bytes())))
}

/// [`FileSource`] backed by [`open_file_mock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeFileSource;

impl FileSource for FakeFileSource {
    fn open(
        &self,
        name: &str,
    ) -> Result<Box<dyn Read + Send>, Box<dyn std::error::Error + Send + Sync>> {
        open_file_mock(name)
    }
}
