//! Response dispatch shared by the mock runners.
//!
//! A call string (executable plus space-joined arguments, or a raw shell
//! script) is resolved against two mappings: one from match-pattern to stdout
//! text, one from match-pattern to a configured failure. A key matches when it
//! equals the call string exactly; otherwise it is compiled as a regular
//! expression and searched for anywhere in the call string.
//!
//! Both mappings are iterated in insertion order. Every matching stdout entry
//! is written; only the first matching failure is returned.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use indexmap::IndexMap;
use regex::Regex;
use tracing::debug;

use crate::error::DispatchError;

/// Match-pattern to configured value, iterated in insertion order.
pub type ResponseMap<V> = IndexMap<String, V>;

/// A failure configured for a command, returned each time the command matches.
///
/// Wraps any error behind an `Arc` so the same configured value can be handed
/// out repeatedly.
#[derive(Clone)]
pub struct Failure(Arc<dyn std::error::Error + Send + Sync>);

impl Failure {
    /// Wraps an error (or anything convertible into a boxed error, such as a
    /// message string) as a configured failure.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self(Arc::from(err.into()))
    }

    /// Returns `true` if both values are clones of the same configured failure.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The wrapped error.
    #[must_use]
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl fmt::Debug for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Failure").field(&self.0).finish()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for Failure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<&str> for Failure {
    fn from(msg: &str) -> Self {
        Self::new(msg)
    }
}

impl From<String> for Failure {
    fn from(msg: String) -> Self {
        Self::new(msg)
    }
}

/// Resolves `call` against the configured mappings.
///
/// Stdout entries are processed first: the value of every matching entry is
/// written to `out`. Failure entries are processed next and the first match is
/// returned. An empty mapping has no effect. A failed write does not stop the
/// failure pass.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidPattern`] as soon as a key that is not an
/// exact match fails to compile, [`DispatchError::Configured`] for the first
/// matching failure, and otherwise [`DispatchError::Output`] with the first
/// error from writing to `out`.
pub fn dispatch(
    call: &str,
    stdout_return: &ResponseMap<String>,
    should_fail_on_command: &ResponseMap<Failure>,
    out: &mut dyn Write,
) -> Result<(), DispatchError> {
    let mut write_error = None;
    for (pattern, text) in stdout_return {
        if matches(pattern, call)? {
            debug!(call, pattern = %pattern, "writing configured stdout");
            if let Err(err) = out.write_all(text.as_bytes()) {
                write_error.get_or_insert(err);
            }
        }
    }

    for (pattern, failure) in should_fail_on_command {
        if matches(pattern, call)? {
            debug!(call, pattern = %pattern, "returning configured failure");
            return Err(DispatchError::Configured(failure.clone()));
        }
    }

    match write_error {
        Some(err) => Err(DispatchError::Output(err)),
        None => Ok(()),
    }
}

/// Returns whether `pattern` selects `call`.
///
/// Exact equality wins without compiling the pattern; otherwise the pattern is
/// an unanchored regular expression. Classes such as `\d`, `\w` and `\s`
/// are Unicode-aware; prefix `(?-u)` to restrict them to ASCII.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidPattern`] if the pattern is not equal to
/// `call` and is not a valid regular expression.
pub fn matches(pattern: &str, call: &str) -> Result<bool, DispatchError> {
    if pattern == call {
        return Ok(true);
    }
    let re = Regex::new(pattern).map_err(|source| DispatchError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Ok(re.is_match(call))
}
