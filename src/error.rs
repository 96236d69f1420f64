//! Errors produced while dispatching a simulated invocation.

use crate::dispatch::Failure;

/// Why a simulated invocation did not succeed.
///
/// A configured failure and a broken match pattern both surface here; callers
/// cannot tell "the command was told to fail" apart from "the test is
/// misconfigured" without matching on the variant.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// A failure explicitly configured for a matching pattern.
    #[error(transparent)]
    Configured(Failure),

    /// A mapping key that is not an exact match and does not compile as a regex.
    #[error("invalid match pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The offending mapping key.
        pattern: String,
        /// The regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// Writing configured stdout text to the attached stream failed.
    #[error("failed to write configured output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_failure_displays_as_inner_message() {
        let err = DispatchError::Configured(Failure::from("exit status 1"));
        assert_eq!(err.to_string(), "exit status 1");
    }

    #[test]
    fn invalid_pattern_names_the_key() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = DispatchError::InvalidPattern { pattern: "[".into(), source };
        let msg = err.to_string();
        assert!(msg.contains("`[`"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
