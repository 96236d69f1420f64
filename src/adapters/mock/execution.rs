//! Background execution handle returned by the mock runner.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::ports::execution::Execution;

/// Stand-in for a background process.
///
/// Clones share the same killed flag, so the handle returned to the code under
/// test and the copy kept in the call record observe the same state. Nothing
/// actually runs: `kill` only flips the flag and `wait` returns immediately.
#[derive(Debug, Clone, Default)]
pub struct MockExecution {
    killed: Arc<AtomicBool>,
}

impl MockExecution {
    /// Creates a handle that has not been killed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once [`Execution::kill`] has been called on any clone.
    #[must_use]
    pub fn is_killed(&self) -> bool {
        self.killed.load(Ordering::SeqCst)
    }
}

impl Execution for MockExecution {
    fn kill(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.killed.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn wait(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

impl Serialize for MockExecution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("MockExecution", 1)?;
        state.serialize_field("killed", &self.is_killed())?;
        state.end()
    }
}
