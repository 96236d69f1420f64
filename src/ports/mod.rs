//! Port traits defining the process-execution boundary.
//!
//! Orchestration code depends on these traits rather than on real process
//! spawning, so tests can swap in the doubles from `adapters::mock`.

pub mod exec;
pub mod execution;
pub mod files;
pub mod shell;

pub use exec::ExecRunner;
pub use execution::Execution;
pub use files::FileSource;
pub use shell::ShellRunner;
