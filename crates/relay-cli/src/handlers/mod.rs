//! Command handlers.
//!
//! Handlers are thin: they take the composed [`CliContext`](crate::CliContext),
//! call into relay-core, and format output for the terminal. Path logic
//! belongs in relay-core.

pub mod exec_path;
pub mod external;
pub mod paths;
