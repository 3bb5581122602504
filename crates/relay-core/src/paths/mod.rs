//! Path resolution for the relay bootstrap.
//!
//! - Invocation directory and basename from argv[0]
//! - Helper directory ("exec path") with override > env > compiled-in priority
//! - Optional relocation of compiled-in paths for movable installs
//! - `PATH` construction
//!
//! # Design
//!
//! - Pure string helpers live here; state lives on
//!   [`BootstrapContext`](crate::BootstrapContext)
//! - Environment access goes through [`Environment`](crate::Environment)
//! - No terminal I/O; the CLI decides how to present results

mod exec_path;
mod invocation;
mod relocation;
mod resolver;
mod search_path;
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;

// Invocation path splitting
pub use invocation::split_invocation_path;

// Relocation
pub use relocation::{PathResolutionMode, find_install_prefix, strip_reference_suffix};

// Exec path
pub use exec_path::{ExecPathResolution, ExecPathSource};

// Search path
pub use search_path::FALLBACK_SEARCH_PATH;

// Diagnostics snapshot
pub use resolver::ResolvedPaths;
