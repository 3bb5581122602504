//! Small path predicates shared by the resolvers.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::Path;

use crate::error::BootstrapError;

/// Separator between entries of a `PATH`-style list.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// Whether `c` separates directory components on this platform.
pub fn is_dir_sep(c: char) -> bool {
    std::path::is_separator(c)
}

/// Whether `path` is absolute on this platform.
pub fn is_absolute_path(path: &str) -> bool {
    Path::new(path).is_absolute()
}

/// Return `path` unchanged if absolute, otherwise joined onto the current
/// working directory. Non-Unicode bytes are preserved.
pub fn make_absolute(path: &OsStr) -> Result<OsString, BootstrapError> {
    if Path::new(path).is_absolute() {
        return Ok(path.to_os_string());
    }

    env::current_dir()
        .map(|cwd| cwd.join(path).into_os_string())
        .map_err(|e| BootstrapError::CurrentDir(e.to_string()))
}
