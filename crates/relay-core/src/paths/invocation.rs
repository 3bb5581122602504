//! Splitting argv[0] into the invocation directory and program basename.

use super::util::is_dir_sep;

/// Split an invocation string at its last directory separator.
///
/// Returns `(Some(dir), basename)` when a separator exists, where `dir` is
/// everything before the separator. Without a separator the directory is
/// `None` and the whole input is the basename.
pub fn split_invocation_path(argv0: &str) -> (Option<&str>, &str) {
    match argv0.char_indices().rev().find(|&(_, c)| is_dir_sep(c)) {
        Some((idx, sep)) => (Some(&argv0[..idx]), &argv0[idx + sep.len_utf8()..]),
        None => (None, argv0),
    }
}
